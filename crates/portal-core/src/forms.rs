//! Feedback, support-case and media helpers

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const FINISHED_SCREEN: &str = "FINISHED_SCREEN";

/// Course feedback form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub general_feedback: String,
    pub improvement_suggestions: String,
}

impl Feedback {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.general_feedback.is_empty() {
            missing.push("general_feedback");
        }
        if self.improvement_suggestions.is_empty() {
            missing.push("improvement_suggestions");
        }
        if missing.is_empty() { Ok(()) } else { Err(Error::MissingFields(missing)) }
    }
}

/// Subject/description pair handed to the case or idea submission flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRequest {
    pub subject: String,
    pub description: String,
}

impl CaseRequest {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.subject.is_empty() {
            missing.push("subject");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if missing.is_empty() { Ok(()) } else { Err(Error::MissingFields(missing)) }
    }

    pub fn flow_inputs(&self) -> Vec<FlowInput> {
        vec![
            FlowInput::string("subject", &self.subject),
            FlowInput::string("description", &self.description),
        ]
    }
}

/// Named input variable of a guided flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowInput {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
}

impl FlowInput {
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value_type: "String".to_string(),
            value: value.to_string(),
        }
    }
}

/// Only the terminal screen is observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStatus {
    Finished,
    Other(String),
}

impl FlowStatus {
    pub fn parse(raw: &str) -> Self {
        if raw == FINISHED_SCREEN {
            FlowStatus::Finished
        } else {
            FlowStatus::Other(raw.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccordionSection {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// Guidance shown next to the contact-support form
pub const CONTACT_SUPPORT_SECTIONS: [AccordionSection; 5] = [
    AccordionSection {
        id: "description",
        title: "Description of Issue",
        content: "Please provide a clear and concise description of the issue you're experiencing.",
    },
    AccordionSection {
        id: "impact",
        title: "Issue Impact",
        content: "How many users are impacted by this issue and how it impacts your daily tasks. This allows us to understand the severity of your issues and provide the appropriate level of attention to it.",
    },
    AccordionSection {
        id: "error",
        title: "Error Message",
        content: "If applicable, please provide any error messages you're seeing.",
    },
    AccordionSection {
        id: "existing",
        title: "Existing Issue?",
        content: "Has this issue occurred before? If so, please provide details about previous occurrences.",
    },
    AccordionSection {
        id: "steps",
        title: "Steps to Reproduce",
        content: "Please list the steps that lead to the issue occurring.",
    },
];

/// Embedded PDF attached to a knowledge article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDocument {
    pub file_id: String,
    pub height_in_rem: u32,
}

impl MediaDocument {
    pub fn url(&self) -> String {
        format!("/sfc/servlet.shepherd/document/download/{}", self.file_id)
    }

    pub fn height(&self) -> String {
        format!("{}rem", self.height_in_rem)
    }
}
