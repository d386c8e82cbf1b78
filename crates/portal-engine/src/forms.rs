//! Feedback and support-case forms

use std::sync::Arc;

use portal_core::forms::{AccordionSection, CONTACT_SUPPORT_SECTIONS, CaseRequest, Feedback, FlowStatus};
use portal_core::{Notification, Notifier};
use portal_provider::{FeedbackProvider, FlowEngine};
use tracing::{debug, warn};

const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
const RETRY_CASE: &str = "Please try submitting your idea again. If it fails, don't hesitate to \
contact our support team for assistance";
const SUBMITTED: &str = "Your Idea has been successfully submitted. Our Client Engagement team will \
contact you if we need more information and will follow-up once a decision has been made on your proposal.";

pub struct FeedbackForm {
    provider: Arc<dyn FeedbackProvider>,
    notifier: Arc<dyn Notifier>,
    fields: Feedback,
    is_submitting: bool,
}

impl FeedbackForm {
    pub fn new(provider: Arc<dyn FeedbackProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            provider,
            notifier,
            fields: Feedback::default(),
            is_submitting: false,
        }
    }

    pub fn fields(&self) -> &Feedback {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Feedback {
        &mut self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub async fn submit(&mut self) {
        if self.fields.validate().is_err() {
            self.notifier.notify(Notification::error("Error", REQUIRED_FIELDS));
            return;
        }

        self.is_submitting = true;
        let submitted = self.provider.submit_feedback(&self.fields).await;
        match submitted {
            Ok(()) => {
                self.fields = Feedback::default();
                self.notifier
                    .notify(Notification::success("Success", "Feedback submitted successfully!"));
            }
            Err(e) => {
                warn!(error = %e, "feedback submission failed");
                self.notifier
                    .notify(Notification::failure("Error submitting feedback", &e.message()));
            }
        }
        self.is_submitting = false;
    }
}

/// Support-case form backed by a guided flow
pub struct CaseSubmission {
    flow: Arc<dyn FlowEngine>,
    notifier: Arc<dyn Notifier>,
    flow_name: String,
    request: CaseRequest,
    is_started: bool,
    is_finished: bool,
}

impl CaseSubmission {
    pub fn new(flow: Arc<dyn FlowEngine>, notifier: Arc<dyn Notifier>, flow_name: impl Into<String>) -> Self {
        Self {
            flow,
            notifier,
            flow_name: flow_name.into(),
            request: CaseRequest::default(),
            is_started: false,
            is_finished: false,
        }
    }

    pub fn sections() -> &'static [AccordionSection] {
        &CONTACT_SUPPORT_SECTIONS
    }

    pub fn request(&self) -> &CaseRequest {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut CaseRequest {
        &mut self.request
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Validate and hand subject/description to the flow
    pub async fn submit(&mut self) {
        if self.request.validate().is_err() {
            self.notifier.notify(Notification::error("Error", REQUIRED_FIELDS));
            return;
        }

        let started = self.flow.start(&self.flow_name, self.request.flow_inputs()).await;
        match started {
            Ok(()) => {
                debug!(flow = %self.flow_name, "flow started");
                self.is_started = true;
            }
            Err(e) => {
                warn!(flow = %self.flow_name, error = %e, "flow failed to start");
                self.notifier.notify(Notification::error(
                    "Error submitting your idea!",
                    format!("{}: {}", RETRY_CASE, e.message()),
                ));
            }
        }
    }

    /// Status reported by the host while the flow runs
    pub fn on_status(&mut self, raw: &str) -> FlowStatus {
        let status = FlowStatus::parse(raw);
        if status == FlowStatus::Finished {
            self.is_finished = true;
            self.request = CaseRequest::default();
            self.notifier
                .notify(Notification::success("Success!", SUBMITTED).sticky());
        }
        status
    }
}
