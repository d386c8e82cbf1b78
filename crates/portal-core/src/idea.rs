//! Idea domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, Result};

/// Status values the dashboards give special meaning to
pub mod status {
    pub const NEW: &str = "New";
    pub const UNDER_REVIEW: &str = "Under Review";
    pub const BACKLOG: &str = "Backlog";
    pub const IN_PROGRESS: &str = "In Progress";
    pub const COMPLETED: &str = "Completed";
}

/// A user-submitted idea as returned by the data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Semicolon-delimited, possibly several categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(with = "timestamp")]
    pub created_date: OffsetDateTime,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<StaffMember>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Manual override; when absent priority is derived from points
    #[serde(default, rename = "priority", skip_serializing_if = "Option::is_none")]
    pub priority_override: Option<Priority>,
    #[serde(default)]
    pub is_current_user_author: bool,
    #[serde(default)]
    pub is_from_current_user_org: bool,
    #[serde(default)]
    pub is_commented_by_current_user: bool,
    #[serde(default)]
    pub is_voted_by_current_user: bool,
}

impl Idea {
    pub fn priority(&self) -> Priority {
        self.priority_override
            .unwrap_or_else(|| Priority::from_points(self.points))
    }

    /// Category tokens, empty tokens dropped
    pub fn tags(&self) -> Vec<&str> {
        match self.category.as_deref() {
            Some(raw) => raw
                .split(';')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn has_category(&self) -> bool {
        self.category.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(alias = "commentBody")]
    pub text: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(with = "timestamp")]
    pub created_date: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Strictly greater than 30 is high, strictly greater than 15 is medium
    pub fn from_points(points: i64) -> Self {
        if points > 30 {
            Priority::High
        } else if points > 15 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(Error::Other(anyhow::anyhow!("unknown priority: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl FromStr for VoteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "upvote" => Ok(VoteType::Up),
            "down" | "downvote" => Ok(VoteType::Down),
            other => Err(Error::Other(anyhow::anyhow!("unknown vote type: {other}"))),
        }
    }
}

/// Fields of the new-idea form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub category: String,
    pub description: String,
}

impl NewIdea {
    /// Title and description must be non-blank, category non-empty
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.category.is_empty() {
            missing.push("category");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingFields(missing))
        }
    }
}

/// Parse a provider timestamp: RFC 3339, or a bare `YYYY-MM-DD` taken as UTC midnight
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime> {
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;

    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    time::Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

/// Serde adapter for provider timestamps
pub mod timestamp {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea_json(category: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": "i1",
            "title": "Faster login",
            "description": "SSO please",
            "category": category,
            "status": "New",
            "points": 40,
            "createdDate": "2024-01-05",
        })
    }

    #[test]
    fn test_priority_thresholds() {
        assert_eq!(Priority::from_points(35), Priority::High);
        assert_eq!(Priority::from_points(20), Priority::Medium);
        assert_eq!(Priority::from_points(5), Priority::Low);
        assert_eq!(Priority::from_points(30), Priority::Medium);
        assert_eq!(Priority::from_points(15), Priority::Low);
        assert_eq!(Priority::from_points(31), Priority::High);
        assert_eq!(Priority::from_points(16), Priority::Medium);
    }

    #[test]
    fn test_priority_override_wins() {
        let mut idea: Idea = serde_json::from_value(idea_json(Some("UX"))).unwrap();
        assert_eq!(idea.priority(), Priority::High);
        idea.priority_override = Some(Priority::Low);
        assert_eq!(idea.priority(), Priority::Low);
    }

    #[test]
    fn test_deserialize_provider_shape() {
        let idea: Idea = serde_json::from_value(idea_json(Some("UX;Design"))).unwrap();
        assert_eq!(idea.tags(), vec!["UX", "Design"]);
        assert_eq!(idea.comment_count, 0);
        assert!(!idea.is_assigned());
        assert_eq!(idea.created_date.year(), 2024);
    }

    #[test]
    fn test_tags_skip_empty_tokens() {
        let idea: Idea = serde_json::from_value(idea_json(Some("UX;;Design;"))).unwrap();
        assert_eq!(idea.tags(), vec!["UX", "Design"]);

        let idea: Idea = serde_json::from_value(idea_json(None)).unwrap();
        assert!(idea.tags().is_empty());
        assert!(!idea.has_category());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let full = parse_timestamp("2024-02-10T08:30:00.000Z").unwrap();
        assert_eq!(full.month(), time::Month::February);
        let date = parse_timestamp("2024-02-10").unwrap();
        assert_eq!(date.hour(), 0);
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_new_idea_validation() {
        let blank = NewIdea {
            title: "   ".to_string(),
            category: String::new(),
            description: "text".to_string(),
        };
        match blank.validate() {
            Err(Error::MissingFields(fields)) => assert_eq!(fields, vec!["title", "category"]),
            other => panic!("unexpected: {other:?}"),
        }

        let ok = NewIdea {
            title: "Dark mode".to_string(),
            category: "UX".to_string(),
            description: "Easier on the eyes".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
