//! View-model projection: render-ready decorations over ideas
//!
//! Projection never touches the source idea; a view holds the same `Arc`
//! plus UI-only fields.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::criteria::SelectOption;
use crate::idea::{Comment, Idea, Priority, status};

pub const STAFF_COMMENT_CLASS: &str = "slds-box slds-box_xx-small slds-theme_shade";
pub const MEMBER_COMMENT_CLASS: &str = "slds-box slds-box_xx-small slds-theme_default";

pub fn status_class(status: &str) -> &'static str {
    match status {
        status::NEW => "status-new",
        status::BACKLOG => "status-backlog",
        status::IN_PROGRESS => "status-in-progress",
        _ => "status-default",
    }
}

pub fn comment_class(is_staff: bool) -> &'static str {
    if is_staff {
        STAFF_COMMENT_CLASS
    } else {
        MEMBER_COMMENT_CLASS
    }
}

pub fn comment_count_text(count: u32) -> &'static str {
    if count == 1 { "comment" } else { "comments" }
}

/// Per-idea transient UI state, keyed by idea id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    expanded_comments: HashMap<String, bool>,
    drafts: HashMap<String, String>,
}

impl UiState {
    pub fn is_expanded(&self, idea_id: &str) -> bool {
        self.expanded_comments.get(idea_id).copied().unwrap_or(false)
    }

    /// Flip the comment section of one idea, returning the new state
    pub fn toggle_comments(&mut self, idea_id: &str) -> bool {
        let next = !self.is_expanded(idea_id);
        self.expanded_comments.insert(idea_id.to_string(), next);
        next
    }

    pub fn draft(&self, idea_id: &str) -> &str {
        self.drafts.get(idea_id).map(String::as_str).unwrap_or("")
    }

    pub fn set_draft(&mut self, idea_id: &str, text: impl Into<String>) {
        self.drafts.insert(idea_id.to_string(), text.into());
    }

    pub fn clear_draft(&mut self, idea_id: &str) {
        self.drafts.insert(idea_id.to_string(), String::new());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub comment_class: &'static str,
}

impl CommentView {
    pub fn new(comment: &Comment) -> Self {
        Self {
            comment: comment.clone(),
            comment_class: comment_class(comment.is_staff),
        }
    }
}

/// A render-ready idea
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaView {
    #[serde(flatten)]
    pub idea: Arc<Idea>,
    pub effective_priority: Priority,
    pub tags: Vec<String>,
    pub status_class: &'static str,
    pub comment_views: Vec<CommentView>,
    pub is_comments_expanded: bool,
    pub new_comment_text: String,
    pub has_new_comment_text: bool,
    pub comment_count_text: &'static str,
}

pub fn project(idea: &Arc<Idea>, ui: &UiState) -> IdeaView {
    let draft = ui.draft(&idea.id);
    IdeaView {
        idea: Arc::clone(idea),
        effective_priority: idea.priority(),
        tags: idea.tags().into_iter().map(str::to_string).collect(),
        status_class: status_class(&idea.status),
        comment_views: idea.comments.iter().map(CommentView::new).collect(),
        is_comments_expanded: ui.is_expanded(&idea.id),
        new_comment_text: draft.to_string(),
        has_new_comment_text: !draft.is_empty(),
        comment_count_text: comment_count_text(idea.comment_count),
    }
}

pub fn project_all(ideas: &[Arc<Idea>], ui: &UiState) -> Vec<IdeaView> {
    ideas.iter().map(|idea| project(idea, ui)).collect()
}

/// A picker entry marked when it is the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub label: String,
    pub value: String,
    pub custom_class: &'static str,
}

pub fn project_options(options: &[SelectOption], selected: &str) -> Vec<OptionView> {
    options
        .iter()
        .map(|o| OptionView {
            label: o.label.clone(),
            value: o.value.clone(),
            custom_class: if o.value == selected { "selected" } else { "" },
        })
        .collect()
}

/// Chevron icon for a collapsible filter panel
pub fn chevron_icon(open: bool) -> &'static str {
    if open {
        "utility:chevronup"
    } else {
        "utility:chevrondown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arc<Idea> {
        let json = serde_json::json!({
            "id": "i1",
            "title": "Faster login",
            "status": "In Progress",
            "points": 20,
            "category": "UX;Design",
            "commentCount": 1,
            "createdDate": "2024-01-05",
            "comments": [
                {"id": "c1", "text": "On it", "isStaff": true, "createdDate": "2024-01-06"},
                {"id": "c2", "text": "+1", "createdDate": "2024-01-07"}
            ]
        });
        Arc::new(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn test_status_class_mapping() {
        assert_eq!(status_class("New"), "status-new");
        assert_eq!(status_class("Backlog"), "status-backlog");
        assert_eq!(status_class("In Progress"), "status-in-progress");
        assert_eq!(status_class("Completed"), "status-default");
    }

    #[test]
    fn test_project_decorates_without_copying_idea() {
        let idea = sample();
        let mut ui = UiState::default();
        ui.toggle_comments("i1");
        ui.set_draft("i1", "nice");

        let view = project(&idea, &ui);
        assert!(Arc::ptr_eq(&view.idea, &idea));
        assert_eq!(view.effective_priority, Priority::Medium);
        assert_eq!(view.tags, vec!["UX", "Design"]);
        assert_eq!(view.status_class, "status-in-progress");
        assert!(view.is_comments_expanded);
        assert!(view.has_new_comment_text);
        assert_eq!(view.comment_count_text, "comment");
        assert_eq!(view.comment_views[0].comment_class, STAFF_COMMENT_CLASS);
        assert_eq!(view.comment_views[1].comment_class, MEMBER_COMMENT_CLASS);
    }

    #[test]
    fn test_ui_state_toggle_and_drafts() {
        let mut ui = UiState::default();
        assert!(ui.toggle_comments("x"));
        assert!(!ui.toggle_comments("x"));
        ui.set_draft("x", "hello");
        assert_eq!(ui.draft("x"), "hello");
        ui.clear_draft("x");
        assert_eq!(ui.draft("x"), "");
        assert_eq!(ui.draft("unknown"), "");
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = project(&sample(), &UiState::default());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["title"], "Faster login");
        assert_eq!(value["statusClass"], "status-in-progress");
        assert_eq!(value["commentCountText"], "comment");
    }

    #[test]
    fn test_option_selection_class() {
        let options = vec![SelectOption::all(), SelectOption::new("UX", "UX")];
        let views = project_options(&options, "UX");
        assert_eq!(views[0].custom_class, "");
        assert_eq!(views[1].custom_class, "selected");
    }
}
