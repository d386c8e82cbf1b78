//! Provider traits

use async_trait::async_trait;
use portal_core::forms::{Feedback, FlowInput};
use portal_core::knowledge::Collection;
use portal_core::navigation::{MenuItemRecord, PublishedState};
use portal_core::{Comment, Idea, NewIdea, SelectOption, VoteType};

use crate::Result;

/// Ideas data, fetched and persisted by the platform
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_ideas(&self) -> Result<Vec<Idea>>;

    async fn fetch_comments(&self, idea_id: &str) -> Result<Vec<Comment>>;

    async fn submit_vote(&self, idea_id: &str, vote: VoteType) -> Result<()>;

    async fn submit_comment(&self, idea_id: &str, text: &str) -> Result<()>;

    async fn create_idea(&self, idea: &NewIdea) -> Result<()>;

    async fn fetch_category_options(&self) -> Result<Vec<String>>;

    async fn fetch_status_options(&self) -> Result<Vec<SelectOption>>;
}

#[async_trait]
pub trait KnowledgeProvider: Send + Sync {
    async fn fetch_collections(&self) -> Result<Vec<Collection>>;
}

#[async_trait]
pub trait NavigationProvider: Send + Sync {
    async fn fetch_menu_items(&self, menu_name: &str, state: PublishedState) -> Result<Vec<MenuItemRecord>>;
}

#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<()>;
}

/// Guided multi-step form run by the platform.
///
/// Only start is modelled; the host reports the status screen back to the
/// component that launched it.
#[async_trait]
pub trait FlowEngine: Send + Sync {
    async fn start(&self, flow_name: &str, inputs: Vec<FlowInput>) -> Result<()>;
}
