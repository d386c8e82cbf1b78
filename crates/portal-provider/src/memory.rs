//! In-process provider
//!
//! Applies submissions to its own copy of the site data so the portal can
//! run without the platform. Voting adds or removes ten points, the same
//! weight the platform uses.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portal_core::forms::{Feedback, FlowInput};
use portal_core::idea::status;
use portal_core::knowledge::Collection;
use portal_core::navigation::{MenuItemRecord, PublishedState};
use portal_core::{Comment, Idea, NewIdea, SelectOption, VoteType};
use time::OffsetDateTime;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::fixture::{SiteData, StartedFlow};
use crate::handler::{DataProvider, FeedbackProvider, FlowEngine, KnowledgeProvider, NavigationProvider};
use crate::{ProviderError, Result};

pub const VOTE_WEIGHT: i64 = 10;

pub struct MemoryProvider {
    data: RwLock<SiteData>,
    rejection: Mutex<Option<String>>,
    calls: AtomicUsize,
    post_as_staff: bool,
}

impl MemoryProvider {
    pub fn new(data: SiteData) -> Self {
        Self {
            data: RwLock::new(data),
            rejection: Mutex::new(None),
            calls: AtomicUsize::new(0),
            post_as_staff: false,
        }
    }

    /// Comments submitted through this provider are flagged as staff
    pub fn posting_as_staff(mut self) -> Self {
        self.post_as_staff = true;
        self
    }

    /// Make every following call fail with `message`, or stop failing with `None`
    pub async fn reject_all(&self, message: Option<&str>) {
        *self.rejection.lock().await = message.map(str::to_string);
    }

    /// Number of calls received, rejected ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> SiteData {
        self.data.read().await.clone()
    }

    /// Replace the whole site, e.g. with an earlier snapshot
    pub async fn restore(&self, data: SiteData) {
        *self.data.write().await = data;
    }

    async fn enter(&self, op: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!(op, "provider call");
        match self.rejection.lock().await.as_deref() {
            Some(message) => Err(ProviderError::rejected(message)),
            None => Ok(()),
        }
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new(SiteData::default())
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn fetch_ideas(&self) -> Result<Vec<Idea>> {
        self.enter("fetch_ideas").await?;
        Ok(self.data.read().await.ideas.clone())
    }

    async fn fetch_comments(&self, idea_id: &str) -> Result<Vec<Comment>> {
        self.enter("fetch_comments").await?;
        let data = self.data.read().await;
        data.ideas
            .iter()
            .find(|i| i.id == idea_id)
            .map(|i| i.comments.clone())
            .ok_or_else(|| ProviderError::NotFound(idea_id.to_string()))
    }

    async fn submit_vote(&self, idea_id: &str, vote: VoteType) -> Result<()> {
        self.enter("submit_vote").await?;
        let mut data = self.data.write().await;
        let idea = data
            .ideas
            .iter_mut()
            .find(|i| i.id == idea_id)
            .ok_or_else(|| ProviderError::NotFound(idea_id.to_string()))?;

        if idea.is_voted_by_current_user {
            return Err(ProviderError::rejected("You have already voted on this idea."));
        }
        idea.points += match vote {
            VoteType::Up => VOTE_WEIGHT,
            VoteType::Down => -VOTE_WEIGHT,
        };
        idea.vote_count += 1;
        idea.is_voted_by_current_user = true;
        Ok(())
    }

    async fn submit_comment(&self, idea_id: &str, text: &str) -> Result<()> {
        self.enter("submit_comment").await?;
        let mut data = self.data.write().await;
        let idea = data
            .ideas
            .iter_mut()
            .find(|i| i.id == idea_id)
            .ok_or_else(|| ProviderError::NotFound(idea_id.to_string()))?;

        idea.comments.push(Comment {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_staff: self.post_as_staff,
            author_name: None,
            created_date: OffsetDateTime::now_utc(),
        });
        idea.comment_count += 1;
        idea.is_commented_by_current_user = true;
        Ok(())
    }

    async fn create_idea(&self, new_idea: &NewIdea) -> Result<()> {
        self.enter("create_idea").await?;
        let mut data = self.data.write().await;
        data.ideas.push(Idea {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_idea.title.clone(),
            description: new_idea.description.clone(),
            category: Some(new_idea.category.clone()),
            status: status::NEW.to_string(),
            points: 0,
            vote_count: 0,
            created_date: OffsetDateTime::now_utc(),
            author_name: String::new(),
            comment_count: 0,
            assigned_to: None,
            comments: Vec::new(),
            priority_override: None,
            is_current_user_author: true,
            is_from_current_user_org: true,
            is_commented_by_current_user: false,
            is_voted_by_current_user: false,
        });
        Ok(())
    }

    async fn fetch_category_options(&self) -> Result<Vec<String>> {
        self.enter("fetch_category_options").await?;
        Ok(self.data.read().await.categories.clone())
    }

    async fn fetch_status_options(&self) -> Result<Vec<SelectOption>> {
        self.enter("fetch_status_options").await?;
        Ok(self.data.read().await.statuses.clone())
    }
}

#[async_trait]
impl KnowledgeProvider for MemoryProvider {
    async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        self.enter("fetch_collections").await?;
        Ok(self.data.read().await.collections.clone())
    }
}

#[async_trait]
impl NavigationProvider for MemoryProvider {
    async fn fetch_menu_items(&self, menu_name: &str, state: PublishedState) -> Result<Vec<MenuItemRecord>> {
        self.enter("fetch_menu_items").await?;
        debug!(menu_name, state = state.as_str(), "loading menu");
        self.data
            .read()
            .await
            .menus
            .get(menu_name)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("menu {menu_name}")))
    }
}

#[async_trait]
impl FeedbackProvider for MemoryProvider {
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<()> {
        self.enter("submit_feedback").await?;
        self.data.write().await.feedback.push(feedback.clone());
        Ok(())
    }
}

#[async_trait]
impl FlowEngine for MemoryProvider {
    async fn start(&self, flow_name: &str, inputs: Vec<FlowInput>) -> Result<()> {
        self.enter("start_flow").await?;
        self.data.write().await.flows.push(StartedFlow {
            name: flow_name.to_string(),
            inputs,
        });
        Ok(())
    }
}
