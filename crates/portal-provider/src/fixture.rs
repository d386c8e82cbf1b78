//! JSON fixture provider
//!
//! Reads a site export (ideas, options, knowledge collections, menus) from
//! disk, serves it through `MemoryProvider`, and writes it back after every
//! accepted submission. A submission that cannot be saved is rolled back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use portal_core::forms::{Feedback, FlowInput};
use portal_core::knowledge::Collection;
use portal_core::navigation::{MenuItemRecord, PublishedState};
use portal_core::{Comment, Idea, NewIdea, SelectOption, VoteType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::handler::{DataProvider, FeedbackProvider, FlowEngine, KnowledgeProvider, NavigationProvider};
use crate::{MemoryProvider, Result};

/// Everything the portal components read from the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<SelectOption>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    /// Menu name -> items
    #[serde(default)]
    pub menus: BTreeMap<String, Vec<MenuItemRecord>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<Feedback>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flows: Vec<StartedFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartedFlow {
    pub name: String,
    pub inputs: Vec<FlowInput>,
}

impl SiteData {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

pub struct JsonFileProvider {
    path: PathBuf,
    inner: MemoryProvider,
}

impl JsonFileProvider {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = SiteData::load(&path).await?;
        info!(path = %path.display(), ideas = data.ideas.len(), "loaded site fixture");
        Ok(Self {
            path,
            inner: MemoryProvider::new(data),
        })
    }

    /// Empty site, written to `path` on the first accepted submission
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inner: MemoryProvider::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` in memory and save it; undone when the save fails
    async fn write_through(&self, change: impl Future<Output = Result<()>>) -> Result<()> {
        let before = self.inner.snapshot().await;
        change.await?;
        if let Err(e) = self.persist().await {
            warn!(path = %self.path.display(), error = %e, "fixture write failed, change rolled back");
            self.inner.restore(before).await;
            return Err(e);
        }
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        self.inner.snapshot().await.save(&self.path).await?;
        debug!(path = %self.path.display(), "fixture written");
        Ok(())
    }
}

#[async_trait]
impl DataProvider for JsonFileProvider {
    async fn fetch_ideas(&self) -> Result<Vec<Idea>> {
        self.inner.fetch_ideas().await
    }

    async fn fetch_comments(&self, idea_id: &str) -> Result<Vec<Comment>> {
        self.inner.fetch_comments(idea_id).await
    }

    async fn submit_vote(&self, idea_id: &str, vote: VoteType) -> Result<()> {
        self.write_through(self.inner.submit_vote(idea_id, vote)).await
    }

    async fn submit_comment(&self, idea_id: &str, text: &str) -> Result<()> {
        self.write_through(self.inner.submit_comment(idea_id, text)).await
    }

    async fn create_idea(&self, idea: &NewIdea) -> Result<()> {
        self.write_through(self.inner.create_idea(idea)).await
    }

    async fn fetch_category_options(&self) -> Result<Vec<String>> {
        self.inner.fetch_category_options().await
    }

    async fn fetch_status_options(&self) -> Result<Vec<SelectOption>> {
        self.inner.fetch_status_options().await
    }
}

#[async_trait]
impl KnowledgeProvider for JsonFileProvider {
    async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        self.inner.fetch_collections().await
    }
}

#[async_trait]
impl NavigationProvider for JsonFileProvider {
    async fn fetch_menu_items(&self, menu_name: &str, state: PublishedState) -> Result<Vec<MenuItemRecord>> {
        self.inner.fetch_menu_items(menu_name, state).await
    }
}

#[async_trait]
impl FeedbackProvider for JsonFileProvider {
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<()> {
        self.write_through(self.inner.submit_feedback(feedback)).await
    }
}

#[async_trait]
impl FlowEngine for JsonFileProvider {
    async fn start(&self, flow_name: &str, inputs: Vec<FlowInput>) -> Result<()> {
        self.write_through(self.inner.start(flow_name, inputs)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "ideas": [
            {"id": "1", "title": "Faster login", "status": "New", "points": 40,
             "category": "UX", "createdDate": "2024-01-05T09:00:00Z"}
        ],
        "categories": ["UX"],
        "statuses": [{"label": "New", "value": "New"}],
        "menus": {
            "Default Navigation": [
                {"Label": "Home", "Target": "/s/", "Type": "HomePage", "AccessRestriction": "None"}
            ]
        }
    }"#;

    #[tokio::test]
    async fn test_load_and_persist_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, FIXTURE).unwrap();

        let provider = JsonFileProvider::load(&path).await.unwrap();
        assert_eq!(provider.fetch_ideas().await.unwrap().len(), 1);
        assert_eq!(
            provider
                .fetch_menu_items("Default Navigation", PublishedState::Live)
                .await
                .unwrap()
                .len(),
            1
        );

        provider.submit_comment("1", "Agreed").await.unwrap();

        let reloaded = SiteData::load(&path).await.unwrap();
        assert_eq!(reloaded.ideas[0].comments.len(), 1);
        assert_eq!(reloaded.ideas[0].comments[0].text, "Agreed");
    }

    #[tokio::test]
    async fn test_unsaved_submission_is_rolled_back() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFileProvider::empty(dir.path().join("missing").join("site.json"));
        let idea = NewIdea {
            title: "Offline mode".to_string(),
            category: "Mobile".to_string(),
            description: "Work without a connection".to_string(),
        };

        let result = provider.create_idea(&idea).await;

        assert!(matches!(result, Err(crate::ProviderError::Io(_))));
        assert!(provider.fetch_ideas().await.unwrap().is_empty());
        assert!(!provider.path().exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonFileProvider::load(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(crate::ProviderError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"ideas": [{"id": 1}]}"#).unwrap();
        let result = JsonFileProvider::load(&path).await;
        assert!(matches!(result, Err(crate::ProviderError::Fixture(_))));
    }
}
