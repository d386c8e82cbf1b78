//! Knowledge article viewer

use std::sync::Arc;

use dashmap::DashMap;
use portal_core::knowledge::CollectionView;
use portal_core::{Article, Focus, KnowledgeTree};
use portal_provider::KnowledgeProvider;
use tracing::{debug, warn};

type ViewKey = (u64, Option<String>);

pub struct KnowledgeViewer {
    provider: Arc<dyn KnowledgeProvider>,
    tree: KnowledgeTree,
    is_loading: bool,
    error: Option<String>,
    /// Projections keyed by tree version and active article
    views: DashMap<ViewKey, Arc<Vec<CollectionView>>>,
}

impl KnowledgeViewer {
    pub fn new(provider: Arc<dyn KnowledgeProvider>) -> Self {
        Self {
            provider,
            tree: KnowledgeTree::default(),
            is_loading: false,
            error: None,
            views: DashMap::new(),
        }
    }

    pub fn tree(&self) -> &KnowledgeTree {
        &self.tree
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch collections and rebuild the tree around `focus`.
    ///
    /// On failure the previous tree is kept and the error text stored.
    pub async fn load(&mut self, focus: &Focus) {
        self.is_loading = true;
        let fetched = self.provider.fetch_collections().await;
        match fetched {
            Ok(collections) => {
                debug!(count = collections.len(), "loaded knowledge collections");
                self.tree = KnowledgeTree::load(collections, focus);
                self.error = None;
                self.views.clear();
            }
            Err(e) => {
                warn!(error = %e, "failed to load knowledge collections");
                self.error = Some(e.message());
            }
        }
        self.is_loading = false;
    }

    pub fn toggle(&mut self, collection_id: &str, subcategory_id: &str) -> Option<bool> {
        self.tree.toggle(collection_id, subcategory_id)
    }

    /// Make `article_id` active and return the article to announce
    pub fn select_article(&mut self, article_id: &str) -> Option<Article> {
        let selected = self.tree.select_article(article_id).cloned();
        if selected.is_none() {
            debug!(article_id, "selected article is not in the loaded tree");
        }
        selected
    }

    pub fn view(&self) -> Arc<Vec<CollectionView>> {
        let key: ViewKey = (
            self.tree.version(),
            self.tree.active_article_id().map(str::to_string),
        );
        if let Some(hit) = self.views.get(&key) {
            return Arc::clone(hit.value());
        }

        let projected = Arc::new(self.tree.project());
        self.views.retain(|(version, _), _| *version == key.0);
        self.views.insert(key, Arc::clone(&projected));
        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_provider::{MemoryProvider, SiteData};

    fn site() -> SiteData {
        serde_json::from_value(serde_json::json!({
            "collections": [
                {"id": "c1", "name": "Pathology", "subcategories": [
                    {"id": "s1", "name": "Grossing", "articles": [
                        {"id": "a1", "title": "Dictating cassettes", "urlName": "dictating-cassettes"}
                    ]},
                    {"id": "s2", "name": "Sign-out", "articles": [
                        {"id": "a2", "title": "Final reports", "urlName": "final-reports"}
                    ]}
                ]},
                {"id": "c2", "name": "Your Role", "subcategories": []}
            ]
        }))
        .unwrap()
    }

    fn viewer() -> (KnowledgeViewer, Arc<MemoryProvider>) {
        let provider = Arc::new(MemoryProvider::new(site()));
        (KnowledgeViewer::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn test_active_article_narrows_and_expands() {
        let (mut viewer, _) = viewer();
        let focus = Focus {
            active_article_id: Some("a2".to_string()),
            active_collection_id: None,
        };
        viewer.load(&focus).await;

        assert_eq!(viewer.tree().collection_ids(), vec!["c1"]);
        let view = viewer.view();
        assert_eq!(view[0].icon_name, "utility:microscope");
        assert!(!view[0].subcategories[0].is_expanded);
        assert!(view[0].subcategories[1].is_expanded);
        assert!(view[0].subcategories[1].articles[0].is_selected);
    }

    #[tokio::test]
    async fn test_view_is_cached_until_state_changes() {
        let (mut viewer, _) = viewer();
        viewer.load(&Focus::default()).await;

        let first = viewer.view();
        assert!(Arc::ptr_eq(&first, &viewer.view()));

        assert_eq!(viewer.toggle("c1", "s1"), Some(true));
        let toggled = viewer.view();
        assert!(!Arc::ptr_eq(&first, &toggled));
        assert!(toggled[0].subcategories[0].is_expanded);
        assert_eq!(toggled[0].subcategories[0].expand_icon_name, "utility:chevrondown");

        let article = viewer.select_article("a1").unwrap();
        assert_eq!(article.url_name.as_deref(), Some("dictating-cassettes"));
        assert!(viewer.view()[0].subcategories[0].articles[0].is_selected);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_tree() {
        let (mut viewer, provider) = viewer();
        viewer.load(&Focus::default()).await;

        provider.reject_all(Some("Knowledge is offline")).await;
        viewer.load(&Focus::default()).await;

        assert!(!viewer.is_loading());
        assert_eq!(viewer.error(), Some("Knowledge is offline"));
        assert_eq!(viewer.tree().collection_ids(), vec!["c1", "c2"]);
    }
}
