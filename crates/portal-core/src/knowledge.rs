//! Knowledge viewer: collection / subcategory / article tree
//!
//! Each subcategory is collapsed or expanded independently. At load time
//! the subcategories holding the active article start expanded; after that
//! only explicit toggles change them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Subcategory {
    pub fn contains(&self, article_id: &str) -> bool {
        self.articles.iter().any(|a| a.id == article_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Collection {
    pub fn contains(&self, article_id: &str) -> bool {
        self.subcategories.iter().any(|s| s.contains(article_id))
    }
}

/// Initial narrowing of the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Focus {
    pub active_article_id: Option<String>,
    pub active_collection_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SubcategoryNode {
    subcategory: Subcategory,
    expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CollectionNode {
    id: String,
    name: String,
    subcategories: Vec<SubcategoryNode>,
}

/// Loaded knowledge tree with per-node expansion state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeTree {
    collections: Vec<CollectionNode>,
    active_article_id: Option<String>,
    version: u64,
}

impl KnowledgeTree {
    /// Build the tree from provider data.
    ///
    /// With an active article that exists, only its collection is kept and
    /// only the subcategories holding it are expanded. Otherwise an active
    /// collection id narrows to that collection.
    pub fn load(collections: Vec<Collection>, focus: &Focus) -> Self {
        let mut nodes: Vec<CollectionNode> = collections
            .into_iter()
            .map(|c| CollectionNode {
                id: c.id,
                name: c.name,
                subcategories: c
                    .subcategories
                    .into_iter()
                    .map(|subcategory| SubcategoryNode {
                        subcategory,
                        expanded: false,
                    })
                    .collect(),
            })
            .collect();

        if let Some(article_id) = focus.active_article_id.as_deref() {
            let holder = nodes
                .iter()
                .position(|c| c.subcategories.iter().any(|s| s.subcategory.contains(article_id)));
            if let Some(pos) = holder {
                let mut kept = nodes.swap_remove(pos);
                for node in &mut kept.subcategories {
                    node.expanded = node.subcategory.contains(article_id);
                }
                nodes = vec![kept];
            }
        } else if let Some(collection_id) = focus.active_collection_id.as_deref() {
            nodes.retain(|c| c.id == collection_id);
        }

        Self {
            collections: nodes,
            active_article_id: focus.active_article_id.clone(),
            version: 0,
        }
    }

    /// Bumped on every change that alters the projection
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn active_article_id(&self) -> Option<&str> {
        self.active_article_id.as_deref()
    }

    pub fn collection_ids(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn is_expanded(&self, collection_id: &str, subcategory_id: &str) -> Option<bool> {
        self.node(collection_id, subcategory_id).map(|n| n.expanded)
    }

    fn node(&self, collection_id: &str, subcategory_id: &str) -> Option<&SubcategoryNode> {
        self.collections
            .iter()
            .find(|c| c.id == collection_id)?
            .subcategories
            .iter()
            .find(|s| s.subcategory.id == subcategory_id)
    }

    /// Flip one subcategory; returns its new state, or `None` if unknown
    pub fn toggle(&mut self, collection_id: &str, subcategory_id: &str) -> Option<bool> {
        let node = self
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)?
            .subcategories
            .iter_mut()
            .find(|s| s.subcategory.id == subcategory_id)?;
        node.expanded = !node.expanded;
        self.version += 1;
        Some(node.expanded)
    }

    /// Mark an article active; returns it when present in the tree
    pub fn select_article(&mut self, article_id: &str) -> Option<&Article> {
        self.active_article_id = Some(article_id.to_string());
        self.version += 1;
        self.active_article()
    }

    pub fn active_article(&self) -> Option<&Article> {
        let wanted = self.active_article_id.as_deref()?;
        self.collections
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.subcategory.articles.iter())
            .find(|a| a.id == wanted)
    }

    pub fn project(&self) -> Vec<CollectionView> {
        self.collections
            .iter()
            .map(|c| CollectionView {
                id: c.id.clone(),
                name: c.name.clone(),
                icon_name: collection_icon(&c.name),
                subcategories: c
                    .subcategories
                    .iter()
                    .map(|node| self.project_subcategory(node))
                    .collect(),
            })
            .collect()
    }

    fn project_subcategory(&self, node: &SubcategoryNode) -> SubcategoryView {
        SubcategoryView {
            id: node.subcategory.id.clone(),
            name: node.subcategory.name.clone(),
            is_expanded: node.expanded,
            expand_icon_name: if node.expanded {
                "utility:chevrondown"
            } else {
                "utility:chevronright"
            },
            articles_list_class: if node.expanded {
                "articles-list expanded"
            } else {
                "articles-list"
            },
            articles: node
                .subcategory
                .articles
                .iter()
                .map(|article| ArticleView {
                    is_selected: self.active_article_id.as_deref() == Some(article.id.as_str()),
                    article: article.clone(),
                })
                .collect(),
        }
    }
}

pub fn collection_icon(name: &str) -> &'static str {
    match name {
        "Pathology" => "utility:microscope",
        "Voicebrook" => "utility:company",
        "VoiceOver PRO" => "utility:voice",
        "Your Role" => "utility:user",
        _ => "utility:knowledge_base",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionView {
    pub id: String,
    pub name: String,
    pub icon_name: &'static str,
    pub subcategories: Vec<SubcategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryView {
    pub id: String,
    pub name: String,
    pub is_expanded: bool,
    pub expand_icon_name: &'static str,
    pub articles_list_class: &'static str,
    pub articles: Vec<ArticleView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    pub is_selected: bool,
}
