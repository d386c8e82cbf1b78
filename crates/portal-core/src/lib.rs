//! Core domain models and list pipelines for the community portal
//!
//! This crate contains:
//! - Domain models (Idea, Comment, knowledge collections, menu items)
//! - Filter/sort pipeline, paginator and analytics aggregation
//! - View-model projection and the knowledge tree state machine
//!
//! Everything here is synchronous and pure; fetching and persistence live
//! behind the provider traits in `portal-provider`.

pub mod analytics;
pub mod criteria;
pub mod error;
pub mod forms;
pub mod idea;
pub mod knowledge;
pub mod navigation;
pub mod notify;
pub mod paginate;
pub mod pipeline;
pub mod projection;
pub mod store;

pub use analytics::{Analytics, Bucket, Summary, TagCount, TrendBar, aggregate};
pub use criteria::{
    CategoryMatch, Criteria, SelectOption, Selector, ShowFilter, SortOrder, Tab, Variant,
};
pub use error::{Error, Result};
pub use idea::{Comment, Idea, NewIdea, Priority, StaffMember, VoteType};
pub use knowledge::{Article, Collection, Focus, KnowledgeTree, Subcategory};
pub use navigation::{MenuItem, PageReference, PublishedState, Viewer};
pub use notify::{Notification, NotificationKind, Notifier, ToastMode};
pub use paginate::{Page, PageState, paginate};
pub use pipeline::filter_and_sort;
pub use projection::{IdeaView, UiState, project};
pub use store::ListStore;
