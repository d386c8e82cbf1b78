//! Stateful portal components
//!
//! Each controller owns its list store and UI state, talks to the platform
//! through the provider traits, and reports outcomes through a `Notifier`.
//! Every interaction ends with a full `recompute()`.

pub mod board;
pub mod dashboard;
pub mod forms;
pub mod knowledge;
pub mod list;
pub mod menu;
pub mod notifier;

pub use board::{FilterPanels, IdeasBoard};
pub use dashboard::{AdminDashboard, Modal};
pub use forms::{CaseSubmission, FeedbackForm};
pub use knowledge::KnowledgeViewer;
pub use list::IdeaList;
pub use menu::{MenuLink, MenuSettings, TileMenu};
pub use notifier::RecordingNotifier;
