//! External collaborators of the portal components
//!
//! The platform owns persistence, voting rules and access control. This
//! crate only defines the calls the components make, plus an in-process
//! provider and a JSON-fixture provider for local runs and tests.

pub mod error;
pub mod fixture;
pub mod handler;
pub mod memory;

pub use error::{ProviderError, Result};
pub use fixture::{JsonFileProvider, SiteData};
pub use handler::{DataProvider, FeedbackProvider, FlowEngine, KnowledgeProvider, NavigationProvider};
pub use memory::MemoryProvider;
