//! List store: the full, unfiltered ideas collection
//!
//! Updates never mutate an idea in place. Each one builds a new vector in
//! which only the changed element is a fresh `Arc`.

use std::sync::Arc;

use crate::{Error, Idea, Result};

#[derive(Debug, Clone, Default)]
pub struct ListStore {
    items: Vec<Arc<Idea>>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, as after a fetch or refresh
    pub fn replace_all(&mut self, ideas: Vec<Idea>) {
        self.items = ideas.into_iter().map(Arc::new).collect();
    }

    pub fn items(&self) -> &[Arc<Idea>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Idea>> {
        self.items.iter().find(|idea| idea.id == id)
    }

    /// Copy-with-replacement of the idea with `id`
    pub fn update<F>(&mut self, id: &str, change: F) -> Result<Arc<Idea>>
    where
        F: FnOnce(&Idea) -> Idea,
    {
        let pos = self
            .items
            .iter()
            .position(|idea| idea.id == id)
            .ok_or_else(|| Error::IdeaNotFound(id.to_string()))?;

        let replaced = Arc::new(change(&self.items[pos]));
        let mut next = Vec::with_capacity(self.items.len());
        next.extend(self.items[..pos].iter().cloned());
        next.push(Arc::clone(&replaced));
        next.extend(self.items[pos + 1..].iter().cloned());
        self.items = next;

        Ok(replaced)
    }
}
