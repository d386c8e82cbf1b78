//! Filter, paginate and project in one pass over the list store

use portal_core::projection::project_all;
use portal_core::{
    Comment, Criteria, Idea, IdeaView, ListStore, Page, PageState, UiState, filter_and_sort,
    paginate,
};

/// State shared by the admin dashboard and the public board
#[derive(Debug, Clone)]
pub struct IdeaList {
    store: ListStore,
    criteria: Criteria,
    page: PageState,
    ui: UiState,
    view: Page<IdeaView>,
}

impl IdeaList {
    pub fn new(criteria: Criteria, page_size: usize) -> Self {
        let mut list = Self {
            store: ListStore::new(),
            criteria,
            page: PageState::new(page_size),
            ui: UiState::default(),
            view: Page {
                items: Vec::new(),
                page: 1,
                total_pages: 1,
                total_items: 0,
            },
        };
        list.recompute();
        list
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Page produced by the last `recompute()`
    pub fn view(&self) -> &Page<IdeaView> {
        &self.view
    }

    pub fn replace_all(&mut self, ideas: Vec<Idea>) {
        self.store.replace_all(ideas);
        self.recompute();
    }

    /// Change the criteria, then recompute. The current page is kept and clamped.
    pub fn with_criteria(&mut self, change: impl FnOnce(&mut Criteria)) {
        change(&mut self.criteria);
        self.recompute();
    }

    pub fn with_ui<R>(&mut self, change: impl FnOnce(&mut UiState) -> R) -> R {
        let out = change(&mut self.ui);
        self.recompute();
        out
    }

    pub fn update(
        &mut self,
        id: &str,
        change: impl FnOnce(&Idea) -> Idea,
    ) -> portal_core::Result<()> {
        self.store.update(id, change)?;
        self.recompute();
        Ok(())
    }

    /// Store freshly fetched comments on the idea; false when it is gone
    pub fn set_comments(&mut self, id: &str, comments: Vec<Comment>) -> bool {
        self.update(id, |idea| Idea {
            comments,
            ..idea.clone()
        })
        .is_ok()
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.page.next();
        if moved {
            self.recompute();
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        let moved = self.page.previous();
        if moved {
            self.recompute();
        }
        moved
    }

    pub fn recompute(&mut self) -> &Page<IdeaView> {
        let filtered = filter_and_sort(self.store.items(), &self.criteria);
        let page = paginate(&filtered, self.page.page_size, self.page.current);
        self.page.sync(&page);
        self.view = Page {
            items: project_all(&page.items, &self.ui),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        };
        &self.view
    }
}
