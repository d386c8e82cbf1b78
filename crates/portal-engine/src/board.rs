//! Public ideas board: browse, vote, comment and submit ideas

use std::sync::Arc;

use portal_core::projection::{OptionView, chevron_icon, project_options};
use portal_core::{
    Criteria, IdeaView, NewIdea, Notification, Notifier, Page, PageState, SelectOption, Selector,
    ShowFilter, SortOrder, VoteType,
};
use portal_provider::DataProvider;
use tracing::{debug, warn};

use crate::list::IdeaList;

/// Collapsible filter panels on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPanels {
    pub show: bool,
    pub category: bool,
    pub status: bool,
}

pub struct IdeasBoard {
    provider: Arc<dyn DataProvider>,
    notifier: Arc<dyn Notifier>,
    list: IdeaList,
    category_options: Vec<SelectOption>,
    status_options: Vec<SelectOption>,
    panels: FilterPanels,
    is_loading: bool,
    new_idea: NewIdea,
    is_new_idea_open: bool,
}

impl IdeasBoard {
    pub fn new(provider: Arc<dyn DataProvider>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            provider,
            notifier,
            list: IdeaList::new(Criteria::public(), page_size),
            category_options: vec![SelectOption::all()],
            status_options: vec![SelectOption::all()],
            panels: FilterPanels::default(),
            is_loading: false,
            new_idea: NewIdea::default(),
            is_new_idea_open: false,
        }
    }

    pub fn view(&self) -> &Page<IdeaView> {
        self.list.view()
    }

    pub fn page_state(&self) -> PageState {
        self.list.page_state()
    }

    pub fn criteria(&self) -> &Criteria {
        self.list.criteria()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub async fn load(&mut self) {
        self.is_loading = true;
        if let Err(message) = self.fetch_ideas().await {
            self.notifier
                .notify(Notification::failure("Error loading ideas", &message));
        }
        self.is_loading = false;
    }

    pub async fn load_options(&mut self) {
        let fetched = self.provider.fetch_category_options().await;
        match fetched {
            Ok(categories) => {
                self.category_options = std::iter::once(SelectOption::all())
                    .chain(categories.into_iter().map(|c| SelectOption::new(c.clone(), c)))
                    .collect();
            }
            Err(e) => self
                .notifier
                .notify(Notification::failure("Error loading categories", &e.message())),
        }
        let fetched = self.provider.fetch_status_options().await;
        match fetched {
            Ok(statuses) => {
                self.status_options = std::iter::once(SelectOption::all())
                    .chain(statuses)
                    .collect();
            }
            Err(e) => self
                .notifier
                .notify(Notification::failure("Error loading statuses", &e.message())),
        }
    }

    pub fn show_options(&self) -> Vec<OptionView> {
        project_options(&ShowFilter::options(), self.criteria().show.label())
    }

    pub fn category_options(&self) -> Vec<OptionView> {
        project_options(&self.category_options, self.criteria().category.as_value())
    }

    pub fn status_options(&self) -> Vec<OptionView> {
        project_options(&self.status_options, self.criteria().status.as_value())
    }

    pub fn sort_options(&self) -> Vec<OptionView> {
        let selected = self.criteria().sort.unwrap_or_default();
        project_options(&SortOrder::options(), selected.label())
    }

    pub fn panels(&self) -> FilterPanels {
        self.panels
    }

    /// Flip a filter panel and return its new chevron icon
    pub fn toggle_show_filter(&mut self) -> &'static str {
        self.panels.show = !self.panels.show;
        chevron_icon(self.panels.show)
    }

    pub fn toggle_category_filter(&mut self) -> &'static str {
        self.panels.category = !self.panels.category;
        chevron_icon(self.panels.category)
    }

    pub fn toggle_status_filter(&mut self) -> &'static str {
        self.panels.status = !self.panels.status;
        chevron_icon(self.panels.status)
    }

    pub fn set_search(&mut self, query: &str) {
        self.list.with_criteria(|c| c.search = query.to_string());
    }

    pub fn set_show(&mut self, show: ShowFilter) {
        self.list.with_criteria(|c| c.show = show);
    }

    pub fn set_category(&mut self, value: &str) {
        self.list
            .with_criteria(|c| c.category = Selector::<String>::from_value(value));
    }

    pub fn set_status(&mut self, value: &str) {
        self.list
            .with_criteria(|c| c.status = Selector::<String>::from_value(value));
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.list.with_criteria(|c| c.sort = Some(sort));
    }

    pub fn next_page(&mut self) -> bool {
        self.list.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.list.previous_page()
    }

    pub fn recompute(&mut self) -> &Page<IdeaView> {
        self.list.recompute()
    }

    /// Vote, then refetch so points come from the platform
    pub async fn vote(&mut self, id: &str, vote: VoteType) {
        self.is_loading = true;
        let submitted = self.provider.submit_vote(id, vote).await;
        let outcome = match submitted {
            Ok(()) => self.fetch_ideas().await,
            Err(e) => Err(e.message()),
        };
        if let Err(message) = outcome {
            warn!(idea = id, error = %message, "vote failed");
            self.notifier
                .notify(Notification::failure("Error voting", &message));
        }
        self.is_loading = false;
    }

    /// Expand or collapse the comments of an idea, loading them on expand
    pub async fn toggle_comments(&mut self, id: &str) -> bool {
        let expanded = self.list.with_ui(|ui| ui.toggle_comments(id));
        if expanded {
            self.load_comments(id).await;
        }
        expanded
    }

    pub fn set_comment_draft(&mut self, id: &str, text: &str) {
        self.list.with_ui(|ui| ui.set_draft(id, text));
    }

    /// Send the pending comment of an idea; a blank draft is ignored
    pub async fn submit_comment(&mut self, id: &str) {
        let text = self.list.ui().draft(id).to_string();
        if text.trim().is_empty() {
            return;
        }

        self.is_loading = true;
        let submitted = self.provider.submit_comment(id, &text).await;
        match submitted {
            Ok(()) => {
                self.list.with_ui(|ui| ui.clear_draft(id));
                self.load_comments(id).await;
                self.notifier
                    .notify(Notification::success("Success", "Comment added successfully"));
            }
            Err(e) => self
                .notifier
                .notify(Notification::failure("Error adding comment", &e.message())),
        }
        self.is_loading = false;
    }

    pub fn is_new_idea_open(&self) -> bool {
        self.is_new_idea_open
    }

    pub fn open_new_idea(&mut self) {
        self.is_new_idea_open = true;
    }

    pub fn close_new_idea(&mut self) {
        self.is_new_idea_open = false;
    }

    pub fn new_idea(&self) -> &NewIdea {
        &self.new_idea
    }

    pub fn new_idea_mut(&mut self) -> &mut NewIdea {
        &mut self.new_idea
    }

    pub async fn submit_new_idea(&mut self) {
        if let Err(e) = self.new_idea.validate() {
            self.notifier.notify(Notification::error("Error", e.to_string()));
            return;
        }

        self.is_loading = true;
        let created = self.provider.create_idea(&self.new_idea).await;
        let outcome = match created {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success("Success", "Idea submitted successfully"));
                self.new_idea = NewIdea::default();
                self.is_new_idea_open = false;
                self.fetch_ideas().await
            }
            Err(e) => Err(e.message()),
        };
        if let Err(message) = outcome {
            self.notifier
                .notify(Notification::failure("Error submitting idea", &message));
        }
        self.is_loading = false;
    }

    async fn fetch_ideas(&mut self) -> Result<(), String> {
        let ideas = self.provider.fetch_ideas().await.map_err(|e| e.message())?;
        debug!(count = ideas.len(), "ideas board loaded ideas");
        self.list.replace_all(ideas);
        Ok(())
    }

    async fn load_comments(&mut self, id: &str) {
        let fetched = self.provider.fetch_comments(id).await;
        match fetched {
            Ok(comments) => {
                self.list.set_comments(id, comments);
            }
            Err(e) => self
                .notifier
                .notify(Notification::failure("Error loading comments", &e.message())),
        }
    }
}
