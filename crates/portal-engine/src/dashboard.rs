//! Admin ideas dashboard
//!
//! Status, priority and assignment edits are local only: they replace the
//! idea in the list store and re-run the pipeline. Staff responses go to the
//! platform as comments.

use std::sync::Arc;

use portal_core::analytics::aggregate_with;
use portal_core::{
    Analytics, Criteria, Idea, IdeaView, Notification, Notifier, Page, PageState, Priority,
    SelectOption, Selector, StaffMember, Tab, project,
};
use portal_provider::DataProvider;
use tracing::{debug, warn};

use crate::list::IdeaList;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Detail,
    Response,
}

pub struct AdminDashboard {
    provider: Arc<dyn DataProvider>,
    notifier: Arc<dyn Notifier>,
    list: IdeaList,
    top_tags: usize,
    analytics: Analytics,
    status_options: Vec<SelectOption>,
    category_options: Vec<SelectOption>,
    is_loading: bool,
    selected_id: Option<String>,
    modal: Modal,
    response_text: String,
}

impl AdminDashboard {
    pub fn new(
        provider: Arc<dyn DataProvider>,
        notifier: Arc<dyn Notifier>,
        page_size: usize,
        top_tags: usize,
    ) -> Self {
        Self {
            provider,
            notifier,
            list: IdeaList::new(Criteria::admin(), page_size),
            top_tags,
            analytics: Analytics::default(),
            status_options: vec![SelectOption::all()],
            category_options: vec![SelectOption::all()],
            is_loading: false,
            selected_id: None,
            modal: Modal::Closed,
            response_text: String::new(),
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

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn status_options(&self) -> &[SelectOption] {
        &self.status_options
    }

    pub fn category_options(&self) -> &[SelectOption] {
        &self.category_options
    }

    pub fn priority_options() -> Vec<SelectOption> {
        vec![
            SelectOption::all(),
            SelectOption::new("High", "high"),
            SelectOption::new("Medium", "medium"),
            SelectOption::new("Low", "low"),
        ]
    }

    /// Initial fetch of the ideas collection
    pub async fn load(&mut self) {
        self.is_loading = true;
        let fetched = self.provider.fetch_ideas().await;
        match fetched {
            Ok(ideas) => {
                debug!(count = ideas.len(), "admin dashboard loaded ideas");
                self.install(ideas);
            }
            Err(e) => {
                warn!(error = %e, "failed to load ideas");
                self.notifier
                    .notify(Notification::failure("Error loading ideas", &e.message()));
            }
        }
        self.is_loading = false;
    }

    pub async fn refresh(&mut self) {
        self.is_loading = true;
        let fetched = self.provider.fetch_ideas().await;
        match fetched {
            Ok(ideas) => {
                self.install(ideas);
                self.notifier
                    .notify(Notification::success("Success", "Data refreshed successfully"));
            }
            Err(e) => {
                warn!(error = %e, "failed to refresh ideas");
                self.notifier
                    .notify(Notification::failure("Error refreshing data", &e.message()));
            }
        }
        self.is_loading = false;
    }

    /// Status and category pickers, each with "All" in front
    pub async fn load_options(&mut self) {
        let fetched = self.provider.fetch_status_options().await;
        match fetched {
            Ok(options) => {
                self.status_options = std::iter::once(SelectOption::all())
                    .chain(options)
                    .collect();
            }
            Err(e) => self.notifier.notify(Notification::failure(
                "Error loading status options",
                &e.message(),
            )),
        }
        let fetched = self.provider.fetch_category_options().await;
        match fetched {
            Ok(categories) => {
                self.category_options = std::iter::once(SelectOption::all())
                    .chain(categories.into_iter().map(|c| SelectOption::new(c.clone(), c)))
                    .collect();
            }
            Err(e) => self.notifier.notify(Notification::failure(
                "Error loading category options",
                &e.message(),
            )),
        }
    }

    pub fn set_search(&mut self, query: &str) {
        self.list.with_criteria(|c| c.search = query.to_string());
    }

    pub fn set_status(&mut self, value: &str) {
        self.list
            .with_criteria(|c| c.status = Selector::<String>::from_value(value));
    }

    pub fn set_category(&mut self, value: &str) {
        self.list
            .with_criteria(|c| c.category = Selector::<String>::from_value(value));
    }

    pub fn set_priority(&mut self, value: &str) -> portal_core::Result<()> {
        let priority = Selector::<Priority>::from_value(value)?;
        self.list.with_criteria(|c| c.priority = priority);
        Ok(())
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.list.with_criteria(|c| c.tab = tab);
    }

    pub fn reset_filters(&mut self) {
        self.list.with_criteria(Criteria::reset_filters);
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

    /// Open the detail modal and pull the idea's comments
    pub async fn select_idea(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.modal = Modal::Detail;
        self.load_comments(id).await;
    }

    pub fn idea(&self, id: &str) -> Option<IdeaView> {
        self.list
            .store()
            .get(id)
            .map(|idea| project(idea, self.list.ui()))
    }

    pub fn selected_idea(&self) -> Option<IdeaView> {
        self.idea(self.selected_id.as_deref()?)
    }

    pub fn change_status(&mut self, id: &str, status: &str) -> portal_core::Result<()> {
        self.edit(id, |idea| Idea {
            status: status.to_string(),
            ..idea.clone()
        })?;
        self.notifier
            .notify(Notification::success("Success", "Status updated successfully"));
        Ok(())
    }

    pub fn change_priority(&mut self, id: &str, priority: Priority) -> portal_core::Result<()> {
        self.edit(id, |idea| Idea {
            priority_override: Some(priority),
            ..idea.clone()
        })?;
        self.notifier
            .notify(Notification::success("Success", "Priority updated successfully"));
        Ok(())
    }

    /// Assign to `staff`, or clear the assignment with `None`
    pub fn assign(&mut self, id: &str, staff: Option<StaffMember>) -> portal_core::Result<()> {
        self.edit(id, |idea| Idea {
            assigned_to: staff,
            ..idea.clone()
        })?;
        self.notifier
            .notify(Notification::success("Success", "Assignment updated successfully"));
        Ok(())
    }

    pub fn remove_assignment(&mut self, id: &str) -> portal_core::Result<()> {
        self.assign(id, None)
    }

    pub fn open_response_modal(&mut self) {
        self.modal = Modal::Response;
    }

    pub fn set_response_text(&mut self, text: &str) {
        self.response_text = text.to_string();
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Post the response text as a comment on the selected idea
    pub async fn submit_response(&mut self) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        if self.response_text.trim().is_empty() {
            return;
        }

        self.is_loading = true;
        let submitted = self.provider.submit_comment(&id, &self.response_text).await;
        match submitted {
            Ok(()) => {
                self.response_text.clear();
                self.modal = Modal::Closed;
                self.notifier
                    .notify(Notification::success("Success", "Response submitted successfully"));
                // One toast per response; a failed reload is only logged
                if let Err(e) = self.fetch_comments(&id).await {
                    warn!(idea = %id, error = %e, "could not reload comments after response");
                }
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::failure("Error submitting response", &e.message()));
            }
        }
        self.is_loading = false;
    }

    async fn load_comments(&mut self, id: &str) {
        if let Err(e) = self.fetch_comments(id).await {
            self.notifier
                .notify(Notification::failure("Error loading comments", &e.message()));
        }
    }

    async fn fetch_comments(&mut self, id: &str) -> portal_provider::Result<()> {
        let comments = self.provider.fetch_comments(id).await?;
        self.list.set_comments(id, comments);
        Ok(())
    }

    fn install(&mut self, ideas: Vec<Idea>) {
        self.list.replace_all(ideas);
        self.analytics = aggregate_with(self.list.store().items(), self.top_tags);
    }

    fn edit(&mut self, id: &str, change: impl FnOnce(&Idea) -> Idea) -> portal_core::Result<()> {
        self.list.update(id, change)?;
        self.analytics = aggregate_with(self.list.store().items(), self.top_tags);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingNotifier;
    use portal_provider::{MemoryProvider, SiteData};

    fn site() -> SiteData {
        serde_json::from_value(serde_json::json!({
            "ideas": [
                {"id": "1", "title": "Faster login", "status": "New", "points": 40,
                 "category": "UX;Design", "authorName": "Ana", "createdDate": "2024-01-05"},
                {"id": "2", "title": "Dark mode", "status": "Backlog", "points": 10,
                 "category": "UX", "authorName": "Ben", "createdDate": "2024-02-10",
                 "comments": [{"id": "c1", "text": "+1", "isStaff": false, "createdDate": "2024-02-11"}]},
                {"id": "3", "title": "Export to CSV", "status": "In Progress", "points": 20,
                 "authorName": "Ana", "createdDate": "2024-02-20",
                 "assignedTo": {"id": "s1", "name": "Jane Wilson"}}
            ],
            "categories": ["UX", "Design"],
            "statuses": [{"label": "New", "value": "New"}, {"label": "Backlog", "value": "Backlog"}]
        }))
        .unwrap()
    }

    async fn loaded() -> (AdminDashboard, Arc<MemoryProvider>, Arc<RecordingNotifier>) {
        let provider = Arc::new(MemoryProvider::new(site()).posting_as_staff());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut dashboard = AdminDashboard::new(provider.clone(), notifier.clone(), 10, 5);
        dashboard.load().await;
        (dashboard, provider, notifier)
    }

    fn ids(dashboard: &AdminDashboard) -> Vec<&str> {
        dashboard.view().items.iter().map(|v| v.idea.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_computes_analytics() {
        let (dashboard, _, notifier) = loaded().await;
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.view().total_items, 3);
        assert_eq!(ids(&dashboard), vec!["1", "2", "3"]);

        let categories = &dashboard.analytics().category_counts;
        assert_eq!(Analytics::count_for(categories, "UX").map(|b| b.count), Some(2));
        assert_eq!(Analytics::count_for(categories, "Design").map(|b| b.count), Some(1));
        assert_eq!(
            Analytics::count_for(categories, "Uncategorized").map(|b| b.count),
            Some(1)
        );
        assert!(notifier.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies_and_clears_loading() {
        let provider = Arc::new(MemoryProvider::new(site()));
        provider.reject_all(Some("Insufficient access")).await;
        let notifier = Arc::new(RecordingNotifier::new());
        let mut dashboard = AdminDashboard::new(provider.clone(), notifier.clone(), 10, 5);

        dashboard.load().await;

        assert!(!dashboard.is_loading());
        assert!(dashboard.view().is_empty());
        assert_eq!(
            notifier.messages(),
            vec!["Error loading ideas: Insufficient access"]
        );
    }

    #[tokio::test]
    async fn test_search_covers_author_name() {
        let (mut dashboard, _, _) = loaded().await;
        dashboard.set_search("ana");
        assert_eq!(ids(&dashboard), vec!["1", "3"]);

        dashboard.set_category("Design");
        assert_eq!(ids(&dashboard), vec!["1"]);

        dashboard.reset_filters();
        assert_eq!(dashboard.view().total_items, 3);
    }

    #[tokio::test]
    async fn test_tabs_and_priority_filter() {
        let (mut dashboard, _, _) = loaded().await;
        dashboard.set_tab(Tab::Assigned);
        assert_eq!(ids(&dashboard), vec!["3"]);
        dashboard.set_tab(Tab::Unassigned);
        assert_eq!(ids(&dashboard), vec!["1", "2"]);
        dashboard.set_tab(Tab::HighPriority);
        assert_eq!(ids(&dashboard), vec!["1"]);
        dashboard.set_tab(Tab::New);
        assert_eq!(ids(&dashboard), vec!["1"]);

        dashboard.set_tab(Tab::All);
        dashboard.set_priority("medium").unwrap();
        assert_eq!(ids(&dashboard), vec!["3"]);
        assert!(dashboard.set_priority("urgent").is_err());
    }

    #[tokio::test]
    async fn test_local_edits_keep_other_ideas() {
        let (mut dashboard, provider, notifier) = loaded().await;
        let calls = provider.calls();
        let untouched = Arc::clone(&dashboard.list.store().items()[1]);

        dashboard.change_status("1", "Completed").unwrap();
        dashboard.change_priority("1", Priority::Low).unwrap();
        dashboard.remove_assignment("3").unwrap();

        assert_eq!(provider.calls(), calls);
        assert!(Arc::ptr_eq(&untouched, &dashboard.list.store().items()[1]));
        assert_eq!(dashboard.analytics().summary.completed, 1);
        assert!(dashboard.change_status("404", "New").is_err());
        assert_eq!(
            notifier.messages(),
            vec![
                "Status updated successfully",
                "Priority updated successfully",
                "Assignment updated successfully"
            ]
        );

        dashboard.set_tab(Tab::HighPriority);
        assert!(dashboard.view().is_empty());
    }

    #[tokio::test]
    async fn test_select_idea_loads_comments() {
        let (mut dashboard, _, _) = loaded().await;
        dashboard.select_idea("2").await;
        assert_eq!(dashboard.modal(), Modal::Detail);
        let selected = dashboard.selected_idea().unwrap();
        assert_eq!(selected.comment_views.len(), 1);
        assert_eq!(
            selected.comment_views[0].comment_class,
            portal_core::projection::MEMBER_COMMENT_CLASS
        );
    }

    #[tokio::test]
    async fn test_blank_response_is_not_sent() {
        let (mut dashboard, provider, notifier) = loaded().await;
        dashboard.select_idea("1").await;
        dashboard.open_response_modal();
        dashboard.set_response_text("   ");
        let calls = provider.calls();

        dashboard.submit_response().await;

        assert_eq!(provider.calls(), calls);
        assert_eq!(dashboard.modal(), Modal::Response);
        assert!(notifier.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_response_posts_staff_comment() {
        let (mut dashboard, _, notifier) = loaded().await;
        dashboard.select_idea("1").await;
        dashboard.open_response_modal();
        dashboard.set_response_text("Planned for next release");

        dashboard.submit_response().await;

        assert_eq!(dashboard.modal(), Modal::Closed);
        assert_eq!(dashboard.response_text(), "");
        let selected = dashboard.selected_idea().unwrap();
        assert_eq!(selected.comment_views.len(), 1);
        assert!(selected.comment_views[0].comment.is_staff);
        assert_eq!(notifier.messages(), vec!["Response submitted successfully"]);
    }

    #[tokio::test]
    async fn test_response_failure_keeps_text() {
        let (mut dashboard, provider, notifier) = loaded().await;
        dashboard.select_idea("1").await;
        dashboard.open_response_modal();
        dashboard.set_response_text("On it");
        provider.reject_all(Some("Read only")).await;

        dashboard.submit_response().await;

        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.response_text(), "On it");
        assert_eq!(notifier.messages(), vec!["Error submitting response: Read only"]);
    }

    /// Accepts comments but cannot read them back
    struct WriteOnlyComments(MemoryProvider);

    #[async_trait::async_trait]
    impl DataProvider for WriteOnlyComments {
        async fn fetch_ideas(&self) -> portal_provider::Result<Vec<Idea>> {
            self.0.fetch_ideas().await
        }

        async fn fetch_comments(&self, _idea_id: &str) -> portal_provider::Result<Vec<portal_core::Comment>> {
            Err(portal_provider::ProviderError::rejected("Comments unavailable"))
        }

        async fn submit_vote(&self, idea_id: &str, vote: portal_core::VoteType) -> portal_provider::Result<()> {
            self.0.submit_vote(idea_id, vote).await
        }

        async fn submit_comment(&self, idea_id: &str, text: &str) -> portal_provider::Result<()> {
            self.0.submit_comment(idea_id, text).await
        }

        async fn create_idea(&self, idea: &portal_core::NewIdea) -> portal_provider::Result<()> {
            self.0.create_idea(idea).await
        }

        async fn fetch_category_options(&self) -> portal_provider::Result<Vec<String>> {
            self.0.fetch_category_options().await
        }

        async fn fetch_status_options(&self) -> portal_provider::Result<Vec<SelectOption>> {
            self.0.fetch_status_options().await
        }
    }

    #[tokio::test]
    async fn test_response_reload_failure_gives_single_toast() {
        let provider = Arc::new(WriteOnlyComments(MemoryProvider::new(site())));
        let notifier = Arc::new(RecordingNotifier::new());
        let mut dashboard = AdminDashboard::new(provider.clone(), notifier.clone(), 10, 5);
        dashboard.load().await;

        dashboard.select_idea("1").await;
        assert_eq!(
            notifier.take().into_iter().map(|n| n.message).collect::<Vec<_>>(),
            vec!["Error loading comments: Comments unavailable"]
        );

        dashboard.open_response_modal();
        dashboard.set_response_text("Planned for next release");
        dashboard.submit_response().await;

        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.modal(), Modal::Closed);
        assert_eq!(notifier.messages(), vec!["Response submitted successfully"]);
        assert_eq!(provider.0.snapshot().await.ideas[0].comments.len(), 1);
    }

    #[tokio::test]
    async fn test_options_get_all_prefix() {
        let (mut dashboard, _, _) = loaded().await;
        dashboard.load_options().await;
        let statuses: Vec<&str> = dashboard
            .status_options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(statuses, vec!["All", "New", "Backlog"]);
        assert_eq!(dashboard.category_options().len(), 3);
    }
}
