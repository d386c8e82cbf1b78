//! Filter/sort pipeline over an in-memory ideas collection
//!
//! Pure: the input slice is never touched, the output shares the input's
//! `Arc`s and is a subset of it in (optionally) re-sorted order.

use std::sync::Arc;

use crate::criteria::{CategoryMatch, Criteria, ShowFilter, SortOrder, Tab};
use crate::idea::{Idea, status};

/// Apply every active predicate of `criteria`, then its sort, if any
pub fn filter_and_sort(items: &[Arc<Idea>], criteria: &Criteria) -> Vec<Arc<Idea>> {
    let needle = criteria.search.to_lowercase();

    let mut filtered: Vec<Arc<Idea>> = items
        .iter()
        .filter(|idea| admits(idea, criteria, &needle))
        .cloned()
        .collect();

    if let Some(order) = criteria.sort {
        sort_ideas(&mut filtered, order);
    }

    filtered
}

/// True when `idea` passes every predicate; `needle` is the lowercased search
pub fn admits(idea: &Idea, criteria: &Criteria, needle: &str) -> bool {
    matches_search(idea, needle, criteria.variant.searches_author())
        && matches_category(idea, criteria)
        && criteria.status.admits(&idea.status)
        && criteria.priority.admits(&idea.priority())
        && matches_tab(idea, criteria.tab)
        && matches_show(idea, criteria.show)
}

fn matches_search(idea: &Idea, needle: &str, include_author: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    idea.title.to_lowercase().contains(needle)
        || idea.description.to_lowercase().contains(needle)
        || (include_author && idea.author_name.to_lowercase().contains(needle))
}

fn matches_category(idea: &Idea, criteria: &Criteria) -> bool {
    let crate::Selector::Only(wanted) = &criteria.category else {
        return true;
    };
    let Some(category) = idea.category.as_deref() else {
        return false;
    };
    match criteria.category_match() {
        CategoryMatch::Contains => category.contains(wanted.as_str()),
        CategoryMatch::Exact => category == wanted,
    }
}

fn matches_tab(idea: &Idea, tab: Tab) -> bool {
    match tab {
        Tab::All => true,
        Tab::Assigned => idea.is_assigned(),
        Tab::Unassigned => !idea.is_assigned(),
        Tab::HighPriority => idea.priority() == crate::Priority::High,
        Tab::New => idea.status == status::NEW,
    }
}

fn matches_show(idea: &Idea, show: ShowFilter) -> bool {
    match show {
        ShowFilter::All => true,
        ShowFilter::MyIdeas => idea.is_current_user_author,
        ShowFilter::MyOrganization => idea.is_from_current_user_org,
        ShowFilter::CommentedByMe => idea.is_commented_by_current_user,
        ShowFilter::VotedByMe => idea.is_voted_by_current_user,
    }
}

/// Stable descending sort; equal keys keep their relative order
pub fn sort_ideas(items: &mut [Arc<Idea>], order: SortOrder) {
    match order {
        SortOrder::Popular => items.sort_by(|a, b| b.points.cmp(&a.points)),
        SortOrder::Recent => items.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
        SortOrder::MostVoted => items.sort_by(|a, b| b.vote_count.cmp(&a.vote_count)),
    }
}
