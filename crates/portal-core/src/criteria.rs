//! Filter and sort criteria for the ideas lists

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Priority, Result};

/// Label/value pair offered by a filter picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The "All" entry prepended to every picker
    pub fn all() -> Self {
        Self::new(ALL, ALL)
    }
}

pub const ALL: &str = "All";

/// A picker value where `All` bypasses the predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl Selector<String> {
    pub fn from_value(raw: &str) -> Self {
        if raw == ALL {
            Selector::All
        } else {
            Selector::Only(raw.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Only(v) => v,
        }
    }
}

impl Selector<Priority> {
    pub fn from_value(raw: &str) -> Result<Self> {
        if raw == ALL {
            Ok(Selector::All)
        } else {
            raw.parse().map(Selector::Only)
        }
    }
}

/// How the category picker is compared against an idea's category string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryMatch {
    /// Substring of the raw, possibly multi-valued, category string
    Contains,
    /// Whole category string equality
    Exact,
}

/// Which ideas list the criteria drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Admin,
    Public,
}

impl Variant {
    pub fn category_match(self) -> CategoryMatch {
        match self {
            Variant::Admin => CategoryMatch::Contains,
            Variant::Public => CategoryMatch::Exact,
        }
    }

    pub fn searches_author(self) -> bool {
        matches!(self, Variant::Admin)
    }
}

/// Admin dashboard tabs; exactly one is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    All,
    Assigned,
    Unassigned,
    HighPriority,
    New,
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Tab::All),
            "assigned" => Ok(Tab::Assigned),
            "unassigned" => Ok(Tab::Unassigned),
            "high-priority" => Ok(Tab::HighPriority),
            "new" => Ok(Tab::New),
            other => Err(Error::Other(anyhow::anyhow!("unknown tab: {other}"))),
        }
    }
}

/// Public board "show" picker, relative to the current viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowFilter {
    #[default]
    All,
    MyIdeas,
    MyOrganization,
    CommentedByMe,
    VotedByMe,
}

impl ShowFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ShowFilter::All => "All",
            ShowFilter::MyIdeas => "My Ideas",
            ShowFilter::MyOrganization => "My Organization",
            ShowFilter::CommentedByMe => "Commented by me",
            ShowFilter::VotedByMe => "Voted by me",
        }
    }

    /// Entries offered in the picker
    pub fn options() -> Vec<SelectOption> {
        [
            ShowFilter::All,
            ShowFilter::MyIdeas,
            ShowFilter::CommentedByMe,
            ShowFilter::VotedByMe,
        ]
        .iter()
        .map(|s| SelectOption::new(s.label(), s.label()))
        .collect()
    }
}

impl FromStr for ShowFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "All" => Ok(ShowFilter::All),
            "My Ideas" => Ok(ShowFilter::MyIdeas),
            "My Organization" => Ok(ShowFilter::MyOrganization),
            "Commented by me" => Ok(ShowFilter::CommentedByMe),
            "Voted by me" => Ok(ShowFilter::VotedByMe),
            other => Err(Error::Other(anyhow::anyhow!("unknown show filter: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Points, highest first
    #[default]
    Popular,
    /// Creation date, newest first
    Recent,
    /// Vote count, highest first
    MostVoted,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Popular => "Popular",
            SortOrder::Recent => "Recent",
            SortOrder::MostVoted => "Most Voted",
        }
    }

    pub fn options() -> Vec<SelectOption> {
        [SortOrder::Popular, SortOrder::Recent, SortOrder::MostVoted]
            .iter()
            .map(|s| SelectOption::new(s.label(), s.label()))
            .collect()
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "popular" => Ok(SortOrder::Popular),
            "recent" => Ok(SortOrder::Recent),
            "most voted" => Ok(SortOrder::MostVoted),
            other => Err(Error::Other(anyhow::anyhow!("unknown sort order: {other}"))),
        }
    }
}

/// Combined search/filter/sort selections applied to an ideas list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub variant: Variant,
    pub search: String,
    pub status: Selector<String>,
    pub category: Selector<String>,
    pub priority: Selector<Priority>,
    pub tab: Tab,
    pub show: ShowFilter,
    pub sort: Option<SortOrder>,
}

impl Criteria {
    /// Admin dashboard defaults: no sort, source order preserved
    pub fn admin() -> Self {
        Self::new(Variant::Admin, None)
    }

    /// Public board defaults: sorted by popularity
    pub fn public() -> Self {
        Self::new(Variant::Public, Some(SortOrder::Popular))
    }

    fn new(variant: Variant, sort: Option<SortOrder>) -> Self {
        Self {
            variant,
            search: String::new(),
            status: Selector::All,
            category: Selector::All,
            priority: Selector::All,
            tab: Tab::All,
            show: ShowFilter::All,
            sort,
        }
    }

    /// Clear search and pickers; tab and sort are kept
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.status = Selector::All;
        self.category = Selector::All;
        self.priority = Selector::All;
    }

    pub fn category_match(&self) -> CategoryMatch {
        self.variant.category_match()
    }
}
