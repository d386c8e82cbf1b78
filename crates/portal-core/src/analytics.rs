//! Admin dashboard analytics
//!
//! Every bucket list iterates in first-seen order so repeated runs over the
//! same collection produce identical output.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::Month;

use crate::idea::{Idea, Priority, status};

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const DEFAULT_TOP_TAGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub count: usize,
}

/// One bar of the monthly trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBar {
    pub month: String,
    pub count: usize,
    /// Percentage of the tallest bar, 0..=100
    pub height_percent: u32,
}

impl TrendBar {
    pub fn height_class(&self) -> String {
        format!("trend-bar-height-{}", self.height_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Headline counters shown above the charts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub high_priority: usize,
    pub total_comments: u64,
    /// New or Under Review
    pub pending_response: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub category_counts: Vec<Bucket>,
    pub status_counts: Vec<Bucket>,
    pub priority_counts: Vec<Bucket>,
    pub monthly_counts: Vec<Bucket>,
    pub monthly_trend: Vec<TrendBar>,
    pub top_tags: Vec<TagCount>,
    pub summary: Summary,
}

impl Analytics {
    pub fn count_for<'a>(buckets: &'a [Bucket], name: &str) -> Option<&'a Bucket> {
        buckets.iter().find(|b| b.name == name)
    }
}

/// Insertion-ordered frequency counter
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    buckets: Vec<Bucket>,
}

impl Tally {
    fn add(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&pos) => self.buckets[pos].count += 1,
            None => {
                self.index.insert(name.to_string(), self.buckets.len());
                self.buckets.push(Bucket {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}

/// Aggregate with the default top-tag limit
pub fn aggregate(items: &[Arc<Idea>]) -> Analytics {
    aggregate_with(items, DEFAULT_TOP_TAGS)
}

pub fn aggregate_with(items: &[Arc<Idea>], top_tag_limit: usize) -> Analytics {
    let mut categories = Tally::default();
    let mut statuses = Tally::default();
    let mut priorities = Tally::default();
    let mut months = Tally::default();
    let mut tags = Tally::default();

    for idea in items {
        let idea_tags = idea.tags();
        if idea_tags.is_empty() {
            categories.add(UNCATEGORIZED);
        } else {
            for tag in &idea_tags {
                categories.add(tag);
                tags.add(tag);
            }
        }
        statuses.add(&idea.status);
        priorities.add(idea.priority().as_str());
        months.add(short_month(idea.created_date.month()));
    }

    let monthly_counts = months.into_buckets();
    let monthly_trend = trend_bars(&monthly_counts);

    Analytics {
        category_counts: categories.into_buckets(),
        status_counts: statuses.into_buckets(),
        priority_counts: priorities.into_buckets(),
        monthly_counts,
        monthly_trend,
        top_tags: top_tags(tags.into_buckets(), top_tag_limit),
        summary: summarize(items),
    }
}

/// Bar heights relative to the largest bucket; all-zero input yields zero heights
pub fn trend_bars(buckets: &[Bucket]) -> Vec<TrendBar> {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    buckets
        .iter()
        .map(|b| TrendBar {
            month: b.name.clone(),
            count: b.count,
            height_percent: height_percent(b.count, max),
        })
        .collect()
}

fn height_percent(count: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * 100.0).round() as u32
}

/// Sort descending by count, ties keep first-seen order
fn top_tags(mut buckets: Vec<Bucket>, limit: usize) -> Vec<TagCount> {
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
        .into_iter()
        .take(limit)
        .map(|b| TagCount {
            tag: b.name,
            count: b.count,
        })
        .collect()
}

pub fn summarize(items: &[Arc<Idea>]) -> Summary {
    let with_status = |s: &str| items.iter().filter(|i| i.status == s).count();
    Summary {
        total: items.len(),
        new: with_status(status::NEW),
        in_progress: with_status(status::IN_PROGRESS),
        completed: with_status(status::COMPLETED),
        high_priority: items
            .iter()
            .filter(|i| i.priority() == Priority::High)
            .count(),
        total_comments: items.iter().map(|i| u64::from(i.comment_count)).sum(),
        pending_response: with_status(status::NEW) + with_status(status::UNDER_REVIEW),
    }
}

pub fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
