pub mod admin;
pub mod forms;
pub mod ideas;
pub mod knowledge;
pub mod menu;

use std::sync::Arc;

use anyhow::{Result, bail};
use portal_config::Config;
use portal_core::{IdeaView, NotificationKind, Page};
use portal_engine::RecordingNotifier;
use portal_provider::JsonFileProvider;
use serde::Serialize;

use crate::cli::Format;

/// Everything a command handler needs
pub struct Context {
    pub provider: Arc<JsonFileProvider>,
    pub notifier: Arc<RecordingNotifier>,
    pub config: Config,
    pub format: Format,
}

impl Context {
    /// Print queued notifications; fail if any of them is an error
    pub fn report(&self) -> Result<()> {
        let mut failed = None;
        for notification in self.notifier.take() {
            match notification.kind {
                NotificationKind::Success => println!("✓ {}", notification.message),
                NotificationKind::Error => {
                    eprintln!("✗ {}", notification.message);
                    failed = Some(notification.message);
                }
            }
        }
        if let Some(message) = failed {
            bail!(message);
        }
        Ok(())
    }

    /// JSON dump in json mode, `text` otherwise
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce()) -> Result<()> {
        match self.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
            Format::Text => text(),
        }
        Ok(())
    }
}

/// Step a controller forward to `page`
pub fn goto_page(page: usize, mut next: impl FnMut() -> bool) {
    for _ in 1..page {
        if !next() {
            break;
        }
    }
}

pub fn print_page(page: &Page<IdeaView>) {
    if page.is_empty() {
        println!("No ideas found.");
        return;
    }

    println!("Ideas (page {}, {} total):", page.label(), page.total_items);
    for view in &page.items {
        print_idea(view);
    }
}

pub fn print_idea(view: &IdeaView) {
    let idea = &view.idea;
    println!("  [{}] {}", idea.id, idea.title);
    println!(
        "    {} | {} points | {} votes | {} priority",
        idea.status, idea.points, idea.vote_count, view.effective_priority
    );
    if !view.tags.is_empty() {
        println!("    Tags: {}", view.tags.join(", "));
    }
    if let Some(staff) = &idea.assigned_to {
        println!("    Assigned to: {}", staff.name);
    }
    println!("    {} {}", idea.comment_count, view.comment_count_text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{Notification, Notifier};

    fn context(dir: &tempfile::TempDir, format: Format) -> Context {
        Context {
            provider: Arc::new(JsonFileProvider::empty(dir.path().join("site.json"))),
            notifier: Arc::new(RecordingNotifier::new()),
            config: Config::default(),
            format,
        }
    }

    #[test]
    fn test_goto_page_stops_at_last_page() {
        let mut remaining = 2;
        let mut calls = 0;
        goto_page(5, || {
            calls += 1;
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            true
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_goto_first_page_is_noop() {
        let mut calls = 0;
        goto_page(1, || {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_report_fails_on_error_notification() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir, Format::Text);
        ctx.notifier.notify(Notification::success("Success", "Comment added successfully"));
        ctx.notifier.notify(Notification::error("Error", "Error voting"));

        let err = ctx.report().unwrap_err();
        assert_eq!(err.to_string(), "Error voting");
        assert!(ctx.notifier.take().is_empty());
    }

    #[test]
    fn test_report_passes_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir, Format::Json);
        ctx.notifier.notify(Notification::success("Success", "Idea submitted successfully"));
        assert!(ctx.report().is_ok());
    }
}
