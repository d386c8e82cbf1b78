use anyhow::Result;
use portal_core::{Analytics, StaffMember, Tab};
use portal_engine::AdminDashboard;

use super::{Context, goto_page, print_page, print_idea};
use crate::cli::AdminCommands;

pub async fn handle(cmd: AdminCommands, ctx: &Context) -> Result<()> {
    let top_tags = match &cmd {
        AdminCommands::Analytics { top: Some(top) } => *top,
        _ => ctx.config.ideas.top_tags,
    };
    let mut dashboard = AdminDashboard::new(
        ctx.provider.clone(),
        ctx.notifier.clone(),
        ctx.config.ideas.page_size,
        top_tags,
    );
    dashboard.load().await;
    ctx.report()?;

    match cmd {
        AdminCommands::List {
            search,
            category,
            status,
            priority,
            tab,
            page,
        } => {
            dashboard.set_tab(tab.parse::<Tab>()?);
            if let Some(search) = search {
                dashboard.set_search(&search);
            }
            if let Some(category) = category {
                dashboard.set_category(&category);
            }
            if let Some(status) = status {
                dashboard.set_status(&status);
            }
            if let Some(priority) = priority {
                dashboard.set_priority(&priority)?;
            }
            goto_page(page, || dashboard.next_page());
            ctx.emit(dashboard.view(), || print_page(dashboard.view()))
        }
        AdminCommands::Analytics { .. } => {
            let analytics = dashboard.analytics();
            ctx.emit(analytics, || print_analytics(analytics))
        }
        AdminCommands::Assign { id, staff_id, name } => {
            let staff = StaffMember {
                id: staff_id,
                name,
                email: None,
                avatar: None,
                department: None,
            };
            dashboard.assign(&id, Some(staff))?;
            ctx.report()?;
            let updated = dashboard.idea(&id);
            ctx.emit(&updated, || {
                if let Some(view) = &updated {
                    print_idea(view);
                }
            })
        }
        AdminCommands::Status { id, status } => {
            dashboard.change_status(&id, &status)?;
            ctx.report()?;
            let updated = dashboard.idea(&id);
            ctx.emit(&updated, || {
                if let Some(view) = &updated {
                    print_idea(view);
                }
            })
        }
        AdminCommands::Respond { id, text } => {
            dashboard.select_idea(&id).await;
            dashboard.open_response_modal();
            dashboard.set_response_text(&text);
            dashboard.submit_response().await;
            ctx.report()
        }
    }
}

fn print_analytics(analytics: &Analytics) {
    let summary = &analytics.summary;
    println!("Summary:");
    println!("  Total: {}", summary.total);
    println!("  New: {}", summary.new);
    println!("  In progress: {}", summary.in_progress);
    println!("  Completed: {}", summary.completed);
    println!("  High priority: {}", summary.high_priority);
    println!("  Pending response: {}", summary.pending_response);
    println!("  Comments: {}", summary.total_comments);

    for (title, buckets) in [
        ("Categories", &analytics.category_counts),
        ("Statuses", &analytics.status_counts),
        ("Priorities", &analytics.priority_counts),
    ] {
        println!("\n{}:", title);
        for bucket in buckets {
            println!("  {:<20} {}", bucket.name, bucket.count);
        }
    }

    println!("\nMonthly trend:");
    for bar in &analytics.monthly_trend {
        let width = (bar.height_percent / 5) as usize;
        println!("  {:<4} {:>4} {}", bar.month, bar.count, "#".repeat(width));
    }

    if !analytics.top_tags.is_empty() {
        println!("\nTop tags:");
        for tag in &analytics.top_tags {
            println!("  {:<20} {}", tag.tag, tag.count);
        }
    }
}
