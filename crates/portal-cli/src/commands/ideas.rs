use anyhow::Result;
use portal_core::{NewIdea, ShowFilter, SortOrder, VoteType};
use portal_engine::IdeasBoard;

use super::{Context, goto_page, print_page};
use crate::cli::IdeasCommands;

pub async fn handle(cmd: IdeasCommands, ctx: &Context) -> Result<()> {
    let mut board = IdeasBoard::new(
        ctx.provider.clone(),
        ctx.notifier.clone(),
        ctx.config.ideas.page_size,
    );

    match cmd {
        IdeasCommands::List {
            search,
            category,
            status,
            show,
            sort,
            page,
        } => {
            board.load().await;
            if let Some(search) = search {
                board.set_search(&search);
            }
            if let Some(category) = category {
                board.set_category(&category);
            }
            if let Some(status) = status {
                board.set_status(&status);
            }
            if let Some(show) = show {
                board.set_show(show.parse::<ShowFilter>()?);
            }
            if let Some(sort) = sort {
                board.set_sort(sort.parse::<SortOrder>()?);
            }
            goto_page(page, || board.next_page());
            ctx.report()?;
            ctx.emit(board.view(), || print_page(board.view()))
        }
        IdeasCommands::Vote { id, direction } => {
            let vote: VoteType = direction.parse()?;
            board.vote(&id, vote).await;
            ctx.report()?;
            let updated = board.view().items.iter().find(|v| v.idea.id == id);
            ctx.emit(&updated, || {
                if let Some(view) = updated {
                    println!("✓ {} now has {} points", view.idea.title, view.idea.points);
                }
            })
        }
        IdeasCommands::Comment { id, text } => {
            board.set_comment_draft(&id, &text);
            board.submit_comment(&id).await;
            ctx.report()
        }
        IdeasCommands::Create {
            title,
            category,
            description,
        } => {
            board.open_new_idea();
            *board.new_idea_mut() = NewIdea {
                title,
                category,
                description,
            };
            board.submit_new_idea().await;
            ctx.report()
        }
    }
}
