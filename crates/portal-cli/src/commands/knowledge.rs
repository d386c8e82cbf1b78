use anyhow::{Result, bail};
use portal_core::Focus;
use portal_engine::KnowledgeViewer;

use super::Context;

pub async fn handle(article: Option<String>, collection: Option<String>, ctx: &Context) -> Result<()> {
    let mut viewer = KnowledgeViewer::new(ctx.provider.clone());
    let focus = Focus {
        active_article_id: article,
        active_collection_id: collection,
    };
    viewer.load(&focus).await;
    if let Some(error) = viewer.error() {
        bail!("Error loading knowledge articles: {}", error);
    }

    let view = viewer.view();
    ctx.emit(&*view, || {
        if view.is_empty() {
            println!("No collections found.");
        }
        for collection in view.iter() {
            println!("{} ({})", collection.name, collection.icon_name);
            for subcategory in &collection.subcategories {
                let marker = if subcategory.is_expanded { "v" } else { ">" };
                println!("  {} {}", marker, subcategory.name);
                if !subcategory.is_expanded {
                    continue;
                }
                for article in &subcategory.articles {
                    let selected = if article.is_selected { "*" } else { " " };
                    println!("    {} {}", selected, article.article.title);
                }
            }
        }
    })
}
