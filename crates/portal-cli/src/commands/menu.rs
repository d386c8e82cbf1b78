use anyhow::{Result, bail};
use portal_core::navigation::is_home_route;
use portal_core::{PublishedState, Viewer};
use portal_engine::{MenuSettings, TileMenu};

use super::Context;

pub struct MenuArgs {
    pub route: String,
    pub name: Option<String>,
    pub guest: bool,
    pub profile: Option<String>,
    pub app: Option<String>,
}

pub async fn handle(args: MenuArgs, ctx: &Context) -> Result<()> {
    let settings = MenuSettings {
        menu_name: args.name.unwrap_or_else(|| ctx.config.site.menu_name.clone()),
        base_path: ctx.config.site.base_path.clone(),
        icon_base: ctx.config.site.icon_base.clone(),
    };
    let viewer = Viewer {
        is_guest: args.guest,
        profile_name: args.profile,
    };
    let state = PublishedState::from_app(args.app.as_deref());

    let mut menu = TileMenu::new(ctx.provider.clone(), settings, state, viewer);
    menu.load().await;
    if let Some(error) = menu.error() {
        bail!("Error loading menu: {}", error);
    }

    let links = menu.links(&args.route);
    ctx.emit(&links, || {
        if is_home_route(&args.route) {
            println!("Home ({} menu)", state.as_str());
        } else {
            println!("{} ({} menu)", args.route, state.as_str());
        }
        for link in &links {
            let active = if link.is_active { "*" } else { " " };
            let destination = menu
                .page_reference(link.item.id)
                .and_then(|r| serde_json::to_string(&r).ok())
                .unwrap_or_else(|| "-".to_string());
            println!("{} {:<30} {}", active, link.item.label, destination);
            println!("    icon: {}", link.item.icon);
        }
    })
}
