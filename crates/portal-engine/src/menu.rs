//! Tile and navigation-bar menus

use std::sync::Arc;

use portal_core::navigation::{build_menu, is_active, link_classes, visible_items};
use portal_core::{MenuItem, PageReference, PublishedState, Viewer};
use portal_provider::NavigationProvider;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct MenuSettings {
    pub menu_name: String,
    pub base_path: String,
    pub icon_base: String,
}

/// A visible menu item decorated for the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLink {
    #[serde(flatten)]
    pub item: MenuItem,
    pub is_active: bool,
    pub link_class: &'static str,
}

pub struct TileMenu {
    provider: Arc<dyn NavigationProvider>,
    settings: MenuSettings,
    state: PublishedState,
    viewer: Viewer,
    items: Option<Vec<MenuItem>>,
    error: Option<String>,
}

impl TileMenu {
    pub fn new(
        provider: Arc<dyn NavigationProvider>,
        settings: MenuSettings,
        state: PublishedState,
        viewer: Viewer,
    ) -> Self {
        Self {
            provider,
            settings,
            state,
            viewer,
            items: None,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Fetch the menu once, failed or not; later calls are no-ops
    pub async fn load(&mut self) {
        if self.items.is_some() {
            return;
        }
        let fetched = self
            .provider
            .fetch_menu_items(&self.settings.menu_name, self.state)
            .await;
        match fetched {
            Ok(records) => {
                debug!(menu = %self.settings.menu_name, count = records.len(), "menu loaded");
                self.items = Some(build_menu(records, &self.settings.icon_base));
                self.error = None;
            }
            Err(e) => {
                warn!(menu = %self.settings.menu_name, error = %e, "failed to load menu");
                self.items = Some(Vec::new());
                self.error = Some(e.message());
            }
        }
    }

    /// Items the current viewer may see
    pub fn visible_items(&self) -> Vec<MenuItem> {
        self.items
            .as_deref()
            .map(|items| visible_items(items, &self.viewer))
            .unwrap_or_default()
    }

    pub fn links(&self, current_route: &str) -> Vec<MenuLink> {
        self.visible_items()
            .into_iter()
            .map(|item| {
                let active = is_active(&item.target, current_route);
                MenuLink {
                    item,
                    is_active: active,
                    link_class: link_classes(active),
                }
            })
            .collect()
    }

    /// Where a click on item `id` navigates, if anywhere
    pub fn page_reference(&self, id: usize) -> Option<PageReference> {
        let item = self.items.as_deref()?.iter().find(|i| i.id == id)?;
        let reference = item.page_reference(&self.settings.base_path);
        if reference.is_none() {
            warn!(label = %item.label, item_type = ?item.item_type, "menu item type is not navigable");
        }
        reference
    }
}
