//! Navigation menu items, page references and active-route detection
//!
//! The current route is always passed in by the host shell; nothing here
//! reads global browser state.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref LABEL_SEPARATORS: Regex = Regex::new(r"[\s/]+").unwrap();
}

const ACCOUNT_REPORTS: &str = "Account Reports";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItemType {
    SalesforceObject,
    InternalLink,
    ExternalLink,
    HomePage,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessRestriction {
    None,
    LoginRequired,
    #[serde(other)]
    Restricted,
}

/// Menu item as stored by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuItemRecord {
    pub label: String,
    pub target: String,
    #[serde(rename = "Type")]
    pub item_type: MenuItemType,
    #[serde(default)]
    pub default_list_view_id: Option<String>,
    pub access_restriction: AccessRestriction,
}

/// Display-ready menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: usize,
    pub label: String,
    pub icon: String,
    pub target: String,
    pub default_list_view_id: Option<String>,
    pub item_type: MenuItemType,
    pub access_restriction: AccessRestriction,
}

impl MenuItem {
    pub fn page_reference(&self, base_path: &str) -> Option<PageReference> {
        resolve(
            self.item_type,
            &self.target,
            self.default_list_view_id.as_deref(),
            base_path,
        )
    }
}

/// Where a menu click should take the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageReference {
    ObjectPage {
        object_api_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter_name: Option<String>,
    },
    WebPage {
        url: String,
    },
    NamedPage {
        name: String,
    },
}

pub fn resolve(
    item_type: MenuItemType,
    target: &str,
    default_list_view_id: Option<&str>,
    base_path: &str,
) -> Option<PageReference> {
    match item_type {
        MenuItemType::SalesforceObject => Some(PageReference::ObjectPage {
            object_api_name: target.to_string(),
            filter_name: default_list_view_id.map(str::to_string),
        }),
        MenuItemType::InternalLink => Some(PageReference::WebPage {
            url: format!("{base_path}{target}"),
        }),
        MenuItemType::ExternalLink => Some(PageReference::WebPage {
            url: target.to_string(),
        }),
        MenuItemType::HomePage => Some(PageReference::NamedPage {
            name: "Home".to_string(),
        }),
        MenuItemType::Unsupported => None,
    }
}

/// "/s/ideas" -> "/ideas"; "/s/" -> "/"
pub fn last_segment(route: &str) -> String {
    format!("/{}", route.rsplit('/').next().unwrap_or(""))
}

pub fn is_active(target: &str, current_route: &str) -> bool {
    let last = last_segment(current_route);
    if last == "/" && target == "/s/" {
        return true;
    }
    target == last
}

pub fn link_classes(active: bool) -> &'static str {
    if active {
        "navbar-item-link active"
    } else {
        "navbar-item-link"
    }
}

/// Home detection for the site layout
pub fn is_home_route(route: &str) -> bool {
    route == "/vbu/s/" || route == "/s/" || route.to_lowercase().contains("home")
}

/// Icon file stem: whitespace and slashes removed
pub fn refine_label(label: &str) -> String {
    LABEL_SEPARATORS.replace_all(label.trim(), "").into_owned()
}

pub fn display_label(label: &str) -> String {
    if label == "FAQ" {
        "Frequently Asked Questions".to_string()
    } else {
        label.to_string()
    }
}

/// Turn platform records into display items, numbering them in order
pub fn build_menu(records: Vec<MenuItemRecord>, icon_base: &str) -> Vec<MenuItem> {
    records
        .into_iter()
        .enumerate()
        .map(|(id, record)| MenuItem {
            id,
            label: display_label(&record.label),
            icon: format!("{icon_base}/Images/{}.png", refine_label(&record.label)),
            target: record.target,
            default_list_view_id: record.default_list_view_id,
            item_type: record.item_type,
            access_restriction: record.access_restriction,
        })
        .collect()
}

/// The person looking at the menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub is_guest: bool,
    pub profile_name: Option<String>,
}

impl Viewer {
    pub fn can_see(&self, item: &MenuItem) -> bool {
        let passes_restriction = match item.access_restriction {
            AccessRestriction::None => true,
            AccessRestriction::LoginRequired => !self.is_guest,
            AccessRestriction::Restricted => false,
        };
        let passes_admin_check = item.label != ACCOUNT_REPORTS
            || self
                .profile_name
                .as_deref()
                .is_some_and(|p| p.contains("Admin"));
        passes_restriction && passes_admin_check
    }
}

pub fn visible_items(items: &[MenuItem], viewer: &Viewer) -> Vec<MenuItem> {
    items.iter().filter(|i| viewer.can_see(i)).cloned().collect()
}

/// Which version of the menu to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishedState {
    Draft,
    Live,
}

impl PublishedState {
    /// Draft inside the site editor, live everywhere else
    pub fn from_app(app: Option<&str>) -> Self {
        if app == Some("commeditor") {
            PublishedState::Draft
        } else {
            PublishedState::Live
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishedState::Draft => "Draft",
            PublishedState::Live => "Live",
        }
    }
}
