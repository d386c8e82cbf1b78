use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the portal components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ideas: IdeasConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_top_tags")]
    pub top_tags: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Prefix for internal links, e.g. "/vbu/s"
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Static resource holding the menu tile images
    #[serde(default = "default_icon_base")]
    pub icon_base: String,

    #[serde(default = "default_menu_name")]
    pub menu_name: String,

    /// Flow launched by the idea/case submission form
    #[serde(default = "default_flow_name")]
    pub submission_flow: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// JSON site export served by the fixture provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ideas: IdeasConfig::default(),
            site: SiteConfig::default(),
            log: LogConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for IdeasConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            top_tags: default_top_tags(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            icon_base: default_icon_base(),
            menu_name: default_menu_name(),
            submission_flow: default_flow_name(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_top_tags() -> usize {
    5
}

fn default_base_path() -> String {
    "/s".to_string()
}

fn default_icon_base() -> String {
    "/resource/CommunityNavigation".to_string()
}

fn default_menu_name() -> String {
    "Default Navigation".to_string()
}

fn default_flow_name() -> String {
    "Submit_Idea".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from `path`, writing the defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "portal", "portal") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.portal/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ideas.page_size, 10);
        assert_eq!(config.ideas.top_tags, 5);
        assert_eq!(config.site.base_path, "/s");
        assert_eq!(config.log.filter, "info");
        assert!(config.provider.fixture.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.ideas.page_size, config.ideas.page_size);
        assert_eq!(parsed.site.menu_name, config.site.menu_name);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
[ideas]
page_size = 25

[site]
base_path = "/vbu/s"

[provider]
fixture = "/srv/portal/site.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ideas.page_size, 25);
        assert_eq!(config.ideas.top_tags, 5);
        assert_eq!(config.site.base_path, "/vbu/s");
        assert_eq!(config.site.icon_base, "/resource/CommunityNavigation");
        assert_eq!(
            config.provider.fixture,
            Some(PathBuf::from("/srv/portal/site.json"))
        );
    }

    #[test]
    fn test_load_from_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ideas.page_size, 10);
        assert!(path.exists());

        std::fs::write(&path, "[ideas]\npage_size = 3\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().ideas.page_size, 3);
    }
}
