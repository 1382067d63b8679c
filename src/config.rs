use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BoardError, Result};
use crate::project_list::{FillOrder, MIN_PROJECTS_TO_SHOW};

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_to_show: Option<usize>,
    #[serde(default)]
    pub fill_order: FillOrder,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| BoardError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| BoardError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Config file body.
    pub fn render(&self) -> Result<String> {
        toml::to_string(self).map_err(BoardError::ConfigSerialize)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "wsboard")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(BoardError::NoConfigDir)
    }

    /// API base URL with env var taking precedence over config file.
    /// `None` when neither is set.
    pub fn api_url(&self) -> Result<Option<Url>> {
        let raw = std::env::var("WSBOARD_API_URL")
            .ok()
            .or_else(|| self.api_url.clone());

        raw.map(|raw| parse_base_url(&raw)).transpose()
    }

    /// API token with env var taking precedence over config file.
    pub fn api_token(&self) -> Option<String> {
        std::env::var("WSBOARD_API_TOKEN")
            .ok()
            .or_else(|| self.api_token.clone())
    }

    /// Projects to show, preferring explicit argument over configured default.
    pub fn resolve_projects_to_show(&self, explicit: Option<usize>) -> usize {
        explicit
            .or(self.projects_to_show)
            .unwrap_or(MIN_PROJECTS_TO_SHOW)
    }

    pub fn resolve_fill_order(&self, explicit: Option<FillOrder>) -> FillOrder {
        explicit.unwrap_or(self.fill_order)
    }
}

/// Parse a base URL, forcing a trailing slash so relative joins keep the
/// full path.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|_| BoardError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(BoardError::InvalidUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.api_url.is_none());
        assert_eq!(config.fill_order, FillOrder::ProjectsFirst);
        assert_eq!(config.resolve_projects_to_show(None), 3);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
api_url = "https://api.example.com/api/v2"
api_token = "secret"
projects_to_show = 8
fill_order = "invitations-first"
"#,
        )
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com/api/v2"));
        assert_eq!(config.projects_to_show, Some(8));
        assert_eq!(config.fill_order, FillOrder::InvitationsFirst);
    }

    #[test]
    fn test_parse_rejects_unknown_fill_order() {
        assert!(Config::parse(r#"fill_order = "random""#).is_err());
    }

    #[test]
    fn test_explicit_arguments_win() {
        let config = Config {
            projects_to_show: Some(8),
            fill_order: FillOrder::InvitationsFirst,
            ..Config::default()
        };
        assert_eq!(config.resolve_projects_to_show(Some(4)), 4);
        assert_eq!(config.resolve_projects_to_show(None), 8);
        assert_eq!(
            config.resolve_fill_order(Some(FillOrder::ProjectsFirst)),
            FillOrder::ProjectsFirst
        );
        assert_eq!(config.resolve_fill_order(None), FillOrder::InvitationsFirst);
    }

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://api.example.com/api/v2").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v2/");
        assert_eq!(
            url.join("workspaces/acme").unwrap().as_str(),
            "https://api.example.com/api/v2/workspaces/acme"
        );
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(BoardError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_base_url("mailto:someone@example.com"),
            Err(BoardError::InvalidUrl(_))
        ));
    }
}
