//! Generator configuration.
//!
//! The configuration lives either in a dedicated `apisync.toml` (top-level
//! keys) or in the `[tool.api-sync]` table of a `pyproject.toml`. Only
//! `exclude_tags` is read by the translation engine; the remaining keys
//! describe how the schema is acquired and how code is emitted.

mod load;

use std::{fmt, path::PathBuf};

pub use load::{CONFIG_FILE, PYPROJECT_FILE, PYPROJECT_TABLE};
use serde::{Deserialize, Serialize};

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Frontend project root the emitter writes under.
    pub frontend_dir: PathBuf,
    /// Backend framework the schema is acquired from.
    pub framework: Framework,
    /// Application import path (e.g. `main:app`) for FastAPI introspection.
    pub app_module: Option<String>,
    /// Settings module for Django introspection.
    pub django_settings: Option<String>,
    /// URL of a running backend's OpenAPI document.
    pub openapi_url: Option<String>,
    /// Which data-fetching wrappers the emitter produces.
    pub hooks_mode: HooksMode,
    /// Tags (and description substrings) whose operations are left out.
    pub exclude_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frontend_dir: PathBuf::from("./frontend"),
            framework: Framework::default(),
            app_module: Some("main:app".into()),
            django_settings: None,
            openapi_url: Some("http://localhost:8000/openapi.json".into()),
            hooks_mode: HooksMode::default(),
            exclude_tags: vec!["@internal".into(), "@admin_only".into()],
        }
    }
}

impl Config {
    /// Check cross-field requirements, returning a message and the key at fault.
    ///
    /// Empty strings count as unset, which is the only way a TOML file can
    /// clear a defaulted key.
    pub(crate) fn check(&self) -> Option<(String, &'static str)> {
        match self.framework {
            Framework::Django if is_unset(&self.django_settings) => Some((
                "framework 'django' requires 'django_settings'".into(),
                "framework",
            )),
            Framework::FastApi if is_unset(&self.app_module) && is_unset(&self.openapi_url) => {
                Some((
                    "framework 'fastapi' requires 'app_module' or 'openapi_url'".into(),
                    "app_module",
                ))
            }
            _ => None,
        }
    }
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Backend framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    #[serde(rename = "fastapi")]
    FastApi,
    Django,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::FastApi => "fastapi",
            Framework::Django => "django",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data-fetching wrappers produced by the emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HooksMode {
    /// Plain React hooks.
    React,
    /// TanStack Query hooks.
    #[default]
    ReactQuery,
    /// Next.js server actions.
    NextjsActions,
    /// No wrappers, request functions only.
    None,
}

impl HooksMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HooksMode::React => "react",
            HooksMode::ReactQuery => "react_query",
            HooksMode::NextjsActions => "nextjs_actions",
            HooksMode::None => "none",
        }
    }
}

impl fmt::Display for HooksMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.framework, Framework::FastApi);
        assert_eq!(config.hooks_mode, HooksMode::ReactQuery);
        assert_eq!(config.exclude_tags, ["@internal", "@admin_only"]);
        assert_eq!(config.frontend_dir, PathBuf::from("./frontend"));
        assert!(config.check().is_none());
    }

    #[test]
    fn test_enum_keywords() {
        let mode: HooksMode = toml::Value::String("nextjs_actions".into())
            .try_into()
            .unwrap();
        assert_eq!(mode, HooksMode::NextjsActions);
        assert_eq!(HooksMode::None.to_string(), "none");

        let framework: Framework = toml::Value::String("fastapi".into()).try_into().unwrap();
        assert_eq!(framework, Framework::FastApi);
        assert_eq!(Framework::Django.to_string(), "django");
    }

    #[test]
    fn test_django_requires_settings() {
        let config = Config {
            framework: Framework::Django,
            ..Config::default()
        };
        let (message, key) = config.check().unwrap();
        assert!(message.contains("django_settings"));
        assert_eq!(key, "framework");
    }

    #[test]
    fn test_fastapi_requires_a_source() {
        let config = Config {
            app_module: Some(String::new()),
            openapi_url: None,
            ..Config::default()
        };
        let (message, key) = config.check().unwrap();
        assert!(message.contains("'app_module' or 'openapi_url'"));
        assert_eq!(key, "app_module");

        let config = Config {
            app_module: None,
            ..Config::default()
        };
        assert!(config.check().is_none());
    }
}
