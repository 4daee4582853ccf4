use std::path::Path;

use docsmith_storage_traits::Backend;
use serde::{Deserialize, Serialize};

use super::AppCore;

pub(super) const CONFIG_FILE_NAME: &str = "docsmith_config.json";
const STORAGE_ENV: &str = "DOCSMITH_STORAGE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub(super) struct AppConfig {
    pub(super) storage_backend: Option<String>,
    // Re-saving a reopened document updates it instead of adding a copy.
    pub(super) update_on_resave: Option<bool>,
    pub(super) default_author: Option<String>,
    pub(super) import_legacy_documents: Option<bool>,
}

pub(super) fn load_app_config(data_dir: &str) -> AppConfig {
    let path = Path::new(data_dir).join(CONFIG_FILE_NAME);
    let Ok(bytes) = std::fs::read(&path) else {
        return AppConfig::default();
    };
    match serde_json::from_slice::<AppConfig>(&bytes) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(%e, path = %path.display(), "ignoring malformed config");
            AppConfig::default()
        }
    }
}

pub(crate) fn default_app_config_json() -> String {
    let defaults = AppConfig {
        storage_backend: Some("sqlite".to_string()),
        update_on_resave: Some(false),
        default_author: Some(String::new()),
        import_legacy_documents: Some(true),
    };
    serde_json::to_string_pretty(&defaults).unwrap_or_else(|_| "{}".to_string())
}

fn parse_backend(value: &str) -> Option<Backend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "sqlite" => Some(Backend::SQLite),
        "memory" => Some(Backend::Memory),
        _ => None,
    }
}

impl AppCore {
    pub(super) fn storage_backend(&self) -> Backend {
        // Env wins so tests can force an ephemeral store.
        if let Some(backend) = std::env::var(STORAGE_ENV)
            .ok()
            .as_deref()
            .and_then(parse_backend)
        {
            return backend;
        }
        self.config
            .storage_backend
            .as_deref()
            .and_then(parse_backend)
            .unwrap_or(Backend::SQLite)
    }

    pub(super) fn update_on_resave(&self) -> bool {
        self.config.update_on_resave.unwrap_or(false)
    }

    pub(super) fn default_author(&self) -> &str {
        self.config.default_author.as_deref().unwrap_or("")
    }

    pub(super) fn legacy_import_enabled(&self) -> bool {
        self.config.import_legacy_documents.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_malformed_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        assert!(load_app_config(data_dir).storage_backend.is_none());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), b"{not json").unwrap();
        assert!(load_app_config(data_dir).update_on_resave.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            br#"{"storage_backend":"memory","update_on_resave":true,"theme":"dark"}"#,
        )
        .unwrap();
        let config = load_app_config(dir.path().to_str().unwrap());
        assert_eq!(config.storage_backend.as_deref(), Some("memory"));
        assert_eq!(config.update_on_resave, Some(true));
    }

    #[test]
    fn default_payload_parses_back() {
        let json = default_app_config_json();
        let config: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.storage_backend.as_deref(), Some("sqlite"));
        assert_eq!(config.import_legacy_documents, Some(true));
    }

    #[test]
    fn backend_names_are_case_insensitive() {
        assert_eq!(parse_backend("SQLite"), Some(Backend::SQLite));
        assert_eq!(parse_backend(" memory "), Some(Backend::Memory));
        assert_eq!(parse_backend("postgres"), None);
    }
}
