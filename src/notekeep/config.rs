use crate::error::{NoteError, Result};
use crate::model::{validate_time_format, DEFAULT_TIME_FORMAT};
use crate::search::SearchField;
use crate::store::note_store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for notekeep, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotekeepConfig {
    /// Key of the storage slot holding the note collection
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// strftime pattern for the time-of-day stamp (e.g. "%I:%M %p", "%H:%M")
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Fields searched when no field is given explicitly
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<SearchField>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_search_fields() -> Vec<SearchField> {
    vec![SearchField::Title, SearchField::Content]
}

impl Default for NotekeepConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            time_format: default_time_format(),
            search_fields: default_search_fields(),
        }
    }
}

impl NotekeepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotekeepConfig = serde_json::from_str(&content)
            .map_err(|e| NoteError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate().map_err(|e| match e {
            NoteError::Config(reason) => {
                NoteError::Config(format!("{}: {}", config_path.display(), reason))
            }
            other => other,
        })?;
        Ok(config)
    }

    /// Run the setter checks over values that were read from disk.
    pub fn validate(&self) -> Result<()> {
        let mut checked = Self::default();
        checked.set_storage_key(&self.storage_key)?;
        checked.set_time_format(&self.time_format)?;
        if self.search_fields.is_empty() {
            return Err(NoteError::Config("At least one search field is required".into()));
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| NoteError::Config(e.to_string()))?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Set a value by its user-facing key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => self.set_storage_key(value),
            "time-format" => self.set_time_format(value),
            "search-fields" => self.set_search_fields(value),
            other => Err(NoteError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Get a value by its user-facing key name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "time-format" => Ok(self.time_format.clone()),
            "search-fields" => Ok(self
                .search_fields
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(",")),
            other => Err(NoteError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["storage-key", "time-format", "search-fields"]
    }

    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(NoteError::Config(format!("Invalid storage key: {:?}", key)));
        }
        self.storage_key = key.to_string();
        Ok(())
    }

    pub fn set_time_format(&mut self, format: &str) -> Result<()> {
        validate_time_format(format)?;
        self.time_format = format.to_string();
        Ok(())
    }

    /// Comma separated list, e.g. "title,content".
    pub fn set_search_fields(&mut self, value: &str) -> Result<()> {
        let fields = value
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<SearchField>())
            .collect::<Result<Vec<_>>>()?;
        if fields.is_empty() {
            return Err(NoteError::Config("At least one search field is required".into()));
        }
        self.search_fields = fields;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotekeepConfig::default();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.time_format, "%I:%M %p");
        assert_eq!(
            config.search_fields,
            vec![SearchField::Title, SearchField::Content]
        );
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotekeepConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = NotekeepConfig::default();
        config.set("time-format", "%H:%M").unwrap();
        config.set("search-fields", "title").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.time_format, "%H:%M");
        assert_eq!(loaded.search_fields, vec![SearchField::Title]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage_key":"journal"}"#).unwrap();
        let config = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_key, "journal");
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            NotekeepConfig::load(dir.path()),
            Err(NoteError::Config(_))
        ));
    }

    #[test]
    fn test_unrenderable_time_format_in_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"time_format":"%Q"}"#).unwrap();
        assert!(matches!(
            NotekeepConfig::load(dir.path()),
            Err(NoteError::Config(_))
        ));
    }

    #[test]
    fn test_bad_storage_key_in_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage_key":"../x"}"#).unwrap();
        assert!(matches!(
            NotekeepConfig::load(dir.path()),
            Err(NoteError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = NotekeepConfig::default();
        assert!(config.set("storage-key", "../etc").is_err());
        assert!(config.set("time-format", "%Q").is_err());
        assert!(config.set("search-fields", "tags").is_err());
        assert!(config.set("search-fields", " , ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, NotekeepConfig::default());
    }

    #[test]
    fn test_get_by_key() {
        let config = NotekeepConfig::default();
        assert_eq!(config.get("search-fields").unwrap(), "title,content");
        assert_eq!(config.get("storage-key").unwrap(), "notes");
    }
}
