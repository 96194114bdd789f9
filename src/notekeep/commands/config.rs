use crate::commands::{CmdMessage, CmdResult, NotekeepPaths};
use crate::config::NotekeepConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &NotekeepPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = NotekeepConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = NotekeepConfig::load(dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = NotekeepConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> NotekeepPaths {
        NotekeepPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("time-format".into(), "%H:%M".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "time-format set to %H:%M");
        assert_eq!(NotekeepConfig::load(dir.path()).unwrap().time_format, "%H:%M");
    }

    #[test]
    fn invalid_value_fails_and_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let err = run(
            &paths(&dir),
            ConfigAction::Set("search-fields".into(), "tags".into()),
        )
        .unwrap_err();
        assert!(matches!(err, NoteError::Config(_)));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            run(&paths(&dir), ConfigAction::ShowKey("colour".into())),
            Err(NoteError::Config(_))
        ));
        assert!(matches!(
            run(&paths(&dir), ConfigAction::Set("colour".into(), "red".into())),
            Err(NoteError::Config(_))
        ));
    }

    #[test]
    fn show_key_reads_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("storage-key".into())).unwrap();
        assert_eq!(result.messages[0].content, "notes");
    }
}
