use crate::error::BoardError;
use crossterm::event::KeyCode;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub loading_ms: u64,
    pub loading_fade_ms: u64,
    pub notification_ms: u64,
    pub notification_fade_ms: u64,
    /// Delay between the BIOS save key and the switch back to the board
    pub bios_exit_delay_ms: u64,
    /// BIOS save-and-exit key, e.g. "F10" or "x"
    pub exit_key: String,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            loading_ms: 1000,
            loading_fade_ms: 500,
            notification_ms: 2000,
            notification_fade_ms: 300,
            bios_exit_delay_ms: 1500,
            exit_key: "F10".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".build-a-board"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from the user's config directory.
    ///
    /// A missing file yields the defaults; a present but broken file is an error.
    pub fn load() -> Result<Config, BoardError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, BoardError> {
        let contents = fs::read_to_string(path).map_err(|e| BoardError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| BoardError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        // Fail at startup rather than on the first BIOS key press
        config.exit_key_code()?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn exit_key_code(&self) -> Result<KeyCode, BoardError> {
        parse_key(&self.exit_key)
    }
}

/// Parse a key name such as "F10", "esc" or "x" into a key code
pub fn parse_key(name: &str) -> Result<KeyCode, BoardError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    let lower = trimmed.to_ascii_lowercase();
    match lower.as_str() {
        "esc" | "escape" => return Ok(KeyCode::Esc),
        "enter" | "return" => return Ok(KeyCode::Enter),
        "delete" | "del" => return Ok(KeyCode::Delete),
        _ => {}
    }

    lower
        .strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=12).contains(n))
        .map(KeyCode::F)
        .ok_or_else(|| BoardError::InvalidKey(name.to_string()))
}

/// Human-readable name of a key code for legends and help text
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Delete => "Del".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timings() {
        let config = Config::default();
        assert_eq!(config.bios_exit_delay_ms, 1500);
        assert_eq!(config.notification_ms, 2000);
        assert_eq!(config.notification_fade_ms, 300);
        assert_eq!(config.loading_ms, 1000);
        assert_eq!(config.loading_fade_ms, 500);
        assert_eq!(config.exit_key_code(), Ok(KeyCode::F(10)));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "exit_key": "F9" }"#).unwrap();
        assert_eq!(config.exit_key_code(), Ok(KeyCode::F(9)));
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("f12"), Ok(KeyCode::F(12)));
        assert_eq!(parse_key("X"), Ok(KeyCode::Char('x')));
        assert_eq!(parse_key("Escape"), Ok(KeyCode::Esc));
        assert_eq!(parse_key("F13"), Err(BoardError::InvalidKey("F13".to_string())));
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_key_label() {
        assert_eq!(key_label(KeyCode::F(10)), "F10");
        assert_eq!(key_label(KeyCode::Char('x')), "X");
    }

    #[test]
    fn test_load_from_rejects_bad_exit_key() {
        let name = format!("build-a-board-config-{}.json", std::process::id());
        let path = env::temp_dir().join(name);
        fs::write(&path, r#"{ "exit_key": "banana" }"#).unwrap();
        let result = Config::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(result, Err(BoardError::InvalidKey("banana".to_string())));
    }
}
