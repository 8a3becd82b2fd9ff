//! # Configuration
//!
//! Two layers:
//!
//! - **Session profile**: the server URL + API key pair, stored as JSON at
//!   `~/.config/jellyfin-tui/config`. Loaded on startup, rewritten on
//!   Configure-commit. If the file is missing or unreadable, a placeholder
//!   profile is substituted *and written back*, so the user always has a file
//!   to edit.
//! - **Runtime options**: where that file lives and which player to launch.
//!   Resolved CLI flag → env var → default.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Session Profile
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "https://jellyfin.example.com";
pub const DEFAULT_API_KEY: &str = "your_api_key_here";
pub const DEFAULT_PLAYER: &str = "mpv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub server_url: String,
    pub api_key: String,
}

impl Default for SessionProfile {
    /// The placeholder profile written on first run.
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// No home directory, so there is nowhere to keep the file.
    NoConfigDir,
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "config error: no configuration directory"),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading / Saving
// ============================================================================

/// Returns the path to `~/.config/jellyfin-tui/config`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("jellyfin-tui").join("config"))
}

/// Reads and parses the profile at `path`.
pub fn load_profile(path: &Path) -> Result<SessionProfile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let profile: SessionProfile = serde_json::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded session profile from {}", path.display());
    debug!("Server URL: {}", profile.server_url);
    Ok(profile)
}

/// Atomically writes the profile as pretty JSON, creating the parent directory.
pub fn save_profile(path: &Path, profile: &SessionProfile) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let json = serde_json::to_string_pretty(profile).map_err(ConfigError::Parse)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(ConfigError::Io)?;
    fs::rename(&tmp_path, path).map_err(ConfigError::Io)?;
    info!("Saved session profile to {}", path.display());
    Ok(())
}

/// Saves to `path`, or fails with `NoConfigDir` when there is no path.
pub fn save_profile_at(path: Option<&Path>, profile: &SessionProfile) -> Result<(), ConfigError> {
    match path {
        Some(path) => save_profile(path, profile),
        None => Err(ConfigError::NoConfigDir),
    }
}

/// Startup load with fallback.
///
/// Any failure (no path, missing file, unreadable or unparsable contents)
/// yields `SessionProfile::default()`, which is immediately persisted.
/// Never surfaces an error; a failed persist is only logged.
pub fn load_or_init(path: Option<&Path>) -> SessionProfile {
    let Some(path) = path else {
        warn!("Could not determine config path, using placeholder profile");
        return SessionProfile::default();
    };

    match load_profile(path) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(
                "Could not load session profile from {} ({}), writing placeholder",
                path.display(),
                e
            );
            let profile = SessionProfile::default();
            if let Err(e) = save_profile(path, &profile) {
                warn!("Failed to persist placeholder profile: {}", e);
            }
            profile
        }
    }
}

// ============================================================================
// Runtime Options
// ============================================================================

pub const CONFIG_PATH_ENV: &str = "JELLYFIN_TUI_CONFIG";
pub const PLAYER_ENV: &str = "JELLYFIN_TUI_PLAYER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` only when there is no home directory and nothing was given.
    pub config_path: Option<PathBuf>,
    pub player: String,
}

/// Resolve runtime options from CLI flags and the process environment.
pub fn resolve(cli_config: Option<PathBuf>, cli_player: Option<String>) -> ResolvedConfig {
    resolve_with(cli_config, cli_player, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
pub fn resolve_with(
    cli_config: Option<PathBuf>,
    cli_player: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let config_path = cli_config
        .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
        .or_else(default_config_path);

    let player = cli_player
        .or_else(|| env(PLAYER_ENV))
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

    ResolvedConfig {
        config_path,
        player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let profile = SessionProfile {
            server_url: "http://10.0.0.5:8096".to_string(),
            api_key: "abc".to_string(),
        };
        save_profile(&path, &profile).unwrap();
        assert_eq!(load_profile(&path).unwrap(), profile);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_format_uses_snake_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        save_profile(&path, &SessionProfile::default()).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["server_url"], DEFAULT_SERVER_URL);
        assert_eq!(raw["api_key"], DEFAULT_API_KEY);
    }

    #[test]
    fn test_empty_file_falls_back_and_persists_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "").unwrap();

        let profile = load_or_init(Some(&path));
        assert_eq!(
            profile,
            SessionProfile {
                server_url: "https://jellyfin.example.com".to_string(),
                api_key: "your_api_key_here".to_string(),
            }
        );
        assert_eq!(load_profile(&path).unwrap(), profile);
    }

    #[test]
    fn test_missing_file_falls_back_and_persists_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jellyfin-tui").join("config");
        let profile = load_or_init(Some(&path));
        assert_eq!(profile, SessionProfile::default());
        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_is_loaded_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, r#"{"server_url":"http://x","api_key":"k"}"#).unwrap();
        let profile = load_or_init(Some(&path));
        assert_eq!(profile.server_url, "http://x");
        assert_eq!(profile.api_key, "k");
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_profile(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_without_path_is_no_config_dir() {
        let result = save_profile_at(None, &SessionProfile::default());
        assert!(matches!(result, Err(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_resolve_cli_wins_over_env() {
        let env = |key: &str| match key {
            CONFIG_PATH_ENV => Some("/env/config".to_string()),
            PLAYER_ENV => Some("vlc".to_string()),
            _ => None,
        };
        let resolved = resolve_with(
            Some(PathBuf::from("/cli/config")),
            Some("celluloid".to_string()),
            env,
        );
        assert_eq!(resolved.config_path, Some(PathBuf::from("/cli/config")));
        assert_eq!(resolved.player, "celluloid");
    }

    #[test]
    fn test_resolve_env_wins_over_default() {
        let env = |key: &str| match key {
            PLAYER_ENV => Some("vlc".to_string()),
            _ => None,
        };
        let resolved = resolve_with(None, None, env);
        assert_eq!(resolved.player, "vlc");
        assert_eq!(resolved.config_path, default_config_path());
    }

    #[test]
    fn test_resolve_defaults_player_to_mpv() {
        let resolved = resolve_with(None, Some("  ".to_string()), no_env);
        assert_eq!(resolved.player, DEFAULT_PLAYER);
    }
}
