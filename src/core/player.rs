//! # Playback
//!
//! Fire-and-forget handoff to an external player. The locator is passed as
//! the only argument; exit status and output are ignored. Only a failure to
//! start the process is reported.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, info, warn};

use crate::catalog::CatalogRecord;

#[derive(Debug)]
pub enum PlayerError {
    /// The process could not be spawned (not installed, not executable, ...).
    Spawn { program: String, source: io::Error },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Spawn { program, source } => {
                write!(f, "failed to start {program}: {source}")
            }
        }
    }
}

impl std::error::Error for PlayerError {}

pub trait Player: Send + Sync {
    /// Starts playback of `locator` without waiting for it to finish.
    fn play(&self, locator: &str) -> Result<(), PlayerError>;
}

/// Launches a player binary (default `mpv`) found on `PATH`.
pub struct ExternalPlayer {
    program: String,
}

impl ExternalPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Player for ExternalPlayer {
    fn play(&self, locator: &str) -> Result<(), PlayerError> {
        // Detach stdio so the player cannot draw over the TUI.
        let mut child = Command::new(&self.program)
            .arg(locator)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlayerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        info!("Started {} (pid {})", self.program, child.id());

        // Reap in the background; the exit status is not acted on.
        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) => debug!("{} exited: {}", program, status),
            Err(e) => warn!("Failed to wait for {}: {}", program, e),
        });

        Ok(())
    }
}

/// Plays a record through `player`. Records without a locator are skipped.
pub fn play_record(player: &dyn Player, record: &CatalogRecord) -> Result<(), PlayerError> {
    if !record.is_playable() {
        debug!("Record {} has no stream locator, not playing", record.id);
        return Ok(());
    }
    info!("Playing {} ({})", record.title, record.id);
    player.play(&record.stream_locator)
}
