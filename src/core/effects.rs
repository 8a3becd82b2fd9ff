//! Carries out the `Effect` returned by `update()`.
//!
//! Outcomes of synchronous effects (player spawn failure, profile save) are
//! fed back through `update()` as actions, so state is only ever written by
//! the reducer.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use log::info;

use crate::catalog::CatalogSource;
use crate::core::action::{Action, Effect, update};
use crate::core::config;
use crate::core::fetch::spawn_fetch;
use crate::core::player::{Player, play_record};
use crate::core::state::App;

pub struct EffectRunner {
    catalog: Arc<dyn CatalogSource>,
    player: Box<dyn Player>,
    config_path: Option<PathBuf>,
    tx: Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        player: Box<dyn Player>,
        config_path: Option<PathBuf>,
        tx: Sender<Action>,
    ) -> Self {
        Self {
            catalog,
            player,
            config_path,
            tx,
        }
    }

    /// Runs `effect`. Returns `true` when the loop should exit.
    pub fn run(&self, app: &mut App, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::Fetch(request) => {
                spawn_fetch(self.catalog.clone(), request, self.tx.clone());
                false
            }
            Effect::Play(record) => match play_record(self.player.as_ref(), &record) {
                Ok(()) => false,
                Err(e) => {
                    let follow_up = update(app, Action::PlaybackFailed(e));
                    self.run(app, follow_up)
                }
            },
            Effect::PersistProfile(profile) => {
                match config::save_profile_at(self.config_path.as_deref(), &profile) {
                    Ok(()) => {
                        info!("Profile persisted");
                        let follow_up = update(app, Action::ProfileSaved(profile));
                        self.run(app, follow_up)
                    }
                    Err(e) => {
                        let follow_up = update(app, Action::ProfileSaveFailed(e));
                        self.run(app, follow_up)
                    }
                }
            }
        }
    }
}
