use crate::controller::{AttemptOutcome, ProgressionController};
use crate::data::read_catalog_embedded;
use crate::error::GameResult;
use crate::model::{AppState, GameVariant, LevelDefinition};
use eframe::egui;
use std::collections::HashMap;

// Submodules
pub mod actions;
pub mod navigation;
pub mod resets;
pub mod view_models;

pub use crate::view_models::LevelInfo;

/// How long a toast stays on screen, in seconds.
pub const TOAST_SECS: f64 = 4.0;

/// Front-end state. Owns one progression controller per game variant; the
/// views only ever go through the controller of the selected variant.
pub struct TrainingApp {
    pub controllers: HashMap<GameVariant, ProgressionController>,
    pub selected_variant: Option<GameVariant>,
    pub state: AppState,
    pub message: String,
    pub message_until: f64,
    pub last_outcome: Option<AttemptOutcome>,
    pub confirm_reset: bool,
    /// Frame clock (seconds) of the latest update.
    pub clock: f64,
}

impl TrainingApp {
    pub fn new() -> GameResult<Self> {
        let mut controllers = HashMap::new();
        for variant in GameVariant::ALL {
            controllers.insert(variant, new_controller(variant)?);
        }
        log::info!("loaded {} game variants", controllers.len());

        Ok(Self {
            controllers,
            selected_variant: None,
            state: AppState::VariantSelect,
            message: String::new(),
            message_until: 0.0,
            last_outcome: None,
            confirm_reset: false,
            clock: 0.0,
        })
    }

    pub fn controller(&self) -> Option<&ProgressionController> {
        self.selected_variant.and_then(|v| self.controllers.get(&v))
    }

    pub fn controller_mut(&mut self) -> Option<&mut ProgressionController> {
        self.selected_variant
            .and_then(|v| self.controllers.get_mut(&v))
    }

    /// Definition of the level being played right now.
    pub fn current_level(&self) -> Option<&LevelDefinition> {
        let ctl = self.controller()?;
        let id = ctl.state().current_level()?;
        ctl.catalog().get_level(id).ok()
    }

    /// Shows a transient notification.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.message = text.into();
        self.message_until = self.clock + TOAST_SECS;
    }

    pub fn active_message(&self) -> Option<&str> {
        (!self.message.is_empty() && self.clock < self.message_until).then_some(self.message.as_str())
    }

    pub fn sync_clock(&mut self, ctx: &egui::Context) {
        self.clock = ctx.input(|i| i.time);
    }
}

pub(crate) fn new_controller(variant: GameVariant) -> GameResult<ProgressionController> {
    Ok(ProgressionController::new(variant, read_catalog_embedded(variant)?))
}
