use super::*;
use crate::model::LevelId;

impl TrainingApp {
    pub fn select_variant(&mut self, variant: GameVariant) {
        self.selected_variant = Some(variant);
        self.open_level_menu();
        log::debug!("variant selected: {}", variant.title());
    }

    pub fn back_to_variants(&mut self) {
        self.leave_level();
        self.selected_variant = None;
        self.state = AppState::VariantSelect;
        self.message.clear();
    }

    pub fn open_level_menu(&mut self) {
        self.last_outcome = None;
        self.state = AppState::LevelMenu;
    }

    /// Starts (or restarts) a level. Locked levels only produce a toast.
    pub fn enter_level(&mut self, id: LevelId) {
        let now = self.clock;
        let Some(ctl) = self.controller_mut() else {
            self.state = AppState::VariantSelect;
            return;
        };
        match ctl.start_level(id, now) {
            Ok(_) => {
                self.last_outcome = None;
                self.message.clear();
                self.state = AppState::Play;
            }
            Err(e) => {
                self.notify(format!("⚠ {e}"));
                self.state = AppState::LevelMenu;
            }
        }
    }

    /// Navigating away from a level in play throws the draft away.
    pub fn leave_level(&mut self) {
        if let Some(ctl) = self.controller_mut() {
            ctl.abandon_level();
        }
        if self.state == AppState::Play {
            self.state = AppState::LevelMenu;
        }
    }

    pub fn retry_level(&mut self) {
        if let Some(id) = self.last_outcome.as_ref().map(|o| o.result.level) {
            self.enter_level(id);
        }
    }

    /// Level offered by the completion dialog's "next" button.
    pub fn next_level_after_outcome(&self) -> Option<LevelId> {
        let outcome = self.last_outcome.as_ref()?;
        if !outcome.result.passed {
            return None;
        }
        let next = outcome.result.level + 1;
        let ctl = self.controller()?;
        ctl.state().is_unlocked(next).then_some(next)
    }

    pub fn continue_to_next_level(&mut self) {
        match self.next_level_after_outcome() {
            Some(next) => self.enter_level(next),
            None => self.open_level_menu(),
        }
    }
}
