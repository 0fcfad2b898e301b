use super::*;
use crate::error::GameError;
use crate::model::{Label, LevelPayload};
use crate::scoring::{DefenseAction, Submission};

impl TrainingApp {
    /// Hands the draft of the running level to the controller.
    pub fn submit_current(&mut self) {
        let Some(ctl) = self.controller_mut() else {
            return;
        };
        match ctl.submit_draft() {
            Ok(Some(outcome)) => {
                self.message = if outcome.result.passed {
                    "✅ Level passed!".into()
                } else {
                    "❌ Not quite. Try again.".into()
                };
                self.last_outcome = Some(outcome);
                self.state = AppState::Completion;
            }
            Ok(None) => {
                self.state = AppState::LevelMenu;
            }
            Err(GameError::IncompleteSubmission { missing, .. }) => {
                self.notify(format!(
                    "⚠ Answer every item before submitting ({} left).",
                    missing.len()
                ));
            }
            Err(e) => {
                log::error!("submission failed: {e}");
                self.notify(format!("⚠ {e}"));
            }
        }
    }

    pub fn classify(&mut self, item: usize, label: Label) {
        if let Some(Submission::Classification(answers)) =
            self.controller_mut().and_then(|c| c.draft_mut())
        {
            answers.insert(item, label);
        }
    }

    pub fn set_threshold(&mut self, value: u32) {
        if let Some(Submission::Threshold(v)) = self.controller_mut().and_then(|c| c.draft_mut()) {
            *v = value;
        }
    }

    /// Flags an item in a simulation level at the current attack tick.
    /// Nothing happens once the attack has landed.
    pub fn flag_item(&mut self, item: usize) {
        let Some(tick) = self.attack_tick() else {
            return;
        };
        if self.attack_landed() {
            return;
        }
        if let Some(Submission::Simulation(actions)) =
            self.controller_mut().and_then(|c| c.draft_mut())
        {
            if !actions.iter().any(|a| a.item == item) {
                actions.push(DefenseAction { item, tick });
            }
        }
    }

    pub fn attack_tick(&self) -> Option<u32> {
        self.controller()?.session_ticks(self.clock)
    }

    /// Attack progress of the running simulation, 0.0..=1.0.
    pub fn attack_progress(&self) -> Option<f32> {
        let LevelPayload::Simulation(p) = &self.current_level()?.payload else {
            return None;
        };
        let tick = self.attack_tick()?;
        Some((tick as f32 / p.breach_ticks as f32).min(1.0))
    }

    pub fn attack_landed(&self) -> bool {
        self.attack_progress().is_some_and(|p| p >= 1.0)
    }

    /// Per-frame bookkeeping: drives the level countdown.
    pub fn on_frame(&mut self) {
        let now = self.clock;
        let expired = self.controller_mut().and_then(|c| c.tick(now));
        if let Some(expired) = expired {
            self.last_outcome = None;
            self.state = AppState::LevelMenu;
            self.notify(format!("⏰ Time is up on level {}.", expired.level));
        }
    }
}
