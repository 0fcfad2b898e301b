// src/view_models.rs

use crate::controller::LevelStatus;
use crate::model::{LevelId, LevelKind};

/// One card of the level-select screen.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelInfo {
    pub id: LevelId,
    pub title: String,
    pub kind: LevelKind,
    pub status: LevelStatus,
    pub best_score: Option<u8>,
    pub passing_score: u8,
}

impl LevelInfo {
    pub fn unlocked(&self) -> bool {
        self.status != LevelStatus::Locked
    }

    pub fn completed(&self) -> bool {
        self.status == LevelStatus::Completed
    }

    pub fn label(&self) -> String {
        match (self.status, self.best_score) {
            (LevelStatus::Locked, _) => format!("Level {} 🔒", self.id),
            (LevelStatus::Completed, Some(best)) => {
                format!("Level {}: {} ✅ (best {best}%)", self.id, self.title)
            }
            (_, Some(best)) => format!(
                "Level {}: {} 🔓 (best {best}%, need {}%)",
                self.id, self.title, self.passing_score
            ),
            _ => format!("Level {}: {} 🔓", self.id, self.title),
        }
    }
}
