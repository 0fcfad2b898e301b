use crate::model::LevelId;
use crate::scoring::Submission;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Progress of one player through one catalog, for one app session.
///
/// Only [`ProgressionController`](crate::controller::ProgressionController)
/// mutates it; everybody else reads snapshots.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProgressState {
    pub(crate) unlocked: BTreeSet<LevelId>,
    pub(crate) completed: BTreeSet<LevelId>,
    pub(crate) best_scores: BTreeMap<LevelId, u8>,
    pub(crate) current_level: Option<LevelId>,
    /// In-progress answers of the current level. Never serialized.
    #[serde(skip)]
    pub(crate) submission: Option<Submission>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            unlocked: BTreeSet::from([1]), // first level is always open
            completed: BTreeSet::new(),
            best_scores: BTreeMap::new(),
            current_level: None,
            submission: None,
        }
    }
}

impl ProgressState {
    pub fn is_unlocked(&self, id: LevelId) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn is_completed(&self, id: LevelId) -> bool {
        self.completed.contains(&id)
    }

    pub fn best_score(&self, id: LevelId) -> Option<u8> {
        self.best_scores.get(&id).copied()
    }

    pub fn unlocked(&self) -> &BTreeSet<LevelId> {
        &self.unlocked
    }

    pub fn completed(&self) -> &BTreeSet<LevelId> {
        &self.completed
    }

    pub fn best_scores(&self) -> &BTreeMap<LevelId, u8> {
        &self.best_scores
    }

    pub fn current_level(&self) -> Option<LevelId> {
        self.current_level
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Checks the structural invariants: level 1 open, completed levels are
    /// unlocked, and every unlocked level past 1 follows a completed one.
    pub fn is_consistent(&self) -> bool {
        self.unlocked.contains(&1)
            && self.completed.is_subset(&self.unlocked)
            && self
                .unlocked
                .iter()
                .all(|&id| id == 1 || self.completed.contains(&(id - 1)))
            && self.best_scores.values().all(|&s| s <= 100)
    }

    pub(crate) fn clear_session(&mut self) {
        self.current_level = None;
        self.submission = None;
    }
}
