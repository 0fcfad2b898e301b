//! Scoring of raw submissions, one strategy per level kind.
//!
//! The controller never looks inside a payload: it asks the
//! [`ScorerRegistry`] for the scorer registered under the level's kind and
//! hands it the submission.

pub mod classification;
pub mod simulation;
pub mod threshold;

use crate::error::{GameError, GameResult};
use crate::model::{Label, LevelDefinition, LevelKind, LevelPayload};
use std::collections::{BTreeMap, HashMap};

pub use classification::ClassificationScorer;
pub use simulation::SimulationScorer;
pub use threshold::ThresholdScorer;

/// One defensive move in a simulation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefenseAction {
    pub item: usize,
    /// Attack tick at which the player acted.
    pub tick: u32,
}

/// What the player hands in, shaped after the level kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// item index -> chosen label
    Classification(BTreeMap<usize, Label>),
    Threshold(u32),
    /// Actions in the order they were taken.
    Simulation(Vec<DefenseAction>),
}

impl Submission {
    /// Empty draft a fresh session starts from.
    pub fn blank_for(level: &LevelDefinition) -> Self {
        match &level.payload {
            LevelPayload::Classification(_) => Submission::Classification(BTreeMap::new()),
            LevelPayload::ThresholdDemo(p) => Submission::Threshold(p.start),
            LevelPayload::Simulation(_) => Submission::Simulation(Vec::new()),
        }
    }

    pub fn kind(&self) -> LevelKind {
        match self {
            Submission::Classification(_) => LevelKind::Classification,
            Submission::Threshold(_) => LevelKind::ThresholdDemo,
            Submission::Simulation(_) => LevelKind::Simulation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemFeedback {
    pub text: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCard {
    /// Always within 0..=100.
    pub score: u8,
    /// The player dealt with every item the level asked about.
    pub complete: bool,
    pub feedback: Vec<ItemFeedback>,
}

pub trait Scorer {
    fn kind(&self) -> LevelKind;

    fn score(&self, level: &LevelDefinition, submission: &Submission) -> GameResult<ScoreCard>;
}

/// Clamps any raw point total into the 0..=100 score range.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Lookup table from level kind to its scoring strategy.
pub struct ScorerRegistry {
    scorers: HashMap<LevelKind, Box<dyn Scorer>>,
}

impl ScorerRegistry {
    pub fn empty() -> Self {
        Self {
            scorers: HashMap::new(),
        }
    }

    pub fn register(&mut self, scorer: Box<dyn Scorer>) {
        self.scorers.insert(scorer.kind(), scorer);
    }

    pub fn score(&self, level: &LevelDefinition, submission: &Submission) -> GameResult<ScoreCard> {
        let kind = level.kind();
        if submission.kind() != kind {
            return Err(GameError::SubmissionMismatch {
                level: level.id,
                expected: kind,
            });
        }
        let scorer = self.scorers.get(&kind).ok_or_else(|| {
            GameError::Catalog(format!("no scorer registered for {kind} levels"))
        })?;
        scorer.score(level, submission)
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ClassificationScorer));
        registry.register(Box::new(ThresholdScorer));
        registry.register(Box::new(SimulationScorer));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ThresholdPayload, DEFAULT_GUESSES_PER_SEC};

    fn length_level() -> LevelDefinition {
        LevelDefinition {
            id: 4,
            title: "Length matters".into(),
            briefing: String::new(),
            passing_score: 100,
            time_limit_secs: 0,
            payload: LevelPayload::ThresholdDemo(ThresholdPayload {
                parameter: "Length".into(),
                min: 4,
                max: 24,
                start: 6,
                target: 12,
                partial_score: 40,
                charset_size: 62,
                guesses_per_sec: DEFAULT_GUESSES_PER_SEC,
            }),
        }
    }

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-35), 0);
        assert_eq!(clamp_score(55), 55);
        assert_eq!(clamp_score(130), 100);
    }

    #[test]
    fn mismatched_submission_shape_is_rejected() {
        let registry = ScorerRegistry::default();
        let err = registry
            .score(&length_level(), &Submission::Simulation(vec![]))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::SubmissionMismatch {
                level: 4,
                expected: LevelKind::ThresholdDemo
            }
        );
    }

    #[test]
    fn missing_scorer_is_a_catalog_error() {
        let registry = ScorerRegistry::empty();
        let err = registry
            .score(&length_level(), &Submission::Threshold(12))
            .unwrap_err();
        assert!(matches!(err, GameError::Catalog(_)));
    }

    #[test]
    fn blank_threshold_draft_starts_at_slider_start() {
        assert_eq!(Submission::blank_for(&length_level()), Submission::Threshold(6));
    }
}
