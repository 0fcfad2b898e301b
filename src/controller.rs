//! The progression state machine.
//!
//! Per level: `Locked -> Available -> InProgress -> (passed | failed) -> Available`.
//! Passing is sticky: a level stays completed whatever later replays score,
//! and its best score only ever goes up.

use crate::catalog::LevelCatalog;
use crate::error::{GameError, GameResult};
use crate::model::{GameVariant, LevelDefinition, LevelId, LevelKind};
use crate::progress::ProgressState;
use crate::scoring::{ScoreCard, ScorerRegistry, Submission};
use crate::timer::{Countdown, Expired, SessionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressionResult {
    pub level: LevelId,
    pub passed: bool,
    pub score: u8,
    pub unlocked_next: Option<LevelId>,
}

/// Result of scoring a raw submission and applying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub result: ProgressionResult,
    pub card: ScoreCard,
}

/// Handle returned by [`ProgressionController::start_level`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelSession {
    pub session: SessionId,
    pub level: LevelId,
    pub kind: LevelKind,
    pub time_limit_secs: u32,
}

/// What a level-select card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

pub struct ProgressionController {
    variant: GameVariant,
    catalog: LevelCatalog,
    scorers: ScorerRegistry,
    state: ProgressState,
    timer: Option<Countdown>,
    next_session: u64,
}

impl ProgressionController {
    pub fn new(variant: GameVariant, catalog: LevelCatalog) -> Self {
        Self::with_scorers(variant, catalog, ScorerRegistry::default())
    }

    pub fn with_scorers(variant: GameVariant, catalog: LevelCatalog, scorers: ScorerRegistry) -> Self {
        Self {
            variant,
            catalog,
            scorers,
            state: ProgressState::default(),
            timer: None,
            next_session: 1,
        }
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Copy of the current progress for the presentation layer.
    pub fn snapshot(&self) -> ProgressState {
        self.state.clone()
    }

    fn unlocked_level(&self, id: LevelId) -> GameResult<&LevelDefinition> {
        let level = self.catalog.get_level(id)?;
        if !self.state.is_unlocked(id) {
            log::warn!("{:?}: level {id} is locked", self.variant);
            return Err(GameError::Locked(id));
        }
        Ok(level)
    }

    /// Enters a level. Any previous session, its draft and its countdown are
    /// discarded; the new countdown replaces the old one.
    pub fn start_level(&mut self, id: LevelId, now: f64) -> GameResult<LevelSession> {
        let level = self.unlocked_level(id)?;
        let blank = Submission::blank_for(level);
        let kind = level.kind();
        let time_limit_secs = level.time_limit_secs;

        let session = SessionId(self.next_session);
        self.next_session += 1;

        self.state.current_level = Some(id);
        self.state.submission = Some(blank);
        self.timer = Some(Countdown::start(session, id, now, time_limit_secs));

        log::info!("{:?}: started level {id} ({kind}), session {}", self.variant, session.0);
        Ok(LevelSession {
            session,
            level: id,
            kind,
            time_limit_secs,
        })
    }

    /// Records a score for an unlocked level and unlocks the next one on a pass.
    /// Ends the session if `id` is the level in progress.
    pub fn submit_attempt(&mut self, id: LevelId, score: u8) -> GameResult<ProgressionResult> {
        let passing_score = self.unlocked_level(id)?.passing_score;
        let score = score.min(100);

        let best = self.state.best_scores.entry(id).or_insert(0);
        *best = (*best).max(score);

        let passed = score >= passing_score;
        let mut unlocked_next = None;
        if passed {
            self.state.completed.insert(id);
            let next = id + 1;
            if next <= self.catalog.count() && self.state.unlocked.insert(next) {
                unlocked_next = Some(next);
                log::info!("{:?}: level {next} unlocked", self.variant);
            }
        }

        log::info!(
            "{:?}: level {id} scored {score}/{passing_score} -> {}",
            self.variant,
            if passed { "passed" } else { "failed" }
        );
        if self.state.current_level == Some(id) {
            self.end_session();
        }
        Ok(ProgressionResult {
            level: id,
            passed,
            score,
            unlocked_next,
        })
    }

    /// Scores a raw submission and applies it through [`Self::submit_attempt`].
    /// An incomplete submission leaves everything untouched so the player can
    /// finish it.
    pub fn submit(&mut self, id: LevelId, submission: &Submission) -> GameResult<AttemptOutcome> {
        let level = self.unlocked_level(id)?;
        let card = self.scorers.score(level, submission).inspect_err(|e| {
            log::debug!("{:?}: submission for level {id} rejected: {e}", self.variant);
        })?;
        let result = self.submit_attempt(id, card.score)?;
        Ok(AttemptOutcome { result, card })
    }

    /// Submits the draft of the running session.
    pub fn submit_draft(&mut self) -> GameResult<Option<AttemptOutcome>> {
        let (Some(id), Some(draft)) = (self.state.current_level, self.state.submission.clone())
        else {
            return Ok(None);
        };
        self.submit(id, &draft).map(Some)
    }

    /// Player walked away from the level. Committed progress is kept.
    pub fn abandon_level(&mut self) {
        if let Some(id) = self.state.current_level {
            log::debug!("{:?}: level {id} abandoned", self.variant);
        }
        self.end_session();
    }

    fn end_session(&mut self) {
        self.state.clear_session();
        self.timer = None;
    }

    pub fn draft(&self) -> Option<&Submission> {
        self.state.submission.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Submission> {
        self.state.submission.as_mut()
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.timer.as_ref().map(Countdown::session)
    }

    /// Advances the session clock. Returns the expiry once when the running
    /// level runs out of time; the session is then over.
    pub fn tick(&mut self, now: f64) -> Option<Expired> {
        let expired = self.timer.as_mut()?.poll(now)?;
        self.expire(expired)
    }

    /// Applies an expiry. Ignored unless it belongs to the live session.
    pub fn expire(&mut self, expired: Expired) -> Option<Expired> {
        if self.active_session() != Some(expired.session) {
            log::debug!("{:?}: stale timer for session {} ignored", self.variant, expired.session.0);
            return None;
        }
        log::warn!("{:?}: time is up on level {}", self.variant, expired.level);
        self.end_session();
        Some(expired)
    }

    pub fn time_remaining(&self, now: f64) -> Option<f64> {
        self.timer.as_ref()?.remaining(now)
    }

    pub fn session_ticks(&self, now: f64) -> Option<u32> {
        self.timer.as_ref().map(|t| t.ticks(now))
    }

    pub fn level_status(&self, id: LevelId) -> LevelStatus {
        if self.state.current_level == Some(id) {
            LevelStatus::InProgress
        } else if self.state.is_completed(id) {
            LevelStatus::Completed
        } else if self.state.is_unlocked(id) {
            LevelStatus::Available
        } else {
            LevelStatus::Locked
        }
    }

    /// First unlocked level not yet passed, if any.
    pub fn next_playable(&self) -> Option<LevelId> {
        self.state
            .unlocked
            .iter()
            .copied()
            .find(|id| !self.state.is_completed(*id))
    }

    pub fn all_completed(&self) -> bool {
        self.state.completed.len() as u32 == self.catalog.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClassificationItem, ClassificationPayload, Label, LabelPair, LevelPayload,
    };
    use std::collections::BTreeMap;

    fn catalog(pass_marks: &[u8]) -> LevelCatalog {
        let levels = pass_marks
            .iter()
            .enumerate()
            .map(|(i, &passing_score)| LevelDefinition {
                id: i as LevelId + 1,
                title: format!("Level {}", i + 1),
                briefing: String::new(),
                passing_score,
                time_limit_secs: 30,
                payload: LevelPayload::Classification(ClassificationPayload {
                    labels: LabelPair::WeakStrong,
                    items: vec![
                        ClassificationItem {
                            text: "123456".into(),
                            answer: Label::Weak,
                            explanation: String::new(),
                        },
                        ClassificationItem {
                            text: "vivid-otter-harbor-42".into(),
                            answer: Label::Strong,
                            explanation: String::new(),
                        },
                    ],
                }),
            })
            .collect();
        LevelCatalog::new(levels).unwrap()
    }

    fn controller() -> ProgressionController {
        ProgressionController::new(GameVariant::Academy, catalog(&[80, 75, 70, 70, 90]))
    }

    #[test]
    fn passing_unlocks_next_and_failing_changes_nothing() {
        let mut c = controller();
        let r = c.submit_attempt(1, 85).unwrap();
        assert_eq!(
            r,
            ProgressionResult {
                level: 1,
                passed: true,
                score: 85,
                unlocked_next: Some(2)
            }
        );

        let before = c.snapshot();
        let r = c.submit_attempt(2, 50).unwrap();
        assert!(!r.passed);
        assert_eq!(r.unlocked_next, None);
        assert_eq!(c.state().unlocked(), before.unlocked());
        assert_eq!(c.state().completed(), before.completed());
        assert_eq!(c.state().best_score(2), Some(50));
    }

    #[test]
    fn locked_level_is_refused_without_mutation() {
        let mut c = controller();
        c.submit_attempt(1, 100).unwrap();
        let before = c.snapshot();
        assert_eq!(c.submit_attempt(3, 90), Err(GameError::Locked(3)));
        assert_eq!(c.start_level(3, 0.0), Err(GameError::Locked(3)));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn unknown_level_is_not_found() {
        let mut c = controller();
        assert_eq!(c.submit_attempt(6, 100), Err(GameError::NotFound(6)));
        assert_eq!(c.start_level(0, 0.0), Err(GameError::NotFound(0)));
    }

    #[test]
    fn replay_after_pass_keeps_completion_and_best() {
        let mut c = controller();
        c.submit_attempt(1, 85).unwrap();
        let r = c.submit_attempt(1, 60).unwrap();
        assert!(!r.passed);
        assert!(c.state().is_completed(1));
        assert_eq!(c.state().best_score(1), Some(85));
    }

    #[test]
    fn repeated_pass_does_not_unlock_twice() {
        let mut c = controller();
        assert_eq!(c.submit_attempt(1, 90).unwrap().unlocked_next, Some(2));
        assert_eq!(c.submit_attempt(1, 95).unwrap().unlocked_next, None);
        assert_eq!(c.state().unlocked().len(), 2);
        assert_eq!(c.state().best_score(1), Some(95));
    }

    #[test]
    fn last_level_unlocks_nothing() {
        let mut c = controller();
        for id in 1..=4 {
            c.submit_attempt(id, 100).unwrap();
        }
        let r = c.submit_attempt(5, 100).unwrap();
        assert!(r.passed);
        assert_eq!(r.unlocked_next, None);
        assert!(c.all_completed());
        assert!(c.state().is_consistent());
    }

    #[test]
    fn scores_above_hundred_are_clamped() {
        let mut c = controller();
        assert_eq!(c.submit_attempt(1, 250).unwrap().score, 100);
        assert_eq!(c.state().best_score(1), Some(100));
    }

    #[test]
    fn start_level_resets_draft_and_sets_current() {
        let mut c = controller();
        c.start_level(1, 0.0).unwrap();
        if let Some(Submission::Classification(answers)) = c.draft_mut() {
            answers.insert(0, Label::Weak);
        }
        c.start_level(1, 5.0).unwrap();
        assert_eq!(c.state().current_level(), Some(1));
        assert_eq!(c.draft(), Some(&Submission::Classification(BTreeMap::new())));
        assert_eq!(c.level_status(1), LevelStatus::InProgress);
    }

    #[test]
    fn incomplete_submission_keeps_session_alive() {
        let mut c = controller();
        c.start_level(1, 0.0).unwrap();
        let partial = Submission::Classification(BTreeMap::from([(0, Label::Weak)]));
        let err = c.submit(1, &partial).unwrap_err();
        assert!(matches!(err, GameError::IncompleteSubmission { .. }));
        assert_eq!(c.state().current_level(), Some(1));
        assert_eq!(c.state().best_score(1), None);
    }

    #[test]
    fn full_submission_scores_and_ends_session() {
        let mut c = controller();
        c.start_level(1, 0.0).unwrap();
        if let Some(Submission::Classification(answers)) = c.draft_mut() {
            answers.insert(0, Label::Weak);
            answers.insert(1, Label::Strong);
        }
        let outcome = c.submit_draft().unwrap().unwrap();
        assert_eq!(outcome.result.score, 100);
        assert_eq!(outcome.result.unlocked_next, Some(2));
        assert_eq!(c.state().current_level(), None);
        assert_eq!(c.active_session(), None);
        assert_eq!(c.level_status(1), LevelStatus::Completed);
        assert_eq!(c.level_status(2), LevelStatus::Available);
        assert_eq!(c.level_status(3), LevelStatus::Locked);
    }

    #[test]
    fn restart_replaces_the_countdown() {
        let mut c = controller();
        let first = c.start_level(1, 0.0).unwrap();
        let second = c.start_level(1, 20.0).unwrap();
        assert_ne!(first.session, second.session);

        // The first session's deadline (t=30) passes without effect.
        assert_eq!(c.tick(31.0), None);
        let stale = Expired {
            session: first.session,
            level: 1,
        };
        assert_eq!(c.expire(stale), None);
        assert_eq!(c.state().current_level(), Some(1));

        let fired = c.tick(50.0).unwrap();
        assert_eq!(fired.session, second.session);
        assert_eq!(c.state().current_level(), None);
        assert_eq!(c.tick(60.0), None);
    }

    #[test]
    fn recorded_score_ends_the_running_session() {
        let mut c = controller();
        c.start_level(1, 0.0).unwrap();
        let failed = c.submit_attempt(1, 10).unwrap();
        assert!(!failed.passed);
        assert_eq!(c.level_status(1), LevelStatus::Available);
        assert_eq!(c.active_session(), None);
        assert_eq!(c.draft(), None);

        c.start_level(1, 5.0).unwrap();
        c.submit_attempt(1, 95).unwrap();
        assert_eq!(c.level_status(1), LevelStatus::Completed);
        assert_eq!(c.state().current_level(), None);
        assert_eq!(c.tick(100.0), None);
    }

    #[test]
    fn score_for_another_level_keeps_the_session() {
        let mut c = controller();
        c.submit_attempt(1, 90).unwrap();
        c.start_level(2, 0.0).unwrap();
        c.submit_attempt(1, 95).unwrap();
        assert_eq!(c.level_status(2), LevelStatus::InProgress);
        assert!(c.active_session().is_some());
    }

    #[test]
    fn abandon_discards_draft_but_not_progress() {
        let mut c = controller();
        c.submit_attempt(1, 90).unwrap();
        c.start_level(2, 0.0).unwrap();
        c.abandon_level();
        assert_eq!(c.state().current_level(), None);
        assert_eq!(c.draft(), None);
        assert!(c.state().is_completed(1));
        assert!(c.state().is_unlocked(2));
        assert_eq!(c.next_playable(), Some(2));
    }
}
