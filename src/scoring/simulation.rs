use super::{clamp_score, ItemFeedback, ScoreCard, Scorer, Submission};
use crate::error::{GameError, GameResult};
use crate::model::{LevelDefinition, LevelKind, LevelPayload};
use std::collections::HashSet;

/// Attack/defense mini-game.
///
/// Points come from the level's [`SimulationRules`](crate::model::SimulationRules):
/// every vulnerable item flagged before the breach tick earns `flag_hit`,
/// every safe item flagged costs `false_positive`, every vulnerable item left
/// alone costs `miss`. Flagging the `priority` items in their listed order adds
/// `order_bonus`.
pub struct SimulationScorer;

impl Scorer for SimulationScorer {
    fn kind(&self) -> LevelKind {
        LevelKind::Simulation
    }

    fn score(&self, level: &LevelDefinition, submission: &Submission) -> GameResult<ScoreCard> {
        let (LevelPayload::Simulation(payload), Submission::Simulation(actions)) =
            (&level.payload, submission)
        else {
            return Err(GameError::SubmissionMismatch {
                level: level.id,
                expected: LevelKind::Simulation,
            });
        };

        // Actions after the breach are too late; repeated actions count once.
        let mut seen = HashSet::new();
        let flagged: Vec<usize> = actions
            .iter()
            .filter(|a| a.tick < payload.breach_ticks && a.item < payload.items.len())
            .filter(|a| seen.insert(a.item))
            .map(|a| a.item)
            .collect();

        let rules = payload.rules;
        let mut total = rules.base as i64;
        let mut feedback = Vec::with_capacity(payload.items.len());
        for (i, item) in payload.items.iter().enumerate() {
            let acted = seen.contains(&i);
            total += match (acted, item.vulnerable) {
                (true, true) => rules.flag_hit,
                (true, false) => rules.false_positive,
                (false, true) => rules.miss,
                (false, false) => 0,
            } as i64;
            feedback.push(ItemFeedback {
                text: item.label.clone(),
                correct: acted == item.vulnerable,
                explanation: item.explanation.clone(),
            });
        }

        if in_priority_order(&flagged, &payload.priority) {
            total += rules.order_bonus as i64;
        }

        let complete = payload
            .items
            .iter()
            .enumerate()
            .all(|(i, item)| !item.vulnerable || seen.contains(&i));

        Ok(ScoreCard {
            score: clamp_score(total),
            complete,
            feedback,
        })
    }
}

/// True when every priority item was flagged and they appear in `flagged`
/// in the listed relative order.
fn in_priority_order(flagged: &[usize], priority: &[usize]) -> bool {
    if priority.is_empty() {
        return false;
    }
    let mut last = None;
    for wanted in priority {
        match flagged.iter().position(|f| f == wanted) {
            Some(pos) if last.is_none_or(|prev| pos > prev) => last = Some(pos),
            _ => return false,
        }
    }
    true
}
