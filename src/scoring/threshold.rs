use super::{ItemFeedback, ScoreCard, Scorer, Submission};
use crate::crack;
use crate::error::{GameError, GameResult};
use crate::model::{LevelDefinition, LevelKind, LevelPayload};

/// Slider demo. Reaching the target is worth 100, anything below it earns
/// the level's flat `partial_score`.
pub struct ThresholdScorer;

impl Scorer for ThresholdScorer {
    fn kind(&self) -> LevelKind {
        LevelKind::ThresholdDemo
    }

    fn score(&self, level: &LevelDefinition, submission: &Submission) -> GameResult<ScoreCard> {
        let (LevelPayload::ThresholdDemo(payload), Submission::Threshold(value)) =
            (&level.payload, submission)
        else {
            return Err(GameError::SubmissionMismatch {
                level: level.id,
                expected: LevelKind::ThresholdDemo,
            });
        };

        let value = (*value).clamp(payload.min, payload.max);
        let met = value >= payload.target;
        let score = if met { 100 } else { payload.partial_score.min(100) };

        let secs = crack::seconds_to_crack(payload.charset_size, value, payload.guesses_per_sec);
        let feedback = vec![ItemFeedback {
            text: format!("{} = {value}", payload.parameter),
            correct: met,
            explanation: format!(
                "Exhausting the search space takes {} at {:.0e} guesses/s (target: {}).",
                crack::format_duration(secs),
                payload.guesses_per_sec,
                payload.target
            ),
        }];

        Ok(ScoreCard {
            score,
            complete: true,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThresholdPayload;

    fn level(partial_score: u8) -> LevelDefinition {
        LevelDefinition {
            id: 2,
            title: "How long is long enough?".into(),
            briefing: String::new(),
            passing_score: 100,
            time_limit_secs: 0,
            payload: LevelPayload::ThresholdDemo(ThresholdPayload {
                parameter: "Length".into(),
                min: 4,
                max: 20,
                start: 6,
                target: 12,
                partial_score,
                charset_size: 94,
                guesses_per_sec: 1e10,
            }),
        }
    }

    #[test]
    fn reaching_target_scores_hundred() {
        let card = ThresholdScorer.score(&level(40), &Submission::Threshold(12)).unwrap();
        assert_eq!(card.score, 100);
        assert!(card.feedback[0].correct);
    }

    #[test]
    fn below_target_gets_partial_constant() {
        let card = ThresholdScorer.score(&level(40), &Submission::Threshold(11)).unwrap();
        assert_eq!(card.score, 40);
        assert!(!card.feedback[0].correct);
    }

    #[test]
    fn values_outside_slider_range_are_clamped() {
        let card = ThresholdScorer.score(&level(25), &Submission::Threshold(500)).unwrap();
        assert_eq!(card.score, 100);
        assert_eq!(card.feedback[0].text, "Length = 20");
    }
}
