use super::{ItemFeedback, ScoreCard, Scorer, Submission};
use crate::error::{GameError, GameResult};
use crate::model::{LevelDefinition, LevelKind, LevelPayload};

/// Binary labelling exercise: `round(100 * correct / total)`.
pub struct ClassificationScorer;

impl Scorer for ClassificationScorer {
    fn kind(&self) -> LevelKind {
        LevelKind::Classification
    }

    fn score(&self, level: &LevelDefinition, submission: &Submission) -> GameResult<ScoreCard> {
        let (LevelPayload::Classification(payload), Submission::Classification(answers)) =
            (&level.payload, submission)
        else {
            return Err(GameError::SubmissionMismatch {
                level: level.id,
                expected: LevelKind::Classification,
            });
        };

        // Partial answer sets are never scored
        let missing: Vec<usize> = (0..payload.items.len())
            .filter(|i| !answers.contains_key(i))
            .collect();
        if !missing.is_empty() {
            return Err(GameError::IncompleteSubmission {
                level: level.id,
                missing,
            });
        }

        let feedback: Vec<ItemFeedback> = payload
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ItemFeedback {
                text: item.text.clone(),
                correct: answers.get(&i) == Some(&item.answer),
                explanation: item.explanation.clone(),
            })
            .collect();

        let correct = feedback.iter().filter(|f| f.correct).count();
        let total = payload.items.len();
        let score = ((100 * correct) as f64 / total as f64).round() as u8;

        Ok(ScoreCard {
            score,
            complete: true,
            feedback,
        })
    }
}
