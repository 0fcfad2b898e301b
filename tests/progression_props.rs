use pass_quest::data::parse_catalog;
use pass_quest::model::{GameVariant, LevelId};
use pass_quest::{GameError, ProgressionController};
use proptest::prelude::*;

const LEVELS: LevelId = 5;

#[derive(Clone, Debug)]
enum Step {
    Attempt(LevelId, u8),
    Start(LevelId),
    Abandon,
}

fn step() -> impl Strategy<Value = Step> {
    // Ids run one past each end of the catalog so NotFound is exercised too.
    prop_oneof![
        4 => (0..=LEVELS + 1, any::<u8>()).prop_map(|(id, score)| Step::Attempt(id, score)),
        2 => (0..=LEVELS + 1).prop_map(Step::Start),
        1 => Just(Step::Abandon),
    ]
}

fn game() -> ProgressionController {
    let yaml: String = (1..=LEVELS)
        .map(|id| {
            format!(
                r#"
- id: {id}
  title: "Level {id}"
  briefing: ""
  passing_score: {pass}
  time_limit_secs: 0
  payload:
    kind: classification
    labels: weak_strong
    items:
      - {{ text: "letmein", answer: weak }}
"#,
                pass = 50 + id * 8
            )
        })
        .collect();
    let catalog = parse_catalog(&yaml).expect("test catalog parses");
    ProgressionController::new(GameVariant::Academy, catalog)
}

proptest! {
    #[test]
    fn progress_never_regresses(steps in prop::collection::vec(step(), 1..60)) {
        let mut game = game();

        for (n, step) in steps.iter().enumerate() {
            let before = game.snapshot();
            let outcome = match *step {
                Step::Attempt(id, score) => game.submit_attempt(id, score).map(|_| ()),
                Step::Start(id) => game.start_level(id, n as f64).map(|_| ()),
                Step::Abandon => {
                    game.abandon_level();
                    Ok(())
                }
            };
            let after = game.state();

            prop_assert!(after.is_consistent(), "step {n} {step:?} broke consistency");
            prop_assert!(after.unlocked().is_superset(before.unlocked()), "step {n} {step:?} relocked a level");
            prop_assert!(after.completed().is_superset(before.completed()), "step {n} {step:?} un-completed a level");
            for (id, best) in before.best_scores() {
                let now = after.best_score(*id).unwrap_or(0);
                prop_assert!(now >= *best, "step {n} {step:?}: best of level {id} fell {best} -> {now}");
            }

            match outcome {
                Ok(()) => {
                    if let Step::Attempt(id, score) = *step {
                        let expected = before.best_score(id).unwrap_or(0).max(score.min(100));
                        prop_assert_eq!(after.best_score(id), Some(expected));
                    }
                }
                Err(GameError::Locked(_)) | Err(GameError::NotFound(_)) => {
                    prop_assert_eq!(&game.snapshot(), &before);
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_ids_are_never_found(id in LEVELS + 1..u32::MAX, score in any::<u8>()) {
        let mut game = game();
        prop_assert_eq!(game.submit_attempt(id, score), Err(GameError::NotFound(id)));
        prop_assert!(matches!(game.start_level(id, 0.0), Err(GameError::NotFound(_))));
        prop_assert_eq!(game.snapshot().unlocked().len(), 1);
    }
}
