use crate::error::{GameError, GameResult};
use crate::model::{LevelDefinition, LevelId, LevelPayload};

/// Ordered, read-only list of levels for one game variant.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Builds a catalog after checking ids are 1..=N in order and every
    /// payload is self-consistent.
    pub fn new(levels: Vec<LevelDefinition>) -> GameResult<Self> {
        if levels.is_empty() {
            return Err(GameError::Catalog("catalog has no levels".into()));
        }
        for (pos, level) in levels.iter().enumerate() {
            let expected = pos as LevelId + 1;
            if level.id != expected {
                return Err(GameError::Catalog(format!(
                    "level ids must be dense and ordered: expected {expected}, found {}",
                    level.id
                )));
            }
            if level.passing_score > 100 {
                return Err(GameError::Catalog(format!(
                    "level {}: passing score {} is above 100",
                    level.id, level.passing_score
                )));
            }
            validate_payload(level)?;
        }
        Ok(Self { levels })
    }

    pub fn get_level(&self, id: LevelId) -> GameResult<&LevelDefinition> {
        if id == 0 {
            return Err(GameError::NotFound(id));
        }
        self.levels
            .get(id as usize - 1)
            .ok_or(GameError::NotFound(id))
    }

    pub fn count(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn contains(&self, id: LevelId) -> bool {
        id >= 1 && id <= self.count()
    }

    pub fn levels(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

fn validate_payload(level: &LevelDefinition) -> GameResult<()> {
    let fail = |msg: String| Err(GameError::Catalog(format!("level {}: {msg}", level.id)));
    match &level.payload {
        LevelPayload::Classification(p) => {
            if p.items.is_empty() {
                return fail("classification level has no items".into());
            }
            if let Some(item) = p.items.iter().find(|i| !p.labels.contains(i.answer)) {
                return fail(format!(
                    "item '{}' is labelled {:?}, which is not offered",
                    item.text, item.answer
                ));
            }
        }
        LevelPayload::ThresholdDemo(p) => {
            if p.min > p.max || !(p.min..=p.max).contains(&p.target) {
                return fail(format!(
                    "target {} outside slider range {}..={}",
                    p.target, p.min, p.max
                ));
            }
            if !(p.min..=p.max).contains(&p.start) {
                return fail(format!("start value {} outside slider range", p.start));
            }
            if p.partial_score > 100 {
                return fail("partial score above 100".into());
            }
            // Missing the target must never be enough to pass.
            if p.partial_score >= level.passing_score {
                return fail(format!(
                    "partial score {} would pass without reaching the target (pass mark {})",
                    p.partial_score, level.passing_score
                ));
            }
            if p.charset_size < 2 {
                return fail(format!("charset size {} gives no search space", p.charset_size));
            }
            if !(p.guesses_per_sec.is_finite() && p.guesses_per_sec > 0.0) {
                return fail(format!("guess rate {} must be positive", p.guesses_per_sec));
            }
        }
        LevelPayload::Simulation(p) => {
            if p.items.is_empty() {
                return fail("simulation level has no items".into());
            }
            if p.breach_ticks == 0 {
                return fail("breach_ticks must be positive".into());
            }
            if let Some(bad) = p.priority.iter().find(|&&i| i >= p.items.len()) {
                return fail(format!("priority index {bad} is out of range"));
            }
        }
    }
    Ok(())
}
