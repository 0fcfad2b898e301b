use super::*;

impl TrainingApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        let Some(ctl) = self.controller() else {
            return Vec::new();
        };
        ctl.catalog()
            .levels()
            .map(|lvl| LevelInfo {
                id: lvl.id,
                title: lvl.title.clone(),
                kind: lvl.kind(),
                status: ctl.level_status(lvl.id),
                best_score: ctl.state().best_score(lvl.id),
                passing_score: lvl.passing_score,
            })
            .collect()
    }

    /// (completed, total) for the selected variant.
    pub fn completion_counts(&self) -> (usize, usize) {
        self.controller()
            .map(|c| (c.state().completed().len(), c.catalog().count() as usize))
            .unwrap_or((0, 0))
    }
}
