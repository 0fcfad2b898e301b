use super::*;

impl TrainingApp {
    /// Throws away all progress of the selected variant.
    pub fn reset_progress(&mut self) {
        let Some(variant) = self.selected_variant else {
            return;
        };
        match new_controller(variant) {
            Ok(ctl) => {
                self.controllers.insert(variant, ctl);
                log::info!("{}: progress reset", variant.title());
                self.notify("Progress cleared.");
            }
            Err(e) => {
                log::error!("could not reload catalog: {e}");
                self.notify(format!("⚠ {e}"));
            }
        }
        self.confirm_reset = false;
        self.last_outcome = None;
        self.state = AppState::LevelMenu;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Lock every level again and forget all scores for this game?");
                ui.horizontal(|ui| {
                    if ui.button("Yes, reset").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_relocks_only_the_selected_variant() {
        let mut app = TrainingApp::new().unwrap();
        for variant in [GameVariant::DefenseOps, GameVariant::Academy] {
            app.controllers
                .get_mut(&variant)
                .unwrap()
                .submit_attempt(1, 100)
                .unwrap();
        }
        app.select_variant(GameVariant::Academy);
        app.reset_progress();

        assert!(!app.controller().unwrap().state().is_unlocked(2));
        assert!(app.controllers[&GameVariant::DefenseOps].state().is_unlocked(2));
    }
}
