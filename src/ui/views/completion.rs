use egui::{Button, Color32, Context, Grid, RichText, ScrollArea};
use crate::TrainingApp;
use crate::ui::helpers::verdict_text;
use crate::ui::layout::centered_panel;

pub fn ui_completion(app: &mut TrainingApp, ctx: &Context) {
    let Some(outcome) = app.last_outcome.clone() else {
        app.open_level_menu();
        return;
    };
    let result = outcome.result;
    let best = app
        .controller()
        .and_then(|c| c.state().best_score(result.level))
        .unwrap_or(result.score);
    let next = app.next_level_after_outcome();
    let finished_all = app.controller().is_some_and(|c| c.all_completed());

    centered_panel(ctx, 520.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            if result.passed {
                ui.heading(RichText::new("Level passed!").color(Color32::GREEN));
            } else {
                ui.heading(RichText::new("Level failed").color(Color32::RED));
            }
            ui.add_space(8.0);
            ui.label(format!("Score: {}%   (best: {best}%)", result.score));
            if let Some(id) = result.unlocked_next {
                ui.label(format!("🔓 Level {id} unlocked"));
            }
            if finished_all {
                ui.label("🏆 Every level of this game is passed.");
            }
        });

        ui.add_space(10.0);
        ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            Grid::new("feedback_grid")
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for item in &outcome.card.feedback {
                        ui.label(verdict_text(item.correct));
                        ui.label(RichText::new(&item.text).strong());
                        ui.label(&item.explanation);
                        ui.end_row();
                    }
                });
        });

        ui.add_space(12.0);
        let button_width = 160.0;
        ui.horizontal(|ui| {
            if let Some(id) = next {
                if ui
                    .add_sized([button_width, 36.0], Button::new(format!("Level {id} ▶")))
                    .clicked()
                {
                    app.continue_to_next_level();
                }
            }
            if ui.add_sized([button_width, 36.0], Button::new("⟲ Retry")).clicked() {
                app.retry_level();
            }
            if ui.add_sized([button_width, 36.0], Button::new("Levels")).clicked() {
                app.open_level_menu();
            }
        });
    });
}
