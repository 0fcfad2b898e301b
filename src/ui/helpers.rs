// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Level card. Returns (clicked_main, clicked_replay).
/// - Not completed: a single full-width button, disabled while locked.
/// - Completed: the main button greyed out plus an active "Replay" button.
pub fn level_card_button(
    ui: &mut Ui,
    label: &str,
    total_width: f32,
    height: f32,
    unlocked: bool,
    is_completed: bool,
) -> (bool, bool) {
    if !is_completed {
        let button = Button::new(label).min_size(Vec2::new(total_width, height));
        let response = ui.add_enabled(unlocked, button);
        let clicked = response
            .on_disabled_hover_text("Pass the previous level to unlock this one")
            .clicked();
        return (clicked, false);
    }

    let gap = 8.0;
    let replay_w = (total_width / 4.0).max(80.0);
    let main_w = (total_width - replay_w - gap).max(120.0);

    let mut clicked_replay = false;

    ui.horizontal(|ui| {
        let main_btn = Button::new(label).min_size(Vec2::new(main_w, height));
        ui.add_enabled(false, main_btn)
            .on_disabled_hover_text("Passed: replay to improve your best score");

        let replay_btn = Button::new("⟲ Replay")
            .min_size(Vec2::new(replay_w, height))
            .fill(Color32::DARK_GREEN);
        if ui.add(replay_btn).clicked() {
            clicked_replay = true;
        }
    });

    (false, clicked_replay)
}

pub fn verdict_text(correct: bool) -> RichText {
    if correct {
        RichText::new("✅").color(Color32::GREEN)
    } else {
        RichText::new("❌").color(Color32::RED)
    }
}
