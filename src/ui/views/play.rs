use egui::{Align, CentralPanel, Color32, Context, ProgressBar, RichText, ScrollArea, Slider, Ui};
use crate::crack;
use crate::model::{
    AppState, ClassificationPayload, Label, LevelPayload, SimulationPayload, ThresholdPayload,
};
use crate::scoring::Submission;
use crate::TrainingApp;
use crate::ui::layout::two_button_row;

pub fn ui_play(app: &mut TrainingApp, ctx: &Context) {
    // Session may have ended between frames (countdown)
    let Some(level) = app.current_level().cloned() else {
        app.state = AppState::LevelMenu;
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.set_width(panel_width);
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Level {}: {}", level.id, level.title));
                    if !level.briefing.is_empty() {
                        ui.add_space(6.0);
                        ui.label(&level.briefing);
                    }
                    if let Some(left) = app.controller().and_then(|c| c.time_remaining(app.clock)) {
                        let color = if left < 10.0 { Color32::RED } else { Color32::LIGHT_BLUE };
                        ui.label(RichText::new(format!("⏱ {:.0}s left", left.ceil())).color(color));
                    }
                    ui.label(format!("Pass mark: {}%", level.passing_score));
                    ui.add_space(12.0);
                });

                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                    match &level.payload {
                        LevelPayload::Classification(p) => classification_board(app, ui, p),
                        LevelPayload::ThresholdDemo(p) => threshold_board(app, ui, p),
                        LevelPayload::Simulation(p) => simulation_board(app, ui, p),
                    }
                });

                ui.add_space(12.0);
                let (submit, back) = two_button_row(ui, panel_width, "Submit", "Back to levels");
                if submit {
                    app.submit_current();
                }
                if back {
                    app.leave_level();
                }
            });
    });
}

fn classification_board(app: &mut TrainingApp, ui: &mut Ui, payload: &ClassificationPayload) {
    let answers = match app.controller().and_then(|c| c.draft()) {
        Some(Submission::Classification(a)) => a.clone(),
        _ => Default::default(),
    };

    let mut picked: Option<(usize, Label)> = None;
    ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        egui::Grid::new("classification_grid")
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (i, item) in payload.items.iter().enumerate() {
                    ui.label(RichText::new(&item.text).monospace());
                    for label in payload.labels.labels() {
                        let selected = answers.get(&i) == Some(&label);
                        if ui.selectable_label(selected, label.text()).clicked() {
                            picked = Some((i, label));
                        }
                    }
                    ui.end_row();
                }
            });
    });

    if let Some((i, label)) = picked {
        app.classify(i, label);
    }
    ui.label(format!("{}/{} answered", answers.len(), payload.items.len()));
}

fn threshold_board(app: &mut TrainingApp, ui: &mut Ui, payload: &ThresholdPayload) {
    let mut value = match app.controller().and_then(|c| c.draft()) {
        Some(Submission::Threshold(v)) => *v,
        _ => payload.start,
    };

    ui.add(Slider::new(&mut value, payload.min..=payload.max).text(payload.parameter.as_str()));
    app.set_threshold(value);

    let bits = crack::entropy_bits(payload.charset_size, value);
    let space = crack::search_space(payload.charset_size, value);
    let secs = crack::seconds_to_crack(payload.charset_size, value, payload.guesses_per_sec);
    ui.add_space(8.0);
    ui.label(format!("Alphabet: {} symbols", payload.charset_size));
    ui.label(format!("Entropy: {bits:.1} bits"));
    ui.label(format!("Candidates: {space:.2e}"));
    ui.label(
        RichText::new(format!(
            "Time to try them all at {:.0e} guesses/s: {}",
            payload.guesses_per_sec,
            crack::format_duration(secs)
        ))
        .strong(),
    );
}

fn simulation_board(app: &mut TrainingApp, ui: &mut Ui, payload: &SimulationPayload) {
    let progress = app.attack_progress().unwrap_or(0.0);
    let landed = app.attack_landed();
    let flagged: Vec<usize> = match app.controller().and_then(|c| c.draft()) {
        Some(Submission::Simulation(actions)) => actions.iter().map(|a| a.item).collect(),
        _ => Vec::new(),
    };

    let bar_text = if landed {
        "💥 Attack landed: submit to see how you did".to_string()
    } else {
        format!("Attack progress {:.0}%", progress * 100.0)
    };
    ui.add(ProgressBar::new(progress).fill(Color32::DARK_RED).text(bar_text));
    ui.add_space(8.0);

    let mut clicked = None;
    for (i, item) in payload.items.iter().enumerate() {
        let done = flagged.contains(&i);
        let text = if done {
            format!("🛡 {}", item.label)
        } else {
            item.label.clone()
        };
        let enabled = !done && !landed;
        if ui.add_enabled(enabled, egui::Button::new(text)).clicked() {
            clicked = Some(i);
        }
    }
    if let Some(i) = clicked {
        app.flag_item(i);
    }
}
