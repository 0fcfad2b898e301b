use egui::{Align, Button, CentralPanel, Context, ScrollArea};
use crate::TrainingApp;
use crate::view_models::LevelInfo;
use crate::ui::helpers::level_card_button;

pub fn ui_level_menu(app: &mut TrainingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 480.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 36.0;

        let Some(variant) = app.selected_variant else { return };
        let infos: Vec<LevelInfo> = app.level_infos();

        let estimated_h = 80.0 + (button_h + 8.0) * (infos.len() as f32 + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading(format!("{}: choose a level", variant.title()));
                        ui.add_space(20.0);

                        ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                            for info in &infos {
                                let label = info.label();
                                let (clicked_main, clicked_replay) = level_card_button(
                                    ui,
                                    &label,
                                    content_width,
                                    button_h,
                                    info.unlocked(),
                                    info.completed(),
                                );

                                if clicked_main || clicked_replay {
                                    app.enter_level(info.id);
                                    return;
                                }
                                ui.add_space(8.0);
                            }
                        });

                        ui.add_space(16.0);
                        if ui
                            .add_sized([content_width, button_h], Button::new("Back to games"))
                            .clicked()
                        {
                            app.back_to_variants();
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
