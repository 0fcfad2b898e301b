use egui::{Align, Context, RichText};
use crate::model::GameVariant;
use crate::TrainingApp;
use crate::ui::helpers::big_list_button;

pub fn ui_variant_select(app: &mut TrainingApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Rough vertical centering
        let total_height = 360.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space);

        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    ui.heading("🔐 Password Quest");
                    ui.add_space(18.0);
                    ui.label("Pick a training game");
                    ui.add_space(18.0);

                    let button_width = (content_width - 40.0).clamp(200.0, 420.0);

                    ui.vertical_centered(|ui| {
                        for variant in GameVariant::ALL {
                            let (done, total) = app
                                .controllers
                                .get(&variant)
                                .map(|c| (c.state().completed().len(), c.catalog().count()))
                                .unwrap_or((0, 0));
                            let label = format!("{}  ({done}/{total})", variant.title());
                            if big_list_button(ui, label, button_width, 40.0, total > 0) {
                                app.select_variant(variant);
                            }
                            ui.label(RichText::new(variant.tagline()).italics().weak());
                            ui.add_space(10.0);
                        }

                        #[cfg(not(target_arch = "wasm32"))]
                        if ui.add_sized([button_width, 40.0], egui::Button::new("Quit")).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        });
    });
}
