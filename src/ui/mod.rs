mod helpers;
pub mod layout;
pub mod views;

use crate::app::TrainingApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for TrainingApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.sync_clock(ctx);
        self.on_frame();

        // Reset / change-game bar once a game is picked
        if self.state != AppState::VariantSelect {
            top_panel(self, ctx);
        }

        bottom_panel(self, ctx);

        match self.state {
            AppState::VariantSelect => views::variant_select::ui_variant_select(self, ctx),
            AppState::LevelMenu => views::level_menu::ui_level_menu(self, ctx),
            AppState::Play => views::play::ui_play(self, ctx),
            AppState::Completion => views::completion::ui_completion(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // Countdown, attack bar and toast all run on the frame clock
        if self.state == AppState::Play || self.active_message().is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
