//! Password Quest: password-security training games.
//!
//! The progression core (`catalog`, `scoring`, `progress`, `controller`,
//! `timer`) has no UI dependency. `app` and `ui` bind it to eframe/egui.

pub mod app;
pub mod catalog;
pub mod controller;
pub mod crack;
pub mod data;
pub mod error;
pub mod model;
pub mod progress;
pub mod scoring;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::TrainingApp;
pub use controller::{ProgressionController, ProgressionResult};
pub use error::{GameError, GameResult};
