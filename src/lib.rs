pub mod app;
pub mod config;
pub mod data;
pub mod exam;
pub mod judge;
pub mod model;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::{QuizApp, UiPrefs};
