pub mod api;
pub mod app;
pub mod attempts;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod error;
pub mod grading;
pub mod model;
pub mod render;
pub mod session;
pub mod submission;
pub mod toast;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
