// src/controllers/mod.rs

pub mod pan_controller;
pub mod pointer_release;

pub use pan_controller::PanController;
pub use pointer_release::{ListenerId, ListenerStatus, PointerReleaseHub};
