//! Core library for Seha: mock sessions, screens, sample data, validation.

pub mod config;
pub mod directory;
pub mod screen;
pub mod session;
pub mod validation;
