//! Command handlers.

pub mod auth;
pub mod config;
pub mod portal;
