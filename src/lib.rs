//! HomeGrid — paged bookmark grid core for a personal browser start-page.
//!
//! This library crate exposes all modules for use by an embedding shell and
//! the integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
