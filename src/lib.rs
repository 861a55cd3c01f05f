//! Photolab - headless photo editing on top of pixel-engine
//!
//! Loads configuration, resolves named kernels, and keeps the edit state
//! of one image. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
