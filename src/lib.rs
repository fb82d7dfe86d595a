//! Huesort - sort image batches by dominant color
//!
//! Web front end and CLI around the `chroma_sort` pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
