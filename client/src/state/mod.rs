//! Gallery configuration and the view models derived from it.

pub mod config;
pub mod gallery;
