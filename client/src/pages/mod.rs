//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-level layout and delegate rendering details to
//! `components`. Only the gallery page reads the `GalleryConfig` context.

pub mod gallery;
pub mod not_found;
