//! Pure helpers shared by pages and the server-side renderer.

pub mod route;
