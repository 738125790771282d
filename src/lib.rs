//! addon-devtools - build helpers for game-addon projects
//!
//! Converts OKLCH stylesheets into Lua color tables, renders minimap alpha
//! masks and fills untranslated locale entries from sibling projects.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
