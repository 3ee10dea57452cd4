//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing chrome and read shared state from Leptos
//! context providers installed by `App`.

pub mod site_header;
pub mod theme_toggle;
