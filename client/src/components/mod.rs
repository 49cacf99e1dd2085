//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take plain data or own a local
//! signal, and never reach into shared context.

pub mod click_counter;
pub mod user_table;
