//! Page-level components.

pub mod users;
