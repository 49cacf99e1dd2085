//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so components stay thin and
//! the transitions are testable without a browser.

pub mod counter;
pub mod users;
