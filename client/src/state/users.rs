//! Fetch-state machine behind the roster view.
//!
//! `Loading` is entered at mount and left exactly once, to `Loaded` or
//! `Error`, when the single request settles. Settled states are terminal.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::api::FetchError;
use crate::net::types::User;

/// What the roster view is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<User>),
}

/// Render decision derived from a `ViewState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error(String),
    /// Successful response with zero records.
    Empty,
    Table(Vec<User>),
}

impl ViewState {
    /// Apply the outcome of the users request.
    ///
    /// Only `Loading` transitions; a settled state is returned unchanged.
    #[must_use]
    pub fn settle(self, outcome: Result<Vec<User>, FetchError>) -> Self {
        match self {
            Self::Loading => match outcome {
                Ok(users) => Self::Loaded(users),
                Err(e) => Self::Error(e.message()),
            },
            settled => settled,
        }
    }

    /// State for a request that may still be outstanding (`None`).
    pub fn from_outcome(outcome: Option<Result<Vec<User>, FetchError>>) -> Self {
        outcome.map_or(Self::Loading, |o| Self::Loading.settle(o))
    }

    pub fn screen(&self) -> Screen {
        match self {
            Self::Loading => Screen::Loading,
            Self::Error(message) => Screen::Error(message.clone()),
            Self::Loaded(users) if users.is_empty() => Screen::Empty,
            Self::Loaded(users) => Screen::Table(users.clone()),
        }
    }
}

/// Table cells for one user, in column order: id, name, email.
pub fn user_row_cells(user: &User) -> [String; 3] {
    [user.id.to_string(), user.name.clone(), user.email.clone()]
}
