//! Roster page: fetch all users once on mount and render the outcome.

#[cfg(all(test, feature = "ssr"))]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::user_table::UserTable;
use crate::state::users::{Screen, ViewState};

/// Users page.
///
/// The request is owned by a `LocalResource` created here, so it fires once
/// per mount and a response arriving after unmount is discarded with it.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_users());
    let state = Memo::new(move |_| ViewState::from_outcome(users.get()));

    view! { {move || view! { <UsersView state=state.get()/> }} }
}

/// Exactly one of loading, error, empty or table for the given state.
#[component]
pub fn UsersView(state: ViewState) -> impl IntoView {
    match state.screen() {
        Screen::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        Screen::Error(message) => view! { <div class="error">"Error: " {message}</div> }.into_any(),
        Screen::Empty => {
            view! {
                <section class="app">
                    <Headings/>
                    <p>"No users found"</p>
                </section>
            }
                .into_any()
        }
        Screen::Table(users) => {
            view! {
                <section class="app">
                    <Headings/>
                    <UserTable users/>
                </section>
            }
                .into_any()
        }
    }
}

#[component]
fn Headings() -> impl IntoView {
    view! {
        <h1>"Roster"</h1>
        <h2>"User List"</h2>
    }
}
