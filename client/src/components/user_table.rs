//! Roster table.

#[cfg(all(test, feature = "ssr"))]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::users::user_row_cells;

/// One row per user, in the order given, keyed by user id.
#[component]
pub fn UserTable(users: Vec<User>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || users.clone()
                    key=|user| user.id
                    children=move |user: User| {
                        let [id, name, email] = user_row_cells(&user);
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{name}</td>
                                <td>{email}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
