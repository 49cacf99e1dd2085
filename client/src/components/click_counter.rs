//! Standalone click counter.

use leptos::prelude::*;

use crate::state::counter::CounterState;

/// Button that increments the number shown next to it.
#[component]
pub fn ClickCounter() -> impl IntoView {
    let counter = RwSignal::new(CounterState::default());

    view! {
        <section class="click-counter">
            <button on:click=move |_| counter.update(CounterState::increment)>
                "Click me"
            </button>
            " "
            <span id="counter">{move || counter.get().count}</span>
        </section>
    }
}
