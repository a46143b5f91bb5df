//! Interactive Form Component
//!
//! Name, typed text, age and employment cells with buttons/input to change them.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::store::{employed_label, FormState, FormStateStoreFields, FormStore};

/// Form owning its own `FormState`; every instance starts from the defaults
#[component]
pub fn InteractiveForm() -> impl IntoView {
    let state: FormStore = Store::new(FormState::new());

    let set_name = move |_| {
        state.update(FormState::set_name_action);
        log::debug!("name set to {}", state.name().get_untracked());
    };

    let increment_age = move |_| {
        state.update(FormState::increment_age);
        log::debug!("age is now {}", state.age().get_untracked());
    };

    let toggle_employed = move |_| {
        state.update(FormState::toggle_employed);
        log::debug!("employed: {}", state.is_employed().get_untracked());
    };

    view! {
        <div class="interactive-form">
            <p>"Name: " {move || state.name().get()}</p>
            <button on:click=set_name>"Set Name"</button>

            <input
                type="text"
                prop:value=move || state.typed_text().get()
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        log::warn!("input event without an input target");
                        return;
                    };
                    let text = input.value();
                    log::debug!("typed text changed ({} chars)", text.chars().count());
                    state.update(|s| s.on_typing_change(text));
                }
            />
            <p>"Typing: " {move || state.typed_text().get()}</p>

            <p>"Age: " {move || state.age().get()}</p>
            <button on:click=increment_age>"Increment Age"</button>

            <p>"Is employed: " {move || employed_label(state.is_employed().get())}</p>
            <button on:click=toggle_employed>"Toggle Status"</button>
        </div>
    }
}
