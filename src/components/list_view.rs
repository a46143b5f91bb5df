//! List View Component
//!
//! Category heading followed by an ordered, keyed list of items.

use leptos::prelude::*;

use crate::models::{list_entries, Item, ListEntry, ENTRY_SEPARATOR};

/// Renders `category` as a heading and one `<li>` per item, keyed by item id.
///
/// Duplicate ids are a caller error.
#[component]
pub fn ListView(
    #[prop(into)] category: String,
    items: Vec<Item>,
) -> impl IntoView {
    let entries = list_entries(&items);

    view! {
        <h3 class="list-category">{category}</h3>
        <ol class="list-items">
            <For
                each=move || entries.clone()
                key=|entry| entry.key
                children=move |entry: ListEntry| {
                    let title = entry.text();
                    view! {
                        <li title=title>
                            {entry.name}
                            {ENTRY_SEPARATOR}
                            <b>{entry.calories}</b>
                        </li>
                    }
                }
            />
        </ol>
    }
}
