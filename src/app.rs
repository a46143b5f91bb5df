//! Calorie List Frontend App
//!
//! Shell component: one list per catalog section, then the interactive form.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::{InteractiveForm, ListView};

#[component]
pub fn App() -> impl IntoView {
    let lists = match Catalog::bundled() {
        Ok(catalog) => {
            log::info!("Loaded {} lists, {} items", catalog.lists.len(), catalog.item_count());
            catalog
                .lists
                .into_iter()
                .map(|list| view! { <ListView category=list.category items=list.items /> })
                .collect_view()
                .into_any()
        }
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            view! { <p class="catalog-error">{format!("Could not load catalog: {}", e)}</p> }.into_any()
        }
    };

    view! {
        <main class="app-layout">
            <section class="lists">{lists}</section>
            <section class="form">
                <InteractiveForm />
            </section>
        </main>
    }
}
