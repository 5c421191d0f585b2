//! Sidebar Component
//!
//! Slide-in navigation for narrow viewports.

use leptos::prelude::*;

use crate::context::use_site;
use crate::store::{dispatch, use_view_store, ViewEvent, ViewStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_view_store();
    let nav = StoredValue::new(use_site().profile().nav.clone());

    let close = move |_: web_sys::MouseEvent| dispatch(store, ViewEvent::CloseSidebar);

    view! {
        <Show when=move || store.sidebar_open().get()>
            <div class="sidebar-backdrop" on:click=close></div>
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2>"Menu"</h2>
                    <button class="icon-btn" on:click=close>"✕"</button>
                </div>
                <nav class="sidebar-nav">
                    {nav.get_value().into_iter().enumerate().map(|(index, link)| view! {
                        <a
                            href=link.href
                            class="sidebar-link"
                            style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)
                            on:click=close
                        >
                            {link.name}
                        </a>
                    }).collect_view()}
                </nav>
            </aside>
        </Show>
    }
}
