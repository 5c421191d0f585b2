//! Sticky Navbar Component
//!
//! Top bar with section links, theme toggle and the mobile menu button.
//! Slides away while scrolling down.

use leptos::prelude::*;

use crate::context::use_site;
use crate::store::{dispatch, use_view_store, ViewEvent, ViewStateStoreFields};

#[component]
pub fn StickyNavbar() -> impl IntoView {
    let store = use_view_store();
    let profile = use_site().profile().clone();

    let header_class = move || {
        if store.navbar().get().visible {
            "navbar"
        } else {
            "navbar hidden"
        }
    };

    view! {
        <header class=header_class>
            <div class="navbar-inner">
                <a href="#home" class="navbar-brand gradient-text">{profile.owner}</a>

                <nav class="navbar-links">
                    {profile.nav.into_iter().map(|link| view! {
                        <a href=link.href class="navbar-link">{link.name}</a>
                    }).collect_view()}
                </nav>

                <div class="navbar-actions">
                    <button
                        class="icon-btn"
                        title="Toggle theme"
                        on:click=move |_| dispatch(store, ViewEvent::ToggleDarkMode)
                    >
                        {move || if store.dark_mode().get() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="icon-btn menu-btn"
                        title="Menu"
                        on:click=move |_| dispatch(store, ViewEvent::ToggleSidebar)
                    >
                        {move || if store.sidebar_open().get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
