//! Folio App
//!
//! Loads the bundled content, provides shared state and lays out the page.

use leptos::prelude::*;
use leptos_pointer::{bind_window_keydown, bind_window_resize, bind_window_scroll};
use reactive_stores::Store;

use crate::catalog::Content;
use crate::components::{
    AboutSection, ContactSection, FloatingShapes, HeroSection, ProjectsSection, Sidebar,
    StickyNavbar, TasksSection,
};
use crate::context::SiteContext;
use crate::selection::key_event;
use crate::store::{dispatch, ViewEvent, ViewState, ViewStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    match Content::bundled() {
        Ok(content) => {
            log::info!(
                "[APP] Loaded {} projects, {} task groups",
                content.catalog.len(),
                content.tasks.len()
            );
            if content.catalog.is_empty() {
                log::warn!("[APP] Project catalog is empty");
            }
            view! { <Portfolio content=content /> }.into_any()
        }
        Err(e) => {
            log::error!("[APP] Failed to load content: {}", e);
            view! {
                <div class="load-error">
                    <h1>"Something went wrong"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Portfolio(content: Content) -> impl IntoView {
    let owner = content.site.owner.clone();
    let store = Store::new(ViewState::default());
    provide_context(store);
    provide_context(SiteContext::new(content));

    bind_window_resize(move |width| dispatch(store, ViewEvent::Resize(width)));
    bind_window_scroll(move |y| dispatch(store, ViewEvent::Scroll(y)));
    bind_window_keydown(move |key| {
        if let Some(event) = key_event(key) {
            dispatch(store, ViewEvent::Selection(event));
        }
    });

    // Theme class lives on <html> so it reaches the body background
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                log::warn!("[APP] Could not toggle theme class: {:?}", e);
            }
        }
    });

    view! {
        <div class="app">
            <FloatingShapes />
            <StickyNavbar />
            <Sidebar />
            <main>
                <HeroSection />
                <AboutSection />
                <ProjectsSection />
                <TasksSection />
                <ContactSection />
            </main>
            <footer class="footer">
                {format!("© {}", owner)}
            </footer>
        </div>
    }
}
