//! Masonry Gallery Component
//!
//! Filter buttons over a round-robin column layout. Columns are recomputed
//! in full whenever the filter or the column count changes.

use leptos::prelude::*;

use crate::components::{ProjectCard, ProjectModal};
use crate::context::use_site;
use crate::gallery::{layout, Filter};
use crate::store::{dispatch, use_view_store, ViewEvent, ViewStateStoreFields};

/// Category filter buttons
#[component]
fn FilterBar() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="filter-bar">
            {Filter::CHOICES.iter().map(|&filter| {
                let is_active = move || store.active_filter().get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            log::info!("[GALLERY] Filter set to {}", filter.key());
                            dispatch(store, ViewEvent::SetFilter(filter));
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn MasonryGallery() -> impl IntoView {
    let store = use_view_store();
    let projects = StoredValue::new(use_site().catalog().projects().to_vec());

    let columns = Memo::new(move |_| {
        let filter = store.active_filter().get();
        let count = store.column_count().get();
        projects.with_value(|all| layout(all, filter, count))
    });

    let grid_class = move || format!("masonry cols-{}", columns.with(|c| c.len()));

    view! {
        <div class="gallery">
            <FilterBar />

            <div class=grid_class>
                {move || columns.get().into_iter().map(|bucket| view! {
                    <div class="masonry-column">
                        {bucket.into_iter().enumerate().map(|(row, project)| view! {
                            <ProjectCard project=project row=row />
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>

            {move || columns.with(|c| c.iter().all(|bucket| bucket.is_empty())).then(|| view! {
                <p class="gallery-empty">"No projects in this category yet."</p>
            })}

            <ProjectModal />
        </div>
    }
}
