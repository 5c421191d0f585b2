//! Project Modal Component
//!
//! Full detail view for the selected project. The backdrop and the close
//! button close it; clicks inside the panel do not reach the backdrop.

use leptos::prelude::*;

use crate::components::{CategoryBadge, ProjectMedia};
use crate::context::use_site;
use crate::markdown::parse_markdown_inline;
use crate::selection::{CloseTrigger, SelectionEvent};
use crate::store::{dispatch, use_view_store, ViewEvent, ViewStateStoreFields};

#[component]
pub fn ProjectModal() -> impl IntoView {
    let store = use_view_store();
    let catalog = StoredValue::new(use_site().catalog().clone());

    let selected = move || {
        let id = store.selection().get().open_id()?;
        catalog.with_value(|c| c.get(id).cloned())
    };

    // Page behind the modal stops scrolling while it is open
    Effect::new(move |_| {
        let open = store.selection().get().is_open();
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body.class_list().toggle_with_force("modal-open", open);
        }
    });

    let close = move |trigger: CloseTrigger| {
        log::debug!("[MODAL] Closed via {:?}", trigger);
        dispatch(store, ViewEvent::Selection(SelectionEvent::Close(trigger)));
    };

    move || selected().map(|project| {
        let category = project.category;
        view! {
            <div class="modal-backdrop" on:click=move |_| close(CloseTrigger::Backdrop)>
                <div class="modal-panel" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <ProjectMedia project=project.clone() class="modal-image" />
                        <button
                            class="modal-close"
                            title="Close"
                            on:click=move |_| close(CloseTrigger::Button)
                        >
                            "✕"
                        </button>
                        <div class="modal-badge">
                            <CategoryBadge project=project.clone() />
                        </div>
                    </div>

                    <div class="modal-body">
                        {project.discipline.clone().map(|discipline| view! {
                            <div class="card-discipline">{discipline}</div>
                        })}
                        <h2 class="modal-title">{project.title.clone()}</h2>
                        <p class="modal-description" inner_html=parse_markdown_inline(&project.description)></p>

                        {(!project.tech.is_empty()).then(|| view! {
                            <div class="modal-tech">
                                <h3>"Technologies Used"</h3>
                                <div class="tech-tags">
                                    {project.tech.clone().into_iter().map(|tech| view! {
                                        <span class="tech-pill">{tech}</span>
                                    }).collect_view()}
                                </div>
                            </div>
                        })}

                        <div class="modal-actions">
                            {project.links.source.clone().map(|href| view! {
                                <a class="btn btn-dark" href=href target="_blank" rel="noopener noreferrer">
                                    "View Code"
                                </a>
                            })}
                            {project.links.live.clone().map(|href| view! {
                                <a class="btn btn-primary" href=href target="_blank" rel="noopener noreferrer">
                                    {category.live_label()}
                                </a>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        }
    })
}
