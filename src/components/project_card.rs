//! Project Card Component
//!
//! Gallery tile for one project, plus the image/placeholder block shared
//! with the modal.

use leptos::prelude::*;

use crate::markdown::parse_markdown_inline;
use crate::models::Project;
use crate::selection::SelectionEvent;
use crate::store::{dispatch, use_view_store, ViewEvent};

/// Tech tags shown on a card before collapsing into "+N"
pub const MAX_CARD_TECH: usize = 3;

/// Project image, or a category-coloured placeholder tile when there is none
#[component]
pub fn ProjectMedia(project: Project, #[prop(into)] class: String) -> impl IntoView {
    let category = project.category;
    match project.image {
        Some(src) => view! {
            <img class=class src=src alt=project.title loading="lazy" />
        }
        .into_any(),
        None => view! {
            <div class=format!("{} placeholder {}", class, category.gradient_class())>
                <span class="placeholder-icon">{category.placeholder_icon()}</span>
            </div>
        }
        .into_any(),
    }
}

/// Category badge
#[component]
pub fn CategoryBadge(project: Project) -> impl IntoView {
    let category = project.category;
    view! {
        <span class=format!("badge {}", category.gradient_class())>{category.badge()}</span>
    }
}

/// Gallery card; clicking opens the project modal
#[component]
pub fn ProjectCard(
    project: Project,
    /// Position within its column, staggers the entry animation
    #[prop(optional)]
    row: usize,
) -> impl IntoView {
    let store = use_view_store();
    let id = project.id;

    let shown_tech: Vec<String> = project.tech.iter().take(MAX_CARD_TECH).cloned().collect();
    let hidden_tech = project.tech.len().saturating_sub(MAX_CARD_TECH);

    view! {
        <article
            class="project-card"
            style=format!("animation-delay: {:.1}s;", row as f64 * 0.1)
            on:click=move |_| dispatch(store, ViewEvent::Selection(SelectionEvent::Select(id)))
        >
            <div class="card-media">
                <ProjectMedia project=project.clone() class="card-image" />
                <div class="card-overlay">
                    <span class="card-overlay-icon">"👁"</span>
                </div>
                <div class="card-badge">
                    <CategoryBadge project=project.clone() />
                </div>
            </div>

            <div class="card-body">
                {project.discipline.clone().map(|discipline| view! {
                    <div class="card-discipline">{discipline}</div>
                })}
                <h3 class="card-title">{project.title.clone()}</h3>
                <p class="card-description" inner_html=parse_markdown_inline(&project.description)></p>

                {(!shown_tech.is_empty()).then(|| view! {
                    <div class="tech-tags">
                        {shown_tech.into_iter().map(|tech| view! {
                            <span class="tech-tag">{tech}</span>
                        }).collect_view()}
                        {(hidden_tech > 0).then(|| view! {
                            <span class="tech-tag">{format!("+{}", hidden_tech)}</span>
                        })}
                    </div>
                })}
            </div>
        </article>
    }
}
