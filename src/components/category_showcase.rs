//! Category Showcase Component
//!
//! A titled strip of every project in one category.

use leptos::prelude::*;

use crate::components::{AnimatedSection, CategoryBadge, ProjectMedia, RevealDirection};
use crate::context::use_site;
use crate::gallery::{filter_projects, Filter};
use crate::models::Category;
use crate::selection::SelectionEvent;
use crate::store::{dispatch, use_view_store, ViewEvent};

#[component]
pub fn CategoryShowcase(category: Category) -> impl IntoView {
    let store = use_view_store();
    let projects = filter_projects(use_site().catalog().projects(), Filter::Only(category));

    view! {
        <div class="showcase" id=format!("showcase-{}", category.key())>
            <AnimatedSection direction=RevealDirection::Up>
                <h3 class="showcase-title">{category.showcase_title()}</h3>
            </AnimatedSection>

            <div class="showcase-grid">
                {projects.into_iter().enumerate().map(|(index, project)| {
                    let id = project.id;
                    view! {
                        <AnimatedSection direction=RevealDirection::Up delay=index as f64 * 0.1>
                            <div class="showcase-card">
                                <div class="showcase-media">
                                    <ProjectMedia project=project.clone() class="showcase-image" />
                                    <CategoryBadge project=project.clone() />
                                </div>
                                <div class="showcase-body">
                                    <h4>{project.title.clone()}</h4>
                                    <p>{project.description.clone()}</p>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| dispatch(store, ViewEvent::Selection(SelectionEvent::Select(id)))
                                    >
                                        "View Project"
                                    </button>
                                </div>
                            </div>
                        </AnimatedSection>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
