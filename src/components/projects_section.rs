//! Projects Section Component
//!
//! Filterable masonry gallery followed by one showcase per category.

use leptos::prelude::*;

use crate::components::{AnimatedSection, CategoryShowcase, MasonryGallery, RevealDirection};
use crate::models::Category;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <div class="section-inner">
                <AnimatedSection direction=RevealDirection::Up>
                    <h2 class="section-title">"Portfolio Gallery"</h2>
                    <p class="section-subtitle">
                        "A mix of design work, code and live websites. Pick a category or open any project for details."
                    </p>
                </AnimatedSection>

                <MasonryGallery />

                {Category::ALL.iter().map(|&category| view! {
                    <CategoryShowcase category=category />
                }).collect_view()}
            </div>
        </section>
    }
}
