//! About Section Component
//!
//! Markdown bio next to a grid of skill tiles.

use leptos::prelude::*;

use crate::components::{AnimatedSection, RevealDirection};
use crate::context::use_site;
use crate::markdown::parse_markdown;

#[component]
pub fn AboutSection() -> impl IntoView {
    let profile = use_site().profile().clone();
    let about_html = parse_markdown(&profile.about);

    view! {
        <section id="about" class="section about">
            <div class="section-inner">
                <AnimatedSection direction=RevealDirection::Left>
                    <h2 class="section-title">"About Me"</h2>
                </AnimatedSection>

                <div class="about-grid">
                    <AnimatedSection direction=RevealDirection::Left delay=0.2>
                        <div class="about-text" inner_html=about_html></div>
                    </AnimatedSection>

                    <AnimatedSection direction=RevealDirection::Right delay=0.4>
                        <div class="skills-grid">
                            {profile.skills.into_iter().enumerate().map(|(index, skill)| view! {
                                <div class="skill-tile" style=format!("animation-delay: {:.1}s;", 0.2 + index as f64 * 0.1)>
                                    <div class=format!("skill-icon {}", skill.gradient)>{skill.icon}</div>
                                    <h3 class="skill-name">{skill.name}</h3>
                                </div>
                            }).collect_view()}
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}
