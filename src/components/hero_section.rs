//! Hero Section Component
//!
//! Landing block with the owner's name, rotating roles and call-to-action links.

use leptos::prelude::*;

use crate::components::{AnimatedSection, RevealDirection, TextReveal, TypewriterText};
use crate::context::use_site;

#[component]
pub fn HeroSection() -> impl IntoView {
    let profile = use_site().profile().clone();

    view! {
        <section id="home" class="hero">
            <div class="hero-inner">
                <div class="hero-avatar">
                    <div class="hero-avatar-inner gradient-text">{profile.initials}</div>
                </div>

                <h1 class="hero-title">
                    <TextReveal text="Hi, I'm" class="hero-greeting" />
                    <span class="gradient-text">{profile.owner}</span>
                </h1>

                <p class="hero-roles">
                    <TypewriterText texts=profile.roles class="gradient-text" />
                </p>

                <p class="hero-tagline">
                    <TextReveal text=profile.tagline delay=0.5 />
                </p>

                <div class="hero-actions">
                    <a class="btn btn-primary" href="#projects">"View My Work"</a>
                    <a class="btn btn-outline" href="#contact">"Get In Touch"</a>
                </div>

                <AnimatedSection direction=RevealDirection::Down delay=1.0>
                    <a href="#about" class="scroll-hint" title="Scroll down">"⌄"</a>
                </AnimatedSection>
            </div>
        </section>
    }
}
