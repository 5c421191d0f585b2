//! Animated Section Wrapper
//!
//! Fades children in from one side.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    fn class(self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal reveal-up",
            RevealDirection::Down => "reveal reveal-down",
            RevealDirection::Left => "reveal reveal-left",
            RevealDirection::Right => "reveal reveal-right",
        }
    }
}

#[component]
pub fn AnimatedSection(
    #[prop(optional)] direction: RevealDirection,
    /// Seconds before the reveal starts
    #[prop(optional)]
    delay: f64,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=direction.class() style=format!("animation-delay: {:.2}s;", delay)>
            {children()}
        </div>
    }
}
