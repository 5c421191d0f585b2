//! Floating Shapes Component
//!
//! Decorative background shapes drifting on a fixed clock.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::motion::{shape_style, FLOATING_SHAPES};

/// Roughly 30 frames per second
const FRAME_MS: u32 = 33;

#[component]
pub fn FloatingShapes() -> impl IntoView {
    let (elapsed_secs, set_elapsed_secs) = signal(0.0f64);

    let started = js_sys::Date::now();
    Interval::new(FRAME_MS, move || {
        set_elapsed_secs.set((js_sys::Date::now() - started).max(0.0) / 1000.0);
    })
    .forget();

    view! {
        <div class="floating-shapes" aria-hidden="true">
            {FLOATING_SHAPES.iter().map(|shape| {
                let shape = *shape;
                view! {
                    <div
                        class=shape.kind.class()
                        style=move || shape_style(&shape, elapsed_secs.get())
                    ></div>
                }
            }).collect_view()}
        </div>
    }
}
