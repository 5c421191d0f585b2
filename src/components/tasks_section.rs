//! Tasks Section Component
//!
//! Grouped checklist with a completion counter. Each category card can be
//! focused; a soft follower with ripples and a dot trail tracks the
//! pointer inside the section.

use leptos::prelude::*;
use leptos_pointer::{
    create_pointer_signals, make_on_pointer_enter, make_on_pointer_leave, make_on_pointer_move,
};

use crate::components::{AnimatedSection, RevealDirection};
use crate::context::use_site;
use crate::models::TaskCategory;
use crate::motion::{follower_style, ripple_style, trail_dot_style, RIPPLES, TRAIL_DOTS};
use crate::store::{dispatch, use_view_store, ViewEvent, ViewStateStoreFields};
use crate::tasks::TaskId;

#[component]
pub fn TasksSection() -> impl IntoView {
    let store = use_view_store();
    let site = use_site();
    let total = site.task_count();
    let categories = site.tasks().to_vec();

    let pointer = create_pointer_signals();
    let follower = move || {
        let position = pointer.position_read.get();
        follower_style(position.x, position.y, pointer.hovering_read.get())
    };

    let completed = move || store.checklist().with(|c| c.completed_count());

    view! {
        <section
            id="tasks"
            class="section tasks"
            on:mousemove=make_on_pointer_move(pointer)
            on:mouseenter=make_on_pointer_enter(pointer)
            on:mouseleave=make_on_pointer_leave(pointer)
        >
            <div class="pointer-follower" style=follower></div>
            {RIPPLES.iter().map(|ripple| {
                let ripple = *ripple;
                view! {
                    <div
                        class="pointer-ripple"
                        style=move || {
                            let position = pointer.position_read.get();
                            ripple_style(&ripple, position.x, position.y)
                        }
                    ></div>
                }
            }).collect_view()}
            {(0..TRAIL_DOTS).map(|index| view! {
                <div
                    class="pointer-trail"
                    style=move || {
                        let position = pointer.position_read.get();
                        trail_dot_style(index, position.x, position.y)
                    }
                ></div>
            }).collect_view()}

            <div class="section-inner">
                <AnimatedSection direction=RevealDirection::Up>
                    <h2 class="section-title">"Task List"</h2>
                    <p class="task-counter">
                        {move || format!("{} tasks completed", completed())}
                        <span class="task-counter-total">{format!(" of {}", total)}</span>
                    </p>
                </AnimatedSection>

                <div class="task-grid">
                    {categories.into_iter().enumerate().map(|(index, category)| view! {
                        <AnimatedSection direction=RevealDirection::Up delay=index as f64 * 0.1>
                            <TaskCategoryCard category=category />
                        </AnimatedSection>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TaskCategoryCard(category: TaskCategory) -> impl IntoView {
    let store = use_view_store();
    let task_link = use_site().profile().task_link.clone();
    let title = StoredValue::new(category.title.clone());
    let task_count = category.tasks.len();

    let focused = Memo::new(move |_| {
        let current = store.focused_task_category().get();
        title.with_value(|t| current.as_deref() == Some(t.as_str()))
    });
    let done_here = move || title.with_value(|t| store.checklist().with(|c| c.completed_in(t)));

    view! {
        <div class=move || if focused.get() { "task-card focused" } else { "task-card" }>
            <button
                class="task-card-header"
                on:click=move |_| dispatch(store, ViewEvent::FocusTaskCategory(title.get_value()))
            >
                <h3>{category.title.clone()}</h3>
                <span class="task-card-progress">
                    {move || format!("{}/{}", done_here(), task_count)}
                </span>
            </button>

            <ul class="task-rows">
                {category.tasks.into_iter().enumerate().map(|(index, text)| {
                    let id = StoredValue::new(TaskId::new(title.get_value(), index));
                    let done = move || id.with_value(|id| store.checklist().with(|c| c.is_completed(id)));
                    view! {
                        <li class=move || if done() { "task-row done" } else { "task-row" }>
                            <button
                                class="task-check"
                                title="Toggle task"
                                on:click=move |_| dispatch(store, ViewEvent::ToggleTask(id.get_value()))
                            >
                                {move || if done() { "✓" } else { "" }}
                            </button>
                            <span class="task-text">{format!("{}. {}", index + 1, text)}</span>
                            <a
                                class="task-link"
                                href=task_link.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Open task reference"
                            >
                                "↗"
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
