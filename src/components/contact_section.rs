//! Contact Section Component
//!
//! Contact details and a controlled message form. Submission only logs
//! the form contents.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::{AnimatedSection, RevealDirection};
use crate::contact::{mailto_href, ContactField, ContactForm};
use crate::context::use_site;

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = use_site().profile().clone();
    let form = RwSignal::new(ContactForm::default());

    let field_value = move |field: ContactField| form.with(|f| f.get(field).to_string());
    let set_field = move |field: ContactField, ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        log::info!("[CONTACT] Form submitted {}", submitted.summary());
        match serde_wasm_bindgen::to_value(&submitted) {
            Ok(value) => web_sys::console::log_2(&JsValue::from_str("Form submitted:"), &value),
            Err(e) => log::warn!("[CONTACT] Could not serialize form: {}", e),
        }
    };

    let mail_subject = profile.mail_subject.clone();

    view! {
        <section id="contact" class="section contact">
            <div class="section-inner">
                <AnimatedSection direction=RevealDirection::Up>
                    <h2 class="section-title">"Get In Touch"</h2>
                </AnimatedSection>

                <div class="contact-grid">
                    <AnimatedSection direction=RevealDirection::Left delay=0.2>
                        <div class="contact-info">
                            {profile.contact.into_iter().map(|entry| {
                                let href = entry.mail.then(|| mailto_href(&entry.value, &mail_subject));
                                view! {
                                    <div class="contact-entry">
                                        <div class="contact-icon">{entry.icon}</div>
                                        <div>
                                            <h3>{entry.label}</h3>
                                            {match href {
                                                Some(href) => view! { <a href=href>{entry.value}</a> }.into_any(),
                                                None => view! { <p>{entry.value}</p> }.into_any(),
                                            }}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </AnimatedSection>

                    <AnimatedSection direction=RevealDirection::Right delay=0.4>
                        <form class="contact-form" on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Your Name"
                                required
                                prop:value=move || field_value(ContactField::Name)
                                on:input=move |ev| set_field(ContactField::Name, ev)
                            />
                            <input
                                type="email"
                                placeholder="Your Email"
                                required
                                prop:value=move || field_value(ContactField::Email)
                                on:input=move |ev| set_field(ContactField::Email, ev)
                            />
                            <textarea
                                rows="5"
                                placeholder="Your Message"
                                required
                                prop:value=move || field_value(ContactField::Message)
                                on:input=move |ev| set_field(ContactField::Message, ev)
                            ></textarea>
                            <button type="submit" class="btn btn-primary">"Send Message"</button>
                        </form>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}
