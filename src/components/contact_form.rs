//! Contact Form Component
//!
//! Name/email/subject/message form with a simulated asynchronous
//! submission (there is no form backend; the original site stubbed this
//! with a one-second delay). The subject can be prefilled with a garden
//! number carried over from a detail page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

#[component]
pub fn ContactForm(garden: Option<String>) -> impl IntoView {
    let initial_subject = garden
        .map(|number| format!("Anfrage zu Garten {}", number))
        .unwrap_or_default();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(initial_subject);
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        set_submitted.set(false);

        spawn_local(async move {
            // Simulated transmission latency
            TimeoutFuture::new(1_000).await;
            set_name.set(String::new());
            set_email.set(String::new());
            set_subject.set(String::new());
            set_message.set(String::new());
            set_submitting.set(false);
            set_submitted.set(true);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <Show when=move || submitted.get()>
                <div class="form-success">
                    "Vielen Dank! Ihre Nachricht wurde übermittelt, wir melden uns zeitnah."
                </div>
            </Show>

            <label>
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label>
                "E-Mail"
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Betreff"
                <input
                    type="text"
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Nachricht"
                <textarea
                    rows="6"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_message.set(area.value());
                    }
                ></textarea>
            </label>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Wird gesendet…" } else { "Nachricht senden" }}
            </button>
        </form>
    }
}
