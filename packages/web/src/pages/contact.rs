//! Contact page: general inquiries not tied to a specific listing.

use dioxus::prelude::*;

use crate::components::{validate, FormErrors, InquiryForm};

fn confirm_submission() {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Thanks \u{2014} we will be in touch within three business days.");
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(InquiryForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut sent = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let current = form.read().clone();
        let validation = validate(&current);
        if validation.is_empty() {
            tracing::info!(from = %current.email, "contact form submitted");
            confirm_submission();
            form.set(InquiryForm::default());
            errors.set(FormErrors::default());
            sent.set(true);
        } else {
            errors.set(validation);
        }
    };

    rsx! {
        div {
            class: "max-w-xl mx-auto px-4 sm:px-6 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Contact" }
            p {
                class: "text-gray-600 mb-6",
                "Selling a name, structuring a lease, or anything else \u{2014} write to us here."
            }

            if sent() {
                div {
                    class: "bg-emerald-50 border border-emerald-200 text-emerald-700 p-4 rounded-lg mb-6",
                    "Message received. We reply to every submission."
                }
            }

            form {
                class: "flex flex-col gap-3",
                novalidate: true,
                onsubmit: handle_submit,

                label { r#for: "contact-name", class: "text-sm font-medium text-gray-700", "Name" }
                input {
                    id: "contact-name",
                    r#type: "text",
                    value: "{form.read().name}",
                    oninput: move |e| form.write().name = e.value(),
                    class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                }
                if let Some(err) = errors.read().name {
                    span { class: "text-sm text-red-600", "{err}" }
                }

                label { r#for: "contact-email", class: "text-sm font-medium text-gray-700", "Email" }
                input {
                    id: "contact-email",
                    r#type: "email",
                    value: "{form.read().email}",
                    oninput: move |e| form.write().email = e.value(),
                    class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                }
                if let Some(err) = errors.read().email {
                    span { class: "text-sm text-red-600", "{err}" }
                }

                label { r#for: "contact-message", class: "text-sm font-medium text-gray-700", "Message" }
                textarea {
                    id: "contact-message",
                    rows: 6,
                    value: "{form.read().message}",
                    oninput: move |e| form.write().message = e.value(),
                    class: "px-3 py-2 border border-gray-300 rounded-lg text-sm resize-y",
                }
                if let Some(err) = errors.read().message {
                    span { class: "text-sm text-red-600", "{err}" }
                }

                button {
                    r#type: "submit",
                    class: "mt-3 px-4 py-2.5 bg-indigo-600 text-white text-sm font-semibold rounded-lg hover:bg-indigo-700",
                    "Send Message"
                }
            }
        }
    }
}
