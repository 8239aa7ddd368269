//! Inquiry drawer: slide-in panel for expressing interest in a domain.
//!
//! Validation is client-side only. A successful submission emits a log
//! line and a confirmation dialog; wiring to a real inbox is a
//! deployment concern.

use dioxus::prelude::*;

use crate::state::use_inquiry;

/// Validated inquiry form fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub nda: bool,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Required-field validation, matching the form's inline announcements.
pub fn validate(form: &InquiryForm) -> FormErrors {
    FormErrors {
        name: form.name.trim().is_empty().then_some("Please enter your name"),
        email: form.email.trim().is_empty().then_some("Please enter your email"),
        message: form
            .message
            .trim()
            .is_empty()
            .then_some("Please provide a message"),
    }
}

fn confirm_submission() {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Thank you for your inquiry!");
        }
    }
}

#[component]
pub fn InquiryDrawer() -> Element {
    let inquiry = use_inquiry();
    let mut form = use_signal(InquiryForm::default);
    let mut errors = use_signal(FormErrors::default);

    let is_open = (inquiry.is_open)();
    if !is_open {
        return rsx! {};
    }

    let domain_name = inquiry
        .domain
        .read()
        .as_ref()
        .map(|d| d.name.clone())
        .unwrap_or_default();
    let submit_domain = domain_name.clone();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let current = form.read().clone();
        let validation = validate(&current);
        if validation.is_empty() {
            tracing::info!(
                domain = %submit_domain,
                from = %current.email,
                nda = current.nda,
                "inquiry submitted"
            );
            confirm_submission();
            inquiry.close();
            form.set(InquiryForm::default());
            errors.set(FormErrors::default());
        } else {
            errors.set(validation);
        }
    };

    rsx! {
        aside {
            role: "dialog",
            aria_modal: "true",
            aria_label: "Inquiry form",
            class: "fixed top-0 right-0 h-full w-96 max-w-full bg-white shadow-xl z-50 overflow-y-auto",

            div {
                class: "p-6 flex flex-col h-full",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-semibold text-gray-900", "Inquire About {domain_name}" }
                    button {
                        class: "text-2xl text-gray-400 hover:text-gray-700",
                        aria_label: "Close inquiry drawer",
                        onclick: move |_| inquiry.close(),
                        "\u{00d7}"
                    }
                }

                form {
                    class: "flex-1 flex flex-col gap-3",
                    novalidate: true,
                    onsubmit: handle_submit,

                    label { r#for: "inquiry-name", class: "text-sm font-medium text-gray-700", "Name" }
                    input {
                        id: "inquiry-name",
                        r#type: "text",
                        value: "{form.read().name}",
                        oninput: move |e| form.write().name = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                    }
                    if let Some(err) = errors.read().name {
                        span { class: "text-sm text-red-600", "{err}" }
                    }

                    label { r#for: "inquiry-email", class: "text-sm font-medium text-gray-700", "Email" }
                    input {
                        id: "inquiry-email",
                        r#type: "email",
                        value: "{form.read().email}",
                        oninput: move |e| form.write().email = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                    }
                    if let Some(err) = errors.read().email {
                        span { class: "text-sm text-red-600", "{err}" }
                    }

                    label { r#for: "inquiry-message", class: "text-sm font-medium text-gray-700", "Message" }
                    textarea {
                        id: "inquiry-message",
                        rows: 4,
                        value: "{form.read().message}",
                        oninput: move |e| form.write().message = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm resize-y",
                    }
                    if let Some(err) = errors.read().message {
                        span { class: "text-sm text-red-600", "{err}" }
                    }

                    label {
                        class: "inline-flex items-center gap-2 text-sm text-gray-600 mt-2",
                        input {
                            r#type: "checkbox",
                            checked: form.read().nda,
                            onchange: move |e| form.write().nda = e.checked(),
                        }
                        span { "I agree to the NDA" }
                    }

                    button {
                        r#type: "submit",
                        class: "mt-auto px-4 py-2.5 bg-indigo-600 text-white text-sm font-semibold rounded-lg hover:bg-indigo-700",
                        "Submit Inquiry"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let errors = validate(&InquiryForm::default());
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn whitespace_only_fields_fail() {
        let form = InquiryForm {
            name: "  ".into(),
            email: "a@b.co".into(),
            message: "Interested.".into(),
            nda: false,
        };
        let errors = validate(&form);
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn complete_form_passes() {
        let form = InquiryForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Is the name still available?".into(),
            nda: true,
        };
        assert!(validate(&form).is_empty());
    }
}
