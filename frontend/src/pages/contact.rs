use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use crate::config;
use crate::simulated::{run_scripted, Generation, StatusAction, SubmitStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    // Returns a copy with one field replaced, leaving the others untouched.
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Subject => next.subject = value,
            ContactField::Message => next.message = value,
        }
        next
    }
}

// (question, answer)
const FAQ: [(&str, &str); 3] = [
    ("How can I support coral conservation?", "You can support our work through donations, volunteering, reducing your carbon footprint, using reef-safe sunscreen, and spreading awareness about coral conservation."),
    ("Do you offer educational programs for schools?", "Yes, we offer virtual and in-person educational programs for K-12 schools and universities. Contact our education team for more information."),
    ("How can I visit a coral restoration site?", "We organize guided tours to our restoration sites for certified divers. Check our events calendar or contact us for upcoming opportunities."),
];

// (title, text, button)
const GET_INVOLVED: [(&str, &str, &str); 2] = [
    ("Volunteer Opportunities", "Join our team of dedicated volunteers for coral monitoring, beach cleanups, and community education events.", "Apply to Volunteer"),
    ("Research Collaborations", "We welcome partnerships with universities, research institutions, and other conservation organizations.", "Propose a Project"),
];

fn status_panel(status: SubmitStatus) -> Option<Html> {
    match status {
        SubmitStatus::Success => Some(html! {
            <div class="contact-status success">
                <div class="contact-status-icon">{"✓"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. We've received your message and will respond shortly."}</p>
            </div>
        }),
        SubmitStatus::Error => Some(html! {
            <div class="contact-status error">
                <div class="contact-status-icon">{"!"}</div>
                <h3>{"Something Went Wrong"}</h3>
                <p>{"There was an error sending your message. Please try again or contact us directly."}</p>
            </div>
        }),
        SubmitStatus::Idle | SubmitStatus::InProgress => None,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let submit = use_reducer(SubmitStatus::default);
    let generation = use_state(Generation::default);

    {
        let generation = (*generation).clone();
        use_effect_with_deps(move |_| {
            move || generation.invalidate()
        }, ());
    }

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.set(form.with(field, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let submit = submit.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submit != SubmitStatus::Idle {
                return;
            }
            log::info!("Sending contact message from {}", form.email);
            submit.dispatch(StatusAction::Start);

            let finish = {
                let form = form.clone();
                let submit = submit.dispatcher();
                move || {
                    submit.dispatch(StatusAction::Finish);
                    form.set(ContactForm::default());
                }
            };
            let revert = {
                let submit = submit.dispatcher();
                move || submit.dispatch(StatusAction::Revert)
            };
            run_scripted(
                generation.issue(),
                config::SUBMIT_DELAY_MS,
                config::SUBMIT_SUCCESS_DISPLAY_MS,
                finish,
                revert,
            );
        })
    };

    let busy = submit.is_busy();
    let form_body = match status_panel(*submit) {
        Some(panel) => panel,
        None => html! {
            <form class="contact-form" onsubmit={on_submit}>
                <div class="contact-row">
                    <div class="contact-field">
                        <label for="name">{"Your Name"}</label>
                        <input
                            id="name"
                            name="name"
                            placeholder="John Doe"
                            value={form.value(ContactField::Name).to_string()}
                            oninput={on_input(ContactField::Name)}
                            required=true
                        />
                    </div>
                    <div class="contact-field">
                        <label for="email">{"Email Address"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="john@example.com"
                            value={form.value(ContactField::Email).to_string()}
                            oninput={on_input(ContactField::Email)}
                            required=true
                        />
                    </div>
                </div>
                <div class="contact-field">
                    <label for="subject">{"Subject"}</label>
                    <input
                        id="subject"
                        name="subject"
                        placeholder="How can we help you?"
                        value={form.value(ContactField::Subject).to_string()}
                        oninput={on_input(ContactField::Subject)}
                        required=true
                    />
                </div>
                <div class="contact-field">
                    <label for="message">{"Your Message"}</label>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="Tell us about your inquiry or how you'd like to get involved..."
                        value={form.value(ContactField::Message).to_string()}
                        oninput={on_input(ContactField::Message)}
                        required=true
                    />
                </div>
                <button type="submit" class="contact-button" disabled={busy}>
                    {
                        if busy {
                            html! { <><span class="spinner"></span>{"Sending..."}</> }
                        } else {
                            html! { {"➤ Send Message"} }
                        }
                    }
                </button>
            </form>
        },
    };

    html! {
        <main class="page contact-page">
            <div class="page-intro">
                <h1>{"Contact Us"}</h1>
                <p>{"Have questions about coral conservation or want to get involved? We'd love to hear from you."}</p>
            </div>

            <div class="contact-layout">
                <aside class="contact-sidebar">
                    <div class="contact-card">
                        <h2>{"Get in Touch"}</h2>
                        <p class="contact-muted">{"Our team is here to help with any questions about our conservation efforts."}</p>
                        <div class="contact-detail">
                            <span class="contact-icon">{"✉"}</span>
                            <div>
                                <p class="contact-detail-title">{"Email"}</p>
                                <p class="contact-muted">{"info@coralguard.org"}</p>
                                <p class="contact-muted">{"support@coralguard.org"}</p>
                            </div>
                        </div>
                        <div class="contact-detail">
                            <span class="contact-icon">{"☎"}</span>
                            <div>
                                <p class="contact-detail-title">{"Phone"}</p>
                                <p class="contact-muted">{"+1 (305) 555-0123"}</p>
                                <p class="contact-muted">{"Mon-Fri, 9am-5pm EST"}</p>
                            </div>
                        </div>
                        <div class="contact-detail">
                            <span class="contact-icon">{"⌖"}</span>
                            <div>
                                <p class="contact-detail-title">{"Office"}</p>
                                <p class="contact-muted">{"123 Ocean Drive"}</p>
                                <p class="contact-muted">{"Key Largo, FL 33037"}</p>
                                <p class="contact-muted">{"United States"}</p>
                            </div>
                        </div>
                    </div>

                    <div class="contact-card flush">
                        <h2>{"Visit Our Research Center"}</h2>
                        <div class="contact-map">
                            <span class="contact-icon">{"⌖"}</span>
                            <p>{"Interactive Map"}</p>
                            <p class="contact-muted">{"Map integration would be displayed here"}</p>
                        </div>
                        <p class="contact-visit">
                            {"Our research center is open to visitors Monday through Friday, 10am to 4pm. Guided tours are available by appointment."}
                        </p>
                    </div>
                </aside>

                <section class="contact-main">
                    <div class="contact-card">
                        <h2>{"Send Us a Message"}</h2>
                        <p class="contact-muted">{"Fill out the form below and we'll get back to you as soon as possible."}</p>
                        {form_body}
                    </div>

                    <div class="contact-involved">
                        { for GET_INVOLVED.iter().map(|(title, text, button)| html! {
                            <div class="contact-card">
                                <h2>{*title}</h2>
                                <p>{*text}</p>
                                <button class="contact-button">{*button}</button>
                            </div>
                        }) }
                    </div>

                    <div class="contact-card">
                        <h2>{"Frequently Asked Questions"}</h2>
                        { for FAQ.iter().map(|(question, answer)| html! {
                            <div class="contact-faq">
                                <h3>{*question}</h3>
                                <p>{*answer}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </div>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: minmax(260px, 1fr) 2fr;
                }
                @media (max-width: 768px) {
                    .contact-layout { grid-template-columns: 1fr; }
                }
                .contact-sidebar, .contact-main {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-card {
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #111827;
                    padding: 1.5rem;
                    color: #d1d5db;
                }
                .contact-card.flush { padding: 1.5rem 0 0; }
                .contact-card.flush h2 { padding: 0 1.5rem; }
                .contact-card h2 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .contact-muted {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0;
                }
                .contact-detail {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .contact-detail-title {
                    color: #fff;
                    font-weight: 500;
                    margin: 0;
                }
                .contact-icon { color: #2dd4bf; }
                .contact-map {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    aspect-ratio: 16 / 9;
                    background: #1f2937;
                    text-align: center;
                }
                .contact-visit {
                    padding: 1rem;
                    font-size: 0.875rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                .contact-row {
                    display: grid;
                    gap: 1rem;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                }
                .contact-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .contact-field label { color: #fff; }
                .contact-field input, .contact-field textarea {
                    border: 1px solid #374151;
                    border-radius: 6px;
                    background: #1f2937;
                    color: #fff;
                    padding: 0.5rem 0.75rem;
                    font: inherit;
                }
                .contact-field textarea { min-height: 150px; }
                .contact-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    width: 100%;
                    margin-top: 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #0d9488;
                    color: #fff;
                    padding: 0.6rem 1rem;
                    cursor: pointer;
                }
                .contact-button:hover { background: #0f766e; }
                .contact-button:disabled {
                    opacity: 0.6;
                    cursor: progress;
                }
                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid #6b7280;
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-status {
                    margin-top: 1.5rem;
                    border-radius: 8px;
                    padding: 1.5rem;
                    text-align: center;
                    animation: contactPop 0.3s ease-out;
                }
                @keyframes contactPop {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                .contact-status h3 { color: #fff; }
                .contact-status-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .contact-status.success { background: rgba(20, 83, 45, 0.2); }
                .contact-status.success .contact-status-icon, .contact-status.success p { color: #86efac; }
                .contact-status.error { background: rgba(127, 29, 29, 0.2); }
                .contact-status.error .contact-status-icon, .contact-status.error p { color: #fca5a5; }
                .contact-involved {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                }
                .contact-faq { margin-top: 1rem; }
                .contact-faq h3 {
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 700;
                }
                .contact-faq p { font-size: 0.875rem; }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_one_field_keeps_the_rest() {
        let form = ContactForm::default()
            .with(ContactField::Name, "Ada".to_string())
            .with(ContactField::Email, "ada@example.com".to_string());
        let form = form.with(ContactField::Name, "Grace".to_string());
        assert_eq!(form.value(ContactField::Name), "Grace");
        assert_eq!(form.value(ContactField::Email), "ada@example.com");
        assert_eq!(form.value(ContactField::Subject), "");
        assert_eq!(form.value(ContactField::Message), "");
    }

    #[test]
    fn only_terminal_statuses_replace_the_form() {
        assert!(status_panel(SubmitStatus::Idle).is_none());
        assert!(status_panel(SubmitStatus::InProgress).is_none());
        assert!(status_panel(SubmitStatus::Success).is_some());
        assert!(status_panel(SubmitStatus::Error).is_some());
    }
}
