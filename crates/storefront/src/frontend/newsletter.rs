//! Newsletter signup section.

use leptos::*;

use crate::client::StorefrontApi;
use crate::frontend::app::use_client;
use crate::newsletter::{HEADING, NewsletterForm, PLACEHOLDER, SUBHEADING, SubmissionStatus};

#[component]
pub fn Newsletter() -> impl IntoView {
    let client = use_client();
    let form = create_rw_signal(NewsletterForm::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(email) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.subscribe(&email).await;
            form.update(|f| f.finish(result));
        });
    };

    view! {
        <section id="newsletter" class="newsletter">
            <div class="newsletter-heading">
                <span class="icon icon-mail">"✉"</span>
                <h2>{HEADING}</h2>
                <p>{SUBHEADING}</p>
            </div>

            <form on:submit=submit>
                <div class="form-row">
                    <input
                        type="email"
                        placeholder=PLACEHOLDER
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        disabled=move || form.with(|f| f.is_submitting())
                    />
                    <button type="submit" disabled=move || form.with(|f| f.is_submitting())>
                        {move || form.with(|f| f.button_label())}
                    </button>
                </div>

                {move || {
                    form.with(|f| match f.status() {
                        SubmissionStatus::Success(message) => Some(view! {
                            <div class="status success">
                                <span class="icon">"✓"</span>
                                <span>{message.clone()}</span>
                            </div>
                        }),
                        SubmissionStatus::Error(message) => Some(view! {
                            <div class="status error">
                                <span class="icon">"!"</span>
                                <span>{message.clone()}</span>
                            </div>
                        }),
                        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
                    })
                }}
            </form>
        </section>
    }
}
