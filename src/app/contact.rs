use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{hooks::Reveal, use_site};
use crate::contact::{ContactMessage, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN};

#[server]
pub async fn submit_contact(message: ContactMessage) -> Result<(), ServerFnError> {
    let message = message
        .validate()
        .map_err(|err| ServerFnError::new(err.to_string()))?;
    tracing::info!(
        name = %message.name,
        email = %message.email,
        subject = %message.subject,
        chars = message.message.chars().count(),
        "contact message received"
    );
    Ok(())
}

fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-border bg-background text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary transition-all";

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = &use_site().profile;
    let submit = ServerAction::<SubmitContact>::new();
    let result = submit.value();
    let pending = submit.pending();
    let form_ref = NodeRef::<html::Form>::new();

    Effect::new(move |_| {
        if matches!(result.get(), Some(Ok(()))) {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        }
    });

    let methods = [
        ("Email", profile.email.clone(), format!("mailto:{}", profile.email)),
        ("Phone", profile.phone.clone(), format!("tel:{}", profile.phone)),
        ("Location", profile.location.clone(), String::new()),
    ];
    let socials = [
        ("GitHub", profile.socials.github.clone()),
        ("LinkedIn", profile.socials.linkedin.clone()),
        ("Twitter", profile.socials.twitter.clone()),
    ];

    view! {
        <Title text="Contact" />
        <section class="container-custom mx-auto pt-32 pb-24">
            <Reveal class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Get in " <span class="text-gradient">"touch"</span>
                </h1>
                <p class="text-muted-foreground max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hello? Send me a message."
                </p>
            </Reveal>

            <div class="grid lg:grid-cols-3 gap-10">
                <aside class="flex flex-col gap-4">
                    {methods
                        .into_iter()
                        .map(|(label, value, href)| {
                            view! {
                                <div class="glass-panel rounded-xl p-5">
                                    <h2 class="text-sm text-muted-foreground mb-1">{label}</h2>
                                    {if href.is_empty() {
                                        view! { <p class="font-medium">{value}</p> }.into_any()
                                    } else {
                                        view! {
                                            <a href=href class="font-medium hover:text-primary">
                                                {value}
                                            </a>
                                        }
                                            .into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                    <ul class="flex gap-4 mt-2">
                        {socials
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-muted-foreground hover:text-primary"
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>

                <div class="lg:col-span-2 glass-panel rounded-2xl p-8">
                    <ActionForm action=submit node_ref=form_ref attr:class="flex flex-col gap-5">
                        <div class="grid md:grid-cols-2 gap-5">
                            <label class="flex flex-col gap-2">
                                <span class="text-sm font-medium">"Name"</span>
                                <input
                                    type="text"
                                    name="message[name]"
                                    required
                                    maxlength=MAX_NAME_LEN.to_string()
                                    placeholder="Your name"
                                    class=INPUT_CLASS
                                />
                            </label>
                            <label class="flex flex-col gap-2">
                                <span class="text-sm font-medium">"Email"</span>
                                <input
                                    type="email"
                                    name="message[email]"
                                    required
                                    placeholder="you@example.com"
                                    class=INPUT_CLASS
                                />
                            </label>
                        </div>
                        <label class="flex flex-col gap-2">
                            <span class="text-sm font-medium">"Subject"</span>
                            <input
                                type="text"
                                name="message[subject]"
                                maxlength=MAX_SUBJECT_LEN.to_string()
                                placeholder="What's this about?"
                                class=INPUT_CLASS
                            />
                        </label>
                        <label class="flex flex-col gap-2">
                            <span class="text-sm font-medium">"Message"</span>
                            <textarea
                                name="message[message]"
                                required
                                rows="6"
                                maxlength=MAX_MESSAGE_LEN.to_string()
                                placeholder="Tell me about your project..."
                                class=INPUT_CLASS
                            />
                        </label>
                        {move || {
                            result
                                .get()
                                .and_then(Result::err)
                                .map(|err| {
                                    view! {
                                        <p role="alert" class="text-sm text-red-500">
                                            {error_message(&err)}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="self-start px-8 py-3 rounded-full bg-primary text-primary-foreground font-medium hover:opacity-90 disabled:opacity-50 transition-opacity"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send message" }}
                        </button>
                    </ActionForm>
                </div>
            </div>
        </section>

        <Show when=move || matches!(result.get(), Some(Ok(())))>
            <div
                role="dialog"
                aria-modal="true"
                class="fixed inset-0 z-[90] flex items-center justify-center bg-black/50 backdrop-blur-sm"
            >
                <div class="glass-panel rounded-2xl p-8 max-w-md text-center">
                    <h2 class="text-2xl font-bold mb-3">"Message sent!"</h2>
                    <p class="text-muted-foreground mb-6">
                        "Thanks for reaching out. I'll get back to you as soon as I can."
                    </p>
                    <button
                        class="px-6 py-2 rounded-full bg-primary text-primary-foreground"
                        on:click=move |_| result.set(None)
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
