use leptos::prelude::*;

use super::{animated_text::RotatingText, hooks::Reveal, use_site};
use crate::content::{Education, Experience, Testimonial};

#[component]
pub fn AboutSection() -> impl IntoView {
    let site = use_site();
    let profile = &site.profile;

    view! {
        <section id="about" class="py-24">
            <div class="container-custom mx-auto">
                <Reveal class="grid md:grid-cols-2 gap-12 items-center mb-24">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">
                            "About " <span class="text-gradient">"me"</span>
                        </h2>
                        <p class="text-muted-foreground leading-relaxed mb-6">
                            {profile.bio.clone()}
                        </p>
                        <div class="flex items-baseline gap-2 text-lg">
                            <span>"I work as a"</span>
                            <RotatingText
                                texts=profile.roles.clone()
                                class="h-8"
                                text_class="font-semibold text-primary"
                            />
                        </div>
                    </div>
                    <dl class="grid grid-cols-2 gap-4">
                        <Fact label="Location" value=profile.location.clone() />
                        <Fact label="Email" value=profile.email.clone() />
                        <Fact label="Projects" value=site.projects.len().to_string() />
                        <Fact label="Roles held" value=site.experience.len().to_string() />
                    </dl>
                </Reveal>

                <div id="resume" class="grid md:grid-cols-2 gap-12 mb-24">
                    <Reveal>
                        <h3 class="text-2xl font-bold mb-8">"Experience"</h3>
                        <ol class="relative border-l border-border">
                            {site.experience.iter().map(experience_entry).collect_view()}
                        </ol>
                    </Reveal>
                    <Reveal>
                        <h3 class="text-2xl font-bold mb-8">"Education"</h3>
                        <ol class="relative border-l border-border">
                            {site.education.iter().map(education_entry).collect_view()}
                        </ol>
                    </Reveal>
                </div>

                <Reveal>
                    <h3 class="text-2xl font-bold mb-8 text-center">"What people say"</h3>
                    <div class="grid md:grid-cols-3 gap-6">
                        {site.testimonials.iter().map(testimonial_card).collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="glass-panel rounded-xl p-4">
            <dt class="text-sm text-muted-foreground">{label}</dt>
            <dd class="font-semibold break-words">{value}</dd>
        </div>
    }
}

fn experience_entry(job: &Experience) -> impl IntoView {
    view! {
        <li class="mb-10 ml-6">
            <span class="absolute -left-1.5 mt-1.5 w-3 h-3 rounded-full bg-primary" />
            <time class="text-sm text-primary">{job.duration.clone()}</time>
            <h4 class="text-lg font-semibold">{job.role.clone()}</h4>
            <p class="text-muted-foreground mb-2">{job.company.clone()}</p>
            <p class="text-sm mb-2">{job.description.clone()}</p>
            <ul class="list-disc list-inside text-sm text-muted-foreground">
                {job
                    .achievements
                    .iter()
                    .map(|a| view! { <li>{a.clone()}</li> })
                    .collect_view()}
            </ul>
        </li>
    }
}

fn education_entry(school: &Education) -> impl IntoView {
    view! {
        <li class="mb-10 ml-6">
            <span class="absolute -left-1.5 mt-1.5 w-3 h-3 rounded-full bg-primary" />
            <time class="text-sm text-primary">{school.duration.clone()}</time>
            <h4 class="text-lg font-semibold">{school.degree.clone()}</h4>
            <p class="text-muted-foreground mb-2">{school.institution.clone()}</p>
            <p class="text-sm">{school.description.clone()}</p>
        </li>
    }
}

fn testimonial_card(t: &Testimonial) -> impl IntoView {
    view! {
        <figure class="glass-panel rounded-xl p-6 flex flex-col gap-4">
            <blockquote class="text-muted-foreground italic">"“" {t.text.clone()} "”"</blockquote>
            <figcaption class="flex items-center gap-3 mt-auto">
                <img src=t.avatar.clone() alt=t.name.clone() class="w-10 h-10 rounded-full object-cover" />
                <div>
                    <div class="font-semibold">{t.name.clone()}</div>
                    <div class="text-sm text-muted-foreground">{t.position.clone()}</div>
                </div>
            </figcaption>
        </figure>
    }
}
