use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::{hooks::Reveal, use_site};
use crate::content::{self, Project, ALL_CATEGORIES, COLLAPSED_PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let site = use_site();
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (show_all, set_show_all) = signal(false);

    let filters = site
        .categories()
        .into_iter()
        .map(|name| {
            let selected = {
                let name = name.clone();
                move || category.get() == name
            };
            let on_select = {
                let name = name.clone();
                move |_| {
                    set_category.set(name.clone());
                    set_show_all.set(false);
                }
            };
            let count = site.count_in(&name);
            view! {
                <button
                    aria-pressed={
                        let selected = selected.clone();
                        move || selected().to_string()
                    }
                    class=move || {
                        if selected() {
                            "px-4 py-2 rounded-full bg-primary text-primary-foreground text-sm"
                        } else {
                            "px-4 py-2 rounded-full bg-secondary hover:bg-secondary/70 text-sm"
                        }
                    }
                    on:click=on_select
                >
                    {name} " (" {count} ")"
                </button>
            }
        })
        .collect_view();

    let visible = move || {
        site.filter_projects(&category.get(), show_all.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };
    let has_more = move || site.count_in(&category.get()) > COLLAPSED_PROJECTS;

    view! {
        <section id="projects" class="py-24">
            <div class="container-custom mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Featured " <span class="text-gradient">"projects"</span>
                    </h2>
                    <div class="flex flex-wrap justify-center gap-3">{filters}</div>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For each=visible key=|p| p.id.clone() let:project>
                        <ProjectCard project=project />
                    </For>
                </div>
                <Show when=has_more>
                    <div class="text-center mt-12">
                        <button
                            class="px-6 py-3 rounded-full border border-primary text-primary hover:bg-primary/10 transition-colors"
                            on:click=move |_| set_show_all.update(|all| *all = !*all)
                        >
                            {move || if show_all.get() { "Show less" } else { "Show all projects" }}
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    view! {
        <article class="glass-panel rounded-2xl overflow-hidden group flex flex-col">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-3 right-3 px-3 py-1 rounded-full bg-primary text-primary-foreground text-xs">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <span class="text-xs uppercase tracking-wide text-primary mb-2">
                    {project.category}
                </span>
                <h3 class="text-xl font-semibold mb-2">{project.title.clone()}</h3>
                <p class="text-muted-foreground text-sm mb-4 flex-grow">{project.description}</p>
                <TechList technologies=project.technologies />
                <A href=href attr:class="mt-4 text-primary font-medium hover:underline">
                    "View details →"
                </A>
            </div>
        </article>
    }
}

#[component]
fn TechList(technologies: Vec<String>) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2">
            {technologies
                .into_iter()
                .map(|t| view! { <li class="px-2 py-1 rounded bg-secondary text-xs">{t}</li> })
                .collect_view()}
        </ul>
    }
}

/// Detail page for `/projects/:id`.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || params.read().get("id").and_then(|id| content::project(&id));

    move || match project() {
        Some(project) => Either::Left(view! { <ProjectDetail project=project /> }),
        None => Either::Right(view! {
            <Title text="Project not found" />
            <section class="container-custom mx-auto py-32 text-center">
                <h1 class="text-3xl font-bold mb-4">"Project not found"</h1>
                <A href="/#projects" attr:class="text-primary hover:underline">
                    "Back to projects"
                </A>
            </section>
        }),
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let links = [("Live site", project.link.clone()), ("Source", project.github.clone())]
        .into_iter()
        .filter_map(|(label, href)| {
            href.map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-5 py-2 rounded-full border border-primary text-primary hover:bg-primary/10"
                    >
                        {label}
                    </a>
                }
            })
        })
        .collect_view();
    let details = [
        ("The challenge", project.details.challenge),
        ("The solution", project.details.solution),
        ("The outcome", project.details.outcome),
    ];

    view! {
        <Title text=project.title.clone() />
        <article class="container-custom mx-auto pt-32 pb-24 max-w-4xl">
            <A href="/#projects" attr:class="text-sm text-muted-foreground hover:text-primary">
                "← All projects"
            </A>
            <header class="mt-6 mb-10">
                <span class="text-xs uppercase tracking-wide text-primary">{project.category}</span>
                <h1 class="text-4xl md:text-5xl font-bold mt-2 mb-4">{project.title.clone()}</h1>
                <p class="text-lg text-muted-foreground">{project.description}</p>
            </header>
            <img
                src=project.image
                alt=project.title.clone()
                class="w-full rounded-2xl mb-10 object-cover max-h-[28rem]"
            />
            <div class="mb-10">
                <TechList technologies=project.technologies />
            </div>
            {details
                .into_iter()
                .map(|(heading, body)| {
                    view! {
                        <section class="mb-8">
                            <h2 class="text-2xl font-semibold mb-3">{heading}</h2>
                            <p class="text-muted-foreground leading-relaxed">{body}</p>
                        </section>
                    }
                })
                .collect_view()}
            <div class="flex gap-4">{links}</div>
        </article>
    }
}
