use leptos::{html, prelude::*};

use super::{
    hooks::{use_element_in_view, Reveal},
    use_site,
};
use crate::{
    content::{Skill, SkillCategory},
    motion::VisibilityOptions,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let skills = &use_site().skills;
    let (category, set_category) = signal(SkillCategory::Technical);

    let tabs = SkillCategory::ALL
        .into_iter()
        .map(|c| {
            view! {
                <button
                    role="tab"
                    aria-selected=move || (category.get() == c).to_string()
                    class=move || {
                        if category.get() == c {
                            "px-5 py-2 rounded-full bg-primary text-primary-foreground"
                        } else {
                            "px-5 py-2 rounded-full bg-secondary hover:bg-secondary/70"
                        }
                    }
                    on:click=move |_| set_category.set(c)
                >
                    {c.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-24 bg-secondary/30">
            <div class="container-custom mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "My " <span class="text-gradient">"skills"</span>
                    </h2>
                    <div role="tablist" class="flex flex-wrap justify-center gap-3">
                        {tabs}
                    </div>
                </Reveal>
                {move || {
                    skills
                        .get(category.get())
                        .iter()
                        .cloned()
                        .map(|skill| view! { <SkillBadge skill=skill /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// A skill with its proficiency bar, which fills once scrolled into view.
#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_in_view(node_ref, VisibilityOptions::default().with_threshold(0.3));
    let level = skill.level.min(100);

    view! {
        <div node_ref=node_ref class="glass-panel rounded-xl p-4 mb-4 max-w-3xl mx-auto">
            <div class="flex justify-between mb-2">
                <span class="font-medium">
                    {skill.icon.map(|icon| view! { <span class="mr-2">{icon}</span> })}
                    {skill.name}
                </span>
                <span class="text-sm text-muted-foreground">{level} "%"</span>
            </div>
            <div class="h-2 rounded-full bg-secondary overflow-hidden">
                <div
                    class="h-full rounded-full bg-primary transition-[width] duration-1000 ease-out"
                    style:width=move || {
                        if visible.get() { format!("{level}%") } else { "0%".to_string() }
                    }
                />
            </div>
        </div>
    }
}
