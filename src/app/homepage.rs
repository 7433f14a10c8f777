use leptos::prelude::*;
use leptos_meta::Title;

use super::{about::AboutSection, hero::Hero, projects::ProjectsSection, skills::SkillsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <AboutSection />
        <ProjectsSection />
        <SkillsSection />
    }
}
