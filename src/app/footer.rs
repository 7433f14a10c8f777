use leptos::prelude::*;

use super::use_site;
use crate::content::build_year;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &use_site().profile;
    let socials = [
        ("GitHub", profile.socials.github.clone()),
        ("LinkedIn", profile.socials.linkedin.clone()),
        ("Twitter", profile.socials.twitter.clone()),
    ];

    view! {
        <footer class="border-t border-border py-10">
            <div class="container-custom mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-muted-foreground">
                    "© " {build_year()} " " {profile.name.clone()} ". All rights reserved."
                </p>
                <ul class="flex gap-4">
                    {socials
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-sm text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href="#home" class="text-sm text-muted-foreground hover:text-primary">
                    "Back to top ↑"
                </a>
            </div>
        </footer>
    }
}
