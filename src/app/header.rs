use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use super::{hooks::use_smooth_scroll, use_site, ThemeContext};
use crate::navigation::{NavItem, HOME_SECTION, NAV_ITEMS};

/// Height of the fixed header, kept clear when scrolling to a section.
const HEADER_OFFSET: f64 = 80.0;

#[component]
pub fn NavBar() -> impl IntoView {
    let site = use_site();
    let theme = expect_context::<ThemeContext>();
    let pathname = use_location().pathname;

    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(HOME_SECTION.to_string());
    let (menu_open, set_menu_open) = signal(false);

    use_smooth_scroll(HEADER_OFFSET);

    #[cfg(feature = "hydrate")]
    {
        use crate::navigation::{active_section, is_scrolled};

        let spy = move || {
            let scroll_y = window().scroll_y().unwrap_or_default();
            set_scrolled.set(is_scrolled(scroll_y));

            let doc = document();
            let tops = NAV_ITEMS
                .iter()
                .filter_map(NavItem::section)
                .filter_map(|id| {
                    doc.get_element_by_id(id)
                        .map(|el| (id, el.get_bounding_client_rect().top()))
                })
                .collect::<Vec<_>>();
            let current = active_section(tops);
            if active.get_untracked() != current {
                set_active.set(current.to_string());
            }
        };

        Effect::new(move |_| spy());
        let handle = window_event_listener(leptos::ev::scroll, move |_| spy());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_scrolled, set_active);

    // off the home page, section links have to go back to it first
    let link_href = move |item: NavItem| {
        if item.section().is_some() && pathname.get() != "/" {
            format!("/{}", item.href)
        } else {
            item.href.to_string()
        }
    };
    let is_active = move |item: NavItem| match item.section() {
        Some(id) => pathname.get() == "/" && active.get() == id,
        None => pathname.get() == item.href,
    };

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .copied()
            .map(|item| {
                let class = move || {
                    let base = if mobile {
                        "block px-4 py-3 rounded-md"
                    } else {
                        "px-3 py-2 rounded-md text-sm font-medium"
                    };
                    let state = if is_active(item) {
                        "text-primary"
                    } else {
                        "text-foreground/80 hover:text-primary"
                    };
                    format!("{base} {state} transition-colors")
                };
                view! {
                    <a
                        href=move || link_href(item)
                        class=class
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {item.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            let surface = if scrolled.get() || menu_open.get() {
                "py-3 glass-panel shadow-md"
            } else {
                "py-5 bg-transparent"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {surface}")
        }>
            <div class="container-custom mx-auto flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold text-gradient">
                    {site.profile.short_name.clone()}
                </A>

                <nav class="hidden md:flex items-center gap-1">{links(false)}</nav>

                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-full hover:bg-secondary transition-colors"
                        aria-label=move || theme.theme.get().toggle_label()
                        on:click=move |_| theme.toggle()
                    >
                        {move || match theme.theme.get() {
                            crate::theme::Theme::Dark => "☀",
                            crate::theme::Theme::Light => "☾",
                        }}
                    </button>
                    <button
                        class="md:hidden p-2 rounded-md hover:bg-secondary"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden container-custom mx-auto mt-2 pb-4">{links(true)}</nav>
            </Show>
        </header>
    }
}
