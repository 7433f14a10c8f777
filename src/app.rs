mod about;
mod animated_text;
mod contact;
mod cursor;
mod footer;
mod header;
mod hero;
mod homepage;
mod hooks;
mod projects;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::{self, SiteContent};
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

use contact::ContactPage;
use cursor::CursorEffect;
use footer::Footer;
use header::NavBar;
use homepage::HomePage;
use projects::ProjectPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Theme state shared with the header toggle.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
    }
}

fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_site() -> &'static SiteContent {
    expect_context::<&'static SiteContent>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    let site = match content::site() {
        Ok(site) => site,
        Err(err) => {
            log::error!("{err}");
            return Either::Left(view! {
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-red">"Site content is unavailable: " {err.to_string()}</p>
                </main>
            });
        }
    };
    provide_context(site);

    Either::Right(view! {
        // sets the document title
        <Title formatter=move |title| format!("{} - {title}", site.profile.name) />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-background text-foreground flex flex-col",
                    theme.theme.get().class_name(),
                )
            }>
                <CursorEffect />
                <NavBar />
                <main class="flex-grow">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/projects/:id") view=ProjectPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    })
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <section class="container-custom mx-auto py-32 text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-muted-foreground mb-8">"This page doesn't exist."</p>
            <A href="/" attr:class="text-primary hover:underline">
                "Back to home"
            </A>
        </section>
    }
}
