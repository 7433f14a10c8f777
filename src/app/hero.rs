use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_router::components::A;

use super::{
    animated_text::AnimatedText,
    hooks::{reveal_class, use_element_in_view},
    use_site,
};
use crate::motion::{MatrixGrid, VisibilityOptions};
#[cfg(feature = "hydrate")]
use crate::motion::{BrowserScheduler, MatrixRain};

const MATRIX_ROWS: usize = 15;
const MATRIX_COLS: usize = 40;
const MATRIX_TICK: Duration = Duration::from_millis(100);
const MATRIX_CELLS_PER_TICK: usize = 10;
/// Server and first client render must draw the same grid.
const MATRIX_SEED: u64 = 0x6d61_7472_6978;

#[component]
fn MatrixBackground() -> impl IntoView {
    let grid = MatrixGrid::new(MATRIX_ROWS, MATRIX_COLS, MATRIX_SEED);
    let (lines, set_lines) = signal(grid.as_ref().map(MatrixGrid::lines).unwrap_or_default());

    #[cfg(feature = "hydrate")]
    match grid.and_then(|grid| {
        MatrixRain::new(
            grid,
            MATRIX_TICK,
            MATRIX_CELLS_PER_TICK,
            std::rc::Rc::new(BrowserScheduler),
        )
    }) {
        Ok(rain) => {
            rain.reseed(chrono::Utc::now().timestamp_millis().unsigned_abs());
            rain.subscribe(move |next| set_lines.set(next.to_vec()));
            if let Err(err) = rain.start() {
                log::warn!("couldn't start matrix background: {err}");
            }
            let rain = StoredValue::new_local(Some(rain));
            on_cleanup(move || {
                rain.try_update_value(|slot| slot.take());
            });
        }
        Err(err) => log::error!("{err}"),
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (grid, set_lines);

    view! {
        <div
            aria-hidden="true"
            class="absolute inset-0 overflow-hidden opacity-10 select-none pointer-events-none z-0"
        >
            {move || {
                lines
                    .get()
                    .into_iter()
                    .map(|line| {
                        view! {
                            <div class="flex justify-center whitespace-pre text-primary font-mono text-xs md:text-sm opacity-60">
                                {line}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &use_site().profile;
    let headlines = StoredValue::new(profile.headlines.clone());
    let (index, set_index) = signal(0usize);

    // the animator's repeat delay is the hold between headlines
    let first = headlines.with_value(|lines| lines.first().cloned().unwrap_or_default());
    let next_headline = Signal::derive(move || {
        headlines.with_value(|lines| lines.get(index.get()).cloned().unwrap_or_default())
    });
    let advance = Callback::new(move |_: ()| {
        let count = headlines.with_value(Vec::len).max(1);
        set_index.update(|i| *i = (*i + 1) % count);
    });

    let section_ref = NodeRef::<html::Div>::new();
    let visible = use_element_in_view(section_ref, VisibilityOptions::default());

    view! {
        <section id="home" class="relative min-h-screen flex items-center pt-24 overflow-hidden">
            <MatrixBackground />
            <div
                node_ref=section_ref
                class=move || {
                    format!(
                        "container-custom mx-auto relative z-10 grid md:grid-cols-2 gap-12 items-center transition-all duration-1000 {}",
                        reveal_class(visible.get()),
                    )
                }
            >
                <div>
                    <p class="text-primary font-medium mb-4">{profile.tagline.clone()}</p>
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 min-h-[2.5em]">
                        <AnimatedText
                            text=first
                            queue=next_headline
                            class="text-gradient"
                            delay_ms=500
                            char_delay_ms=40
                            repeat=true
                            repeat_delay_ms=4000
                            on_complete=advance
                        />
                    </h1>
                    <p class="text-lg text-muted-foreground mb-8 max-w-xl">
                        {profile.title.clone()} " based in " {profile.location.clone()}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-full bg-primary text-primary-foreground font-medium hover:opacity-90 transition-opacity"
                        >
                            "View my work"
                        </a>
                        <A
                            href="/contact"
                            attr:class="px-6 py-3 rounded-full border border-primary text-primary font-medium hover:bg-primary/10 transition-colors"
                        >
                            "Get in touch"
                        </A>
                    </div>
                </div>
                <div class="flex justify-center">
                    <img
                        src=profile.avatar.clone()
                        alt=profile.name.clone()
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-primary/30 shadow-2xl"
                    />
                </div>
            </div>
            <a
                href="#about"
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-muted-foreground animate-bounce"
            >
                "↓"
            </a>
        </section>
    }
}
