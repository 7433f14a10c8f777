use leptos::prelude::*;

use crate::motion::PointerState;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::document;
    use wasm_bindgen::JsCast;
    use web_sys::Element;

    use crate::motion::{is_clickable_tag, CursorStyleHost};

    const HIDDEN_CURSOR_CLASS: &str = "cursor-none";

    /// Hides the native cursor by toggling a class on `<body>`.
    pub struct BodyClassHost;

    impl BodyClassHost {
        fn toggle(&self, hidden: bool) {
            let Some(body) = document().body() else {
                return;
            };
            let classes = body.class_list();
            let res = if hidden {
                classes.add_1(HIDDEN_CURSOR_CLASS)
            } else {
                classes.remove_1(HIDDEN_CURSOR_CLASS)
            };
            if let Err(err) = res {
                log::warn!("couldn't update body cursor class: {err:?}");
            }
        }
    }

    impl CursorStyleHost for BodyClassHost {
        fn hide_native(&self) {
            self.toggle(true);
        }

        fn restore_native(&self) {
            self.toggle(false);
        }
    }

    pub fn is_coarse_pointer() -> bool {
        leptos::prelude::window()
            .match_media("(pointer: coarse)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }

    pub fn over_clickable(target: Option<web_sys::EventTarget>) -> bool {
        let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
            return false;
        };
        if is_clickable_tag(&el.tag_name()) || el.closest("a, button").ok().flatten().is_some() {
            return true;
        }
        leptos::prelude::window()
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("cursor").ok())
            .is_some_and(|cursor| cursor == "pointer")
    }
}

/// Ring-and-dot cursor that follows the mouse on fine-pointer devices.
#[component]
pub fn CursorEffect() -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerState::default());
    let (enabled, set_enabled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use leptos::ev;

        use crate::motion::CursorLease;
        use browser::{is_coarse_pointer, over_clickable, BodyClassHost};

        let lease = StoredValue::new_local(None::<CursorLease>);
        Effect::new(move |_| {
            if is_coarse_pointer() {
                return;
            }
            lease.set_value(Some(CursorLease::acquire(Rc::new(BodyClassHost))));
            set_enabled.set(true);
        });

        let handles = [
            window_event_listener(ev::mousemove, move |ev| {
                if !enabled.get_untracked() {
                    return;
                }
                let clickable = over_clickable(ev.target());
                set_pointer.update(|p| {
                    p.moved(ev.client_x() as f64, ev.client_y() as f64, clickable)
                });
            }),
            window_event_listener(ev::mousedown, move |_| {
                set_pointer.update(|p| p.set_pressed(true));
            }),
            window_event_listener(ev::mouseup, move |_| {
                set_pointer.update(|p| p.set_pressed(false));
            }),
            window_event_listener(ev::mouseout, move |ev| {
                // leaving the window has no related target
                if ev.related_target().is_none() {
                    set_pointer.update(|p| p.set_visible(false));
                }
            }),
        ];

        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
            lease.try_update_value(|lease| lease.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_pointer, set_enabled);

    let ring_style = move || {
        let ring = pointer.get().ring();
        format!("transform: {}; opacity: {};", ring.transform(), ring.opacity)
    };
    let dot_style = move || {
        let dot = pointer.get().dot();
        format!("transform: {}; opacity: {};", dot.transform(), dot.opacity)
    };

    view! {
        <Show when=move || enabled.get()>
            <div
                class="pointer-events-none fixed top-0 left-0 z-[100] w-8 h-8 rounded-full border-2 border-primary transition-[transform,opacity] duration-150 ease-out"
                aria-hidden="true"
                style=ring_style
            />
            <div
                class="pointer-events-none fixed top-0 left-0 z-[100] w-2 h-2 rounded-full bg-primary transition-[transform,opacity] duration-75"
                aria-hidden="true"
                style=dot_style
            />
        </Show>
    }
}
