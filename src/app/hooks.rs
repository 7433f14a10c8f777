use leptos::{html, prelude::*};
#[cfg(feature = "hydrate")]
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{VisibilityOptions, VisibilityTracker};
#[cfg(feature = "hydrate")]
use crate::motion::VisibilityChange;

/// Whether the element behind `target` has scrolled into view.
///
/// Starts hidden on the server and during hydration. Browsers without
/// `IntersectionObserver` get `true` so content never stays hidden.
pub fn use_element_in_view(target: NodeRef<html::Div>, options: VisibilityOptions) -> Signal<bool> {
    let (is_visible, set_visible) = signal(false);
    let tracker = match VisibilityTracker::new(options) {
        Ok(tracker) => StoredValue::new_local(tracker),
        Err(err) => {
            log::error!("{err}, content will always be shown");
            return Signal::derive(|| true);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let (threshold, root_margin) =
            tracker.with_value(|t| (t.options().threshold, t.options().root_margin.clone()));
        let UseIntersectionObserverReturn {
            is_supported, stop, ..
        } = use_intersection_observer_with_options(
            target,
            move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
                let Some(entry) = entries.last() else {
                    return;
                };
                let ratio = entry.intersection_ratio();
                match tracker.try_update_value(|t| t.observe_ratio(ratio)) {
                    Some(VisibilityChange::Changed(visible)) => set_visible.set(visible),
                    Some(VisibilityChange::Froze) => set_visible.set(true),
                    _ => {}
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![threshold])
                .root_margin(root_margin),
        );
        tracker.update_value(|t| t.attach(move || stop()));

        Effect::new(move |_| {
            if !is_supported.get() {
                tracker.update_value(|t| t.capability_missing());
                set_visible.set(true);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, set_visible);

    on_cleanup(move || {
        tracker.try_update_value(|t| t.detach());
    });

    is_visible.into()
}

/// Tailwind classes for a block that fades up once visible.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Wraps `children` in a block that fades up the first time it is seen.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_in_view(node_ref, VisibilityOptions::default());

    view! {
        <div
            node_ref=node_ref
            class=move || {
                format!("transition-all duration-700 {} {class}", reveal_class(visible.get()))
            }
        >
            {children()}
        </div>
    }
}

/// Scrolls smoothly to in-page anchors instead of jumping.
pub fn use_smooth_scroll(offset: f64) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Element, ScrollBehavior, ScrollToOptions};

        use crate::navigation::{anchor_hash, scroll_target};

        let handle = window_event_listener(ev::click, move |ev| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let origin = window().location().origin().unwrap_or_default();
            let Some(hash) = anchor_hash(&href, &origin) else {
                return;
            };
            let Some(target) = document().get_element_by_id(hash) else {
                return;
            };
            ev.prevent_default();

            let top = target.get_bounding_client_rect().top();
            let scroll_top = window().scroll_y().unwrap_or_default();
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(top, scroll_top, offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = window().history() {
                let url = format!("#{hash}");
                if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    log::debug!("couldn't update location hash: {err:?}");
                }
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = offset;
}
