use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::{rc::Rc, time::Duration};

#[cfg(feature = "hydrate")]
use crate::motion::{
    BrowserScheduler, TextRotator, TypingAnimator, TypingConfig, TypingEvent,
};
use crate::motion::RotationPhase;

/// Types `text` out one character at a time.
///
/// Changing `text` restarts the animation. Changes to `queue` are typed from
/// the next cycle on without interrupting the current one. Ticking is
/// independent of visibility unless `pause_when_hidden` is given, in which
/// case the animation holds while that signal is false.
#[component]
pub fn AnimatedText(
    #[prop(into)] text: Signal<String>,
    #[prop(optional, into)] class: String,
    #[prop(default = 0)] delay_ms: u64,
    #[prop(default = 50)] char_delay_ms: u64,
    #[prop(optional)] repeat: bool,
    #[prop(default = 2000)] repeat_delay_ms: u64,
    #[prop(optional, into)] on_complete: Option<Callback<()>>,
    #[prop(optional, into)] pause_when_hidden: Option<Signal<bool>>,
    #[prop(optional, into)] queue: Option<Signal<String>>,
) -> impl IntoView {
    let (displayed, set_displayed) = signal(String::new());
    let (is_typing, set_is_typing) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let mut config = TypingConfig::default()
            .with_initial_delay(Duration::from_millis(delay_ms))
            .with_char_interval(Duration::from_millis(char_delay_ms));
        if repeat {
            config = config.with_repeat(Duration::from_millis(repeat_delay_ms));
        }
        let animator = StoredValue::new_local(None::<TypingAnimator>);

        Effect::new(move |_| {
            let text = text.get();
            let restarted = animator.with_value(|slot| slot.as_ref().map(|a| a.restart(&text)));
            match restarted {
                Some(Ok(())) => return,
                Some(Err(err)) => {
                    log::warn!("couldn't restart typing animation: {err}");
                    return;
                }
                None => {}
            }

            let created = match TypingAnimator::new(&text, config, Rc::new(BrowserScheduler)) {
                Ok(created) => created,
                Err(err) => {
                    log::error!("{err}, showing text without animation");
                    set_displayed.set(text);
                    return;
                }
            };
            created.subscribe(move |event| match event {
                TypingEvent::Started { .. } => set_is_typing.set(true),
                TypingEvent::Revealed(prefix) => set_displayed.set(prefix.clone()),
                TypingEvent::Completed { .. } => {
                    set_is_typing.set(false);
                    if let Some(on_complete) = on_complete {
                        on_complete.run(());
                    }
                }
            });
            if pause_when_hidden.is_some_and(|visible| !visible.get_untracked()) {
                created.pause();
            }
            if let Err(err) = created.start() {
                log::warn!("couldn't start typing animation: {err}");
            }
            animator.set_value(Some(created));
        });

        if let Some(queue) = queue {
            Effect::new(move |_| {
                let next = queue.get();
                animator.with_value(|slot| {
                    if let Some(Err(err)) = slot.as_ref().map(|a| a.queue_text(&next)) {
                        log::debug!("{err}");
                    }
                });
            });
        }

        if let Some(visible) = pause_when_hidden {
            Effect::new(move |_| {
                let visible = visible.get();
                animator.with_value(|slot| {
                    let Some(animator) = slot else {
                        return;
                    };
                    if visible {
                        if let Err(err) = animator.resume() {
                            log::debug!("{err}");
                        }
                    } else {
                        animator.pause();
                    }
                });
            });
        }

        on_cleanup(move || {
            animator.try_update_value(|slot| {
                if let Some(animator) = slot.take() {
                    animator.dispose();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (
        text,
        delay_ms,
        char_delay_ms,
        repeat,
        repeat_delay_ms,
        on_complete,
        pause_when_hidden,
        queue,
        set_displayed,
        set_is_typing,
    );

    view! {
        <span class=class>
            {displayed}
            <Show when=move || is_typing.get()>
                <span class="animate-pulse">"|"</span>
            </Show>
        </span>
    }
}

/// Shows one of `texts` at a time, fading between them.
#[component]
pub fn RotatingText(
    texts: Vec<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] text_class: String,
    #[prop(default = 3000)] hold_ms: u64,
    #[prop(default = 500)] fade_ms: u64,
) -> impl IntoView {
    let (phase, set_phase) = signal(RotationPhase::Showing(0));

    #[cfg(feature = "hydrate")]
    {
        match TextRotator::new(
            texts.clone(),
            Duration::from_millis(hold_ms),
            Duration::from_millis(fade_ms),
            Rc::new(BrowserScheduler),
        ) {
            Ok(rotator) => {
                rotator.subscribe(move |p| set_phase.set(p));
                if let Err(err) = rotator.start() {
                    log::warn!("couldn't start text rotation: {err}");
                }
                let rotator = StoredValue::new_local(Some(rotator));
                on_cleanup(move || {
                    rotator.try_update_value(|slot| slot.take());
                });
            }
            Err(err) => log::error!("{err}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (hold_ms, fade_ms, set_phase);

    let current = move || {
        let index = phase.get().index();
        texts.get(index).cloned().unwrap_or_default()
    };

    view! {
        <div class=format!("relative overflow-hidden {class}")>
            <div class=move || {
                let motion = if phase.get().is_fading() {
                    "opacity-0 -translate-y-5"
                } else {
                    "opacity-100 translate-y-0"
                };
                format!("transition-all duration-500 {motion} {text_class}")
            }>{current}</div>
        </div>
    }
}
