use crate::components::{ControlsRevealButton, StorySlides, TransportBar, VoiceoverController};
use crate::playback::{ControlsState, Playhead};
use crate::timeline;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Wall clock in milliseconds, for interaction stamps.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    0.0
}

#[component]
pub fn AppShell() -> Element {
    let playhead = use_signal(|| Playhead::new(timeline::duration()));
    let controls = use_signal(|| ControlsState::new(now_ms()));

    // Provide state via context
    use_context_provider(|| playhead);
    use_context_provider(|| controls);

    use_hook(|| {
        info!("slideshow mounted, {}s timeline", timeline::duration());
    });

    // Clock: exactly one ticker exists while playing; every exit from
    // the playing state (pause, reset, end of track) cancels it. The
    // memo dedupes, so 100ms position writes never churn the task.
    #[cfg(target_arch = "wasm32")]
    {
        let playing = use_memo(move || playhead().playing);

        {
            let mut playhead = playhead;
            let mut tick_task = use_signal(|| None::<Task>);
            use_effect(move || {
                let active = playing();
                if let Some(task) = tick_task.write().take() {
                    task.cancel();
                }
                if active {
                    let task = spawn(async move {
                        loop {
                            gloo_timers::future::TimeoutFuture::new(
                                crate::playback::TICK_INTERVAL_MS,
                            )
                            .await;
                            playhead.with_mut(|head| head.tick());
                        }
                    });
                    tick_task.set(Some(task));
                }
            });
        }

        // Idle check: armed alongside the clock, torn down with it.
        {
            let playhead = playhead;
            let mut controls = controls;
            let mut idle_task = use_signal(|| None::<Task>);
            use_effect(move || {
                let active = playing();
                if let Some(task) = idle_task.write().take() {
                    task.cancel();
                }
                if active {
                    let task = spawn(async move {
                        loop {
                            gloo_timers::future::TimeoutFuture::new(
                                crate::playback::IDLE_CHECK_INTERVAL_MS,
                            )
                            .await;
                            let playing_now = playhead.peek().playing;
                            controls.with_mut(|state| state.idle_check(now_ms(), playing_now));
                        }
                    });
                    idle_task.set(Some(task));
                }
            });
        }
    }

    // Ambient input keeps the idle window fresh. The shell lives as
    // long as the app, so these listeners are installed once and left
    // attached.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };

        let runtime = Runtime::current();
        for event in ["mousemove", "click", "touchstart"] {
            let runtime = runtime.clone();
            let mut controls = controls;
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controls.with_mut(|state| state.interact(now_ms()));
            }) as Box<dyn FnMut()>);
            let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            callback.forget();
        }
    });

    // Keep the view pinned to the newest revealed section. Runs on
    // every position change, ticks and manual seeks alike, so the view
    // re-centers even after the user scrolls away mid-section.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let position = playhead().position;
        if let Some(section) = timeline::active_section(position) {
            scroll_section_into_view(section);
        }
    });

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 p-4 md:p-8 font-sans relative",
            div { class: "max-w-6xl mx-auto",
                StorySlides {}
            }
            TransportBar {}
            ControlsRevealButton {}
            VoiceoverController {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_section_into_view(section: timeline::Section) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(document) = window().and_then(|win| win.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.anchor()) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll the page back to the top. Used by reset.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
