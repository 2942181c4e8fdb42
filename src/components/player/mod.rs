//! Bottom transport bar and the floating re-show affordance.

use crate::components::Icon;
use crate::playback::{ControlsState, Playhead};
use dioxus::prelude::*;

mod controls;

use controls::{JumpButtons, PlayPauseButton, ResetButton, ScrubBar};

/// Fixed bar along the bottom edge with every transport control. It
/// slides out of view while hidden; pointer events are disabled there
/// so the page underneath stays clickable.
#[component]
pub fn TransportBar() -> Element {
    let playhead = use_context::<Signal<Playhead>>();
    let controls = use_context::<Signal<ControlsState>>();

    let bar_state = if controls().shown(playhead().playing) {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-full pointer-events-none"
    };

    rsx! {
        div {
            id: "transport-bar",
            class: "fixed bottom-0 left-0 right-0 bg-white/90 backdrop-blur-md border-t border-blue-200 shadow-lg p-4 z-50 transition-all duration-500 {bar_state}",
            div { class: "max-w-6xl mx-auto flex flex-col md:flex-row items-center gap-4",
                div { class: "flex gap-4",
                    PlayPauseButton {}
                    ResetButton {}
                }
                ScrubBar {}
                JumpButtons {}
            }
        }
    }
}

/// Floating button that brings the bar back while it is auto-hidden
/// during playback. Leaves the play state alone.
#[component]
pub fn ControlsRevealButton() -> Element {
    let playhead = use_context::<Signal<Playhead>>();
    let mut controls = use_context::<Signal<ControlsState>>();

    if controls().shown(playhead().playing) {
        return rsx! {};
    }

    rsx! {
        button {
            id: "show-controls-btn",
            r#type: "button",
            class: "fixed bottom-4 right-4 bg-sky-500 text-white p-3 rounded-full shadow-lg z-50 opacity-70 hover:opacity-100 transition-opacity",
            onclick: move |_| {
                controls.with_mut(|state| state.reveal());
            },
            Icon { name: "settings".to_string(), class: "w-6 h-6".to_string() }
        }
    }
}
