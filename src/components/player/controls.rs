use crate::components::Icon;
use crate::playback::Playhead;
use crate::timeline::Section;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Play/pause button - flips the virtual clock on and off
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut playhead = use_context::<Signal<Playhead>>();
    let icon = if playhead().playing { "pause" } else { "play" };

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "bg-sky-500 hover:bg-sky-600 text-white p-2 rounded-full transition-all",
            onclick: move |_| {
                playhead.with_mut(|head| head.toggle());
            },
            Icon { name: icon.to_string(), class: "w-6 h-6".to_string() }
        }
    }
}

/// Reset button - back to the top, paused, view scrolled home
#[component]
pub(super) fn ResetButton() -> Element {
    let mut playhead = use_context::<Signal<Playhead>>();

    rsx! {
        button {
            id: "reset-btn",
            r#type: "button",
            class: "bg-teal-500 hover:bg-teal-600 text-white p-2 rounded-full transition-all",
            onclick: move |_| {
                debug!("timeline reset");
                playhead.with_mut(|head| head.reset());
                crate::components::app::scroll_to_top();
            },
            Icon { name: "rotate-ccw".to_string(), class: "w-6 h-6".to_string() }
        }
    }
}

/// Seek slider with a live time readout.
#[component]
pub(super) fn ScrubBar() -> Element {
    let mut playhead = use_context::<Signal<Playhead>>();
    let head = playhead();
    let readout = format!("{:.1}s", head.position);

    rsx! {
        div { class: "w-full flex-1 flex items-center gap-2",
            input {
                id: "timeline-scrub",
                r#type: "range",
                min: "0",
                max: "{head.duration}",
                step: "0.1",
                value: "{head.position}",
                class: "w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer accent-sky-500",
                oninput: move |event| {
                    if let Ok(position) = event.value().parse::<f64>() {
                        playhead.with_mut(|head| head.seek(position));
                    }
                },
            }
            span { class: "text-sm font-mono w-16 text-gray-700", "{readout}" }
        }
    }
}

/// One pill per section; filled once the narration has reached it.
#[component]
pub(super) fn JumpButtons() -> Element {
    let playhead = use_context::<Signal<Playhead>>();
    let position = playhead().position;

    rsx! {
        div { class: "flex gap-2 text-xs md:text-sm flex-wrap justify-center",
            for section in Section::ALL {
                JumpButton { section, reached: section.is_revealed(position) }
            }
        }
    }
}

#[component]
fn JumpButton(section: Section, reached: bool) -> Element {
    let mut playhead = use_context::<Signal<Playhead>>();
    let label = section.label();
    let pill = if reached {
        "px-2 py-1 rounded-full transition-all bg-sky-500 text-white"
    } else {
        "px-2 py-1 rounded-full transition-all bg-gray-200 text-gray-700 hover:bg-gray-300"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{pill}",
            onclick: move |_| {
                playhead.with_mut(|head| head.seek(section.offset()));
            },
            "{label}"
        }
    }
}
