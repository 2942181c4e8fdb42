//! Hidden voiceover element plumbing.
//!
//! The narration lives in one audio element created on demand and
//! addressed by id. Every accessor returns an `Option`: a missing
//! element, or a missing narration file behind it, downgrades the whole
//! audio side to a no-op while the virtual clock keeps running.

#[cfg(target_arch = "wasm32")]
use crate::playback::{sync_target, Playhead};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// DOM id of the narration element.
#[cfg(target_arch = "wasm32")]
pub const VOICEOVER_ELEMENT_ID: &str = "slidecast-voiceover";
/// Where the narration track is served from. The file is not part of
/// the repo; drop it into `assets/` to get sound.
#[cfg(target_arch = "wasm32")]
pub const VOICEOVER_SRC: &str = "/assets/voiceover.wav";

/// Find the narration element, creating and appending it on first use.
#[cfg(target_arch = "wasm32")]
pub fn voiceover_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(VOICEOVER_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(VOICEOVER_ELEMENT_ID);
    audio.set_src(VOICEOVER_SRC);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Start playback, letting the play promise settle on its own.
/// Rejections (autoplay policy, missing source) leave the element
/// paused while the clock runs silent.
#[cfg(target_arch = "wasm32")]
pub fn try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

/// Current track position, with the not-yet-loaded NaN case mapped
/// to zero.
#[cfg(target_arch = "wasm32")]
pub fn audio_position(audio: &HtmlAudioElement) -> f64 {
    let position = audio.current_time();
    if position.is_finite() {
        position
    } else {
        0.0
    }
}

/// Headless component that welds the narration element to the virtual
/// clock. Renders nothing.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn VoiceoverController() -> Element {
    use std::cell::RefCell;
    use std::rc::Rc;

    let playhead = use_context::<Signal<Playhead>>();
    let playing = use_memo(move || playhead().playing);

    // Transport follows play/pause flips.
    use_effect(move || {
        let active = playing();
        let Some(audio) = voiceover_element() else {
            return;
        };
        if active {
            if audio.paused() {
                try_play(&audio);
            }
        } else if !audio.paused() {
            let _ = audio.pause();
        }
    });

    // Position: snap the track back when it drifts from the clock, and
    // exactly on paused seeks.
    use_effect(move || {
        let head = playhead();
        let Some(audio) = voiceover_element() else {
            return;
        };
        if let Some(target) = sync_target(audio_position(&audio), &head) {
            audio.set_current_time(target);
        }
    });

    // Natural end of the narration stops the clock where it stands.
    // The closure is parked in a hook slot so teardown can unhook it.
    let ended_callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    {
        let ended_callback = ended_callback.clone();
        let mut playhead = playhead;
        use_effect(move || {
            if ended_callback.borrow().is_some() {
                return;
            }
            let Some(audio) = voiceover_element() else {
                warn!("voiceover element unavailable, running silent");
                return;
            };
            let runtime = Runtime::current();
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                debug!("voiceover ended");
                playhead.with_mut(|head| head.finish());
            }) as Box<dyn FnMut()>);
            let _ =
                audio.add_event_listener_with_callback("ended", callback.as_ref().unchecked_ref());
            *ended_callback.borrow_mut() = Some(callback);
        });
    }

    use_drop(move || {
        if let Some(callback) = ended_callback.borrow_mut().take() {
            if let Some(audio) = voiceover_element() {
                let _ = audio
                    .remove_event_listener_with_callback("ended", callback.as_ref().unchecked_ref());
            }
        }
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn VoiceoverController() -> Element {
    rsx! {}
}
