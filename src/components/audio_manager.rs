//! Audio Manager - owns the hidden audio element and forwards its events to the transport.

#[cfg(target_arch = "wasm32")]
use crate::components::TransportSignal;
#[cfg(target_arch = "wasm32")]
use crate::playback::MediaElement;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use js_sys::Promise;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "pinkwave-audio";

/// Media element the transport drives on this platform.
#[cfg(target_arch = "wasm32")]
pub type AudioHandle = WebAudio;

#[cfg(not(target_arch = "wasm32"))]
pub type AudioHandle = crate::playback::DetachedMedia;

/// Initialize the global audio element once
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// `HtmlAudioElement` behind the transport's media seam.
///
/// Created detached when the document is unavailable so the transport can
/// still be constructed; calls on it are then no-ops.
#[cfg(target_arch = "wasm32")]
pub struct WebAudio {
    element: Option<HtmlAudioElement>,
    on_play_rejected: Option<Rc<dyn Fn()>>,
}

#[cfg(target_arch = "wasm32")]
impl WebAudio {
    pub fn attach() -> Self {
        let element = get_or_create_audio_element();
        if element.is_none() {
            warn!("no document available, audio output disabled");
        }
        Self {
            element,
            on_play_rejected: None,
        }
    }

    /// Called whenever a `play()` promise rejects.
    pub fn set_play_rejected_handler(&mut self, handler: impl Fn() + 'static) {
        self.on_play_rejected = Some(Rc::new(handler));
    }

    fn watch_rejection(&self, promise: Promise) {
        let Some(handler) = self.on_play_rejected.clone() else {
            return;
        };
        let reject_closure = Closure::wrap(Box::new(move |err: JsValue| {
            warn!("play() rejected: {err:?}");
            handler();
        }) as Box<dyn FnMut(JsValue)>);
        let _ = promise.catch(&reject_closure);
        reject_closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaElement for WebAudio {
    fn set_source(&mut self, uri: &str) {
        if let Some(audio) = &self.element {
            audio.set_src(uri);
        }
    }

    fn play(&mut self) {
        let Some(audio) = &self.element else {
            return;
        };
        match audio.play() {
            Ok(promise) => self.watch_rejection(promise),
            Err(err) => warn!("play() threw: {err:?}"),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = &self.element {
            let _ = audio.pause();
        }
    }

    fn is_paused(&self) -> bool {
        self.element.as_ref().map(|a| a.paused()).unwrap_or(true)
    }

    fn current_time(&self) -> f64 {
        self.element.as_ref().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(audio) = &self.element {
            audio.set_current_time(seconds);
        }
    }

    fn duration(&self) -> f64 {
        self.element
            .as_ref()
            .map(|a| a.duration())
            .unwrap_or(f64::NAN)
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(audio) = &self.element {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn create_audio_handle() -> AudioHandle {
    WebAudio::attach()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_audio_handle() -> AudioHandle {
    AudioHandle::default()
}

/// Audio controller - wires media events into the transport
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

/// Audio controller - wires media events into the transport
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let transport = use_context::<TransportSignal>().0;

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        // Rejected promises fire neither `play` nor `pause`; re-read the paused flag instead.
        let on_reject = transport;
        let mut install = transport;
        install.write().media_mut().set_play_rejected_handler(move || {
            let mut transport = on_reject;
            transport.write().sync_media_status();
        });

        let mut on_time = transport;
        let time_closure = Closure::wrap(Box::new(move || {
            on_time.write().on_time_update();
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        // Total time is shown as soon as metadata arrives, before the first time-update.
        let mut on_metadata = transport;
        let meta_closure = Closure::wrap(Box::new(move || {
            on_metadata.write().on_time_update();
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(meta_closure.as_ref().unchecked_ref()));
        meta_closure.forget();

        let mut on_end = transport;
        let end_closure = Closure::wrap(Box::new(move || {
            on_end.write().on_ended();
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(end_closure.as_ref().unchecked_ref()));
        end_closure.forget();

        let mut on_play = transport;
        let play_closure = Closure::wrap(Box::new(move || {
            if !on_play.peek().is_playing() {
                on_play.write().on_media_status(false);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onplay(Some(play_closure.as_ref().unchecked_ref()));
        play_closure.forget();

        let mut on_pause = transport;
        let pause_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                // `ended` also fires `pause`; the ended handler reloads and plays again.
                if audio.ended() {
                    return;
                }
            }
            if on_pause.peek().is_playing() {
                on_pause.write().on_media_status(true);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onpause(Some(pause_closure.as_ref().unchecked_ref()));
        pause_closure.forget();
    });

    rsx! {}
}
