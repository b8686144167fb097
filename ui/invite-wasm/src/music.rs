//! Background music toggle.

use std::cell::Cell;

use gloo_console as console;
use iv_page_core::music::PlayState;
use wasm_bindgen_futures::JsFuture;

use crate::dom::{self, MusicEls};

const PLAYING_CLASS: &str = "playing";

pub struct MusicToggle {
    els: MusicEls,
    state: Cell<PlayState>,
}

impl MusicToggle {
    pub fn new(els: MusicEls) -> Self {
        Self {
            els,
            state: Cell::new(PlayState::default()),
        }
    }

    pub fn state(&self) -> PlayState {
        self.state.get()
    }

    pub fn on_activate(&self) {
        let next = self.state.get().toggled();
        self.state.set(next);

        match next {
            PlayState::Playing => {
                // The indicator goes on before playback resolves and stays on
                // if the browser refuses autoplay.
                dom::add_class(&self.els.control, PLAYING_CLASS);
                match self.els.audio.play() {
                    Ok(promise) => {
                        wasm_bindgen_futures::spawn_local(async move {
                            if let Err(e) = JsFuture::from(promise).await {
                                console::log!(format!("Audio play failed: {}", dom::describe(&e)));
                            }
                        });
                    }
                    Err(e) => console::log!(format!("Audio play failed: {}", dom::describe(&e))),
                }
            }
            PlayState::Paused => {
                let _ = self.els.audio.pause();
                dom::remove_class(&self.els.control, PLAYING_CLASS);
            }
        }
    }
}
