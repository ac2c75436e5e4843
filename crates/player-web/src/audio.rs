use player_core::error::Result as PlayerResult;
use player_core::{AudioOutput, AudioSource, PlayerError, Track};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<audio>` element driven by the playback controller.
pub struct ElementAudio {
    el: web::HtmlAudioElement,
    label: &'static str,
}

impl AudioOutput for ElementAudio {
    fn set_looping(&mut self, looping: bool) {
        self.el.set_loop(looping);
    }

    fn volume(&self) -> f32 {
        self.el.volume() as f32
    }

    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume.clamp(0.0, 1.0) as f64);
    }

    fn play(&mut self) -> PlayerResult<()> {
        let promise = self
            .el
            .play()
            .map_err(|e| PlayerError::Playback(format!("{:?}", e)))?;
        // Autoplay policy rejections arrive asynchronously
        let label = self.label;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play() rejected for '{}': {:?}", label, e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.el.pause() {
            log::error!("[audio] pause error: {:?}", e);
        }
    }
}

/// Opens tracks as `HtmlAudioElement`s with eager preloading.
#[derive(Default)]
pub struct ElementAudioSource;

impl AudioSource for ElementAudioSource {
    type Output = ElementAudio;

    fn open(&mut self, track: &Track) -> PlayerResult<ElementAudio> {
        let path = track.audio_path();
        let el = web::HtmlAudioElement::new_with_src(&path).map_err(|e| {
            PlayerError::AudioOpen {
                path: path.clone(),
                reason: format!("{:?}", e),
            }
        })?;
        el.set_preload("auto");
        Ok(ElementAudio {
            el,
            label: track.name,
        })
    }
}
