use crate::constants::{PLAY_PAUSE_ICON_ID, TRACK_NAME_ID};
use player_core::{play_pause_icon, Track, TrackView};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track name label and play/pause icon. Missing elements are skipped.
pub struct PageView {
    track_name: Option<web::Element>,
    icon: Option<web::HtmlImageElement>,
}

impl PageView {
    pub fn new(document: &web::Document) -> Self {
        let track_name = document.get_element_by_id(TRACK_NAME_ID);
        let icon = document
            .get_element_by_id(PLAY_PAUSE_ICON_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        if track_name.is_none() {
            log::warn!("missing #{}", TRACK_NAME_ID);
        }
        if icon.is_none() {
            log::warn!("missing #{} <img>", PLAY_PAUSE_ICON_ID);
        }
        Self { track_name, icon }
    }
}

impl TrackView for PageView {
    fn show_track(&mut self, track: &Track) {
        if let Some(el) = &self.track_name {
            el.set_text_content(Some(track.name));
        }
    }

    fn show_playing(&mut self, playing: bool) {
        if let Some(icon) = &self.icon {
            let (src, alt) = play_pause_icon(playing);
            icon.set_src(src);
            icon.set_alt(alt);
        }
    }
}
