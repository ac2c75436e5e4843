use crate::dom;
use player_core::{Backdrop, Gradient, OVERLAY_COMMIT_DELAY_MS};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Gradient painted on `<body>`, cross-faded through a temporary overlay.
pub struct PageBackground {
    document: web::Document,
}

impl PageBackground {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

fn paint_body(document: &web::Document, gradient: &Gradient) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("background", &gradient.css());
    }
}

impl Backdrop for PageBackground {
    fn set_gradient(&mut self, gradient: &Gradient) {
        paint_body(&self.document, gradient);
    }

    fn crossfade_to(&mut self, gradient: &Gradient, duration: Duration) {
        let Some(body) = self.document.body() else {
            return;
        };
        let overlay: web::HtmlElement = match self
            .document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into().ok())
        {
            Some(el) => el,
            None => {
                // no overlay: fall back to an instant switch
                paint_body(&self.document, gradient);
                return;
            }
        };
        let ms = duration.as_millis() as i32;
        let style = overlay.style();
        for (k, v) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("z-index", "-1"),
            ("opacity", "0"),
        ] {
            _ = style.set_property(k, v);
        }
        _ = style.set_property("transition", &format!("opacity {}ms ease-in-out", ms));
        _ = style.set_property("background", &gradient.css());
        if let Err(e) = body.append_child(&overlay) {
            log::error!("[background] overlay append failed: {:?}", e);
            paint_body(&self.document, gradient);
            return;
        }

        let fading = overlay.clone();
        dom::set_timeout(OVERLAY_COMMIT_DELAY_MS, move || {
            _ = fading.style().set_property("opacity", "1");
        });

        let document = self.document.clone();
        let gradient = *gradient;
        dom::set_timeout(ms, move || {
            paint_body(&document, &gradient);
            overlay.remove();
        });
    }
}
