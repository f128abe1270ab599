//! DOM-backed host: id lookup, bounding boxes and viewport height.

use web_sys::{Document, Element, Window};

use vizij_scroll_core::{Geometry, ScrollHost};

pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("window has no document")?;
        Ok(Self { window, document })
    }
}

impl ScrollHost for DomHost {
    type Handle = Element;

    fn resolve(&mut self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn geometry(&mut self, handle: &Element) -> Geometry {
        let rect = handle.get_bounding_client_rect();
        Geometry::new(rect.top(), rect.height())
    }

    fn viewport_height(&mut self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|root| f64::from(root.client_height()))
            })
            .unwrap_or(0.0)
    }
}
