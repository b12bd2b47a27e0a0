use log::warn;
use move_highlight::{HighlightConfig, HighlightTarget, OverlayRect, OverlayStyle, Rect, SquareId};
use wasm_bindgen::JsValue;

use crate::web_document::WebDocument;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


// Highlights squares of a board that is already on the page. The board is never modified beyond
// toggling the marker class; the overlay is appended to `<body>`.
pub struct WebTarget {
    document: WebDocument,
    board_selector: String,
    square_class_prefix: String,
    marker_class: String,
    overlay_id: String,
}

impl WebTarget {
    pub fn new(document: WebDocument, config: &HighlightConfig) -> Self {
        WebTarget {
            document,
            board_selector: config.board_selector.clone(),
            square_class_prefix: config.square_class_prefix.clone(),
            marker_class: config.marker_class.clone(),
            overlay_id: config.overlay_id.clone(),
        }
    }

    fn square_selector(&self, id: &SquareId) -> String {
        format!("{} .{}{}", self.board_selector, self.square_class_prefix, id)
    }
}

impl HighlightTarget for WebTarget {
    type Square = web_sys::Element;
    type Error = JsValue;

    fn find_square(&self, id: &SquareId) -> Option<web_sys::Element> {
        let selector = self.square_selector(id);
        match self.document.query_selector(&selector) {
            Ok(element) => element,
            Err(_) => {
                warn!("Square {id:?} produces invalid selector {selector:?}");
                None
            }
        }
    }

    fn square_rect(&self, square: &web_sys::Element) -> Rect { square.page_rect() }

    fn add_marker(&mut self, square: &web_sys::Element) -> JsResult<()> {
        square.class_list().add_1(&self.marker_class)
    }

    fn remove_all_markers(&mut self) -> JsResult<usize> {
        self.document.purge_class_name(&self.marker_class)
    }

    fn has_markers(&self) -> bool { self.document.has_class_name(&self.marker_class) }

    fn mount_overlay(&mut self, rect: OverlayRect, style: &OverlayStyle) -> JsResult<()> {
        let px = |v: f64| format!("{v}px");
        let overlay = self.document.create_element("div")?.with_id(&self.overlay_id).with_style([
            ("position", "absolute"),
            ("left", px(rect.left).as_str()),
            ("top", px(rect.top).as_str()),
            ("width", px(rect.width).as_str()),
            ("height", px(rect.height).as_str()),
            ("background-color", style.background_color.as_str()),
            ("pointer-events", "none"),
        ])?;
        self.document.body()?.append_child(&overlay)?;
        Ok(())
    }

    fn unmount_overlay(&mut self) -> JsResult<bool> {
        Ok(match self.document.get_element_by_id(&self.overlay_id) {
            Some(overlay) => {
                overlay.remove();
                true
            }
            None => false,
        })
    }

    fn has_overlay(&self) -> bool { self.document.get_element_by_id(&self.overlay_id).is_some() }
}
