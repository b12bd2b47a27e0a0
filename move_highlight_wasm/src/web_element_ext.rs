use move_highlight::Rect;
use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn with_id(self, value: &str) -> web_sys::Element;
    fn with_style<'a>(
        self, properties: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> JsResult<web_sys::Element>;

    // Position relative to the document rather than the viewport, i.e. the coordinates an
    // absolutely positioned child of `<body>` needs to cover the element.
    fn page_rect(&self) -> Rect;
}

impl WebElementExt for web_sys::Element {
    fn with_id(self, value: &str) -> web_sys::Element {
        self.set_id(value);
        self
    }

    fn with_style<'a>(
        self, properties: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> JsResult<web_sys::Element> {
        let html_element = self
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or_else(|| rust_error!("Element \"{}\" cannot be styled", self.tag_name()))?;
        let style = html_element.style();
        for (name, value) in properties {
            style.set_property(name, value)?;
        }
        Ok(self)
    }

    fn page_rect(&self) -> Rect {
        let client_rect = self.get_bounding_client_rect();
        // Not having a window only happens in workers, where scrolling is meaningless anyway.
        let (scroll_x, scroll_y) = web_sys::window()
            .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
            .unwrap_or((0.0, 0.0));
        Rect::new(
            client_rect.left() + scroll_x,
            client_rect.top() + scroll_y,
            client_rect.right() + scroll_x,
            client_rect.bottom() + scroll_y,
        )
    }
}
