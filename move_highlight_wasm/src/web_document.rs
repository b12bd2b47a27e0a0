use itertools::Itertools;

use crate::rust_error;
use crate::web_error_handling::JsResult;
use crate::web_iterators::{HtmlCollectionIterator, IntoHtmlCollectionIterator};


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn body(&self) -> JsResult<web_sys::HtmlElement> {
        self.0.body().ok_or_else(|| rust_error!("Cannot find document body"))
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<web_sys::Element> {
        self.0.get_element_by_id(element_id)
    }

    pub fn get_elements_by_class_name(&self, class_name: &str) -> HtmlCollectionIterator {
        self.0.get_elements_by_class_name(class_name).into_iterator()
    }
    pub fn has_class_name(&self, class_name: &str) -> bool {
        self.0.get_elements_by_class_name(class_name).length() > 0
    }
    // Returns the number of elements the class was removed from.
    pub fn purge_class_name(&self, class_name: &str) -> JsResult<usize> {
        let elements = self.get_elements_by_class_name(class_name).collect_vec();
        for element in &elements {
            element.class_list().remove_1(class_name)?;
        }
        Ok(elements.len())
    }

    // Fails if `selectors` is not valid CSS.
    pub fn query_selector(&self, selectors: &str) -> JsResult<Option<web_sys::Element>> {
        self.0.query_selector(selectors)
    }

    pub fn create_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.0.create_element(local_name)
    }
}

pub fn web_document() -> JsResult<WebDocument> {
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    let document = window.document().ok_or_else(|| rust_error!("Cannot find document"))?;
    Ok(WebDocument(document))
}
