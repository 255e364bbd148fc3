//! Element handles resolved once at mount.
//!
//! Every widget is optional. A missing element is recorded as `None` (or an
//! empty list) and the matching [`Features`] flag stays off, which turns the
//! widget's handlers into no-ops.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, NodeList, Window};

use crate::site::Features;
use crate::state::contact::{FormFields, fields_from_pairs};
use crate::state::nav::Section;

const HEADER: &str = "header";
const SECTIONS: &str = "section[id]";
const NAV_LINKS: &str = ".nav a, .mobile-menu a";
const ANCHORS: &str = "a[href^=\"#\"]";
const HAMBURGER: &str = ".hamburger";
const MOBILE_MENU: &str = ".mobile-menu";
const MODAL: &str = "#contact-modal";
const MODAL_CLOSE: &str = ".modal-close";
const DEMO_TRIGGERS: &str = ".open-demo";
const CONTACT_FORM: &str = "#contact-form";
const CHAT_TOGGLE: &str = "#chatbot-toggle";
const CHAT_WINDOW: &str = "#chatbot-window";
const CHAT_CLOSE: &str = "#chatbot-close";
const CHAT_FORM: &str = "#chatbot-form";
const CHAT_INPUT: &str = "#chatbot-input";
const CHAT_MESSAGES: &str = "#chatbot-messages";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_BLOCK_ID: &str = "site-config";

/// The chat conversation only works when its form, input, and transcript
/// are all present. The window and its buttons are tracked separately.
#[derive(Clone, Debug)]
pub struct ChatElements {
    pub form: Element,
    pub input: HtmlInputElement,
    pub messages: Element,
}

#[derive(Clone, Debug)]
pub struct PageElements {
    pub window: Window,
    pub document: Document,
    pub header: Option<Element>,
    pub sections: Vec<HtmlElement>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub hamburger: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub modal: Option<Element>,
    pub modal_close: Option<Element>,
    pub demo_triggers: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub chat_window: Option<HtmlElement>,
    pub chat_toggle: Option<Element>,
    pub chat_close: Option<Element>,
    pub chat: Option<ChatElements>,
}

impl PageElements {
    /// Resolve every selector against `document`.
    ///
    /// # Errors
    ///
    /// Only fails if the browser rejects a selector.
    pub fn query(window: Window, document: Document) -> Result<Self, JsValue> {
        let chat = match (
            document.query_selector(CHAT_FORM)?,
            query_as::<HtmlInputElement>(&document, CHAT_INPUT)?,
            document.query_selector(CHAT_MESSAGES)?,
        ) {
            (Some(form), Some(input), Some(messages)) => Some(ChatElements { form, input, messages }),
            _ => None,
        };

        Ok(Self {
            header: document.query_selector(HEADER)?,
            sections: query_all(&document, SECTIONS)?,
            nav_links: query_all(&document, NAV_LINKS)?,
            anchors: query_all(&document, ANCHORS)?,
            hamburger: document.query_selector(HAMBURGER)?,
            mobile_menu: document.query_selector(MOBILE_MENU)?,
            modal: document.query_selector(MODAL)?,
            modal_close: document.query_selector(MODAL_CLOSE)?,
            demo_triggers: query_all(&document, DEMO_TRIGGERS)?,
            contact_form: query_as::<HtmlFormElement>(&document, CONTACT_FORM)?,
            chat_window: query_as::<HtmlElement>(&document, CHAT_WINDOW)?,
            chat_toggle: document.query_selector(CHAT_TOGGLE)?,
            chat_close: document.query_selector(CHAT_CLOSE)?,
            chat,
            window,
            document,
        })
    }

    pub fn features(&self) -> Features {
        Features {
            header: self.header.is_some(),
            nav: !self.nav_links.is_empty(),
            menu: self.hamburger.is_some() && self.mobile_menu.is_some(),
            modal: self.modal.is_some(),
            contact: self.contact_form.is_some(),
            chat_window: self.chat_window.is_some(),
            chat: self.chat.is_some(),
        }
    }

    /// Raw text of the inline config block, if the page has one.
    pub fn config_block(document: &Document) -> Option<String> {
        document.get_element_by_id(CONFIG_BLOCK_ID).and_then(|el| el.text_content())
    }

    /// Current vertical scroll offset.
    ///
    /// # Errors
    ///
    /// Propagates the browser error if the offset cannot be read.
    pub fn scroll_y(&self) -> Result<f64, JsValue> {
        self.window.scroll_y()
    }

    /// Section ids and their current top offsets, in document order.
    pub fn sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter_map(|el| el.get_attribute("id").map(|id| Section::new(id, f64::from(el.offset_top()))))
            .collect()
    }

    /// Whether an in-page fragment points at an element on this page.
    pub fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    /// Collect the contact form's named fields.
    ///
    /// # Errors
    ///
    /// Propagates the browser error if `FormData` cannot be built or iterated.
    pub fn contact_fields(&self) -> Result<FormFields, JsValue> {
        let Some(form) = &self.contact_form else {
            return Ok(FormFields::new());
        };

        let data = FormData::new_with_form(form)?;
        let Some(entries) = js_sys::try_iter(&data)? else {
            return Ok(FormFields::new());
        };

        let mut pairs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let Some(pair) = entry.dyn_ref::<js_sys::Array>() else {
                continue;
            };
            // File inputs yield non-string values; they are not part of the form contract.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                pairs.push((name, value));
            }
        }
        Ok(fields_from_pairs(pairs))
    }

    /// Current chat input text; empty when the widget is missing.
    pub fn chat_input(&self) -> String {
        self.chat.as_ref().map(|c| c.input.value()).unwrap_or_default()
    }
}

fn query_as<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(document.query_selector(selector)?.and_then(|el| el.dyn_ref::<T>().cloned()))
}

fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok(collect_nodes(&list))
}

fn collect_nodes<T: JsCast + Clone>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect()
}
