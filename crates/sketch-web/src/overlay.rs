use crate::constants::{INFO_POPUP_ID, POPUP_OVERLAY_ID, POPUP_SHOWN_CLASS};
use web_sys as web;

fn set_shown(document: &web::Document, id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = if shown {
            cl.add_1(POPUP_SHOWN_CLASS)
        } else {
            cl.remove_1(POPUP_SHOWN_CLASS)
        };
    }
}

#[inline]
pub fn show(document: &web::Document) {
    set_shown(document, INFO_POPUP_ID, true);
    set_shown(document, POPUP_OVERLAY_ID, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    set_shown(document, INFO_POPUP_ID, false);
    set_shown(document, POPUP_OVERLAY_ID, false);
}

#[inline]
pub fn is_shown(document: &web::Document) -> bool {
    document
        .get_element_by_id(INFO_POPUP_ID)
        .map(|el| el.class_list().contains(POPUP_SHOWN_CLASS))
        .unwrap_or(false)
}
