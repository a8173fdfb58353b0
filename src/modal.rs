use crate::constants::{
    ACTIVE_CLASS, BIRTH_YEAR_ID, DEATH_YEAR_ID, EPITAPH_INPUT_ID, FORM_ID, FREE_TEXT_FIELDS_ID,
    FREE_TEXT_ID, MODAL_ID, NAME_INPUT_ID, STRUCTURED_FIELDS_ID,
};
use cemetery_core::{InscriptionForm, InscriptionKind};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show the inscription modal with the field group for `kind`.
pub fn show(document: &web::Document, kind: InscriptionKind) {
    let (visible, hidden) = match kind {
        InscriptionKind::Structured => (STRUCTURED_FIELDS_ID, FREE_TEXT_FIELDS_ID),
        InscriptionKind::FreeText => (FREE_TEXT_FIELDS_ID, STRUCTURED_FIELDS_ID),
    };
    if let Some(el) = document.get_element_by_id(visible) {
        _ = el.set_attribute("style", "");
    }
    if let Some(el) = document.get_element_by_id(hidden) {
        // fallback for pages that only carry one group
        _ = el.set_attribute("style", "display:none");
    }
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}

/// Hide the modal and drop whatever was typed.
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
    if let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        form.reset();
    }
}

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Snapshot of every inscription field; missing fields read as empty.
pub fn read_form(document: &web::Document) -> InscriptionForm {
    InscriptionForm {
        name: field_value(document, NAME_INPUT_ID),
        birth_year: field_value(document, BIRTH_YEAR_ID),
        death_year: field_value(document, DEATH_YEAR_ID),
        epitaph: field_value(document, EPITAPH_INPUT_ID),
        text: field_value(document, FREE_TEXT_ID),
    }
}
