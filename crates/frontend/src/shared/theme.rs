//! Applies persisted UI preferences to the document.
//!
//! Color mode is a `dark` class on `<body>`; the stylesheet keys off it.
//! Text direction follows the interface language.

use contracts::enums::Language;

/// Toggle the `dark` class on the document body
pub fn apply_color_mode(dark: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let _ = if dark {
        body.class_list().add_1("dark")
    } else {
        body.class_list().remove_1("dark")
    };
}

/// Set the document `dir` attribute from the interface language
pub fn apply_text_direction(language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("dir", language.dir());
}
