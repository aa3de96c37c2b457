//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use safe_edit::commands::Cmd;
use safe_edit::config::AppConfig;
use safe_edit::messages::{Msg, UiMsg};
use safe_edit::model::AppModel;
use safe_edit::theme::Theme;
use safe_edit::update::update;

/// Demo model with the default configuration (9 fields, max 8 characters)
pub fn test_model() -> AppModel {
    AppModel::new(AppConfig::default(), Theme::default()).unwrap()
}

/// Demo model with `count` fields limited to `max` characters
pub fn test_model_with(count: usize, max: Option<usize>) -> AppModel {
    let mut config = AppConfig::default();
    config.field_count = count;
    config.field.max_characters = max;
    AppModel::new(config, Theme::default()).unwrap()
}

/// Center of the toggle button of field `index`, in physical pixels
pub fn button_center(model: &AppModel, index: usize) -> (f64, f64) {
    let b = model.geometry()[index].button;
    ((b.x + b.width / 2.0) as f64, (b.y + b.height / 2.0) as f64)
}

/// A point inside the entry of field `index`
pub fn entry_center(model: &AppModel, index: usize) -> (f64, f64) {
    let e = model.geometry()[index].entry;
    ((e.x + e.width / 2.0) as f64, (e.y + e.height / 2.0) as f64)
}

/// Move the pointer to (x, y), press and release the primary button there
pub fn click(model: &mut AppModel, (x, y): (f64, f64)) -> Option<Cmd> {
    update(model, Msg::Ui(UiMsg::PointerMoved { x, y }));
    let pressed = update(model, Msg::Ui(UiMsg::PointerPressed));
    let released = update(model, Msg::Ui(UiMsg::PointerReleased));
    Cmd::merge(pressed, released)
}

/// Type `text` into the focused field, one key at a time
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::insert_char(ch));
    }
}
