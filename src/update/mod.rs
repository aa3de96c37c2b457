//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod field;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::FieldSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use field::update_field;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Field { index, msg } => field::update_field(model, index, msg),
        Msg::Focused(msg) => match model.ui.focused {
            Some(index) => field::update_field(model, index, msg),
            None => None,
        },
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update with span and per-field state diff (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(
        &msg,
        Msg::Ui(UiMsg::BlinkCursor) | Msg::Ui(UiMsg::PointerMoved { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before: Vec<FieldSnapshot> = if is_noisy {
        Vec::new()
    } else {
        model.fields.iter().map(FieldSnapshot::from_field).collect()
    };

    let result = update_inner(model, msg);

    for (index, (before, field)) in before.iter().zip(&model.fields).enumerate() {
        if let Some(diff) = before.diff(&FieldSnapshot::from_field(field)) {
            debug!(target: "field", index, %diff, "state changed");
        }
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Field[2]::ToggleEdit`
/// - `Ui::FocusNext`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Field { index, msg } => format!("Field[{}]::{:?}", index, msg),
        Msg::Focused(m) => format!("Focused::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
