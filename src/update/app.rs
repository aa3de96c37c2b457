//! App message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            rescroll_all(model);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            tracing::info!(scale_factor, "scale factor changed");
            model.scale_factor = scale_factor;
            rescroll_all(model);
            Some(Cmd::Redraw)
        }

        AppMsg::FontMetrics { char_width } => {
            model.char_width = char_width;
            rescroll_all(model);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

fn rescroll_all(model: &mut AppModel) {
    for index in 0..model.fields.len() {
        model.scroll_to_cursor(index);
    }
}
