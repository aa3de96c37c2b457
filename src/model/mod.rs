//! Application model - the complete state of the demo window
//!
//! A column of edit-toggle fields plus the window-level interaction state,
//! following the Elm Architecture pattern.

pub mod ui;

pub use ui::{UiState, CURSOR_BLINK_INTERVAL};

use crate::config::AppConfig;
use crate::field::EditToggleField;
use crate::hover::ColorError;
use crate::theme::Theme;
use crate::view::geometry::{self, FieldGeometry};

/// Fallback advance width until the renderer reports real font metrics
pub const DEFAULT_CHAR_WIDTH: f32 = 8.0;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub fields: Vec<EditToggleField>,
    pub theme: Theme,
    pub config: AppConfig,
    pub ui: UiState,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
    pub scale_factor: f64,
    /// Advance width of one character in physical pixels
    pub char_width: f32,
}

impl AppModel {
    /// Build `config.field_count` fields from the shared field settings
    pub fn new(config: AppConfig, theme: Theme) -> Result<Self, ColorError> {
        let fields = (0..config.field_count)
            .map(|_| EditToggleField::new(config.field.to_options(), &theme))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            count = fields.len(),
            theme = %theme.name,
            max_characters = ?config.field.max_characters,
            "created fields"
        );

        Ok(Self {
            fields,
            window_size: (config.window_width, config.window_height),
            theme,
            config,
            ui: UiState::new(),
            scale_factor: 1.0,
            char_width: DEFAULT_CHAR_WIDTH,
        })
    }

    pub fn field(&self, index: usize) -> Option<&EditToggleField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut EditToggleField> {
        self.fields.get_mut(index)
    }

    pub fn focused_field(&self) -> Option<&EditToggleField> {
        self.ui.focused.and_then(|i| self.fields.get(i))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut EditToggleField> {
        self.ui.focused.and_then(|i| self.fields.get_mut(i))
    }

    /// Move keyboard focus, keeping each entry's focus flag in sync
    pub fn set_focus(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.fields.len());
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.entry_mut().focused = Some(i) == index;
        }
        self.ui.focused = index;
        self.ui.reset_cursor_blink();
    }

    /// Current placement of every field
    pub fn geometry(&self) -> Vec<FieldGeometry> {
        geometry::layout_fields(
            &self.fields,
            self.window_size.0,
            self.config.field.width,
            self.scale_factor,
        )
    }

    /// Scroll the entry at `index` so its cursor stays visible
    pub fn scroll_to_cursor(&mut self, index: usize) {
        let Some(g) = self.geometry().get(index).copied() else {
            return;
        };
        let visible = geometry::visible_chars(&g.entry, self.char_width, self.scale_factor);
        if let Some(field) = self.fields.get_mut(index) {
            let entry = field.entry_mut();
            let cursor = entry.editable.cursor();
            entry.scroll_x = geometry::calculate_scroll(cursor, entry.scroll_x, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_configured_fields() {
        let model = AppModel::new(AppConfig::default(), Theme::default()).unwrap();
        assert_eq!(model.fields.len(), 9);
        assert!(model.fields.iter().all(|f| !f.is_editable()));
        assert_eq!(model.fields[0].max_characters(), Some(8));
    }

    #[test]
    fn test_set_focus_is_exclusive() {
        let mut model = AppModel::new(AppConfig::default(), Theme::default()).unwrap();
        model.set_focus(Some(2));
        model.set_focus(Some(4));
        let focused: Vec<usize> = model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.entry().focused)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(focused, vec![4]);
        model.set_focus(Some(99));
        assert_eq!(model.ui.focused, None);
    }
}
