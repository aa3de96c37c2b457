//! The edit-toggle field
//!
//! A text entry paired with a square toggle button. The entry starts
//! read-only; pressing the button makes it writable (selecting its text so
//! the next keystroke replaces it), pressing again locks it. Each state has
//! its own button label and color, and the button shows a darker shade of
//! that color while hovered.
//!
//! ```
//! use safe_edit::field::{EditMode, EditToggleField, FieldOptions};
//! use safe_edit::theme::Theme;
//!
//! let theme = Theme::default();
//! let mut field = EditToggleField::new(
//!     FieldOptions::new().max_characters(Some(8)).text("hello"),
//!     &theme,
//! )
//! .unwrap();
//!
//! assert_eq!(field.mode(), EditMode::Disabled);
//! assert_eq!(field.button().text, "A");
//!
//! field.toggle_edit_mode();
//! assert!(field.is_editable());
//! assert_eq!(field.entry().editable.selected_text(), "hello");
//! ```

use std::fmt;

use crate::editable::{EditConstraints, EditableState, StringBuffer, TextEditMsg};
use crate::hover::{hover_color, ColorError};
use crate::theme::Theme;

/// Height of the entry and side length of the square button, in logical pixels
pub const DEFAULT_WIDGET_HEIGHT: u32 = 28;

pub const DEFAULT_DISABLED_TEXT: &str = "A";
pub const DEFAULT_ENABLED_TEXT: &str = "M";
pub const DEFAULT_DISABLED_COLOR: &str = "red";
pub const DEFAULT_ENABLED_COLOR: &str = "green";

/// Hook invoked on a state transition
pub type Callback = Box<dyn FnMut()>;

/// Whether the entry currently accepts user edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Entry is read-only (initial state)
    #[default]
    Disabled,
    /// Entry is writable
    Enabled,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Disabled => EditMode::Enabled,
            EditMode::Enabled => EditMode::Disabled,
        }
    }
}

/// Interaction state of the text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Text can be selected and copied but not changed by keystrokes
    #[default]
    ReadOnly,
    Normal,
}

/// Padding around the entry/button row, passed through to the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLayout {
    pub pad_x: u32,
    pub pad_y: u32,
}

/// Label and colors the button shows in one edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleStyle {
    pub label: String,
    /// Base color as configured (palette name, color name or `#RRGGBB`)
    pub color: String,
    /// Resolved darker shade, `#rrggbb`
    pub hover_color: String,
}

impl ToggleStyle {
    /// Build a style, resolving its hover color through `theme`
    pub fn resolve(label: &str, color: &str, theme: &Theme) -> Result<Self, ColorError> {
        Ok(Self {
            label: label.to_string(),
            color: color.to_string(),
            hover_color: hover_color(color, theme)?,
        })
    }
}

/// The text box half of the field
#[derive(Debug, Clone)]
pub struct TextEntry {
    pub editable: EditableState,
    pub state: EntryState,
    pub focused: bool,
    pub height: u32,
    /// First visible character when the text is wider than the entry
    pub scroll_x: usize,
}

impl TextEntry {
    pub fn text(&self) -> &str {
        self.editable.text()
    }

    pub fn is_read_only(&self) -> bool {
        self.state == EntryState::ReadOnly
    }
}

/// The toggle button half of the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub text: String,
    pub fg_color: String,
    pub hover_color: String,
    pub width: u32,
    pub height: u32,
    /// Pointer is over the button
    pub hovered: bool,
    /// Pointer button is held down on the button
    pub pressed: bool,
}

impl ToggleButton {
    /// Color the button is drawn with right now
    pub fn current_color(&self) -> &str {
        if self.hovered {
            &self.hover_color
        } else {
            &self.fg_color
        }
    }
}

/// Construction-time configuration of an [`EditToggleField`]
pub struct FieldOptions {
    pub disabled_text: String,
    pub enabled_text: String,
    pub disabled_color: String,
    pub enabled_color: String,
    /// Maximum number of characters the entry holds (None = unlimited)
    pub max_characters: Option<usize>,
    pub text: String,
    pub height: u32,
    pub layout: FrameLayout,
    pub on_disable: Option<Callback>,
    pub on_enable: Option<Callback>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            disabled_text: DEFAULT_DISABLED_TEXT.to_string(),
            enabled_text: DEFAULT_ENABLED_TEXT.to_string(),
            disabled_color: DEFAULT_DISABLED_COLOR.to_string(),
            enabled_color: DEFAULT_ENABLED_COLOR.to_string(),
            max_characters: None,
            text: String::new(),
            height: DEFAULT_WIDGET_HEIGHT,
            layout: FrameLayout::default(),
            on_disable: None,
            on_enable: None,
        }
    }
}

impl fmt::Debug for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("disabled_text", &self.disabled_text)
            .field("enabled_text", &self.enabled_text)
            .field("disabled_color", &self.disabled_color)
            .field("enabled_color", &self.enabled_color)
            .field("max_characters", &self.max_characters)
            .field("text", &self.text)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("on_disable", &self.on_disable.is_some())
            .field("on_enable", &self.on_enable.is_some())
            .finish()
    }
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled_text(mut self, text: impl Into<String>) -> Self {
        self.disabled_text = text.into();
        self
    }

    pub fn enabled_text(mut self, text: impl Into<String>) -> Self {
        self.enabled_text = text.into();
        self
    }

    pub fn disabled_color(mut self, color: impl Into<String>) -> Self {
        self.disabled_color = color.into();
        self
    }

    pub fn enabled_color(mut self, color: impl Into<String>) -> Self {
        self.enabled_color = color.into();
        self
    }

    pub fn max_characters(mut self, max: Option<usize>) -> Self {
        self.max_characters = max;
        self
    }

    /// Initial text of the entry
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn layout(mut self, layout: FrameLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn on_disable(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_disable = Some(Box::new(callback));
        self
    }

    pub fn on_enable(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_enable = Some(Box::new(callback));
        self
    }
}

/// A text entry whose editability is switched by a toggle button
pub struct EditToggleField {
    mode: EditMode,
    disabled_style: ToggleStyle,
    enabled_style: ToggleStyle,
    entry: TextEntry,
    button: ToggleButton,
    layout: FrameLayout,
    on_disable: Option<Callback>,
    on_enable: Option<Callback>,
}

impl fmt::Debug for EditToggleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditToggleField")
            .field("mode", &self.mode)
            .field("disabled_style", &self.disabled_style)
            .field("enabled_style", &self.enabled_style)
            .field("entry", &self.entry)
            .field("button", &self.button)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl EditToggleField {
    /// Create a field in the disabled (read-only) state.
    ///
    /// Both hover colors are resolved here, so an invalid color in either
    /// style fails construction rather than a later toggle.
    pub fn new(options: FieldOptions, theme: &Theme) -> Result<Self, ColorError> {
        let disabled_style =
            ToggleStyle::resolve(&options.disabled_text, &options.disabled_color, theme)?;
        let enabled_style =
            ToggleStyle::resolve(&options.enabled_text, &options.enabled_color, theme)?;

        let editable = EditableState::new(
            StringBuffer::from_text(&options.text),
            EditConstraints::with_max_length(options.max_characters),
        );

        let mut field = Self {
            mode: EditMode::Disabled,
            entry: TextEntry {
                editable,
                state: EntryState::ReadOnly,
                focused: false,
                height: options.height,
                scroll_x: 0,
            },
            button: ToggleButton {
                text: String::new(),
                fg_color: String::new(),
                hover_color: String::new(),
                width: options.height,
                height: options.height,
                hovered: false,
                pressed: false,
            },
            disabled_style,
            enabled_style,
            layout: options.layout,
            on_disable: options.on_disable,
            on_enable: options.on_enable,
        };
        field.apply_style();
        Ok(field)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editable(&self) -> bool {
        self.mode == EditMode::Enabled
    }

    /// Style for the current mode
    pub fn style(&self) -> &ToggleStyle {
        match self.mode {
            EditMode::Disabled => &self.disabled_style,
            EditMode::Enabled => &self.enabled_style,
        }
    }

    pub fn disabled_style(&self) -> &ToggleStyle {
        &self.disabled_style
    }

    pub fn enabled_style(&self) -> &ToggleStyle {
        &self.enabled_style
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Copy the current mode's label and colors onto the button
    fn apply_style(&mut self) {
        let style = match self.mode {
            EditMode::Disabled => &self.disabled_style,
            EditMode::Enabled => &self.enabled_style,
        };
        self.button.text.clone_from(&style.label);
        self.button.fg_color.clone_from(&style.color);
        self.button.hover_color.clone_from(&style.hover_color);
    }

    /// Switch between read-only and writable, returning the new mode
    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        self.apply_style();

        match self.mode {
            EditMode::Enabled => {
                self.entry.state = EntryState::Normal;
                self.entry.focused = true;
                self.entry.editable.select_all();
                tracing::debug!(text = self.entry.text(), "field editing enabled");
                if let Some(callback) = self.on_enable.as_mut() {
                    callback();
                }
            }
            EditMode::Disabled => {
                self.entry.state = EntryState::ReadOnly;
                self.entry.focused = false;
                tracing::debug!(text = self.entry.text(), "field editing disabled");
                if let Some(callback) = self.on_disable.as_mut() {
                    callback();
                }
            }
        }

        self.mode
    }

    /// Move to `mode`, toggling only if it differs from the current one
    pub fn set_edit_mode(&mut self, mode: EditMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.toggle_edit_mode();
        true
    }

    pub fn text(&self) -> &str {
        self.entry.text()
    }

    /// Replace the text programmatically.
    ///
    /// Works in both modes; the character limit still applies.
    pub fn set_text(&mut self, text: &str) {
        self.entry.editable.set_content(text);
    }

    /// Apply a keystroke-level edit.
    ///
    /// While the entry is read-only, messages that would change the text are
    /// ignored; movement, selection and copy still work. Returns true if the
    /// text changed.
    pub fn handle_edit(&mut self, msg: &TextEditMsg) -> bool {
        if self.entry.is_read_only() && msg.is_editing() {
            tracing::trace!(?msg, "ignoring edit on read-only entry");
            return false;
        }
        self.entry.editable.apply(msg)
    }

    pub fn max_characters(&self) -> Option<usize> {
        self.entry.editable.constraints.max_length
    }

    /// Change the character limit; existing text over the new limit is
    /// truncated immediately. Returns true if text was dropped.
    pub fn set_max_characters(&mut self, max: Option<usize>) -> bool {
        self.entry.editable.set_max_length(max)
    }

    /// Replace the label/color shown while editing is disabled
    pub fn set_disabled_style(
        &mut self,
        label: &str,
        color: &str,
        theme: &Theme,
    ) -> Result<(), ColorError> {
        self.disabled_style = ToggleStyle::resolve(label, color, theme)?;
        if self.mode == EditMode::Disabled {
            self.apply_style();
        }
        Ok(())
    }

    /// Replace the label/color shown while editing is enabled
    pub fn set_enabled_style(
        &mut self,
        label: &str,
        color: &str,
        theme: &Theme,
    ) -> Result<(), ColorError> {
        self.enabled_style = ToggleStyle::resolve(label, color, theme)?;
        if self.mode == EditMode::Enabled {
            self.apply_style();
        }
        Ok(())
    }

    pub fn set_on_enable(&mut self, callback: Option<Callback>) {
        self.on_enable = callback;
    }

    pub fn set_on_disable(&mut self, callback: Option<Callback>) {
        self.on_disable = callback;
    }

    /// The text entry, for direct reconfiguration
    pub fn entry(&self) -> &TextEntry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut TextEntry {
        &mut self.entry
    }

    /// The toggle button, for direct reconfiguration
    pub fn button(&self) -> &ToggleButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut ToggleButton {
        &mut self.button
    }

    /// Color the button shows now, given its hover state
    pub fn current_button_color(&self) -> &str {
        self.button.current_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn field(options: FieldOptions) -> EditToggleField {
        EditToggleField::new(options, &Theme::default()).unwrap()
    }

    #[test]
    fn test_initial_state_is_disabled() {
        let f = field(FieldOptions::new());
        assert_eq!(f.mode(), EditMode::Disabled);
        assert!(f.entry().is_read_only());
        assert_eq!(f.button().text, "A");
        assert_eq!(f.button().fg_color, "red");
        assert_eq!(f.button().hover_color, "#d80000");
        assert_eq!(f.button().width, f.button().height);
    }

    #[test]
    fn test_enable_selects_all_and_focuses() {
        let mut f = field(FieldOptions::new().text("secret"));
        f.toggle_edit_mode();
        assert!(f.entry().focused);
        assert_eq!(f.entry().editable.selected_text(), "secret");
        assert_eq!(f.button().text, "M");
        assert_eq!(f.button().hover_color, "#006c00");
    }

    #[test]
    fn test_set_edit_mode_is_idempotent() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut f = field(FieldOptions::new().on_enable(move || counter.set(counter.get() + 1)));

        assert!(!f.set_edit_mode(EditMode::Disabled));
        assert!(f.set_edit_mode(EditMode::Enabled));
        assert!(!f.set_edit_mode(EditMode::Enabled));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_invalid_enabled_color_fails_construction() {
        let result = EditToggleField::new(
            FieldOptions::new().enabled_color("#12"),
            &Theme::default(),
        );
        assert!(matches!(result, Err(ColorError::MalformedHex)));
    }

    #[test]
    fn test_style_setter_reapplies_current_mode_only() {
        let theme = Theme::default();
        let mut f = field(FieldOptions::new());

        f.set_enabled_style("E", "#808080", &theme).unwrap();
        assert_eq!(f.button().text, "A");

        f.set_disabled_style("L", "#ffffff", &theme).unwrap();
        assert_eq!(f.button().text, "L");
        assert_eq!(f.button().hover_color, "#d8d8d8");

        f.toggle_edit_mode();
        assert_eq!(f.button().text, "E");
        assert_eq!(f.button().hover_color, "#6c6c6c");
    }

    #[test]
    fn test_failed_style_setter_keeps_previous_style() {
        let theme = Theme::default();
        let mut f = field(FieldOptions::new());
        let err = f.set_disabled_style("X", "notacolor", &theme).unwrap_err();
        assert_eq!(err, ColorError::UnknownName("notacolor".into()));
        assert_eq!(f.button().text, "A");
        assert_eq!(f.disabled_style().color, "red");
    }

    #[test]
    fn test_current_button_color_follows_hover() {
        let mut f = field(FieldOptions::new());
        assert_eq!(f.current_button_color(), "red");
        f.button_mut().hovered = true;
        assert_eq!(f.current_button_color(), "#d80000");
    }

    #[test]
    fn test_debug_does_not_require_callbacks_debug() {
        let f = field(FieldOptions::new().on_disable(|| {}));
        let out = format!("{:?}", f);
        assert!(out.contains("EditToggleField"));
    }
}
