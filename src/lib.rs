//! safe-edit - text fields guarded by an edit toggle
//!
//! The core widget is [`EditToggleField`]: a text entry that is read-only
//! until its square toggle button is pressed, with an optional character
//! limit and enable/disable hooks. The hover shade of the button comes from
//! [`hover::hover_color`].
//!
//! The demo window (the `safe-edit` binary) follows the Elm Architecture:
//! [`Msg`] → [`update::update`] → [`AppModel`] → [`view::Renderer`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod hover;
pub mod messages;
pub mod model;
pub mod named_colors;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use field::{EditMode, EditToggleField, FieldOptions};
pub use hover::{hover_color, ColorError};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
