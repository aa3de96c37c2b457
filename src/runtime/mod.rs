//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - Keyboard event to message mapping

pub mod app;
pub mod input;

pub use app::App;
