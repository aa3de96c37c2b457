//! Single-line text editing for the field's entry.
//!
//! # Architecture
//!
//! - [`StringBuffer`]: character-addressed buffer backed by `String`
//! - [`EditableState`]: buffer plus cursor/selection
//! - [`EditConstraints`]: maximum length and character filter
//! - [`TextEditMsg`]: message type for editing operations
//!
//! # Example
//!
//! ```
//! use safe_edit::editable::{EditConstraints, EditableState, StringBuffer};
//!
//! let mut state = EditableState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::with_max_length(Some(6)),
//! );
//! state.move_end(false);
//! state.insert_text(", world");
//!
//! assert_eq!(state.text(), "hello,");
//! ```

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

pub use buffer::StringBuffer;
pub use constraints::{CharFilter, EditConstraints};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::EditableState;
