//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over session data.
//!
//! # Pane Modules
//!
//! - [`stack`]: The five stack levels with values and type tags
//! - [`transcript`]: Everything written to the interaction log
//! - [`input`]: The prompt and the line being typed
//! - [`status`]: Status bar with keybindings and the last result

pub mod input;
pub mod stack;
pub mod status;
pub mod transcript;

// Re-export render functions for convenience
pub use input::render_input_line;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use transcript::render_transcript_pane;
