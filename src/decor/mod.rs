pub mod commands;
pub mod message;

pub use commands::attach_command_hints;
pub use message::{wrap_message, wrap_messages};
