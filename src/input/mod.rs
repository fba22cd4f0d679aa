pub mod handler;
pub mod mailbox;

pub use handler::{InputHandler, KeyAction};
pub use mailbox::CommandMailbox;
