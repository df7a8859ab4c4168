//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod audio_handlers;
mod book_handlers;
mod chapter_handlers;

pub use audio_handlers::*;
pub use book_handlers::*;
pub use chapter_handlers::*;
