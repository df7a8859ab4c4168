//! Query Handlers 实现

mod audio_handlers;
mod book_handlers;

pub use audio_handlers::*;
pub use book_handlers::*;
