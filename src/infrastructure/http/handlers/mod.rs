//! HTTP Handlers

mod audio;
mod book;
mod chapter;
mod ping;

pub use audio::*;
pub use book::*;
pub use chapter::*;
pub use ping::*;
