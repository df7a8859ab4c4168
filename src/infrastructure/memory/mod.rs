//! Memory Layer - In-Memory State Management
//!
//! 实现 BookStore 和 AudioStore，管理已加载书籍和章节音频的内存状态

mod audio_store;
mod book_store;

pub use audio_store::InMemoryAudioStore;
pub use book_store::InMemoryBookStore;
