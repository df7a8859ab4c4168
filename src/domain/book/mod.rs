//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - 目录模型与位置解析
//! - 目录遍历
//! - 章节文本与封面值对象

mod entities;
mod errors;
mod toc_walker;
mod value_objects;

pub use entities::{BookMetadata, ChapterEntry, ChapterOption, TableOfContents};
pub use errors::BookError;
pub use toc_walker::next_position;
pub use value_objects::{BookId, ChapterPosition, ChapterText, CoverImage, Title};
