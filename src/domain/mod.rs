//! Domain Layer - 领域层
//!
//! - Book Context: 目录模型、目录遍历、章节文本
//! - 章节分类与生成结果

pub mod book;

mod chapter_classifier;
mod generation;

pub use chapter_classifier::is_non_story;
pub use generation::{AudioHandle, GenerationOutcome, GenerationResult, SegmentOutcome};
