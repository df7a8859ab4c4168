//! Book Queries - 书籍查询

use crate::application::ports::LoadedBook;
use crate::domain::book::{
    BookId, BookMetadata, ChapterOption, ChapterPosition, CoverImage, TableOfContents,
};
use crate::domain::is_non_story;

/// 获取书籍概要
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}

/// 获取下一章节位置
#[derive(Debug, Clone)]
pub struct NextChapter {
    pub book_id: BookId,
    pub position: ChapterPosition,
}

/// 书籍概要
#[derive(Debug, Clone)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub metadata: BookMetadata,
    pub cover: CoverImage,
    pub toc: TableOfContents,
    pub chapters: Vec<ChapterOption>,
}

impl BookSummary {
    pub fn from_loaded(book: &LoadedBook) -> Self {
        let toc = book.document.table_of_contents().clone();
        Self {
            id: book.id,
            title: book.title.to_string(),
            metadata: book.document.metadata().clone(),
            cover: book.document.cover_image(),
            chapters: toc.flatten(),
            toc,
        }
    }
}

/// 章节概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub position: ChapterPosition,
    pub label: String,
    pub href: String,
    pub non_story: bool,
}

impl ChapterSummary {
    pub fn new(position: ChapterPosition, label: &str, href: &str) -> Self {
        Self {
            position,
            label: label.to_string(),
            href: href.to_string(),
            non_story: is_non_story(label),
        }
    }
}

/// 下一章节响应，`next` 为 None 表示全书结束
#[derive(Debug, Clone)]
pub struct NextChapterResponse {
    pub next: Option<ChapterSummary>,
}
