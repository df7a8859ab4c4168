//! Book Document Port - 已解析书籍的只读视图
//!
//! 具体实现为 infrastructure/adapters/epub

use crate::domain::book::{BookError, BookMetadata, ChapterText, CoverImage, TableOfContents};

/// 已加载的书籍文档
///
/// 多次章节请求之间只读共享
pub trait BookDocumentPort: Send + Sync {
    fn table_of_contents(&self) -> &TableOfContents;

    fn metadata(&self) -> &BookMetadata;

    /// 封面，失败时为占位图；多次调用结果一致
    fn cover_image(&self) -> CoverImage;

    /// 渲染章节为纯文本，并截断到配置的最大字符数
    fn render_chapter_text(&self, href: &str) -> Result<ChapterText, BookError>;
}

/// Book Loader Port - 从原始字节解析书籍
pub trait BookLoaderPort: Send + Sync {
    fn load(&self, bytes: Vec<u8>) -> Result<Box<dyn BookDocumentPort>, BookError>;
}
