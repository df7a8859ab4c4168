//! Book Commands - 书籍加载与关闭

use crate::application::queries::BookSummary;
use crate::domain::book::BookId;

/// 加载 EPUB 书籍
#[derive(Debug, Clone)]
pub struct LoadBook {
    pub bytes: Vec<u8>,
    /// 上传的文件名，元数据缺少标题时用于推导书名
    pub file_name: Option<String>,
}

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadBookResponse {
    pub book: BookSummary,
}

/// 关闭书籍
#[derive(Debug, Clone)]
pub struct CloseBook {
    pub book_id: BookId,
}
