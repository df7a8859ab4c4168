//! Book Store Port - 已加载书籍的内存会话

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use super::BookDocumentPort;
use crate::domain::book::{BookId, Title};

#[derive(Debug, Error)]
pub enum BookStoreError {
    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Book already exists: {0}")]
    AlreadyExists(BookId),
}

/// 已加载书籍
#[derive(Clone)]
pub struct LoadedBook {
    pub id: BookId,
    pub title: Title,
    pub document: Arc<dyn BookDocumentPort>,
    pub loaded_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl LoadedBook {
    pub fn new(title: Title, document: Arc<dyn BookDocumentPort>) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::new(),
            title,
            document,
            loaded_at: now,
            last_activity: now,
        }
    }
}

impl std::fmt::Debug for LoadedBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedBook")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("chapters", &self.document.table_of_contents().len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

/// Book Store Port
///
/// 所有状态存储在内存中，不做持久化
pub trait BookStorePort: Send + Sync {
    fn insert(&self, book: LoadedBook) -> Result<BookId, BookStoreError>;

    /// 获取书籍并刷新活跃时间
    fn get(&self, id: &BookId) -> Result<LoadedBook, BookStoreError>;

    fn remove(&self, id: &BookId) -> Result<(), BookStoreError>;

    /// 移除空闲超过 `idle_secs` 的书籍，返回移除数量
    fn evict_idle(&self, idle_secs: u64) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
