//! In-Memory Book Store Implementation

use chrono::Utc;
use dashmap::DashMap;

use crate::application::ports::{BookStoreError, BookStorePort, LoadedBook};
use crate::domain::book::BookId;

/// 内存书籍存储
pub struct InMemoryBookStore {
    books: DashMap<BookId, LoadedBook>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStorePort for InMemoryBookStore {
    fn insert(&self, book: LoadedBook) -> Result<BookId, BookStoreError> {
        let book_id = book.id;
        if self.books.contains_key(&book_id) {
            return Err(BookStoreError::AlreadyExists(book_id));
        }
        self.books.insert(book_id, book);
        tracing::info!(book_id = %book_id, "Book stored");
        Ok(book_id)
    }

    fn get(&self, id: &BookId) -> Result<LoadedBook, BookStoreError> {
        let mut book = self
            .books
            .get_mut(id)
            .ok_or(BookStoreError::NotFound(*id))?;
        book.last_activity = Utc::now();
        Ok(book.clone())
    }

    fn remove(&self, id: &BookId) -> Result<(), BookStoreError> {
        self.books
            .remove(id)
            .map(|_| {
                tracing::info!(book_id = %id, "Book removed");
            })
            .ok_or(BookStoreError::NotFound(*id))
    }

    fn evict_idle(&self, idle_secs: u64) -> usize {
        // 超出 chrono 表示范围的闲置时间视为永不过期
        let Some(timeout) = i64::try_from(idle_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
        else {
            return 0;
        };
        let now = Utc::now();
        let before = self.books.len();

        self.books.retain(|_, book| now - book.last_activity <= timeout);

        let evicted = before.saturating_sub(self.books.len());
        if evicted > 0 {
            tracing::info!(evicted = evicted, "Evicted idle books");
        }
        evicted
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::application::ports::BookDocumentPort;
    use crate::domain::book::{
        BookError, BookMetadata, ChapterText, CoverImage, TableOfContents, Title,
    };

    struct EmptyDocument {
        toc: TableOfContents,
        metadata: BookMetadata,
    }

    impl BookDocumentPort for EmptyDocument {
        fn table_of_contents(&self) -> &TableOfContents {
            &self.toc
        }

        fn metadata(&self) -> &BookMetadata {
            &self.metadata
        }

        fn cover_image(&self) -> CoverImage {
            CoverImage::Placeholder("placeholder".into())
        }

        fn render_chapter_text(&self, href: &str) -> Result<ChapterText, BookError> {
            Err(BookError::Render(href.to_string()))
        }
    }

    fn book() -> LoadedBook {
        LoadedBook::new(
            Title::new("Test").unwrap(),
            Arc::new(EmptyDocument {
                toc: TableOfContents::default(),
                metadata: BookMetadata::default(),
            }),
        )
    }

    #[test]
    fn test_book_lifecycle() {
        let store = InMemoryBookStore::new();
        let book_id = store.insert(book()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&book_id).unwrap().title.as_str(), "Test");

        store.remove(&book_id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.get(&book_id),
            Err(BookStoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_evict_idle_with_huge_timeout_keeps_books() {
        let store = InMemoryBookStore::new();
        store.insert(book()).unwrap();

        assert_eq!(store.evict_idle(u64::MAX), 0);
        assert_eq!(store.evict_idle(i64::MAX as u64), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_evict_idle() {
        let store = InMemoryBookStore::new();
        let mut stale = book();
        stale.last_activity = Utc::now() - chrono::Duration::seconds(120);
        store.insert(stale).unwrap();
        let fresh_id = store.insert(book()).unwrap();

        assert_eq!(store.evict_idle(60), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&fresh_id).is_ok());
    }
}
