//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookStorePort;
use crate::application::queries::book_queries::*;
use crate::domain::book::next_position;

/// GetBook Handler
pub struct GetBookHandler {
    book_store: Arc<dyn BookStorePort>,
}

impl GetBookHandler {
    pub fn new(book_store: Arc<dyn BookStorePort>) -> Self {
        Self { book_store }
    }

    pub fn handle(&self, query: GetBook) -> Result<BookSummary, ApplicationError> {
        let book = self.book_store.get(&query.book_id)?;
        Ok(BookSummary::from_loaded(&book))
    }
}

/// NextChapter Handler - 目录遍历
pub struct NextChapterHandler {
    book_store: Arc<dyn BookStorePort>,
}

impl NextChapterHandler {
    pub fn new(book_store: Arc<dyn BookStorePort>) -> Self {
        Self { book_store }
    }

    pub fn handle(&self, query: NextChapter) -> Result<NextChapterResponse, ApplicationError> {
        let book = self.book_store.get(&query.book_id)?;
        let toc = book.document.table_of_contents();

        let next = match next_position(toc, query.position)? {
            Some(position) => {
                let entry = toc.resolve(position)?;
                Some(ChapterSummary::new(position, &entry.label, &entry.href))
            }
            None => None,
        };

        tracing::debug!(
            book_id = %query.book_id,
            current = %query.position,
            next = ?next.as_ref().map(|n| n.position),
            "Resolved next chapter"
        );

        Ok(NextChapterResponse { next })
    }
}
