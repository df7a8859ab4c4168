//! Book Command Handlers

use std::path::Path;
use std::sync::Arc;

use crate::application::commands::book_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{BookDocumentPort, BookLoaderPort, BookStorePort, LoadedBook};
use crate::application::queries::BookSummary;
use crate::domain::book::Title;

/// LoadBook Handler - 解析并登记书籍
pub struct LoadBookHandler {
    loader: Arc<dyn BookLoaderPort>,
    book_store: Arc<dyn BookStorePort>,
}

impl LoadBookHandler {
    pub fn new(loader: Arc<dyn BookLoaderPort>, book_store: Arc<dyn BookStorePort>) -> Self {
        Self { loader, book_store }
    }

    pub fn handle(&self, cmd: LoadBook) -> Result<LoadBookResponse, ApplicationError> {
        if cmd.bytes.is_empty() {
            return Err(ApplicationError::invalid_input("EPUB file is empty"));
        }

        let size_bytes = cmd.bytes.len();
        let document: Arc<dyn BookDocumentPort> = Arc::from(self.loader.load(cmd.bytes)?);

        let title = resolve_title(
            document.metadata().title.as_deref(),
            cmd.file_name.as_deref(),
        );

        let book = LoadedBook::new(title, document);
        let summary = BookSummary::from_loaded(&book);
        let book_id = self.book_store.insert(book)?;

        tracing::info!(
            book_id = %book_id,
            title = %summary.title,
            size_bytes = size_bytes,
            chapters = summary.toc.len(),
            cover_placeholder = summary.cover.is_placeholder(),
            "Book loaded"
        );

        Ok(LoadBookResponse { book: summary })
    }
}

/// 书名优先取元数据，其次取文件名
fn resolve_title(metadata_title: Option<&str>, file_name: Option<&str>) -> Title {
    metadata_title
        .and_then(|t| Title::new(t).ok())
        .or_else(|| {
            file_name
                .and_then(|f| Path::new(f).file_stem())
                .and_then(|s| s.to_str())
                .and_then(|s| Title::new(s).ok())
        })
        .unwrap_or_else(Title::untitled)
}

/// CloseBook Handler
pub struct CloseBookHandler {
    book_store: Arc<dyn BookStorePort>,
}

impl CloseBookHandler {
    pub fn new(book_store: Arc<dyn BookStorePort>) -> Self {
        Self { book_store }
    }

    pub fn handle(&self, cmd: CloseBook) -> Result<(), ApplicationError> {
        self.book_store.remove(&cmd.book_id)?;
        tracing::info!(book_id = %cmd.book_id, "Book closed");
        Ok(())
    }
}
