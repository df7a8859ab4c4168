//! Chapter Command Handlers

use std::sync::Arc;

use crate::application::commands::chapter_commands::*;
use crate::application::error::ApplicationError;
use crate::application::pipeline::ChapterPipeline;
use crate::application::ports::BookStorePort;

/// ProcessChapter Handler - 解析位置后交给流水线
pub struct ProcessChapterHandler {
    book_store: Arc<dyn BookStorePort>,
    pipeline: Arc<ChapterPipeline>,
}

impl ProcessChapterHandler {
    pub fn new(book_store: Arc<dyn BookStorePort>, pipeline: Arc<ChapterPipeline>) -> Self {
        Self {
            book_store,
            pipeline,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessChapter,
    ) -> Result<ProcessChapterResponse, ApplicationError> {
        let book = self.book_store.get(&cmd.book_id)?;
        let chapter = book
            .document
            .table_of_contents()
            .resolve(cmd.position)?
            .clone();

        tracing::debug!(
            book_id = %cmd.book_id,
            position = %cmd.position,
            chapter = %chapter.label,
            "Processing chapter request"
        );

        let result = self
            .pipeline
            .process(&chapter, book.document.as_ref(), book.title.as_str())
            .await?;

        Ok(ProcessChapterResponse {
            position: cmd.position,
            label: chapter.label,
            result,
        })
    }
}
