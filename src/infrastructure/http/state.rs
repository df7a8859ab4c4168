//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CloseBookHandler, LoadBookHandler, ProcessChapterHandler, ReleaseAudioHandler,
    // Query handlers
    GetAudioHandler, GetBookHandler, NextChapterHandler,
    // Ports
    AudioStorePort, BookLoaderPort, BookStorePort, ChapterPipeline,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub book_store: Arc<dyn BookStorePort>,
    pub audio_store: Arc<dyn AudioStorePort>,

    // ========== Command Handlers ==========
    pub load_book_handler: LoadBookHandler,
    pub close_book_handler: CloseBookHandler,
    pub process_chapter_handler: ProcessChapterHandler,
    pub release_audio_handler: ReleaseAudioHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub next_chapter_handler: NextChapterHandler,
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        book_loader: Arc<dyn BookLoaderPort>,
        book_store: Arc<dyn BookStorePort>,
        audio_store: Arc<dyn AudioStorePort>,
        pipeline: Arc<ChapterPipeline>,
    ) -> Self {
        Self {
            // Ports
            book_store: book_store.clone(),
            audio_store: audio_store.clone(),

            // Command handlers
            load_book_handler: LoadBookHandler::new(book_loader, book_store.clone()),
            close_book_handler: CloseBookHandler::new(book_store.clone()),
            process_chapter_handler: ProcessChapterHandler::new(book_store.clone(), pipeline),
            release_audio_handler: ReleaseAudioHandler::new(audio_store.clone()),

            // Query handlers
            get_book_handler: GetBookHandler::new(book_store.clone()),
            next_chapter_handler: NextChapterHandler::new(book_store),
            get_audio_handler: GetAudioHandler::new(audio_store),
        }
    }
}
