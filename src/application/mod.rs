//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（远程服务客户端、书籍文档、内存存储）
//! - pipeline: 单章处理流水线
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Book commands
    CloseBook,
    LoadBook,
    LoadBookResponse,
    // Chapter commands
    ProcessChapter,
    ProcessChapterResponse,
    // Audio commands
    ReleaseAudio,
    // Handlers
    handlers::{CloseBookHandler, LoadBookHandler, ProcessChapterHandler, ReleaseAudioHandler},
};

pub use error::ApplicationError;

pub use pipeline::{ChapterPipeline, PipelineConfig};

pub use ports::{
    // Remote services
    AudioSynthesizerPort,
    ImageGeneratorPort,
    PromptGeneratorPort,
    RemoteFailure,
    ServiceError,
    SynthesizedAudio,
    TextSegmenterPort,
    // Book document
    BookDocumentPort,
    BookLoaderPort,
    // Stores
    AudioStorePort,
    BookStoreError,
    BookStorePort,
    LoadedBook,
    StoredAudio,
};

pub use queries::{
    // Book queries
    BookSummary,
    ChapterSummary,
    GetBook,
    NextChapter,
    NextChapterResponse,
    // Audio queries
    GetAudioQuery,
    GetAudioResponse,
    // Handlers
    handlers::{GetAudioHandler, GetBookHandler, NextChapterHandler},
};
