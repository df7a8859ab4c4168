//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_store;
mod audio_synthesizer;
mod book_document;
mod book_store;
mod image_generator;
mod prompt_generator;
mod service_error;
mod text_segmenter;

pub use audio_store::{AudioStorePort, StoredAudio};
pub use audio_synthesizer::{AudioSynthesizerPort, SynthesizedAudio};
pub use book_document::{BookDocumentPort, BookLoaderPort};
pub use book_store::{BookStoreError, BookStorePort, LoadedBook};
pub use image_generator::ImageGeneratorPort;
pub use prompt_generator::PromptGeneratorPort;
pub use service_error::{RemoteFailure, ServiceError};
pub use text_segmenter::TextSegmenterPort;
