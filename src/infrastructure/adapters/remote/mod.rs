//! Remote Service Adapters - 远程服务 HTTP 客户端
//!
//! 每个客户端只封装一次 HTTP 调用

mod http_audio_synthesizer;
mod http_image_generator;
mod http_prompt_generator;
mod http_text_segmenter;
pub(crate) mod service_client;

pub use http_audio_synthesizer::HttpAudioSynthesizer;
pub use http_image_generator::HttpImageGenerator;
pub use http_prompt_generator::HttpPromptGenerator;
pub use http_text_segmenter::HttpTextSegmenter;
pub use service_client::{RemoteServiceConfig, ServiceClient};
