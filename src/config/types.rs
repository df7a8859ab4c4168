//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 远程服务配置
    #[serde(default)]
    pub services: ServicesConfig,

    /// 章节流水线配置
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// 固定资源配置
    #[serde(default)]
    pub assets: AssetsConfig,

    /// GC 配置
    #[serde(default)]
    pub gc: GcConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 上传文件最大大小（字节），默认 50MB
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024 // 50 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 单个远程服务端点
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEndpoint {
    /// 服务完整 URL
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_service_timeout")]
    pub timeout_secs: u64,
}

fn default_service_timeout() -> u64 {
    60
}

impl ServiceEndpoint {
    fn local(path: &str) -> Self {
        Self {
            url: format!("http://localhost:8000/api/{}", path),
            timeout_secs: default_service_timeout(),
        }
    }
}

/// 远程服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// 章节分段服务
    #[serde(default = "default_segment_endpoint")]
    pub segment: ServiceEndpoint,

    /// 图片提示词生成服务
    #[serde(default = "default_prompt_endpoint")]
    pub prompt: ServiceEndpoint,

    /// 图片生成服务
    #[serde(default = "default_image_endpoint")]
    pub image: ServiceEndpoint,

    /// 音频合成服务
    #[serde(default = "default_audio_endpoint")]
    pub audio: ServiceEndpoint,
}

fn default_segment_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::local("segment")
}

fn default_prompt_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::local("chat")
}

fn default_image_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::local("image")
}

fn default_audio_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::local("audio")
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            segment: default_segment_endpoint(),
            prompt: default_prompt_endpoint(),
            image: default_image_endpoint(),
            audio: default_audio_endpoint(),
        }
    }
}

impl ServicesConfig {
    /// 按名称列出所有端点
    pub fn endpoints(&self) -> [(&'static str, &ServiceEndpoint); 4] {
        [
            ("segment", &self.segment),
            ("prompt", &self.prompt),
            ("image", &self.image),
            ("audio", &self.audio),
        ]
    }
}

/// 章节流水线配置
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    /// 章节文本最大字符数，超出部分截断
    #[serde(default = "default_max_chapter_chars")]
    pub max_chapter_chars: usize,

    /// 慢调用警告阈值（秒）
    #[serde(default = "default_slow_call_threshold")]
    pub slow_call_threshold_secs: u64,
}

fn default_max_chapter_chars() -> usize {
    25_000
}

fn default_slow_call_threshold() -> u64 {
    15
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_chapter_chars: default_max_chapter_chars(),
            slow_call_threshold_secs: default_slow_call_threshold(),
        }
    }
}

/// 固定资源配置
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// 无封面时的占位图
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover_url: String,

    /// 非正文章节显示的图片
    #[serde(default = "default_skip_image")]
    pub skip_image_url: String,

    /// 非正文章节显示的提示
    #[serde(default = "default_skip_notice")]
    pub skip_notice: String,
}

fn default_placeholder_cover() -> String {
    "https://i.imgur.com/c4VGri2.jpeg".to_string()
}

fn default_skip_image() -> String {
    "https://cdn2.iconfinder.com/data/icons/picons-basic-2/57/basic2-085_warning_attention-512.png"
        .to_string()
}

fn default_skip_notice() -> String {
    "This chapter is not part of the plot, please click next chapter.".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            placeholder_cover_url: default_placeholder_cover(),
            skip_image_url: default_skip_image(),
            skip_notice: default_skip_notice(),
        }
    }
}

/// GC（资源回收）配置
#[derive(Debug, Clone, Deserialize)]
pub struct GcConfig {
    /// 是否启用自动回收
    #[serde(default = "default_gc_enabled")]
    pub enabled: bool,

    /// 回收间隔时间（秒）
    #[serde(default = "default_gc_interval")]
    pub interval_secs: u64,

    /// 书籍闲置过期时间（秒）
    #[serde(default = "default_book_idle")]
    pub book_idle_secs: u64,

    /// 音频闲置过期时间（秒）
    #[serde(default = "default_audio_idle")]
    pub audio_idle_secs: u64,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    600 // 10 分钟
}

fn default_book_idle() -> u64 {
    7200 // 2 小时
}

fn default_audio_idle() -> u64 {
    3600 // 1 小时
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            enabled: default_gc_enabled(),
            interval_secs: default_gc_interval(),
            book_idle_secs: default_book_idle(),
            audio_idle_secs: default_audio_idle(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5060);
        assert_eq!(config.server.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.services.segment.url, "http://localhost:8000/api/segment");
        assert_eq!(config.services.prompt.url, "http://localhost:8000/api/chat");
        assert_eq!(config.services.audio.timeout_secs, 60);
        assert_eq!(config.pipeline.max_chapter_chars, 25_000);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5060");
    }

    #[test]
    fn test_endpoints_listing() {
        let config = ServicesConfig::default();
        let names: Vec<&str> = config.endpoints().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["segment", "prompt", "image", "audio"]);
    }
}
