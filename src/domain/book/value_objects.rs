//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 已加载书籍的唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书名
///
/// 同时作为远程服务的上下文 key，不能为空白
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err("标题不能为空");
        }
        if title.chars().count() > 500 {
            return Err("标题长度不能超过500字符");
        }
        Ok(Self(title))
    }

    /// 元数据和文件名都无法提供书名时使用
    pub fn untitled() -> Self {
        Self("Untitled".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 目录位置
///
/// 没有子章节时 `subitem_index` 固定为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterPosition {
    pub chapter_index: usize,
    pub subitem_index: usize,
}

impl ChapterPosition {
    pub fn new(chapter_index: usize, subitem_index: usize) -> Self {
        Self {
            chapter_index,
            subitem_index,
        }
    }

    /// 全书第一个位置
    pub fn start() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Display for ChapterPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.chapter_index, self.subitem_index)
    }
}

/// 章节纯文本
///
/// 不变量:
/// - 内容不为空
/// - 字符数不超过构造时给定的上限
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterText(String);

impl ChapterText {
    /// 默认最大字符数
    pub const DEFAULT_MAX_CHARS: usize = 25_000;

    /// 截断到 `max_chars` 个字符后构造
    pub fn truncated(text: impl Into<String>, max_chars: usize) -> Result<Self, &'static str> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err("章节内容为空");
        }
        let text = match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => text[..byte_idx].to_string(),
            None => text,
        };
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// 封面图片
///
/// 提取成功时为 base64 data URL，否则为占位图 URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverImage {
    DataUrl(String),
    Placeholder(String),
}

impl CoverImage {
    pub fn from_base64(mime: &str, base64_data: &str) -> Self {
        Self::DataUrl(format!("data:{};base64,{}", mime, base64_data))
    }

    pub fn url(&self) -> &str {
        match self {
            CoverImage::DataUrl(url) | CoverImage::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CoverImage::Placeholder(_))
    }
}
