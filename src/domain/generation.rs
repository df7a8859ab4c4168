//! 章节生成结果
//!
//! 分段判定、音频句柄与流水线输出

use serde::Serialize;
use uuid::Uuid;

/// 远程分段服务的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// 属于正文，附带代表性片段
    Relevant(String),
    /// 不属于情节
    NotPartOfPlot,
}

impl SegmentOutcome {
    /// 分段服务用于表示“不属于情节”的响应
    pub const NOT_PART_OF_PLOT: &'static str = "False";

    /// 从服务响应解析，空响应返回 `None`
    pub fn from_response(response: &str) -> Option<Self> {
        let trimmed = response.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed == Self::NOT_PART_OF_PLOT {
            Some(Self::NotPartOfPlot)
        } else {
            Some(Self::Relevant(trimmed.to_string()))
        }
    }

    pub fn is_relevant(&self) -> bool {
        matches!(self, Self::Relevant(_))
    }
}

/// 已存储音频的句柄
///
/// 由调用方持有，不再展示时必须释放
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioHandle {
    pub id: Uuid,
    pub content_type: String,
    pub size_bytes: usize,
}

/// 流水线结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationOutcome {
    Full,
    Skipped,
}

/// 单章生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub display_prompt: String,
    /// 生成图片 URL 或占位图 URL
    pub image_url: String,
    pub audio: Option<AudioHandle>,
    pub outcome: GenerationOutcome,
}

impl GenerationResult {
    pub fn is_skipped(&self) -> bool {
        self.outcome == GenerationOutcome::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_outcome_parsing() {
        assert_eq!(
            SegmentOutcome::from_response("False"),
            Some(SegmentOutcome::NotPartOfPlot)
        );
        assert_eq!(
            SegmentOutcome::from_response(" False\n"),
            Some(SegmentOutcome::NotPartOfPlot)
        );
        assert_eq!(
            SegmentOutcome::from_response("The ship broke apart."),
            Some(SegmentOutcome::Relevant("The ship broke apart.".into()))
        );
        assert_eq!(SegmentOutcome::from_response("   "), None);
    }

    #[test]
    fn test_false_must_match_exactly() {
        assert!(SegmentOutcome::from_response("false").unwrap().is_relevant());
        assert!(SegmentOutcome::from_response("False alarm at dawn").unwrap().is_relevant());
    }
}
