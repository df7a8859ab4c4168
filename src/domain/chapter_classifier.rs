//! 章节分类
//!
//! 根据目录标签识别封面、版权页等非正文内容

/// 非正文章节标签（大小写不敏感的子串匹配）
const NON_STORY_LABELS: &[&str] = &[
    "title page",
    "cover",
    "dedication",
    "contents",
    "copyright",
    "endorsements",
    "introduction",
    "author",
    "about",
    "map",
];

/// 判断章节标签是否指向非正文内容
#[inline]
pub fn is_non_story(label: &str) -> bool {
    let label = label.to_lowercase();
    NON_STORY_LABELS.iter().any(|pattern| label.contains(pattern))
}
