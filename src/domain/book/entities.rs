//! Book Context - Entities

use serde::{Deserialize, Serialize};

use super::{BookError, ChapterPosition};
use crate::domain::is_non_story;

/// 目录条目
///
/// `subitems` 实际上通常只有一层，但模型允许任意深度的嵌套
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub subitems: Vec<ChapterEntry>,
}

impl ChapterEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            subitems: Vec::new(),
        }
    }

    pub fn with_subitems(mut self, subitems: Vec<ChapterEntry>) -> Self {
        self.subitems = subitems;
        self
    }

    pub fn has_subitems(&self) -> bool {
        !self.subitems.is_empty()
    }

    /// 本条目及其所有后代的数量
    pub fn count(&self) -> usize {
        1 + self.subitems.iter().map(ChapterEntry::count).sum::<usize>()
    }
}

/// 扁平化后的目录选项（前序遍历）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterOption {
    /// 章节为 "i"，子章节为 "i.j"
    pub value: String,
    /// 子章节带 "└ " 前缀
    pub label: String,
    /// 对应的目录位置，仅前两层有位置
    pub position: Option<ChapterPosition>,
    pub depth: usize,
    pub non_story: bool,
}

/// 目录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    entries: Vec<ChapterEntry>,
}

impl TableOfContents {
    pub fn new(entries: Vec<ChapterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChapterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn chapter(&self, index: usize) -> Option<&ChapterEntry> {
        self.entries.get(index)
    }

    /// 所有层级条目总数
    pub fn total_entries(&self) -> usize {
        self.entries.iter().map(ChapterEntry::count).sum()
    }

    /// 解析位置对应的条目
    ///
    /// 章节有子章节时位置指向 `subitems[subitem_index]`，否则指向章节本身
    pub fn resolve(&self, position: ChapterPosition) -> Result<&ChapterEntry, BookError> {
        if self.entries.is_empty() {
            return Err(BookError::InvalidTableOfContents);
        }
        let chapter = self
            .entries
            .get(position.chapter_index)
            .ok_or(BookError::InvalidPosition(position))?;

        if chapter.has_subitems() {
            chapter
                .subitems
                .get(position.subitem_index)
                .ok_or(BookError::InvalidPosition(position))
        } else if position.subitem_index == 0 {
            Ok(chapter)
        } else {
            Err(BookError::InvalidPosition(position))
        }
    }

    /// 前序遍历展开为下拉选项
    pub fn flatten(&self) -> Vec<ChapterOption> {
        let mut options = Vec::with_capacity(self.total_entries());
        for (index, entry) in self.entries.iter().enumerate() {
            let position = (!entry.has_subitems()).then(|| ChapterPosition::new(index, 0));
            push_options(&mut options, entry, index.to_string(), position, 0);
        }
        options
    }
}

fn push_options(
    options: &mut Vec<ChapterOption>,
    entry: &ChapterEntry,
    value: String,
    position: Option<ChapterPosition>,
    depth: usize,
) {
    let prefix = if depth > 0 { "└ " } else { "" };
    options.push(ChapterOption {
        label: format!("{}{}", prefix, entry.label),
        position,
        depth,
        non_story: is_non_story(&entry.label),
        value: value.clone(),
    });

    for (sub_index, child) in entry.subitems.iter().enumerate() {
        let child_position = match (depth, position, value.parse::<usize>()) {
            (0, None, Ok(chapter_index)) => Some(ChapterPosition::new(chapter_index, sub_index)),
            _ => None,
        };
        push_options(
            options,
            child,
            format!("{}.{}", value, sub_index),
            child_position,
            depth + 1,
        );
    }
}

/// 书籍元数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub language: Option<String>,
    pub publisher: Option<String>,
}
