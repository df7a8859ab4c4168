//! 目录遍历
//!
//! 两层树的前序遍历：先走完当前章节的子章节，再进入下一章节

use super::{BookError, ChapterPosition, TableOfContents};

/// 计算下一个阅读位置
///
/// 返回 `Ok(None)` 表示已到全书末尾
pub fn next_position(
    toc: &TableOfContents,
    current: ChapterPosition,
) -> Result<Option<ChapterPosition>, BookError> {
    if toc.is_empty() {
        return Err(BookError::InvalidTableOfContents);
    }

    // 同时校验当前位置
    toc.resolve(current)?;

    let chapter = toc
        .chapter(current.chapter_index)
        .ok_or(BookError::InvalidPosition(current))?;

    if chapter.has_subitems() && current.subitem_index + 1 < chapter.subitems.len() {
        return Ok(Some(ChapterPosition::new(
            current.chapter_index,
            current.subitem_index + 1,
        )));
    }

    let next_chapter = current.chapter_index + 1;
    if next_chapter >= toc.len() {
        return Ok(None);
    }
    Ok(Some(ChapterPosition::new(next_chapter, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::ChapterEntry;

    fn toc_with_subitems() -> TableOfContents {
        TableOfContents::new(vec![
            ChapterEntry::new("Part One", "p1.xhtml").with_subitems(vec![
                ChapterEntry::new("Chapter 1", "c1.xhtml"),
                ChapterEntry::new("Chapter 2", "c2.xhtml"),
            ]),
            ChapterEntry::new("Epilogue", "e.xhtml"),
        ])
    }

    #[test]
    fn test_walks_subitems_before_next_chapter() {
        let toc = toc_with_subitems();
        let p = next_position(&toc, ChapterPosition::new(0, 0)).unwrap();
        assert_eq!(p, Some(ChapterPosition::new(0, 1)));
        let p = next_position(&toc, p.unwrap()).unwrap();
        assert_eq!(p, Some(ChapterPosition::new(1, 0)));
    }

    #[test]
    fn test_end_of_book() {
        let toc = toc_with_subitems();
        assert_eq!(next_position(&toc, ChapterPosition::new(1, 0)).unwrap(), None);
    }

    #[test]
    fn test_flat_toc_advances_chapter() {
        let toc = TableOfContents::new(vec![
            ChapterEntry::new("One", "1.xhtml"),
            ChapterEntry::new("Two", "2.xhtml"),
        ]);
        assert_eq!(
            next_position(&toc, ChapterPosition::start()).unwrap(),
            Some(ChapterPosition::new(1, 0))
        );
    }

    #[test]
    fn test_empty_toc_is_invalid() {
        let toc = TableOfContents::default();
        assert!(matches!(
            next_position(&toc, ChapterPosition::start()),
            Err(BookError::InvalidTableOfContents)
        ));
    }

    #[test]
    fn test_out_of_range_position_is_invalid() {
        let toc = toc_with_subitems();
        assert!(matches!(
            next_position(&toc, ChapterPosition::new(2, 0)),
            Err(BookError::InvalidPosition(_))
        ));
        assert!(matches!(
            next_position(&toc, ChapterPosition::new(0, 2)),
            Err(BookError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_full_walk_stays_in_range() {
        let toc = toc_with_subitems();
        let mut visited = vec![ChapterPosition::start()];
        let mut current = ChapterPosition::start();
        while let Some(next) = next_position(&toc, current).unwrap() {
            assert!(next.chapter_index < toc.len());
            assert!(toc.resolve(next).is_ok());
            visited.push(next);
            current = next;
        }
        assert_eq!(visited.len(), 3);
    }
}
