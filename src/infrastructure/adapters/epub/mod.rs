//! EPUB Adapter - 书籍解析与章节渲染

mod epub_document;

#[cfg(test)]
pub(crate) use epub_document::fixtures;
pub use epub_document::{EpubDocument, EpubLoader, EpubLoaderConfig};
