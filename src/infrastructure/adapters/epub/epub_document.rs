//! EPUB Document - 基于 epub crate 的书籍文档实现
//!
//! 实现 BookDocumentPort / BookLoaderPort:
//! - 目录 (NCX / nav) 转换为 TableOfContents
//! - 元数据与封面在加载时提取一次
//! - 章节 XHTML 通过 html2text 转为纯文本

use base64::{engine::general_purpose, Engine as _};
use epub::doc::{EpubDoc, NavPoint};
use std::io::Cursor;
use std::sync::Mutex;

use crate::application::ports::{BookDocumentPort, BookLoaderPort};
use crate::domain::book::{
    BookError, BookMetadata, ChapterEntry, ChapterText, CoverImage, TableOfContents,
};

/// html2text 的行宽，足够大以避免引入硬换行
const RENDER_WIDTH: usize = 10_000;

/// EPUB 加载配置
#[derive(Debug, Clone)]
pub struct EpubLoaderConfig {
    /// 章节文本最大字符数
    pub max_chapter_chars: usize,
    /// 封面提取失败时使用的占位图
    pub placeholder_cover_url: String,
}

impl Default for EpubLoaderConfig {
    fn default() -> Self {
        Self {
            max_chapter_chars: ChapterText::DEFAULT_MAX_CHARS,
            placeholder_cover_url: "https://i.imgur.com/c4VGri2.jpeg".to_string(),
        }
    }
}

/// 已解析的 EPUB 文档
///
/// 归档读取需要 `&mut`，因此内部用 Mutex 串行化
pub struct EpubDocument {
    doc: Mutex<EpubDoc<Cursor<Vec<u8>>>>,
    toc: TableOfContents,
    metadata: BookMetadata,
    cover: CoverImage,
    max_chapter_chars: usize,
}

impl EpubDocument {
    /// 从原始字节解析 EPUB
    pub fn load(bytes: Vec<u8>, config: &EpubLoaderConfig) -> Result<Self, BookError> {
        let mut doc = EpubDoc::from_reader(Cursor::new(bytes))
            .map_err(|e| BookError::Parse(e.to_string()))?;

        let toc = TableOfContents::new(doc.toc.iter().map(to_chapter_entry).collect());
        if toc.is_empty() {
            return Err(BookError::Parse("EPUB has no navigation".to_string()));
        }

        let metadata = BookMetadata {
            title: metadata_value(&doc, "title"),
            creator: metadata_value(&doc, "creator"),
            language: metadata_value(&doc, "language"),
            publisher: metadata_value(&doc, "publisher"),
        };

        let cover = extract_cover(&mut doc, &config.placeholder_cover_url);

        tracing::debug!(
            chapters = toc.len(),
            entries = toc.total_entries(),
            title = ?metadata.title,
            "EPUB parsed"
        );

        Ok(Self {
            doc: Mutex::new(doc),
            toc,
            metadata,
            cover,
            max_chapter_chars: config.max_chapter_chars,
        })
    }
}

impl BookDocumentPort for EpubDocument {
    fn table_of_contents(&self) -> &TableOfContents {
        &self.toc
    }

    fn metadata(&self) -> &BookMetadata {
        &self.metadata
    }

    fn cover_image(&self) -> CoverImage {
        self.cover.clone()
    }

    fn render_chapter_text(&self, href: &str) -> Result<ChapterText, BookError> {
        // 资源路径不含锚点
        let path = href.split('#').next().unwrap_or_default().trim();
        if path.is_empty() {
            return Err(BookError::Render("Chapter href is empty".to_string()));
        }

        let html = {
            let mut doc = self
                .doc
                .lock()
                .map_err(|_| BookError::Render("EPUB document lock poisoned".to_string()))?;
            doc.get_resource_str_by_path(path)
                .ok_or_else(|| BookError::Render(format!("Resource not found: {}", path)))?
        };

        // 纯文本，不带标题标记、强调符号和链接脚注
        let text = html2text::config::plain_no_decorate()
            .string_from_read(html.as_bytes(), RENDER_WIDTH)
            .map_err(|e| BookError::Render(format!("Failed to convert {}: {}", path, e)))?;

        let text = ChapterText::truncated(text, self.max_chapter_chars)
            .map_err(|e| BookError::Render(format!("{}: {}", path, e)))?;

        tracing::debug!(href = %href, chars = text.char_count(), "Chapter rendered");
        Ok(text)
    }
}

fn to_chapter_entry(nav_point: &NavPoint) -> ChapterEntry {
    ChapterEntry {
        label: nav_point.label.trim().to_string(),
        href: nav_point.content.to_string_lossy().to_string(),
        subitems: nav_point.children.iter().map(to_chapter_entry).collect(),
    }
}

fn metadata_value(doc: &EpubDoc<Cursor<Vec<u8>>>, name: &str) -> Option<String> {
    doc.mdata(name)
        .map(|item| item.value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn extract_cover(doc: &mut EpubDoc<Cursor<Vec<u8>>>, placeholder_url: &str) -> CoverImage {
    match doc.get_cover() {
        Some((data, mime)) if !data.is_empty() => {
            let mime = if mime.starts_with("image/") {
                mime
            } else {
                "image/png".to_string()
            };
            CoverImage::from_base64(&mime, &general_purpose::STANDARD.encode(&data))
        }
        _ => {
            tracing::warn!("Cover image unavailable, using placeholder");
            CoverImage::Placeholder(placeholder_url.to_string())
        }
    }
}

/// EPUB 加载器
pub struct EpubLoader {
    config: EpubLoaderConfig,
}

impl EpubLoader {
    pub fn new(config: EpubLoaderConfig) -> Self {
        Self { config }
    }
}

impl Default for EpubLoader {
    fn default() -> Self {
        Self::new(EpubLoaderConfig::default())
    }
}

impl BookLoaderPort for EpubLoader {
    fn load(&self, bytes: Vec<u8>) -> Result<Box<dyn BookDocumentPort>, BookError> {
        Ok(Box::new(EpubDocument::load(bytes, &self.config)?))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    const CONTAINER: &str = r#"<?xml version="1.0"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

    const NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head><meta name="dtb:uid" content="urn:uuid:visuai-test"/></head>
  <docTitle><text>The Test Voyage</text></docTitle>
  <navMap>
    <navPoint id="np-1" playOrder="1">
      <navLabel><text>Copyright</text></navLabel>
      <content src="copyright.xhtml"/>
    </navPoint>
    <navPoint id="np-2" playOrder="2">
      <navLabel><text>Part One</text></navLabel>
      <content src="ch1.xhtml"/>
      <navPoint id="np-3" playOrder="3">
        <navLabel><text>Chapter 1</text></navLabel>
        <content src="ch1.xhtml"/>
      </navPoint>
      <navPoint id="np-4" playOrder="4">
        <navLabel><text>Chapter 2</text></navLabel>
        <content src="ch2.xhtml#start"/>
      </navPoint>
    </navPoint>
  </navMap>
</ncx>"#;

    fn chapter(title: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>{title}</title></head>
<body><h1>{title}</h1><p>{body}</p></body></html>"#
        )
    }

    fn opf(with_cover: bool) -> String {
        let cover_meta = if with_cover {
            r#"<meta name="cover" content="cover-image"/>"#
        } else {
            ""
        };
        let cover_item = if with_cover {
            r#"<item id="cover-image" href="cover.png" media-type="image/png"/>"#
        } else {
            ""
        };
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>The Test Voyage</dc:title>
    <dc:creator>Jane Doe</dc:creator>
    <dc:language>en</dc:language>
    <dc:identifier id="bookid">urn:uuid:visuai-test</dc:identifier>
    {cover_meta}
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    {cover_item}
    <item id="copyright" href="copyright.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch1" href="ch1.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch2" href="ch2.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="copyright"/>
    <itemref idref="ch1"/>
    <itemref idref="ch2"/>
  </spine>
</package>"#
        )
    }

    /// 内存中构造一个最小的 EPUB 2 文件
    pub fn sample_epub(with_cover: bool) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let stored =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let options = SimpleFileOptions::default();

        let mut files: Vec<(&str, Vec<u8>)> = vec![
            ("META-INF/container.xml", CONTAINER.as_bytes().to_vec()),
            ("OEBPS/content.opf", opf(with_cover).into_bytes()),
            ("OEBPS/toc.ncx", NCX.as_bytes().to_vec()),
            (
                "OEBPS/copyright.xhtml",
                chapter("Copyright", "All rights reserved.").into_bytes(),
            ),
            (
                "OEBPS/ch1.xhtml",
                chapter("Chapter 1", "The harbour was quiet before the storm.").into_bytes(),
            ),
            (
                "OEBPS/ch2.xhtml",
                chapter(
                    "Chapter 2",
                    r#"The <em>ship</em> left at <a href="ch1.xhtml">dawn</a>."#,
                ).into_bytes(),
            ),
        ];
        if with_cover {
            files.push(("OEBPS/cover.png", vec![0x89, b'P', b'N', b'G', 1, 2, 3, 4]));
        }

        writer.start_file("mimetype", stored).unwrap();
        writer.write_all(b"application/epub+zip").unwrap();
        for (name, data) in files {
            writer.start_file(name, options).unwrap();
            writer.write_all(&data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}
