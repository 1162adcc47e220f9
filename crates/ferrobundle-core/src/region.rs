//! Display regions: explicit handles whose markup content is replaced
//! wholesale on each render.
//!
//! | Region | Backing store |
//! |--------|---------------|
//! | [`MemoryRegion`] | Shared in-process buffer |
//! | [`PageRegion`] | Inner markup of one element inside an HTML file |

use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::NamedTempFile;

use crate::{RegionError, ValidationError};

/// Target of a render. Each call to [`DisplayRegion::replace_content`] is a
/// full replacement; nothing is appended or diffed.
pub trait DisplayRegion: Send + Sync {
    fn id(&self) -> &str;

    fn replace_content(&self, markup: &str) -> Result<(), RegionError>;
}

/// In-memory region. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct MemoryRegion {
    id: String,
    content: Arc<Mutex<String>>,
}

impl MemoryRegion {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_content(id, String::new())
    }

    pub fn with_content(
        id: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validate_region_id(id.into())?,
            content: Arc::new(Mutex::new(content.into())),
        })
    }

    pub fn content(&self) -> String {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplayRegion for MemoryRegion {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&self, markup: &str) -> Result<(), RegionError> {
        let mut content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        *content = markup.to_owned();
        Ok(())
    }
}

/// Element inside an HTML document on disk, addressed by its `id` attribute.
///
/// Only the element's inner markup is replaced; the rest of the document is
/// preserved byte for byte. Writes go through a temporary file in the same
/// directory followed by a rename.
#[derive(Debug)]
pub struct PageRegion {
    path: PathBuf,
    id: String,
    write_lock: Mutex<()>,
}

impl PageRegion {
    /// Resolve the element up front; a missing element fails here, before
    /// any content is produced for it.
    pub fn open(path: impl Into<PathBuf>, id: impl Into<String>) -> Result<Self, RegionError> {
        let region = Self {
            path: path.into(),
            id: validate_region_id(id.into())?,
            write_lock: Mutex::new(()),
        };
        let document = fs::read_to_string(&region.path)?;
        region.locate(&document)?;
        Ok(region)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current inner markup of the element.
    pub fn content(&self) -> Result<String, RegionError> {
        let document = fs::read_to_string(&self.path)?;
        let span = self.locate(&document)?;
        Ok(document[span].to_owned())
    }

    /// Spans are computed on a comment-masked copy, so an element that only
    /// appears inside `<!-- ... -->` is never targeted.
    fn locate(&self, document: &str) -> Result<Range<usize>, RegionError> {
        let scan = mask_comments(document);
        let open_start =
            find_element_start(&scan, &self.id).ok_or_else(|| RegionError::ElementNotFound {
                id: self.id.clone(),
                path: self.path.display().to_string(),
            })?;

        inner_span(&scan, open_start).ok_or_else(|| RegionError::UnterminatedElement {
            id: self.id.clone(),
            path: self.path.display().to_string(),
        })
    }
}

impl DisplayRegion for PageRegion {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&self, markup: &str) -> Result<(), RegionError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let document = fs::read_to_string(&self.path)?;
        let permissions = fs::metadata(&self.path)?.permissions();
        let span = self.locate(&document)?;

        let mut updated = String::with_capacity(document.len() + markup.len());
        updated.push_str(&document[..span.start]);
        updated.push_str(markup);
        updated.push_str(&document[span.end..]);

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(directory)?;
        staged.write_all(updated.as_bytes())?;
        staged.flush()?;
        staged.as_file().set_permissions(permissions)?;
        staged
            .persist(&self.path)
            .map_err(|error| RegionError::Io(error.error))?;
        Ok(())
    }
}

fn validate_region_id(id: String) -> Result<String, ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyRegionId);
    }
    Ok(id)
}

/// Replace every `<!-- ... -->` (an unterminated comment runs to the end)
/// with spaces of the same byte length, keeping offsets aligned.
fn mask_comments(document: &str) -> String {
    let mut masked = String::with_capacity(document.len());
    let mut cursor = 0;
    while let Some(offset) = document[cursor..].find("<!--") {
        let start = cursor + offset;
        let end = document[start + 4..]
            .find("-->")
            .map_or(document.len(), |close| start + 4 + close + 3);
        masked.push_str(&document[cursor..start]);
        masked.extend(std::iter::repeat(' ').take(end - start));
        cursor = end;
    }
    masked.push_str(&document[cursor..]);
    masked
}

/// Byte offset of the `<` opening the element that carries `id="{id}"`.
fn find_element_start(document: &str, id: &str) -> Option<usize> {
    for quote in ['"', '\''] {
        let needle = format!("id={quote}{id}{quote}");
        let mut cursor = 0;
        while let Some(offset) = document[cursor..].find(&needle) {
            let at = cursor + offset;
            let is_attribute = document[..at]
                .chars()
                .next_back()
                .is_some_and(|ch| ch.is_ascii_whitespace());
            if is_attribute {
                if let Some(tag_start) = document[..at].rfind('<') {
                    if !document[tag_start..at].contains('>') {
                        return Some(tag_start);
                    }
                }
            }
            cursor = at + needle.len();
        }
    }
    None
}

/// Span between the end of the opening tag and its matching closing tag,
/// counting nested elements of the same name.
fn inner_span(document: &str, open_start: usize) -> Option<Range<usize>> {
    let tag_name: String = document[open_start + 1..]
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if tag_name.is_empty() {
        return None;
    }

    let open_end = open_start + document[open_start..].find('>')? + 1;
    if document[..open_end].ends_with("/>") {
        return None;
    }

    // ASCII lowercasing keeps byte offsets aligned with `document`.
    let lower = document.to_ascii_lowercase();
    let open_pattern = format!("<{tag_name}");
    let close_pattern = format!("</{tag_name}");

    let mut depth = 1_usize;
    let mut cursor = open_end;
    loop {
        let next_close = find_tag(&lower, &close_pattern, cursor)?;
        match find_tag(&lower, &open_pattern, cursor) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                cursor = next_open + open_pattern.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_end..next_close);
                }
                cursor = next_close + close_pattern.len();
            }
        }
    }
}

fn find_tag(haystack: &str, pattern: &str, from: usize) -> Option<usize> {
    let mut cursor = from;
    while let Some(offset) = haystack[cursor..].find(pattern) {
        let at = cursor + offset;
        let boundary = haystack[at + pattern.len()..].chars().next();
        if matches!(boundary, Some(ch) if ch.is_ascii_whitespace() || ch == '>' || ch == '/') {
            return Some(at);
        }
        cursor = at + pattern.len();
    }
    None
}
