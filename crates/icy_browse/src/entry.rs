//! Rows of the browser list
//!
//! An [`Entry`] is either a browsable media item or a section separator.
//! The row template a host uses is derived from the variant, see [`Entry::row_kind`].

/// Classification of a media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaKind {
    Audio,
    Video,
    Directory,
    Subtitle,
    #[default]
    Other,
}

/// Rendering template of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Media,
    Separator,
}

/// A playable or browsable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub title: String,
    pub description: Option<String>,
    pub kind: MediaKind,
    /// Path or URI of the item
    pub location: String,
}

impl MediaEntry {
    pub fn new(title: impl Into<String>, kind: MediaKind, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind,
            location: location.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_directory(&self) -> bool {
        self.kind == MediaKind::Directory
    }

    /// Dot-prefixed titles are never listed
    pub fn is_hidden(&self) -> bool {
        self.title.starts_with('.')
    }

    /// Description that is worth showing as secondary text
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Non-interactive section header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorEntry {
    pub label: String,
}

impl SeparatorEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// One logical row in the browser list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Media(MediaEntry),
    Separator(SeparatorEntry),
}

impl Entry {
    pub fn row_kind(&self) -> RowKind {
        match self {
            Entry::Media(_) => RowKind::Media,
            Entry::Separator(_) => RowKind::Separator,
        }
    }

    pub fn as_media(&self) -> Option<&MediaEntry> {
        match self {
            Entry::Media(media) => Some(media),
            Entry::Separator(_) => None,
        }
    }

    /// Text shown in the primary line of the row
    pub fn label(&self) -> &str {
        match self {
            Entry::Media(media) => &media.title,
            Entry::Separator(separator) => &separator.label,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Entry::Media(media) if media.is_hidden())
    }
}

impl From<MediaEntry> for Entry {
    fn from(media: MediaEntry) -> Self {
        Entry::Media(media)
    }
}

impl From<SeparatorEntry> for Entry {
    fn from(separator: SeparatorEntry) -> Self {
        Entry::Separator(separator)
    }
}

/// Case-insensitive sort key used for the directory and file groups
pub fn name_key(media: &MediaEntry) -> String {
    media.title.to_lowercase()
}
