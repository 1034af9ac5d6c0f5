//! Row classification and presentation
//!
//! Decides how a row looks: which icon, whether the secondary text line is
//! visible and whether the context affordance is offered.

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, MediaEntry, MediaKind, RowKind};
use crate::metadata::MetadataProvider;

/// Icon reference handed to the rendering host
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileIcon {
    Audio,
    Video,
    Subtitle,
    #[default]
    Folder,
    /// Folder icon used by network browsing contexts
    NetworkFolder,
    Unknown,
}

impl FileIcon {
    /// Short glyph for text hosts
    pub fn glyph(&self) -> &'static str {
        match self {
            FileIcon::Audio => "♪",
            FileIcon::Video => "▶",
            FileIcon::Subtitle => "¶",
            FileIcon::Folder => "▸",
            FileIcon::NetworkFolder => "⇄",
            FileIcon::Unknown => "·",
        }
    }
}

/// Visual properties of a media row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: FileIcon,
    pub has_context_affordance: bool,
    pub secondary_text_visible: bool,
}

/// Everything a host needs to bind one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowBinding<'a> {
    Media { entry: &'a MediaEntry, presentation: Presentation },
    Separator { label: &'a str },
}

/// Maps entries to row templates and presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presenter {
    folder_icon: FileIcon,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presenter for a host context with its own folder icon
    pub fn with_folder_icon(folder_icon: FileIcon) -> Self {
        Self { folder_icon }
    }

    pub fn folder_icon(&self) -> FileIcon {
        self.folder_icon
    }

    pub fn set_folder_icon(&mut self, folder_icon: FileIcon) {
        self.folder_icon = folder_icon;
    }

    pub fn classify(entry: &Entry) -> RowKind {
        entry.row_kind()
    }

    pub fn icon_for(&self, kind: MediaKind) -> FileIcon {
        match kind {
            MediaKind::Audio => FileIcon::Audio,
            MediaKind::Directory => self.folder_icon,
            MediaKind::Video => FileIcon::Video,
            MediaKind::Subtitle => FileIcon::Subtitle,
            MediaKind::Other => FileIcon::Unknown,
        }
    }

    /// Audio and video always get the affordance, directories only when writable.
    pub fn has_context_affordance(entry: &MediaEntry, metadata: &dyn MetadataProvider) -> bool {
        match entry.kind {
            MediaKind::Audio | MediaKind::Video => true,
            MediaKind::Directory => metadata.can_write(&entry.location),
            MediaKind::Subtitle | MediaKind::Other => false,
        }
    }

    pub fn presentation_for(&self, entry: &MediaEntry, metadata: &dyn MetadataProvider) -> Presentation {
        Presentation {
            icon: self.icon_for(entry.kind),
            has_context_affordance: Self::has_context_affordance(entry, metadata),
            secondary_text_visible: entry.visible_description().is_some(),
        }
    }

    pub fn bind<'a>(&self, entry: &'a Entry, metadata: &dyn MetadataProvider) -> RowBinding<'a> {
        match entry {
            Entry::Media(media) => RowBinding::Media {
                entry: media,
                presentation: self.presentation_for(media, metadata),
            },
            Entry::Separator(separator) => RowBinding::Separator { label: &separator.label },
        }
    }
}
