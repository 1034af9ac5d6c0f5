//! Metadata collaborator
//!
//! Turns raw media handles into [`MediaMetadata`] and answers writability
//! questions for directory rows.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::entry::{MediaEntry, MediaKind};
use crate::error::{BrowserError, Result};

/// Raw media handle as delivered by a discovery source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    /// Path or URI
    pub location: String,
    pub is_directory: bool,
    /// Title reported by the source, if any
    pub title: Option<String>,
    /// Secondary text reported by the source, if any
    pub description: Option<String>,
}

impl MediaSource {
    pub fn file(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            is_directory: false,
            title: None,
            description: None,
        }
    }

    pub fn directory(location: impl Into<String>) -> Self {
        Self {
            is_directory: true,
            ..Self::file(location)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Last path segment of the location, used when no title is known
    pub fn file_name(&self) -> &str {
        file_name(&self.location)
    }
}

/// Resolved metadata of a media handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    pub title: String,
    pub description: Option<String>,
    pub kind: MediaKind,
    pub location: String,
}

impl MediaMetadata {
    /// Metadata used when a provider could not resolve a source
    pub fn fallback(source: &MediaSource) -> Self {
        Self {
            title: source.file_name().to_string(),
            description: None,
            kind: MediaKind::Other,
            location: source.location.clone(),
        }
    }
}

impl From<MediaMetadata> for MediaEntry {
    fn from(meta: MediaMetadata) -> Self {
        MediaEntry {
            title: meta.title,
            description: meta.description,
            kind: meta.kind,
            location: meta.location,
        }
    }
}

/// Metadata extraction and filesystem capabilities consumed by the list
pub trait MetadataProvider {
    /// Extract title, description, kind and location from a raw handle
    fn resolve(&self, source: &MediaSource) -> Result<MediaMetadata>;

    /// Whether the location can be written to
    fn can_write(&self, location: &str) -> bool;
}

static VIDEO_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "3g2", "3gp", "3gp2", "3gpp", "amv", "asf", "avi", "divx", "drc", "dv", "f4v", "flv", "gvi", "gxf", "ismv", "iso", "m1v", "m2v", "m2t", "m2ts", "m4v",
        "mkv", "mov", "mp2", "mp2v", "mp4", "mp4v", "mpe", "mpeg", "mpeg1", "mpeg2", "mpeg4", "mpg", "mpv2", "mts", "mtv", "mxf", "mxg", "nsv", "nut", "nuv",
        "ogm", "ogv", "ogx", "ps", "rec", "rm", "rmvb", "tod", "ts", "tts", "vob", "vro", "webm", "wm", "wmv", "wtv", "xesc",
    ]
    .into_iter()
    .collect()
});

static AUDIO_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "3ga", "a52", "aac", "ac3", "adt", "adts", "aif", "aifc", "aiff", "amr", "aob", "ape", "awb", "caf", "dts", "flac", "it", "m4a", "m4b", "m4p", "mid",
        "mka", "mlp", "mod", "mpa", "mp1", "mp2", "mp3", "mpc", "mpga", "oga", "ogg", "oma", "opus", "ra", "ram", "rmi", "s3m", "spx", "tta", "voc", "vqf",
        "w64", "wav", "wma", "wv", "xa", "xm",
    ]
    .into_iter()
    .collect()
});

static SUBTITLE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "idx", "sub", "srt", "ssa", "ass", "smi", "utf", "utf8", "utf-8", "rt", "aqt", "txt", "usf", "jss", "cdg", "psb", "mpsub", "mpl2", "pjs", "dks", "stl",
        "vtt",
    ]
    .into_iter()
    .collect()
});

/// Classify a file name by its extension. Video wins over audio for shared extensions.
pub fn kind_from_extension(name: &str) -> MediaKind {
    let Some(ext) = Path::new(name).extension() else {
        return MediaKind::Other;
    };
    let ext = ext.to_string_lossy().to_lowercase();
    if VIDEO_EXTENSIONS.contains(ext.as_str()) {
        MediaKind::Video
    } else if AUDIO_EXTENSIONS.contains(ext.as_str()) {
        MediaKind::Audio
    } else if SUBTITLE_EXTENSIONS.contains(ext.as_str()) {
        MediaKind::Subtitle
    } else {
        MediaKind::Other
    }
}

/// Strip a `file://` scheme. Returns `None` for any other URI scheme.
pub fn local_path(location: &str) -> Option<&str> {
    if let Some(path) = location.strip_prefix("file://") {
        return Some(path);
    }
    if location.contains("://") {
        return None;
    }
    Some(location)
}

/// Last non-empty segment of a path or URI
pub fn file_name(location: &str) -> &str {
    let trimmed = location.trim_end_matches(['/', '\\']);
    match trimmed.rfind(['/', '\\']) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Provider backed by the local filesystem and extension tables
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMetadataProvider;

impl MetadataProvider for FsMetadataProvider {
    fn resolve(&self, source: &MediaSource) -> Result<MediaMetadata> {
        let name = source.file_name();
        let title = match source.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => name.to_string(),
        };
        if title.is_empty() {
            return Err(BrowserError::metadata_unavailable(&source.location, "no title"));
        }
        let kind = if source.is_directory { MediaKind::Directory } else { kind_from_extension(name) };
        Ok(MediaMetadata {
            title,
            description: source.description.clone(),
            kind,
            location: source.location.clone(),
        })
    }

    fn can_write(&self, location: &str) -> bool {
        let Some(path) = local_path(location) else {
            return false;
        };
        match std::fs::metadata(path) {
            Ok(meta) => !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(kind_from_extension("movie.MKV"), MediaKind::Video);
        assert_eq!(kind_from_extension("track.flac"), MediaKind::Audio);
        assert_eq!(kind_from_extension("clip.mp2"), MediaKind::Video);
        assert_eq!(kind_from_extension("movie.srt"), MediaKind::Subtitle);
        assert_eq!(kind_from_extension("notes.pdf"), MediaKind::Other);
        assert_eq!(kind_from_extension("README"), MediaKind::Other);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/home/user/Music/"), "Music");
        assert_eq!(file_name("smb://server/share/song.mp3"), "song.mp3");
        assert_eq!(file_name("plain"), "plain");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("file:///sdcard/Movies"), Some("/sdcard/Movies"));
        assert_eq!(local_path("/sdcard/Movies"), Some("/sdcard/Movies"));
        assert_eq!(local_path("smb://server/share"), None);
    }

    #[test]
    fn test_resolve_prefers_source_title() {
        let provider = FsMetadataProvider;
        let meta = provider
            .resolve(&MediaSource::file("/music/01.mp3").with_title("Intro").with_description("Band"))
            .unwrap();
        assert_eq!(meta.title, "Intro");
        assert_eq!(meta.description.as_deref(), Some("Band"));
        assert_eq!(meta.kind, MediaKind::Audio);

        let meta = provider.resolve(&MediaSource::directory("/music/Albums/")).unwrap();
        assert_eq!(meta.title, "Albums");
        assert_eq!(meta.kind, MediaKind::Directory);
    }

    #[test]
    fn test_resolve_without_title_fails() {
        let err = FsMetadataProvider.resolve(&MediaSource::file("/")).unwrap_err();
        assert!(matches!(err, BrowserError::MetadataUnavailable { .. }));
    }

    #[test]
    fn test_remote_locations_are_not_writable() {
        assert!(!FsMetadataProvider.can_write("smb://server/share"));
        assert!(!FsMetadataProvider.can_write("/this/path/does/not/exist/icy_browse"));
    }
}
