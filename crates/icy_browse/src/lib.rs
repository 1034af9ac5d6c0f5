//! List state, row classification and input routing for media browser lists.
//!
//! The host renders rows and recycles views; this crate keeps the ordered rows
//! of one browsing context, tells the host what changed, how each row looks
//! and what a tap or long-press on a row means.

pub mod adapter;
pub mod command;
pub mod entry;
pub mod error;
pub mod metadata;
pub mod options;
pub mod presenter;
pub mod router;
pub mod store;

pub use adapter::BrowserAdapter;
pub use command::{BrowserCommand, CommandQueue, CommandSender};
pub use entry::{name_key, Entry, MediaEntry, MediaKind, RowKind, SeparatorEntry};
pub use error::{BrowserError, Result};
pub use metadata::{FsMetadataProvider, MediaMetadata, MediaSource, MetadataProvider};
pub use options::BrowserOptions;
pub use presenter::{FileIcon, Presentation, Presenter, RowBinding};
pub use router::{AnchorKind, BrowserHost, InputKind, InteractionRouter, RouteOutcome};
pub use store::{ListChange, ListObserver, ListStore, NewItem};
