//! Command queue for discovery results
//!
//! Discovery runs on other threads and posts [`BrowserCommand`]s through a
//! [`CommandSender`]. Only the coordination thread owns the [`CommandQueue`]
//! and applies commands to the adapter, so the list is never touched concurrently.
//!
//! Each sender is stamped with the browsing context it was created for.
//! Once [`CommandQueue::begin_context`] moves on, late commands of the old
//! context are dropped while draining.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapter::BrowserAdapter;
use crate::entry::MediaEntry;
use crate::metadata::MediaSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    /// Raw handle discovered by a browsing source
    AddSource { source: MediaSource, notify: bool, at_front: bool },
    AddEntry { entry: MediaEntry, notify: bool, at_front: bool },
    /// Replace the whole list and send a full reset
    AddAll(Vec<MediaEntry>),
    /// Full reset after a batch of silent insertions
    Refresh,
    Remove { position: usize, notify: bool },
    Sort,
    Clear,
}

struct Envelope {
    generation: u64,
    command: BrowserCommand,
}

/// Cloneable handle for discovery threads
#[derive(Clone)]
pub struct CommandSender {
    generation: u64,
    current: Arc<AtomicU64>,
    tx: mpsc::UnboundedSender<Envelope>,
}

impl CommandSender {
    /// Post a command. Returns false if the queue is gone or the context was abandoned.
    pub fn send(&self, command: BrowserCommand) -> bool {
        if self.is_stale() {
            return false;
        }
        self.tx
            .send(Envelope {
                generation: self.generation,
                command,
            })
            .is_ok()
    }

    /// Whether the browsing context of this sender was abandoned
    pub fn is_stale(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }
}

pub struct CommandQueue {
    tx: mpsc::UnboundedSender<Envelope>,
    rx: mpsc::UnboundedReceiver<Envelope>,
    generation: Arc<AtomicU64>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Sender bound to the current browsing context
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            generation: self.generation.load(Ordering::SeqCst),
            current: self.generation.clone(),
            tx: self.tx.clone(),
        }
    }

    /// Abandon the current browsing context. Senders created before are stale from now on.
    pub fn begin_context(&mut self) -> CommandSender {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("begin browsing context {}", generation);
        self.sender()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Apply every queued command without waiting. Returns the number of commands applied.
    pub fn drain(&mut self, adapter: &mut BrowserAdapter) -> usize {
        let mut applied = 0;
        while let Ok(envelope) = self.rx.try_recv() {
            if self.accept(&envelope) {
                apply(adapter, envelope.command);
                applied += 1;
            }
        }
        applied
    }

    /// Apply commands until every outstanding sender is dropped.
    ///
    /// Senders of abandoned contexts keep the channel open too, their commands
    /// are discarded. Must not be called from within an async runtime.
    pub fn run_blocking(mut self, adapter: &mut BrowserAdapter) -> usize {
        // only outside senders may keep the channel open
        let (closed_tx, _) = mpsc::unbounded_channel();
        drop(std::mem::replace(&mut self.tx, closed_tx));

        let mut applied = 0;
        while let Some(envelope) = self.rx.blocking_recv() {
            if self.accept(&envelope) {
                apply(adapter, envelope.command);
                applied += 1;
            }
        }
        applied
    }

    fn accept(&self, envelope: &Envelope) -> bool {
        let current = self.generation.load(Ordering::SeqCst);
        if envelope.generation != current {
            log::debug!(
                "dropping {:?} from stale context {} (current {})",
                envelope.command,
                envelope.generation,
                current
            );
            return false;
        }
        true
    }
}

fn apply(adapter: &mut BrowserAdapter, command: BrowserCommand) {
    match command {
        BrowserCommand::AddSource { source, notify, at_front } => {
            adapter.add_item(source, notify, at_front);
        }
        BrowserCommand::AddEntry { entry, notify, at_front } => {
            adapter.add_item(entry, notify, at_front);
        }
        BrowserCommand::AddAll(entries) => {
            adapter.add_all(entries);
            adapter.refresh();
        }
        BrowserCommand::Refresh => adapter.refresh(),
        BrowserCommand::Remove { position, notify } => {
            if let Err(err) = adapter.remove_item(position, notify) {
                log::error!("remove command failed: {}", err);
            }
        }
        BrowserCommand::Sort => adapter.sort_list(),
        BrowserCommand::Clear => adapter.clear(),
    }
}
