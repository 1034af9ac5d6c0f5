#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use icy_browse::{
    AnchorKind, BrowserAdapter, BrowserCommand, BrowserHost, BrowserOptions, CommandQueue, CommandSender, Entry, FsMetadataProvider, InputKind,
    ListObserver, MediaEntry, MediaSource, RowBinding, SeparatorEntry,
};
use once_cell::sync::Lazy;
use semver::Version;

static VERSION: Lazy<Version> = Lazy::new(|| Version::parse(env!("CARGO_PKG_VERSION")).unwrap_or_else(|_| Version::new(0, 0, 0)));

#[derive(Parser, Debug)]
#[command(version, about = "Lists a directory the way a media browser list presents it", long_about = None)]
pub struct Args {
    /// Directory to list
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Keep discovery order instead of sorting
    #[clap(long, default_value_t = false)]
    no_sort: bool,

    /// Options file to use instead of the one in the config directory
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tap the given row after listing
    #[clap(long, value_name = "ROW")]
    tap: Option<usize>,

    /// Long-press the given row after listing
    #[clap(long, value_name = "ROW")]
    long_press: Option<usize>,

    /// Write the effective options to the config directory
    #[clap(long, default_value_t = false)]
    save_options: bool,
}

/// Logs list notifications and host actions
struct ConsoleHost;

impl ListObserver for ConsoleHost {
    fn inserted_at(&mut self, index: usize) {
        log::trace!("row inserted at {}", index);
    }

    fn removed_at(&mut self, index: usize) {
        log::trace!("row removed at {}", index);
    }

    fn changed_at(&mut self, index: usize) {
        log::trace!("row changed at {}", index);
    }

    fn full_reset(&mut self) {
        log::debug!("list reset");
    }
}

impl BrowserHost for ConsoleHost {
    fn browse(&mut self, entry: &MediaEntry, index: usize) {
        log::info!("browse {} (row {})", entry.location, index);
    }

    fn open_media(&mut self, entry: &MediaEntry) {
        log::info!("open {}", entry.location);
    }

    fn show_context_menu(&mut self, anchor: AnchorKind, index: usize) {
        log::info!("context menu for row {} at {:?}", index, anchor);
    }
}

/// Post every regular file and directory below `path`. Sockets, pipes and devices are skipped.
fn discover(path: &Path, sender: &CommandSender) -> std::io::Result<usize> {
    let mut posted = 0;
    for entry in fs::read_dir(path)?.filter_map(|result| result.ok()) {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let location = entry.path().to_string_lossy().replace('\\', "/");
        let source = if file_type.is_dir() {
            MediaSource::directory(location)
        } else if file_type.is_file() {
            MediaSource::file(location)
        } else {
            continue;
        };
        if !sender.send(BrowserCommand::AddSource {
            source,
            notify: false,
            at_front: false,
        }) {
            break;
        }
        posted += 1;
    }
    Ok(posted)
}

/// Rebuild the sorted list with "Directories" and "Files" section headers
fn insert_separators(adapter: &mut BrowserAdapter) {
    let entries: Vec<Entry> = adapter.store().iter().cloned().collect();
    let store = adapter.store_mut();
    store.clear();
    let mut in_files = false;
    for (i, entry) in entries.into_iter().enumerate() {
        let is_dir = matches!(&entry, Entry::Media(media) if media.is_directory());
        if i == 0 && is_dir {
            store.add_item(SeparatorEntry::new("Directories"), false, false);
        }
        if !is_dir && !in_files {
            store.add_item(SeparatorEntry::new("Files"), false, false);
            in_files = true;
        }
        store.add_item(entry, false, false);
    }
    store.refresh();
}

fn print_rows(adapter: &BrowserAdapter) {
    for index in 0..adapter.row_count() {
        match adapter.bind_row(index) {
            Ok(RowBinding::Media { entry, presentation }) => {
                let marker = if presentation.has_context_affordance { " ⋮" } else { "" };
                if presentation.secondary_text_visible {
                    println!("{} {}{}  ({})", presentation.icon.glyph(), entry.title, marker, entry.description.as_deref().unwrap_or_default());
                } else {
                    println!("{} {}{}", presentation.icon.glyph(), entry.title, marker);
                }
            }
            Ok(RowBinding::Separator { label }) => println!("── {label} ──"),
            Err(err) => log::error!("{}", err),
        }
    }
}

fn main() {
    let args = Args::parse();

    let _logger = if let Some(log_dir) = BrowserOptions::get_config_dir() {
        match Logger::try_with_env_or_str("info") {
            Ok(logger) => logger
                .log_to_file(FileSpec::default().directory(&log_dir).basename("icy_browse").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()
                .map_err(|err| eprintln!("Failed to start logger: {err}"))
                .ok(),
            Err(err) => {
                eprintln!("Invalid log specification: {err}");
                None
            }
        }
    } else {
        eprintln!("Failed to create log file");
        None
    };

    log::info!("Starting icy_browse {}", *VERSION);

    let options = match &args.config {
        Some(path) => BrowserOptions::load_from(path).unwrap_or_else(|err| {
            log::error!("{}", err);
            BrowserOptions::default()
        }),
        None => BrowserOptions::load_options(),
    };

    let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut adapter = BrowserAdapter::new(Box::new(FsMetadataProvider)).with_folder_icon(options.folder_icon);
    adapter.set_observer(Box::new(ConsoleHost));

    let mut queue = CommandQueue::new();
    let sender = queue.begin_context();
    let worker = std::thread::spawn(move || match discover(&path, &sender) {
        Ok(count) => log::debug!("discovered {} items in {:?}", count, path),
        Err(err) => log::error!("Failed to read folder {:?}: {}", path, err),
    });

    let applied = queue.run_blocking(&mut adapter);
    if worker.join().is_err() {
        log::error!("discovery thread panicked");
    }
    log::debug!("applied {} commands", applied);

    if options.sort_after_load && !args.no_sort {
        adapter.sort_list();
        if options.show_separators {
            insert_separators(&mut adapter);
        }
    } else {
        adapter.refresh();
    }

    if args.save_options {
        options.store_options();
    }

    if adapter.is_empty() {
        println!("(empty)");
    } else {
        print_rows(&adapter);
    }

    let mut host = ConsoleHost;
    for (row, input) in [(args.tap, InputKind::Tap), (args.long_press, InputKind::LongPress)] {
        if let Some(row) = row {
            let outcome = adapter.handle_input(row, input, &mut host);
            println!("{input:?} on row {row}: {outcome:?}");
        }
    }

    log::info!("Shutting down.");
}
