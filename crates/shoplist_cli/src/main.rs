//! Command-line view layer for the shopping list.
//!
//! # Responsibility
//! - Collect user input and invoke store operations.
//! - Render the store snapshot after every operation.
//! - Enforce input-level validation (non-empty title on add).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shoplist_core::db::open_db;
use shoplist_core::{
    default_log_level, init_logging, EntryId, Filter, ListSnapshot, ListStore,
    SqliteSnapshotRepository,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "shoplist: a persistent shopping list")]
struct Cli {
    /// Path to the list database.
    #[arg(long, global = true, default_value = "shoplist.db")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new entry at the end of the list.
    Add {
        /// Entry title; must be non-empty.
        title: String,
    },
    /// Print entries under a filter plus the items-left footer.
    List {
        /// Visible subset: all, active or completed.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Flip one entry's completed flag.
    Toggle {
        /// Target entry id.
        id: EntryId,
    },
    /// Complete every entry, or uncomplete all when already complete.
    ToggleAll,
    /// Replace one entry's title.
    Edit {
        /// Target entry id.
        id: EntryId,
        /// Replacement title; an empty title keeps the old one.
        title: String,
    },
    /// Remove one entry.
    Rm {
        /// Target entry id.
        id: EntryId,
    },
    /// Remove every completed entry.
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open list database at {}", cli.db.display()))?;
    let repo = SqliteSnapshotRepository::try_new(&conn)?;
    let mut store = ListStore::load(repo)?;

    match cli.command {
        Commands::Add { title } => {
            if title.is_empty() {
                bail!("entry title cannot be empty");
            }
            let id = store.add(title)?;
            println!("added {id}");
        }
        Commands::List { filter } => {
            let filter: Filter = filter.parse()?;
            store.set_filter(filter);
            render(&store.snapshot());
        }
        Commands::Toggle { id } => {
            store.toggle_one(id)?;
            render(&store.snapshot());
        }
        Commands::ToggleAll => {
            store.toggle_all()?;
            render(&store.snapshot());
        }
        Commands::Edit { id, title } => {
            store.edit_title(id, &title)?;
            render(&store.snapshot());
        }
        Commands::Rm { id } => {
            store.delete(id)?;
            render(&store.snapshot());
        }
        Commands::Clear => {
            store.clear_completed()?;
            render(&store.snapshot());
        }
    }

    Ok(())
}

fn render(snapshot: &ListSnapshot) {
    if snapshot.visible.is_empty() {
        println!("No items here.");
    } else {
        for entry in &snapshot.visible {
            let mark = if entry.completed { "x" } else { " " };
            println!("[{mark}] {}  ({})", entry.title, entry.id);
        }
    }

    let suffix = if snapshot.active == 1 { "" } else { "s" };
    println!("{} item{suffix} left.", snapshot.active);
}
