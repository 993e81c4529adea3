//! List store: the in-memory reducer plus write-through persistence.
//!
//! # Responsibility
//! - Own the ordered entry list and the session filter.
//! - Apply list transitions and persist every resulting sequence.
//! - Recover malformed persisted snapshots as an empty list.
//!
//! # Invariants
//! - Entry ids stay unique within the list across all operations.
//! - Every mutation serializes and writes the new sequence before
//!   adopting it in memory; there is no dirty tracking.
//! - The filter never mutates the list and is never persisted.

use crate::model::entry::{Entry, EntryId, Filter};
use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository, SNAPSHOT_KEY};
use log::warn;
use std::collections::HashSet;

/// Render projection handed to the view layer after every operation.
///
/// Carries the visible subset together with the counts the view needs,
/// so the view never recomputes them from the raw list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// Entries matching the current filter, in list order.
    pub visible: Vec<Entry>,
    /// Total entry count, ignoring the filter.
    pub total: usize,
    /// Count of entries with `completed == false`.
    pub active: usize,
    /// Count of entries with `completed == true`.
    pub completed: usize,
    /// The filter the projection was computed under.
    pub filter: Filter,
}

/// Session-owned list state over a snapshot repository.
///
/// Constructed once per session via [`ListStore::load`]; the view layer
/// holds it for the session lifetime and calls operations on it. No
/// ambient singleton exists.
pub struct ListStore<R: SnapshotRepository> {
    repo: R,
    items: Vec<Entry>,
    filter: Filter,
}

impl<R: SnapshotRepository> ListStore<R> {
    /// Loads persisted state into a fresh store.
    ///
    /// The sole point where persisted state flows back into memory.
    /// Absent or malformed blobs (including blobs whose parsed list
    /// violates id uniqueness) are recovered as an empty list and
    /// logged, never surfaced as errors: first run and corrupt storage
    /// look the same to the caller.
    ///
    /// # Errors
    /// - Propagates blob-store read failures only.
    pub fn load(repo: R) -> RepoResult<Self> {
        let items = match repo.read_blob(SNAPSHOT_KEY)? {
            None => Vec::new(),
            Some(blob) => decode_snapshot(&blob),
        };

        Ok(Self {
            repo,
            items,
            filter: Filter::default(),
        })
    }

    /// Appends a new uncompleted entry and returns its id.
    ///
    /// Title emptiness is the input layer's contract; the store appends
    /// whatever it is given.
    pub fn add(&mut self, title: impl Into<String>) -> RepoResult<EntryId> {
        let entry = Entry::new(title);
        let id = entry.id;

        let mut next = self.items.clone();
        next.push(entry);
        self.persist(next)?;

        Ok(id)
    }

    /// Flips the completion flag of the matching entry.
    ///
    /// Unknown ids produce a full pass-through that is still persisted.
    pub fn toggle_one(&mut self, id: EntryId) -> RepoResult<()> {
        let next = self
            .items
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.id == id {
                    entry.toggle();
                }
                entry
            })
            .collect();
        self.persist(next)
    }

    /// Completes every entry unless all are already complete, in which
    /// case it uncompletes every entry.
    ///
    /// The uniform result for each entry is `!(completed_count == total)`;
    /// on an empty list the comparison holds vacuously and the write is
    /// a persisted no-op.
    pub fn toggle_all(&mut self) -> RepoResult<()> {
        let completed_count = self.completed_count();
        let target = completed_count != self.items.len();

        let next = self
            .items
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.completed = target;
                entry
            })
            .collect();
        self.persist(next)
    }

    /// Replaces the matching entry's title when `new_title` is non-empty.
    ///
    /// A blank edit keeps the existing title rather than erroring;
    /// unknown ids produce a persisted pass-through.
    pub fn edit_title(&mut self, id: EntryId, new_title: &str) -> RepoResult<()> {
        let next = self
            .items
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.id == id && !new_title.is_empty() {
                    entry.title = new_title.to_string();
                }
                entry
            })
            .collect();
        self.persist(next)
    }

    /// Removes the matching entry; persisted no-op if absent.
    pub fn delete(&mut self, id: EntryId) -> RepoResult<()> {
        let next = self
            .items
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.persist(next)
    }

    /// Removes every completed entry, preserving survivor order.
    pub fn clear_completed(&mut self) -> RepoResult<()> {
        let next = self
            .items
            .iter()
            .filter(|entry| !entry.completed)
            .cloned()
            .collect();
        self.persist(next)
    }

    /// Switches the session filter. Never touches the list or storage.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Current session filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Full list in insertion order, ignoring the filter.
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// Entries matching the current filter, in list order.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.items
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .collect()
    }

    /// Total entry count.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Count of not-yet-completed entries.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|entry| !entry.completed).count()
    }

    /// Count of completed entries.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|entry| entry.completed).count()
    }

    /// Render projection for the view layer.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            visible: self.visible_entries().into_iter().cloned().collect(),
            total: self.total_count(),
            active: self.active_count(),
            completed: self.completed_count(),
            filter: self.filter,
        }
    }

    /// Serializes `next`, writes it through, then adopts it in memory.
    ///
    /// Write-before-adopt keeps the in-memory list and the blob store
    /// in lockstep: a failed write leaves the previous state current.
    fn persist(&mut self, next: Vec<Entry>) -> RepoResult<()> {
        let blob = serde_json::to_string(&next)?;
        self.repo.write_blob(SNAPSHOT_KEY, &blob)?;
        self.items = next;
        Ok(())
    }
}

fn decode_snapshot(blob: &str) -> Vec<Entry> {
    let items: Vec<Entry> = match serde_json::from_str(blob) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=snapshot_decode module=service status=recovered reason=malformed_blob error={err}"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    if items.iter().any(|entry| !seen.insert(entry.id)) {
        warn!("event=snapshot_decode module=service status=recovered reason=duplicate_entry_id");
        return Vec::new();
    }

    items
}
