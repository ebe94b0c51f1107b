//! Review-session state for the plate detection list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of the backend's detection list
//! plus the transient review flags layered on top of it: the single edit
//! session, the bulk-action selection, the sort direction, and the detail
//! overlay. The backend owns the records; every mutating transition here is
//! called only after the corresponding HTTP request succeeded, so the cache
//! never runs ahead of the server.

#[cfg(test)]
#[path = "plates_test.rs"]
mod plates_test;

use std::collections::HashSet;

use crate::net::types::PlateRecord;
use crate::util::sort::compare_records;

/// Direction applied to the combined date+time sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest detection first. The initial direction.
    #[default]
    Asc,
    /// Newest detection first.
    Desc,
}

/// Review state: the record snapshot and the flags layered on top of it.
///
/// Invariants maintained by the transition methods:
/// - `selection` only ever contains ids present in `records`.
/// - `editing_id`, when set, references an id present in `records`.
/// - At most one record is being edited and at most one detail overlay is
///   open at a time.
#[derive(Clone, Debug, Default)]
pub struct PlatesState {
    /// Last successful list snapshot, replaced wholesale on every fetch.
    pub records: Vec<PlateRecord>,
    /// True until the first snapshot arrives.
    pub loading: bool,
    /// Record currently in edit mode, if any.
    pub editing_id: Option<i64>,
    /// Draft plate text for the record under edit.
    pub draft_plate: String,
    /// Record ids marked for a bulk operation.
    pub selection: HashSet<i64>,
    /// Direction of the chronological sort projection.
    pub sort_direction: SortDirection,
    /// Snapshot of the record shown in the detail overlay, if open.
    pub detail: Option<PlateRecord>,
}

impl PlatesState {
    /// Initial state before the first fetch: empty snapshot, loading.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Replace the snapshot wholesale with a fresh fetch result.
    ///
    /// The selection is pruned to ids that survived the swap, and an edit
    /// session whose id aged out is reset. An edit session whose id is still
    /// present keeps its draft even if the server-side plate text changed
    /// underneath it. The detail overlay is a snapshot and is left alone.
    pub fn apply_snapshot(&mut self, records: Vec<PlateRecord>) {
        self.records = records;
        let ids: HashSet<i64> = self.records.iter().map(|r| r.id).collect();
        self.selection.retain(|id| ids.contains(id));
        if let Some(editing) = self.editing_id {
            if !ids.contains(&editing) {
                self.cancel_edit();
            }
        }
        self.loading = false;
    }

    /// Flip the sort direction.
    pub fn toggle_sort(&mut self) {
        self.sort_direction = match self.sort_direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
    }

    /// Chronologically sorted view of the snapshot.
    ///
    /// A pure projection computed on every render; never written back into
    /// `records`. The sort is stable, so records with equal (or unparseable)
    /// timestamps keep their snapshot order.
    pub fn sorted_records(&self) -> Vec<PlateRecord> {
        let mut sorted = self.records.clone();
        let direction = self.sort_direction;
        sorted.sort_by(|a, b| compare_records(a, b, direction));
        sorted
    }

    /// Enter edit mode for one record, seeding the draft with its current
    /// plate text. No-op for ids not in the snapshot.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(record) = self.records.iter().find(|r| r.id == id) {
            self.editing_id = Some(id);
            self.draft_plate = record.plate.clone();
        }
    }

    /// Replace the draft plate text.
    pub fn set_draft(&mut self, value: String) {
        self.draft_plate = value;
    }

    /// Leave edit mode, discarding the draft. Issues no request.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.draft_plate.clear();
    }

    /// Patch one record's plate text in place and leave edit mode.
    ///
    /// Called only after the update request succeeded; the rest of the
    /// snapshot, its order, and any open detail overlay are untouched.
    pub fn commit_edit(&mut self, id: i64, value: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.plate = value.to_owned();
        }
        self.cancel_edit();
    }

    /// Drop one record from the snapshot and the selection.
    ///
    /// Called only after the delete request succeeded.
    pub fn remove_record(&mut self, id: i64) {
        self.records.retain(|r| r.id != id);
        self.selection.remove(&id);
        if self.editing_id == Some(id) {
            self.cancel_edit();
        }
    }

    /// Drop every selected record and clear the selection in one swap.
    ///
    /// Called only after the bulk delete request succeeded.
    pub fn remove_selected(&mut self) {
        if let Some(editing) = self.editing_id {
            if self.selection.contains(&editing) {
                self.cancel_edit();
            }
        }
        let selection = std::mem::take(&mut self.selection);
        self.records.retain(|r| !selection.contains(&r.id));
    }

    /// Flip one id's selection membership. Ignores ids not in the snapshot.
    pub fn toggle_selected(&mut self, id: i64) {
        if !self.records.iter().any(|r| r.id == id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Select-all toggle: clear the selection when everything is already
    /// selected, otherwise select the full id set of the current snapshot.
    ///
    /// Works against the unsorted snapshot, so the result is independent of
    /// the sort direction.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection = self.records.iter().map(|r| r.id).collect();
        }
    }

    /// Whether the selection covers the whole snapshot. Drives the header
    /// checkbox state.
    pub fn all_selected(&self) -> bool {
        self.selection.len() == self.records.len()
    }

    /// Selected ids in ascending order, ready for a bulk request body.
    pub fn selected_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selection.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Open the detail overlay with a snapshot of one record.
    ///
    /// The clone is deliberate: later edits to the underlying record do not
    /// retroactively update an already-open overlay. No-op for unknown ids.
    pub fn open_detail(&mut self, id: i64) {
        if let Some(record) = self.records.iter().find(|r| r.id == id) {
            self.detail = Some(record.clone());
        }
    }

    /// Close the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
