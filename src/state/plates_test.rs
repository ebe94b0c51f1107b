use super::*;

use crate::net::types::PlateRecord;

fn record(id: i64, date: &str, time: &str, plate: &str) -> PlateRecord {
    PlateRecord {
        id,
        date: date.to_owned(),
        time: time.to_owned(),
        plate: plate.to_owned(),
        plate_image: format!("plate_{id}.jpg"),
        original_image: format!("frame_{id}.jpg"),
    }
}

fn sample_pair() -> Vec<PlateRecord> {
    vec![
        record(1, "2024-01-01", "10:00", "ABC123"),
        record(2, "2024-01-02", "09:00", "XYZ999"),
    ]
}

fn loaded(records: Vec<PlateRecord>) -> PlatesState {
    let mut state = PlatesState::new();
    state.apply_snapshot(records);
    state
}

#[test]
fn new_state_is_empty_and_loading() {
    let state = PlatesState::new();
    assert!(state.records.is_empty());
    assert!(state.loading);
    assert!(state.editing_id.is_none());
    assert!(state.selection.is_empty());
    assert_eq!(state.sort_direction, SortDirection::Asc);
    assert!(state.detail.is_none());
}

#[test]
fn apply_snapshot_replaces_records_and_clears_loading() {
    let mut state = PlatesState::new();
    state.apply_snapshot(sample_pair());
    assert_eq!(state.records.len(), 2);
    assert!(!state.loading);

    state.apply_snapshot(vec![record(3, "2024-02-01", "08:00", "NEW111")]);
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].id, 3);
}

#[test]
fn apply_snapshot_prunes_selection_to_surviving_ids() {
    let mut state = loaded(sample_pair());
    state.toggle_selected(1);
    state.toggle_selected(2);

    state.apply_snapshot(vec![record(2, "2024-01-02", "09:00", "XYZ999")]);
    assert_eq!(state.selected_ids(), vec![2]);
}

#[test]
fn apply_snapshot_resets_edit_mode_when_id_ages_out() {
    let mut state = loaded(sample_pair());
    state.begin_edit(1);
    state.set_draft("WIP".to_owned());

    state.apply_snapshot(vec![record(2, "2024-01-02", "09:00", "XYZ999")]);
    assert!(state.editing_id.is_none());
    assert!(state.draft_plate.is_empty());
}

#[test]
fn apply_snapshot_keeps_edit_session_when_id_survives() {
    let mut state = loaded(sample_pair());
    state.begin_edit(2);
    state.set_draft("WIP".to_owned());

    // The refreshed snapshot may carry different server-side plate text;
    // the open session and its draft are kept regardless.
    state.apply_snapshot(vec![record(2, "2024-01-02", "09:00", "SRV000")]);
    assert_eq!(state.editing_id, Some(2));
    assert_eq!(state.draft_plate, "WIP");
}

#[test]
fn apply_snapshot_leaves_open_detail_untouched() {
    let mut state = loaded(sample_pair());
    state.open_detail(1);

    state.apply_snapshot(vec![record(2, "2024-01-02", "09:00", "XYZ999")]);
    assert_eq!(state.detail.as_ref().map(|r| r.id), Some(1));
}

#[test]
fn toggle_sort_flips_direction() {
    let mut state = PlatesState::new();
    state.toggle_sort();
    assert_eq!(state.sort_direction, SortDirection::Desc);
    state.toggle_sort();
    assert_eq!(state.sort_direction, SortDirection::Asc);
}

#[test]
fn sorted_records_ascending_orders_by_date_then_time() {
    let state = loaded(sample_pair());
    let ids: Vec<i64> = state.sorted_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn sorted_records_descending_is_reverse_of_ascending_for_distinct_keys() {
    let mut state = loaded(vec![
        record(5, "2024-03-01", "12:00", "AAA111"),
        record(1, "2024-01-01", "10:00", "ABC123"),
        record(2, "2024-01-02", "09:00", "XYZ999"),
    ]);
    let ascending: Vec<i64> = state.sorted_records().iter().map(|r| r.id).collect();

    state.toggle_sort();
    let descending: Vec<i64> = state.sorted_records().iter().map(|r| r.id).collect();

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(ascending, vec![1, 2, 5]);
    assert_eq!(descending, reversed);
}

#[test]
fn sorted_records_is_a_projection_and_never_reorders_the_snapshot() {
    let state = loaded(vec![
        record(2, "2024-01-02", "09:00", "XYZ999"),
        record(1, "2024-01-01", "10:00", "ABC123"),
    ]);
    let _ = state.sorted_records();
    let snapshot_ids: Vec<i64> = state.records.iter().map(|r| r.id).collect();
    assert_eq!(snapshot_ids, vec![2, 1]);
}

#[test]
fn sorted_records_keeps_snapshot_order_for_equal_keys() {
    let state = loaded(vec![
        record(7, "2024-01-01", "10:00", "AAA111"),
        record(3, "2024-01-01", "10:00", "BBB222"),
    ]);
    let ids: Vec<i64> = state.sorted_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 3]);
}

#[test]
fn begin_edit_seeds_draft_from_record() {
    let mut state = loaded(sample_pair());
    state.begin_edit(2);
    assert_eq!(state.editing_id, Some(2));
    assert_eq!(state.draft_plate, "XYZ999");
}

#[test]
fn begin_edit_ignores_unknown_id() {
    let mut state = loaded(sample_pair());
    state.begin_edit(99);
    assert!(state.editing_id.is_none());
    assert!(state.draft_plate.is_empty());
}

#[test]
fn cancel_edit_discards_the_draft_and_leaves_the_record_unchanged() {
    let mut state = loaded(sample_pair());
    state.begin_edit(1);
    state.set_draft("CHANGED".to_owned());
    state.cancel_edit();

    assert!(state.editing_id.is_none());
    assert!(state.draft_plate.is_empty());
    assert_eq!(state.records[0].plate, "ABC123");
}

#[test]
fn commit_edit_patches_only_the_target_record() {
    let mut state = loaded(sample_pair());
    state.begin_edit(2);
    state.set_draft("NEW000".to_owned());
    state.commit_edit(2, "NEW000");

    assert!(state.editing_id.is_none());
    assert_eq!(state.records[0].plate, "ABC123");
    assert_eq!(state.records[1].plate, "NEW000");
    let ids: Vec<i64> = state.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn edit_session_and_draft_survive_a_failed_save() {
    // commit_edit is only invoked once the update request succeeded, so a
    // failed save simply never reaches it: the session stays open and the
    // cache keeps the server's value.
    let mut state = loaded(sample_pair());
    state.begin_edit(2);
    state.set_draft("NEW000".to_owned());

    assert_eq!(state.editing_id, Some(2));
    assert_eq!(state.draft_plate, "NEW000");
    assert_eq!(state.records[1].plate, "XYZ999");
}

#[test]
fn remove_record_drops_id_from_records_and_selection() {
    let mut state = loaded(sample_pair());
    state.toggle_selected(1);
    state.toggle_selected(2);
    state.remove_record(1);

    assert!(!state.records.iter().any(|r| r.id == 1));
    assert_eq!(state.selected_ids(), vec![2]);
}

#[test]
fn remove_record_ignores_unknown_id() {
    let mut state = loaded(sample_pair());
    state.remove_record(99);
    assert_eq!(state.records.len(), 2);
}

#[test]
fn remove_selected_removes_exactly_the_selected_subset() {
    let mut state = loaded(vec![
        record(1, "2024-01-01", "10:00", "ABC123"),
        record(2, "2024-01-02", "09:00", "XYZ999"),
        record(3, "2024-01-03", "11:00", "DEF456"),
    ]);
    state.toggle_selected(1);
    state.toggle_selected(3);
    state.remove_selected();

    let ids: Vec<i64> = state.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(state.selection.is_empty());
}

#[test]
fn remove_selected_with_full_selection_empties_the_cache() {
    let mut state = loaded(sample_pair());
    state.toggle_select_all();
    state.remove_selected();

    assert!(state.records.is_empty());
    assert!(state.selection.is_empty());
}

#[test]
fn remove_selected_resets_edit_mode_when_the_edited_row_was_selected() {
    let mut state = loaded(sample_pair());
    state.begin_edit(1);
    state.toggle_selected(1);
    state.remove_selected();

    assert!(state.editing_id.is_none());
}

#[test]
fn toggle_selected_flips_membership() {
    let mut state = loaded(sample_pair());
    state.toggle_selected(1);
    assert!(state.selection.contains(&1));
    state.toggle_selected(1);
    assert!(!state.selection.contains(&1));
}

#[test]
fn toggle_selected_ignores_unknown_id() {
    let mut state = loaded(sample_pair());
    state.toggle_selected(99);
    assert!(state.selection.is_empty());
}

#[test]
fn toggle_select_all_is_a_true_toggle() {
    let mut state = loaded(sample_pair());
    state.toggle_selected(1);

    state.toggle_select_all();
    assert_eq!(state.selected_ids(), vec![1, 2]);
    assert!(state.all_selected());

    state.toggle_select_all();
    assert!(state.selection.is_empty());
}

#[test]
fn toggle_select_all_uses_the_unsorted_snapshot() {
    let mut state = loaded(sample_pair());
    state.toggle_sort();
    state.toggle_select_all();
    assert_eq!(state.selected_ids(), vec![1, 2]);
}

#[test]
fn selected_ids_are_sorted_ascending() {
    let mut state = loaded(vec![
        record(9, "2024-01-01", "10:00", "AAA111"),
        record(4, "2024-01-02", "09:00", "BBB222"),
        record(6, "2024-01-03", "11:00", "CCC333"),
    ]);
    state.toggle_select_all();
    assert_eq!(state.selected_ids(), vec![4, 6, 9]);
}

#[test]
fn open_detail_stores_a_snapshot_not_a_live_reference() {
    let mut state = loaded(sample_pair());
    state.open_detail(2);
    state.commit_edit(2, "NEW000");

    assert_eq!(state.detail.as_ref().map(|r| r.plate.as_str()), Some("XYZ999"));
}

#[test]
fn open_detail_ignores_unknown_id_and_close_clears_it() {
    let mut state = loaded(sample_pair());
    state.open_detail(99);
    assert!(state.detail.is_none());

    state.open_detail(1);
    assert!(state.detail.is_some());
    state.close_detail();
    assert!(state.detail.is_none());
}
