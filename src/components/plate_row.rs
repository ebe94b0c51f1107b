//! One row of the plate review table.

use leptos::prelude::*;

use crate::net::api::{original_image_url, plate_image_url};
use crate::net::types::PlateRecord;

/// A single detection row: selection checkbox, timestamp cells, the plate
/// cell (which swaps to a text input while editing), image thumbnails, and
/// the action buttons.
///
/// The row is a plain projection of the props it receives; all state changes
/// flow back to the page through the callbacks.
#[component]
pub fn PlateRow(
    /// The record rendered by this row.
    record: PlateRecord,
    /// Whether this row is in the bulk-action selection.
    selected: bool,
    /// Whether this row is the one currently being edited.
    editing: bool,
    /// Current draft plate text; only shown while `editing`.
    draft: String,
    on_toggle_select: Callback<i64>,
    on_show: Callback<i64>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
    on_save: Callback<i64>,
    on_cancel: Callback<()>,
    on_draft: Callback<String>,
) -> impl IntoView {
    let id = record.id;
    let plate_src = plate_image_url(&record.plate_image);
    let original_src = original_image_url(&record.original_image);
    let plate_text = record.plate.clone();
    let row_class = if selected {
        "plate-table__row plate-table__row--selected"
    } else {
        "plate-table__row"
    };

    view! {
        <tr class=row_class>
            <td>
                <label class="plate-table__select">
                    <input
                        type="checkbox"
                        prop:checked=selected
                        on:change=move |_| on_toggle_select.run(id)
                    />
                    {id}
                </label>
            </td>
            <td>{record.date}</td>
            <td>{record.time}</td>
            <td>
                <Show when=move || editing fallback=move || plate_text.clone()>
                    <input
                        class="plate-table__edit-input"
                        type="text"
                        prop:value=draft.clone()
                        on:input=move |ev| on_draft.run(event_target_value(&ev))
                    />
                </Show>
            </td>
            <td>
                <img class="plate-table__thumb" src=plate_src alt="plate" width="120"/>
            </td>
            <td>
                <img class="plate-table__thumb" src=original_src alt="original" width="120"/>
            </td>
            <td class="plate-table__actions">
                <Show
                    when=move || editing
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| on_show.run(id)>
                                "Show"
                            </button>
                            " "
                            <button class="btn" on:click=move |_| on_edit.run(id)>
                                "Edit"
                            </button>
                            " "
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" on:click=move |_| on_save.run(id)>
                        "Save"
                    </button>
                    " "
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
