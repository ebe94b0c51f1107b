//! Detail overlay showing one record's full images.

use leptos::prelude::*;

use crate::net::api::{original_image_url, plate_image_url};
use crate::net::types::PlateRecord;

/// Fixed overlay with one record's id, timestamp, and both images.
///
/// Receives a snapshot of the record, not a live reference: edits made
/// through the table while the overlay is open do not update it.
#[component]
pub fn PlateDetail(
    /// Snapshot of the record to display.
    record: PlateRecord,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Plate Details (ID: {})", record.id);
    let plate_src = plate_image_url(&record.plate_image);
    let original_src = original_image_url(&record.original_image);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog plate-detail" on:click=move |ev| ev.stop_propagation()>
                <h3 class="plate-detail__title">{title}</h3>

                <div class="plate-detail__meta">
                    <strong>"Date: "</strong>
                    {record.date}
                    <br/>
                    <strong>"Time: "</strong>
                    {record.time}
                </div>

                <div class="plate-detail__images">
                    <div>
                        <h4>"Original Image"</h4>
                        <img class="plate-detail__image" src=original_src alt="Original"/>
                    </div>
                    <div>
                        <h4>"Plate Image"</h4>
                        <img class="plate-detail__image" src=plate_src alt="Plate"/>
                    </div>
                </div>

                <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
