//! Review page listing detected plates with sort, edit, delete, and bulk
//! actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route of the client. It fetches the detection list on
//! mount, re-fetches on a fixed 5-second interval until teardown, and pairs
//! each user action with its REST request. The server is the source of
//! truth: local state is only mutated after a request succeeds, and a
//! failure leaves state exactly as it was (a failed save keeps the edit
//! session open so the operator can retry).

use leptos::prelude::*;

use crate::components::plate_detail::PlateDetail;
use crate::components::plate_row::PlateRow;
use crate::state::plates::{PlatesState, SortDirection};

/// Review page: the detection table plus its toolbar and overlays.
#[component]
pub fn PlateReviewPage() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlatesState>>();

    // Initial fetch plus a fixed-interval poll for near-real-time updates.
    // The alive flag is the only cancellation point; in-flight requests are
    // never cancelled and the last-completing snapshot wins.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            refresh_plates(plates).await;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_plates(plates).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Pure view-state transitions.
    let on_toggle_sort = move |_| plates.update(|s| s.toggle_sort());
    let on_select_all = move |_| plates.update(|s| s.toggle_select_all());
    let on_toggle_select = Callback::new(move |id: i64| plates.update(|s| s.toggle_selected(id)));
    let on_show = Callback::new(move |id: i64| plates.update(|s| s.open_detail(id)));
    let on_close_detail = Callback::new(move |_| plates.update(|s| s.close_detail()));
    let on_edit = Callback::new(move |id: i64| plates.update(|s| s.begin_edit(id)));
    let on_cancel = Callback::new(move |_| plates.update(|s| s.cancel_edit()));
    let on_draft = Callback::new(move |value: String| plates.update(|s| s.set_draft(value)));

    // Confirmed mutations: each handler issues its request and patches the
    // cache only on success.
    let on_save = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let draft = plates.get_untracked().draft_plate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_plate(id, &draft).await {
                    Ok(()) => plates.update(|s| s.commit_edit(id, &draft)),
                    Err(err) => {
                        log::error!("plate update failed: {err}");
                        crate::util::notify::alert("Failed to update plate");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_plate(id).await {
                    Ok(()) => plates.update(|s| s.remove_record(id)),
                    Err(err) => {
                        log::error!("plate delete failed: {err}");
                        crate::util::notify::alert("Failed to delete plate");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_bulk_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let ids = plates.get_untracked().selected_ids();
            if ids.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_plates(&ids).await {
                    Ok(()) => plates.update(|s| s.remove_selected()),
                    Err(err) => {
                        log::error!("bulk delete failed: {err}");
                        crate::util::notify::alert("Failed to delete selected plates");
                    }
                }
            });
        }
    };

    let on_send_email = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let ids = plates.get_untracked().selected_ids();
            if ids.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::send_email(&ids).await {
                    Ok(message) => {
                        let message = message.unwrap_or_else(|| "Emails sent successfully".to_owned());
                        crate::util::notify::alert(&message);
                    }
                    Err(err) => {
                        log::error!("send email failed: {err}");
                        crate::util::notify::alert("Failed to send email");
                    }
                }
            });
        }
    };

    let selected_count = move || plates.get().selection.len();
    let sort_icon = move || match plates.get().sort_direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    };

    view! {
        <div class="plates-page">
            <h2 class="plates-page__title">"Detected License Plates"</h2>

            <Show when=move || (selected_count() > 0)>
                <div class="plates-page__bulk-actions">
                    <button class="btn btn--danger" on:click=on_bulk_delete>
                        {move || format!("Delete Selected ({})", selected_count())}
                    </button>
                    <button class="btn" on:click=on_send_email>
                        {move || format!("Email Selected ({})", selected_count())}
                    </button>
                </div>
            </Show>

            <Show
                when=move || !plates.get().loading
                fallback=move || view! { <p>"Loading plates..."</p> }
            >
                <table class="plate-table">
                    <thead>
                        <tr>
                            <th>
                                <label class="plate-table__select">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || plates.get().all_selected()
                                        on:change=on_select_all
                                    />
                                    "ID"
                                </label>
                            </th>
                            <th
                                class="plate-table__sort-header"
                                on:click=on_toggle_sort
                                title="Click to toggle sort by Date then Time"
                            >
                                "Date "
                                <span class="plate-table__sort-icon">{sort_icon}</span>
                            </th>
                            <th>"Time"</th>
                            <th>"Plate"</th>
                            <th>"Plate Image"</th>
                            <th>"Original Image"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = plates.get();
                            let draft = state.draft_plate.clone();
                            state
                                .sorted_records()
                                .into_iter()
                                .map(|record| {
                                    let selected = state.selection.contains(&record.id);
                                    let editing = state.editing_id == Some(record.id);
                                    view! {
                                        <PlateRow
                                            record=record
                                            selected=selected
                                            editing=editing
                                            draft=draft.clone()
                                            on_toggle_select=on_toggle_select
                                            on_show=on_show
                                            on_edit=on_edit
                                            on_delete=on_delete
                                            on_save=on_save
                                            on_cancel=on_cancel
                                            on_draft=on_draft
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || plates.get().detail.is_some()>
                {move || {
                    plates
                        .get()
                        .detail
                        .map(|record| view! { <PlateDetail record=record on_close=on_close_detail/> })
                }}
            </Show>
        </div>
    }
}

/// Fetch the list and swap it into the snapshot. A failed fetch is logged
/// and leaves the prior snapshot untouched.
#[cfg(feature = "hydrate")]
async fn refresh_plates(plates: RwSignal<PlatesState>) {
    match crate::net::api::fetch_plates().await {
        Ok(records) => plates.update(|s| s.apply_snapshot(records)),
        Err(err) => log::error!("plate list fetch failed: {err}"),
    }
}
