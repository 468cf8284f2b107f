//! Generic data grid used by every listing screen.
//!
//! A thin Leptos view over [`TableModel`]: the component owns a signal
//! holding the model, tracks the `data` signal to replace the rows
//! wholesale whenever the caller refetches, and forwards input events into
//! the model. Rows come in already materialized — pagination,
//! virtualization and fetching are the caller's problem — and nothing
//! flows back out except the `on_edit` / `on_delete` callbacks, which
//! receive the clicked row's record.

use leptos::prelude::*;
use serde::Serialize;

use crate::net::types::Record;
use crate::state::table::{Column, SortDir, TableModel, action_column};

/// Searchable, sortable grid over any record collection.
///
/// Supplying `on_edit` or `on_delete` synthesizes a trailing actions column
/// with one control per supplied callback. An empty `search_keys` disables
/// filtering and hides the search box entirely.
#[component]
pub fn GenericTable<R>(
    /// Already-materialized records to render; a refetching page passes a
    /// signal and the grid follows each wholesale replacement.
    #[prop(into)]
    data: Signal<Vec<R>>,
    /// Ordered column schema.
    columns: Vec<Column<R>>,
    /// Record fields participating in the free-text filter.
    #[prop(optional)]
    search_keys: Vec<String>,
    #[prop(optional, into)]
    on_edit: Option<Callback<R>>,
    #[prop(optional, into)]
    on_delete: Option<Callback<R>>,
) -> impl IntoView
where
    R: Record + Serialize + Clone + Send + Sync + 'static,
{
    let headers: Vec<(String, String)> = columns
        .iter()
        .map(|c| (c.id().to_owned(), c.header().to_owned()))
        .collect();
    let has_search = !search_keys.is_empty();
    let actions = action_column(on_edit.is_some(), on_delete.is_some());

    let model = RwSignal::new(TableModel::new(columns, search_keys));
    Effect::new(move |_| {
        let rows = data.get();
        model.update(|m| m.set_rows(rows));
    });

    view! {
        <div class="generic-table">
            <Show when=move || has_search>
                <input
                    class="generic-table__search"
                    type="text"
                    placeholder="Search..."
                    prop:value=move || model.with(|m| m.filter().to_owned())
                    on:input=move |ev| model.update(|m| m.set_filter(event_target_value(&ev)))
                />
            </Show>

            <table class="generic-table__grid">
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|(id, header)| {
                                let sort_id = id.clone();
                                let indicator_id = id;
                                view! {
                                    <th
                                        class="generic-table__header"
                                        on:click=move |_| model.update(|m| m.toggle_sort(&sort_id))
                                    >
                                        {header}
                                        {move || {
                                            model.with(|m| match m.sort() {
                                                Some((column, SortDir::Asc)) if column == indicator_id => " \u{25b2}",
                                                Some((column, SortDir::Desc)) if column == indicator_id => " \u{25bc}",
                                                _ => "",
                                            })
                                        }}
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                        {actions.map(|_| view! { <th class="generic-table__header">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || model.with(TableModel::view_rows)
                        key=|row| row.record.id()
                        children=move |row| {
                            let record = row.record;
                            view! {
                                <tr>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <td class=cell.class>{cell.text}</td> })
                                        .collect::<Vec<_>>()}
                                    {actions
                                        .map(|_| {
                                            let edit_record = record.clone();
                                            let delete_record = record.clone();
                                            view! {
                                                <td class="generic-table__actions">
                                                    {on_edit
                                                        .map(|callback| view! {
                                                            <button
                                                                class="btn btn--sm"
                                                                on:click=move |_| callback.run(edit_record.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                        })}
                                                    {on_delete
                                                        .map(|callback| view! {
                                                            <button
                                                                class="btn btn--sm btn--danger"
                                                                on:click=move |_| callback.run(delete_record.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        })}
                                                </td>
                                            }
                                        })}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
