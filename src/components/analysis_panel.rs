use leptos::prelude::*;
use spectrum_core::table::{ResultsTable, CELLS_PER_ROW, ROWS};
use crate::state::AppState;

/// Signal characteristics for the selected frame, as label/value pairs, two per row.
#[component]
pub fn AnalysisPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let cell = move |position: usize| {
        match ResultsTable::field_at(position) {
            Some(field) => view! {
                <td class="value" data-field=field.key()>
                    {move || state.viewer.with(|v| v.table().cell(position).unwrap_or_default().to_string())}
                </td>
            }.into_any(),
            None => {
                let label = state.viewer.with_untracked(|v| v.table().cell(position).unwrap_or_default().to_string());
                view! { <td class="label">{label}</td> }.into_any()
            }
        }
    };

    view! {
        <div class="analysis-panel">
            <table class="results">
                <tbody>
                    {(0..ROWS)
                        .map(|row| view! {
                            <tr>
                                {(0..CELLS_PER_ROW).map(|col| cell(row * CELLS_PER_ROW + col)).collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

