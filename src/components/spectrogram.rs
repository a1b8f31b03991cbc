use leptos::prelude::*;
use crate::state::AppState;

/// Server-rendered spectrogram. `src` stays unset until the first upload succeeds.
#[component]
pub fn Spectrogram() -> impl IntoView {
    let state = expect_context::<AppState>();
    let src = move || state.viewer.with(|v| v.spectrogram_src().map(String::from));
    let has_image = move || state.viewer.with(|v| v.spectrogram_src().is_some());

    view! {
        <div class="spectrogram-container">
            <img id="spectrogram" class="spectrogram" alt="Spectrogram" src=src />
            <Show when=move || !has_image()>
                <div class="empty-state">"Open a CSV capture to view its spectrogram"</div>
            </Show>
        </div>
    }
}
