use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use spectrum_core::Command;
use crate::commands;
use crate::state::AppState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_open_click = move |_: web_sys::MouseEvent| {
        let command = state.viewer.with_untracked(|v| v.request_file_open());
        commands::run(state, command, None);
    };

    let on_file_input_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: HtmlInputElement = target.unchecked_into();
        let file = input.files().and_then(|list| list.get(0));
        let name = file.as_ref().map(|f| f.name());

        let command = state
            .viewer
            .try_update(|v| v.file_selected(name.as_deref()))
            .flatten();
        if let Some(command @ Command::Upload { .. }) = command {
            commands::run(state, command, file);
        }
    };

    let on_report_click = move |_: web_sys::MouseEvent| {
        let command = state.viewer.with_untracked(|v| v.generate_report());
        commands::run(state, command, None);
    };

    let file_label = move || {
        state
            .viewer
            .with(|v| v.file_name().unwrap_or("No file loaded").to_string())
    };

    view! {
        <div class="toolbar">
            <span class="toolbar-brand">"Spectrum Viewer"</span>
            <div class="toolbar-sep"></div>

            <button id="openCsvBtn" class="toolbar-btn" on:click=on_open_click>
                "Open CSV"
            </button>
            <input
                id="csvInput"
                node_ref=state.file_input
                type="file"
                style="display:none"
                on:change=on_file_input_change
            />
            <span id="fileName" class="file-name">{file_label}</span>

            <div class="toolbar-sep"></div>

            <button id="generateReportBtn" class="toolbar-btn" on:click=on_report_click>
                "Generate report"
            </button>
        </div>
    }
}
