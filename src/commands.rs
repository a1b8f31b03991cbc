use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement};
use spectrum_core::Command;
use crate::api;
use crate::state::AppState;

/// Execute a controller command. `file` accompanies `Command::Upload`.
pub fn run(state: AppState, command: Command, file: Option<File>) {
    match command {
        Command::OpenFilePicker => {
            if let Some(input) = state.file_input.get_untracked() {
                let el: &HtmlInputElement = input.as_ref();
                el.click();
            }
        }
        Command::Upload { url, file_name } => {
            let Some(file) = file else {
                log::warn!("Upload of {file_name} requested without a file");
                return;
            };
            spawn_local(async move {
                let result = api::upload_file(&url, &file).await;
                let now_ms = js_sys::Date::now() as u64;
                state.viewer.update(|viewer| {
                    // failure is already logged by the controller
                    let _ = viewer.upload_finished(result, now_ms);
                });
            });
        }
        Command::UpdateTable { url, ticket, body } => {
            spawn_local(async move {
                let result = api::update_table(&url, &body).await;
                state.viewer.update(|viewer| {
                    viewer.table_update_finished(ticket, result);
                });
            });
        }
        Command::Print => {
            let Some(window) = web_sys::window() else { return };
            if let Err(e) = window.print() {
                log::warn!("print failed: {e:?}");
            }
        }
    }
}
