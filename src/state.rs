use leptos::prelude::*;
use spectrum_core::{Viewer, ViewerConfig};

#[derive(Clone, Copy)]
pub struct AppState {
    pub viewer: RwSignal<Viewer>,
    /// Hidden `#csvInput`, clicked by the "Open CSV" button.
    pub file_input: NodeRef<leptos::html::Input>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: RwSignal::new(Viewer::new(config)),
            file_input: NodeRef::new(),
        }
    }
}
