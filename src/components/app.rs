use leptos::prelude::*;
use spectrum_core::ViewerConfig;
use crate::state::AppState;
use crate::components::analysis_panel::AnalysisPanel;
use crate::components::frame_slider::FrameSlider;
use crate::components::spectrogram::Spectrogram;
use crate::components::toolbar::Toolbar;

#[component]
pub fn App(config: ViewerConfig) -> impl IntoView {
    let state = AppState::new(config);
    provide_context(state);

    view! {
        <div class="app">
            <Toolbar />
            <div class="main">
                <Spectrogram />
                <FrameSlider />
                <AnalysisPanel />
            </div>
        </div>
    }
}
