use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use spectrum_core::slider::Slider;
use crate::commands;
use crate::state::AppState;

/// Frame selector. Every movement requests fresh table values.
#[component]
pub fn FrameSlider() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_input = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: HtmlInputElement = target.unchecked_into();
        let raw = input.value();
        if let Some(command) = state.viewer.try_update(|v| v.slider_input(&raw)).flatten() {
            commands::run(state, command, None);
        }
    };

    view! {
        <label class="frame-slider">
            <span class="frame-slider-title">"Frame"</span>
            <input
                id="slider"
                type="range"
                min=Slider::MIN.to_string()
                step="1"
                max=move || state.viewer.with(|v| v.slider().max.to_string())
                prop:value=move || state.viewer.with(|v| v.slider().value.to_string())
                on:input=on_input
            />
            <span id="sliderValue" class="frame-slider-value">
                {move || state.viewer.with(|v| v.slider_label())}
            </span>
        </label>
    }
}
