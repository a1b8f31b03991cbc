pub mod analysis_panel;
pub mod app;
pub mod frame_slider;
pub mod spectrogram;
pub mod toolbar;
