use serde::Deserialize;

/// Runtime settings for the viewer. Every key is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub upload_url: String,
    pub spectrogram_url: String,
    pub update_table_url: String,
    /// Drop update-table responses that were overtaken by a newer request.
    pub discard_stale_table_responses: bool,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            upload_url: "/upload".into(),
            spectrogram_url: "/spectrogram".into(),
            update_table_url: "/update_table".into(),
            discard_stale_table_responses: false,
            log_level: "debug".into(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("viewer config: {e}"))
    }

    /// Configured log level, falling back to `Debug` for unknown names.
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}
