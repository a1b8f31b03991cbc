//! Page controller: turns DOM events into [`Command`]s and server responses
//! into page updates.
//!
//! All state the page shows lives in [`Viewer`]. The browser layer renders it,
//! forwards events to the handler methods, and executes the returned commands.

use crate::config::ViewerConfig;
use crate::messages::{TableUpdate, UpdateTableRequest, UploadResult};
use crate::request::{cache_busted_url, CacheBuster, RequestSeq};
use crate::slider::Slider;
use crate::table::ResultsTable;

/// Side effect requested by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Click the hidden file input.
    OpenFilePicker,
    /// POST the selected file as multipart field `file`.
    Upload { url: String, file_name: String },
    /// POST `body` as JSON.
    UpdateTable { url: String, ticket: u64, body: String },
    /// Open the print dialog.
    Print,
}

#[derive(Clone, Debug)]
pub struct Viewer {
    config: ViewerConfig,
    file_name: Option<String>,
    slider: Slider,
    table: ResultsTable,
    spectrogram_src: Option<String>,
    cache_buster: CacheBuster,
    table_requests: RequestSeq,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            file_name: None,
            slider: Slider::default(),
            table: ResultsTable::new(),
            spectrogram_src: None,
            cache_buster: CacheBuster::default(),
            table_requests: RequestSeq::default(),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn slider(&self) -> Slider {
        self.slider
    }

    pub fn slider_label(&self) -> String {
        self.slider.label()
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    pub fn spectrogram_src(&self) -> Option<&str> {
        self.spectrogram_src.as_deref()
    }

    /// "Open CSV" activated.
    pub fn request_file_open(&self) -> Command {
        Command::OpenFilePicker
    }

    /// File input changed. `None` when the dialog was cancelled.
    pub fn file_selected(&mut self, name: Option<&str>) -> Option<Command> {
        let name = name?;
        self.file_name = Some(name.to_string());
        Some(Command::Upload {
            url: self.config.upload_url.clone(),
            file_name: name.to_string(),
        })
    }

    /// Upload request settled. On failure the page is left as it was.
    pub fn upload_finished(
        &mut self,
        result: Result<UploadResult, String>,
        now_ms: u64,
    ) -> Result<(), String> {
        let upload = match result {
            Ok(upload) => upload,
            Err(e) => {
                log::error!("Upload failed: {e}");
                return Err(e);
            }
        };
        log::info!(
            "Uploaded {}: {} frames",
            self.file_name.as_deref().unwrap_or("<unnamed>"),
            upload.n
        );
        self.slider.reset_for_frames(upload.n);
        let stamp = self.cache_buster.next(now_ms);
        self.spectrogram_src = Some(cache_busted_url(&self.config.spectrogram_url, stamp));
        Ok(())
    }

    /// Slider moved. The label follows immediately; the table waits for the response.
    pub fn slider_input(&mut self, raw: &str) -> Option<Command> {
        let index = Slider::parse_input(raw)?;
        self.slider.value = index;
        let ticket = self.table_requests.issue();
        Some(Command::UpdateTable {
            url: self.config.update_table_url.clone(),
            ticket,
            body: UpdateTableRequest { index }.to_json(),
        })
    }

    /// Update-table request settled. Failures are dropped without a trace.
    /// Returns whether the table was written.
    pub fn table_update_finished(
        &mut self,
        ticket: u64,
        result: Result<TableUpdate, String>,
    ) -> bool {
        let Ok(update) = result else { return false };
        if self.config.discard_stale_table_responses && self.table_requests.is_stale(ticket) {
            log::debug!(
                "Discarding update_table response #{ticket} (latest #{})",
                self.table_requests.latest()
            );
            return false;
        }
        log::debug!("update_table #{ticket}: {update:?}");
        self.table.apply(&update);
        true
    }

    /// "Generate report" activated.
    pub fn generate_report(&self) -> Command {
        Command::Print
    }
}
