use std::sync::{Arc, RwLock};

/// Payload handed to the platform PDF renderer.
#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct PdfExportRequest {
    pub title: String,
    pub author: String,
    pub date: String,
    pub html: String,
}

#[derive(uniffi::Record, Clone, Debug)]
pub struct PdfExportResult {
    pub ok: bool,
    pub file_path: Option<String>,
    pub error_message: Option<String>,
}

/// Platform side of PDF export. Called off the app actor thread; may block.
#[uniffi::export(callback_interface)]
pub trait PdfExportBridge: Send + Sync + 'static {
    fn export_pdf(&self, request: PdfExportRequest) -> PdfExportResult;
}

pub type SharedPdfExportBridge = Arc<RwLock<Option<Arc<dyn PdfExportBridge>>>>;

pub(crate) fn current_bridge(shared: &SharedPdfExportBridge) -> Option<Arc<dyn PdfExportBridge>> {
    match shared.read() {
        Ok(slot) => slot.clone(),
        Err(poison) => poison.into_inner().clone(),
    }
}

/// Run one export and flatten the bridge result to the written file path.
pub(crate) fn run_export(
    bridge: &dyn PdfExportBridge,
    request: PdfExportRequest,
) -> Result<String, String> {
    let result = bridge.export_pdf(request);
    match (result.ok, result.file_path) {
        (true, Some(path)) if !path.trim().is_empty() => Ok(path),
        (true, _) => Err("export finished without a file".to_string()),
        (false, _) => Err(result
            .error_message
            .unwrap_or_else(|| "unknown error".to_string())),
    }
}
