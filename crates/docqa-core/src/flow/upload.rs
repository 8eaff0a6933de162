//! Document upload.

use crate::error::{FlowError, RemoteError};
use crate::gateway::Gateway;
use crate::state::{OpState, Operation, Pending};
use crate::types::Document;
use tracing::info;

/// Shown when upload is triggered with nothing selected.
pub const NO_FILE_SELECTED: &str = "Please select a PDF file.";

/// Selected file plus the state of the last upload.
#[derive(Debug, Clone, Default)]
pub struct UploadFlow {
    selected: Option<Document>,
    op: Operation<String>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, document: Document) {
        self.selected = Some(document);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Document> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> &OpState<String> {
        self.op.state()
    }

    pub fn is_uploading(&self) -> bool {
        self.op.is_in_flight()
    }

    /// Server status message or error text from the last attempt.
    pub fn status_message(&self) -> Option<String> {
        match self.op.state() {
            OpState::Succeeded(message) => Some(message.clone()),
            OpState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Reject when nothing is selected, otherwise clear the previous message
    /// and enter `InFlight`.
    pub fn begin(&mut self) -> Option<Pending<Document>> {
        let Some(document) = self.selected.clone() else {
            self.op.reject(FlowError::validation(NO_FILE_SELECTED));
            return None;
        };
        let ticket = self.op.start();
        Some(Pending {
            ticket,
            request: document,
        })
    }

    pub fn finish(&mut self, pending: Pending<Document>, result: Result<String, RemoteError>) -> bool {
        let uploaded = result.is_ok();
        let applied = self
            .op
            .settle(pending.ticket, result.map_err(FlowError::from));
        if applied && uploaded {
            info!(
                file = %pending.request.file_name,
                bytes = pending.request.len(),
                "Document uploaded"
            );
        }
        applied
    }

    pub async fn submit(&mut self, gateway: &dyn Gateway) -> &OpState<String> {
        if let Some(pending) = self.begin() {
            let result = gateway.upload_document(&pending.request).await;
            self.finish(pending, result);
        }
        self.op.state()
    }

    pub fn teardown(&mut self) {
        self.op.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Endpoint;
    use crate::testing::ScriptedGateway;

    fn pdf() -> Document {
        Document::new("paper.pdf", b"%PDF-1.4 body".to_vec())
    }

    #[tokio::test]
    async fn test_no_file_never_calls_gateway() {
        let gateway = ScriptedGateway::new();
        let mut flow = UploadFlow::new();

        flow.submit(&gateway).await;

        assert!(gateway.calls().is_empty());
        assert_eq!(flow.status_message().as_deref(), Some(NO_FILE_SELECTED));
        assert!(flow.state().error().unwrap().is_local());
    }

    #[tokio::test]
    async fn test_successful_upload_reports_server_message() {
        let gateway = ScriptedGateway::new().with_upload(Ok("PDF processed successfully"));
        let mut flow = UploadFlow::new();
        flow.select(pdf());

        flow.submit(&gateway).await;

        assert!(!flow.is_uploading());
        assert_eq!(
            flow.status_message().as_deref(),
            Some("PDF processed successfully")
        );
        assert_eq!(gateway.calls(), vec![(Endpoint::Upload, "paper.pdf".to_string())]);
        // Selection survives so the same file can be re-sent
        assert!(flow.selected().is_some());
    }

    #[tokio::test]
    async fn test_failed_upload_returns_to_idle_with_message() {
        let gateway = ScriptedGateway::new().with_upload(Err("Upload failed."));
        let mut flow = UploadFlow::new();
        flow.select(pdf());

        flow.submit(&gateway).await;

        assert!(!flow.is_uploading());
        assert_eq!(flow.status_message().as_deref(), Some("Upload failed."));
    }

    #[test]
    fn test_begin_clears_previous_message() {
        let mut flow = UploadFlow::new();
        flow.begin();
        assert!(flow.status_message().is_some());

        flow.select(pdf());
        let pending = flow.begin().unwrap();
        assert!(flow.is_uploading());
        assert!(flow.status_message().is_none());
        assert_eq!(pending.request.file_name, "paper.pdf");
    }

    #[test]
    fn test_result_after_teardown_is_dropped() {
        let mut flow = UploadFlow::new();
        flow.select(pdf());
        let pending = flow.begin().unwrap();
        flow.teardown();

        assert!(!flow.finish(pending, Ok("late".to_string())));
        assert!(flow.status_message().is_none());
    }
}
