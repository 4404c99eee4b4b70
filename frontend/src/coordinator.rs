//! Upload coordinator.
//!
//! Drives an [`UploadSession`] from file selection to the results page.
//! The coordinator itself does no I/O: every event returns a list of
//! [`Effect`]s that the upload page carries out (start the transfer,
//! arm a timer, show a toast, navigate). Timers feed their event back
//! through [`UploadCoordinator::dispatch`].

use crate::config::{NAVIGATE_DELAY_MS, UPLOAD_SETTLE_MS};
use crate::notify::ToastRequest;
use crate::session::{SessionError, UploadPhase, UploadSession};

/// Inputs to the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent {
    /// The user picked a file.
    FileSelected { name: String, size: u64 },
    /// The transport reported progress in percent.
    Progress(f64),
    /// The transfer finished; the body may or may not carry a task id.
    UploadSucceeded { task_id: Option<String> },
    /// Any transport-level failure.
    TransportFailed { reason: String },
    /// Settle timer elapsed, open the scanning modal.
    BeginScan,
    /// The scanning modal finished its animation.
    ScanCompleted,
    /// Leave the flow (page unmount or explicit cancel).
    Reset,
}

/// Side effects requested by the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Send the selected file to the upload endpoint.
    StartUpload,
    /// Show a toast.
    Notify(ToastRequest),
    /// Feed `event` back after `delay_ms`.
    Schedule { delay_ms: u32, event: UploadEvent },
    /// Navigate to the results page after `delay_ms`.
    NavigateToResults {
        task_id: Option<String>,
        delay_ms: u32,
    },
    /// Return the session to idle before anything else happens.
    ResetSession,
}

pub const UPLOAD_FAILED_TITLE: &str = "Upload Failed";
pub const UPLOAD_FAILED_MESSAGE: &str =
    "An error occurred while uploading the document. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadCoordinator {
    session: UploadSession,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn phase(&self) -> UploadPhase {
        self.session.phase()
    }

    /// The scanning modal stays up from the start of the scan until the
    /// page navigates away.
    pub fn shows_scan_modal(&self) -> bool {
        matches!(self.session.phase(), UploadPhase::Scanning | UploadPhase::Complete)
    }

    /// Apply one event and return the effects to perform, in order.
    ///
    /// `ResetSession` effects are consumed here, so callers only ever see
    /// outward effects.
    pub fn dispatch(&mut self, event: UploadEvent) -> Result<Vec<Effect>, SessionError> {
        let mut effects = self.apply(event)?;
        if effects.contains(&Effect::ResetSession) {
            effects.retain(|e| *e != Effect::ResetSession);
            self.session.reset();
        }
        Ok(effects)
    }

    fn apply(&mut self, event: UploadEvent) -> Result<Vec<Effect>, SessionError> {
        match event {
            UploadEvent::FileSelected { name, size } => {
                self.session.begin(name, size)?;
                Ok(vec![Effect::StartUpload])
            }
            UploadEvent::Progress(percent) => {
                self.session.record_progress(percent)?;
                Ok(Vec::new())
            }
            UploadEvent::UploadSucceeded { task_id } => {
                self.session.finish_upload(task_id)?;
                Ok(vec![Effect::Schedule {
                    delay_ms: UPLOAD_SETTLE_MS,
                    event: UploadEvent::BeginScan,
                }])
            }
            UploadEvent::TransportFailed { reason } => {
                self.session.fail()?;
                log::error!("❌ Upload failed: {}", reason);
                Ok(vec![
                    Effect::Notify(ToastRequest::error(UPLOAD_FAILED_TITLE, UPLOAD_FAILED_MESSAGE)),
                    Effect::ResetSession,
                ])
            }
            UploadEvent::BeginScan => {
                self.session.start_scan()?;
                Ok(Vec::new())
            }
            UploadEvent::ScanCompleted => {
                self.session.complete_scan()?;
                let task_id = self.session.task_id().map(str::to_string);
                if task_id.as_deref().map_or(true, str::is_empty) {
                    log::warn!("⚠️ Scan finished without a task id, opening results anyway");
                }
                Ok(vec![Effect::NavigateToResults {
                    task_id,
                    delay_ms: NAVIGATE_DELAY_MS,
                }])
            }
            UploadEvent::Reset => {
                self.session.reset();
                Ok(Vec::new())
            }
        }
    }
}

/// Results page URL for a task id. The id is expected to be URL-safe
/// already encoded; an absent id yields an empty parameter.
pub fn results_url(encoded_task_id: Option<&str>) -> String {
    format!(
        "{}?taskId={}",
        crate::config::RESULTS_PATH,
        encoded_task_id.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> UploadCoordinator {
        let mut c = UploadCoordinator::new();
        let effects = c
            .dispatch(UploadEvent::FileSelected { name: "invoice.pdf".into(), size: 10 })
            .unwrap();
        assert_eq!(effects, vec![Effect::StartUpload]);
        c
    }

    fn notifications(effects: &[Effect]) -> usize {
        effects.iter().filter(|e| matches!(e, Effect::Notify(_))).count()
    }

    #[test]
    fn test_full_flow_schedules_scan_then_navigation() {
        let mut c = selected();
        c.dispatch(UploadEvent::Progress(50.0)).unwrap();

        let effects = c
            .dispatch(UploadEvent::UploadSucceeded { task_id: Some("abc".into()) })
            .unwrap();
        assert_eq!(
            effects,
            vec![Effect::Schedule { delay_ms: UPLOAD_SETTLE_MS, event: UploadEvent::BeginScan }]
        );
        assert_eq!(c.session().progress(), 100.0);

        assert!(c.dispatch(UploadEvent::BeginScan).unwrap().is_empty());
        assert!(c.shows_scan_modal());

        let effects = c.dispatch(UploadEvent::ScanCompleted).unwrap();
        assert_eq!(
            effects,
            vec![Effect::NavigateToResults { task_id: Some("abc".into()), delay_ms: NAVIGATE_DELAY_MS }]
        );
        assert_eq!(c.phase(), UploadPhase::Complete);
        assert!(c.shows_scan_modal());
    }

    #[test]
    fn test_transport_failure_notifies_once_and_returns_to_idle() {
        let mut c = selected();
        c.dispatch(UploadEvent::Progress(30.0)).unwrap();

        let effects = c
            .dispatch(UploadEvent::TransportFailed { reason: "HTTP 500".into() })
            .unwrap();
        assert_eq!(notifications(&effects), 1);
        assert!(!effects.contains(&Effect::ResetSession));
        assert_eq!(c.phase(), UploadPhase::Idle);
        assert_eq!(c.session().progress(), 0.0);
        assert!(c.session().file().is_none());

        // a late failure report from the same transfer is rejected, not re-notified
        assert!(c.dispatch(UploadEvent::TransportFailed { reason: "again".into() }).is_err());
    }

    #[test]
    fn test_missing_task_id_still_navigates() {
        let mut c = selected();
        c.dispatch(UploadEvent::UploadSucceeded { task_id: None }).unwrap();
        c.dispatch(UploadEvent::BeginScan).unwrap();
        let effects = c.dispatch(UploadEvent::ScanCompleted).unwrap();
        assert_eq!(
            effects,
            vec![Effect::NavigateToResults { task_id: None, delay_ms: NAVIGATE_DELAY_MS }]
        );
        assert_eq!(results_url(None), "/analysis-results?taskId=");
    }

    #[test]
    fn test_second_file_rejected_while_busy() {
        let mut c = selected();
        let err = c
            .dispatch(UploadEvent::FileSelected { name: "other.pdf".into(), size: 1 })
            .unwrap_err();
        assert!(matches!(err, SessionError::IllegalTransition { phase: "uploading", .. }));
        assert_eq!(c.session().file_name(), "invoice.pdf");
    }

    #[test]
    fn test_progress_after_completion_is_rejected() {
        let mut c = selected();
        c.dispatch(UploadEvent::UploadSucceeded { task_id: Some("t".into()) }).unwrap();
        assert!(c.dispatch(UploadEvent::Progress(10.0)).is_err());
        assert_eq!(c.session().progress(), 100.0);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut c = selected();
        c.dispatch(UploadEvent::UploadSucceeded { task_id: Some("t".into()) }).unwrap();
        c.dispatch(UploadEvent::BeginScan).unwrap();
        c.dispatch(UploadEvent::Reset).unwrap();
        assert_eq!(c, UploadCoordinator::new());
    }
}
