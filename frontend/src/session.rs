//! Upload session state machine.
//!
//! ```text
//! idle ──begin──▶ uploading ──finish──▶ uploaded ──start_scan──▶ scanning ──complete──▶ complete
//!                     │
//!                     └──fail──▶ failed
//! ```
//!
//! `reset` returns any phase to idle. There is no retry edge: a failed
//! session has to be reset before a new file can be selected.

use thiserror::Error;

/// Lifecycle of a single document upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Uploaded,
    Scanning,
    Complete,
    Failed,
}

impl UploadPhase {
    pub fn name(self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::Uploading => "uploading",
            UploadPhase::Uploaded => "uploaded",
            UploadPhase::Scanning => "scanning",
            UploadPhase::Complete => "complete",
            UploadPhase::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {phase}")]
    IllegalTransition {
        phase: &'static str,
        action: &'static str,
    },
}

/// The file the session is about.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadSession {
    phase: UploadPhase,
    file: Option<SelectedFile>,
    progress: f64,
    task_id: Option<String>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> &str {
        self.file.as_ref().map(|f| f.name.as_str()).unwrap_or_default()
    }

    /// Upload progress in percent, always within `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    /// A session is busy from the first byte sent until it completes or resets.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            UploadPhase::Uploading | UploadPhase::Uploaded | UploadPhase::Scanning
        )
    }

    pub fn begin(&mut self, name: impl Into<String>, size: u64) -> Result<(), SessionError> {
        self.expect(UploadPhase::Idle, "select a file")?;
        self.phase = UploadPhase::Uploading;
        self.file = Some(SelectedFile { name: name.into(), size });
        self.progress = 0.0;
        self.task_id = None;
        Ok(())
    }

    /// Record a progress report. Out-of-range values are clamped and
    /// regressions are ignored; returns the value now displayed.
    pub fn record_progress(&mut self, percent: f64) -> Result<f64, SessionError> {
        self.expect(UploadPhase::Uploading, "report progress")?;
        let clamped = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        if clamped > self.progress {
            self.progress = clamped;
        }
        Ok(self.progress)
    }

    pub fn finish_upload(&mut self, task_id: Option<String>) -> Result<(), SessionError> {
        self.expect(UploadPhase::Uploading, "finish the upload")?;
        self.phase = UploadPhase::Uploaded;
        self.progress = 100.0;
        self.task_id = task_id;
        Ok(())
    }

    pub fn fail(&mut self) -> Result<(), SessionError> {
        self.expect(UploadPhase::Uploading, "fail the upload")?;
        self.phase = UploadPhase::Failed;
        Ok(())
    }

    pub fn start_scan(&mut self) -> Result<(), SessionError> {
        self.expect(UploadPhase::Uploaded, "start scanning")?;
        self.phase = UploadPhase::Scanning;
        Ok(())
    }

    pub fn complete_scan(&mut self) -> Result<(), SessionError> {
        self.expect(UploadPhase::Scanning, "complete the scan")?;
        self.phase = UploadPhase::Complete;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn expect(&self, phase: UploadPhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::IllegalTransition {
                phase: self.phase.name(),
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploading() -> UploadSession {
        let mut session = UploadSession::new();
        session.begin("invoice.pdf", 2048).unwrap();
        session
    }

    #[test]
    fn test_linear_happy_path() {
        let mut session = uploading();
        assert_eq!(session.phase(), UploadPhase::Uploading);
        session.finish_upload(Some("task-1".into())).unwrap();
        assert_eq!(session.phase(), UploadPhase::Uploaded);
        session.start_scan().unwrap();
        assert_eq!(session.phase(), UploadPhase::Scanning);
        session.complete_scan().unwrap();
        assert_eq!(session.phase(), UploadPhase::Complete);
        assert_eq!(session.task_id(), Some("task-1"));
    }

    #[test]
    fn test_progress_is_clamped_and_monotonic() {
        let mut session = uploading();
        assert_eq!(session.record_progress(-5.0).unwrap(), 0.0);
        assert_eq!(session.record_progress(40.0).unwrap(), 40.0);
        assert_eq!(session.record_progress(25.0).unwrap(), 40.0);
        assert_eq!(session.record_progress(250.0).unwrap(), 100.0);
        assert_eq!(session.record_progress(f64::NAN).unwrap(), 100.0);
    }

    #[test]
    fn test_progress_rejected_outside_uploading() {
        let mut session = UploadSession::new();
        assert!(session.record_progress(10.0).is_err());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_finish_forces_full_progress() {
        let mut session = uploading();
        session.record_progress(63.0).unwrap();
        session.finish_upload(None).unwrap();
        assert_eq!(session.progress(), 100.0);
    }

    #[test]
    fn test_failure_only_from_uploading() {
        let mut session = uploading();
        session.finish_upload(None).unwrap();
        assert!(session.fail().is_err());

        let mut session = uploading();
        session.fail().unwrap();
        assert_eq!(session.phase(), UploadPhase::Failed);
        // no retry edge out of failed
        assert!(session.begin("again.pdf", 1).is_err());
        session.reset();
        assert_eq!(session, UploadSession::new());
    }

    #[test]
    fn test_skipping_phases_is_illegal() {
        let mut session = uploading();
        let err = session.start_scan().unwrap_err();
        assert_eq!(err.to_string(), "cannot start scanning while uploading");
        assert!(session.complete_scan().is_err());
        assert!(session.begin("second.pdf", 1).is_err());
    }
}
