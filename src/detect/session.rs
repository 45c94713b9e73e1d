//! Upload-and-result reconciliation workflow.
//!
//! A [`DetectionSession`] mediates one outstanding detection request at a
//! time: it owns the selected file, the active mode, and the request
//! lifecycle, and reconciles each response with the state that was current
//! when the request was issued. Responses are never cancelled; instead every
//! submission carries a ticket and completions whose ticket was superseded by
//! a later mode or file selection are discarded.

use super::mode::DetectionMode;
use super::result::{DetectionResult, ErrorInfo, RequestState};
use crate::api::DetectionApi;
use crate::error::{Error, Result};
use crate::utils::mime::guess_mime;
use std::path::Path;
use tracing::debug;

/// A file chosen for submission: name, MIME type, and contents.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// File name sent to the backend.
    pub name: String,
    /// MIME type for the multipart part.
    pub mime: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Read a file from disk, inferring the MIME type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|e| Error::InputFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            name,
            mime: guess_mime(path).to_string(),
            bytes,
        })
    }
}

/// Identifies the state a submission was issued against.
///
/// A completion is applied only when its ticket still matches the session;
/// `select_mode` and `select_file` supersede all earlier tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    mode: DetectionMode,
    generation: u64,
}

/// Controller for the upload-and-result workflow.
#[derive(Debug)]
pub struct DetectionSession {
    mode: DetectionMode,
    file: Option<SelectedFile>,
    state: RequestState,
    result: Option<DetectionResult>,
    error: Option<ErrorInfo>,
    generation: u64,
    inflight_generation: Option<u64>,
}

impl DetectionSession {
    /// Create a session in the given mode with no file selected.
    pub fn new(mode: DetectionMode) -> Self {
        Self {
            mode,
            file: None,
            state: RequestState::Idle,
            result: None,
            error: None,
            generation: 0,
            inflight_generation: None,
        }
    }

    /// Active detection mode.
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Currently selected file, if any.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Current request state.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Result of the last completed submission, if it succeeded.
    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    /// Error of the last completed submission, if it failed.
    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Switch detection mode, clearing the selected file and any prior
    /// result or error.
    ///
    /// Does not cancel an in-flight request; its completion will carry a
    /// superseded ticket and be discarded.
    pub fn select_mode(&mut self, mode: DetectionMode) {
        self.mode = mode;
        self.file = None;
        self.result = None;
        self.error = None;
        self.state = RequestState::Idle;
        self.generation += 1;
    }

    /// Select a file for submission, clearing any prior result or error.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.result = None;
        self.error = None;
        self.generation += 1;
        if self.state != RequestState::InFlight {
            self.state = RequestState::Idle;
        }
    }

    /// Start a submission: validate preconditions, mark the request in
    /// flight, and hand out the ticket plus the file to upload.
    ///
    /// Fails locally (no state change) when no file is selected or a request
    /// is already outstanding.
    pub fn begin_submit(&mut self) -> Result<(SubmissionTicket, SelectedFile)> {
        if self.state == RequestState::InFlight {
            return Err(Error::RequestInFlight);
        }
        let file = self.file.clone().ok_or(Error::NoFileSelected)?;

        self.state = RequestState::InFlight;
        self.inflight_generation = Some(self.generation);
        self.result = None;
        self.error = None;

        Ok((
            SubmissionTicket {
                mode: self.mode,
                generation: self.generation,
            },
            file,
        ))
    }

    /// Apply a completed submission.
    ///
    /// Returns `false` when the ticket was superseded; the outcome is then
    /// discarded. If the discarded submission is the one currently marked
    /// in flight, the session drops back to `Idle` so a new submission can
    /// start; an in-flight state owned by a newer submission is untouched.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: std::result::Result<DetectionResult, ErrorInfo>,
    ) -> bool {
        if ticket.generation != self.generation || ticket.mode != self.mode {
            debug!(
                "discarding stale completion for superseded {} submission",
                ticket.mode
            );
            if self.state == RequestState::InFlight
                && self.inflight_generation == Some(ticket.generation)
            {
                self.state = RequestState::Idle;
                self.inflight_generation = None;
            }
            return false;
        }

        self.inflight_generation = None;
        match outcome {
            Ok(result) => {
                debug_assert_eq!(result.mode(), ticket.mode);
                self.result = Some(result);
                self.error = None;
                self.state = RequestState::Succeeded;
            }
            Err(info) => {
                self.error = Some(info);
                self.result = None;
                self.state = RequestState::Failed;
            }
        }
        true
    }

    /// Run one full submission against the backend.
    ///
    /// Local validation failures (no file selected, request already in
    /// flight) return an error without issuing a request. Transport and
    /// server failures are stored as [`ErrorInfo`] and also returned so the
    /// caller can set an exit code; a discarded stale completion returns
    /// `Ok(())` with no state stored.
    pub async fn submit(&mut self, api: &(impl DetectionApi + ?Sized)) -> Result<()> {
        let (ticket, file) = self.begin_submit()?;

        let outcome = match ticket.mode {
            DetectionMode::Image => api
                .detect_image(&file)
                .await
                .and_then(DetectionResult::from_image),
            DetectionMode::Video => api.detect_video(&file).await.map(DetectionResult::from_video),
        };

        match outcome {
            Ok(result) => {
                self.complete(ticket, Ok(result));
                Ok(())
            }
            Err(e) => {
                if self.complete(ticket, Err(ErrorInfo::new(e.to_string()))) {
                    Err(e)
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_file(mode: DetectionMode) -> DetectionSession {
        let mut session = DetectionSession::new(mode);
        session.select_file(SelectedFile {
            name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        });
        session
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = DetectionSession::new(DetectionMode::Image);
        assert_eq!(session.state(), RequestState::Idle);
        assert!(session.selected_file().is_none());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_submit_without_file_is_local_noop() {
        let mut session = DetectionSession::new(DetectionMode::Image);
        assert!(matches!(
            session.begin_submit(),
            Err(Error::NoFileSelected)
        ));
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[test]
    fn test_begin_submit_refuses_reentry() {
        let mut session = session_with_file(DetectionMode::Image);
        let first = session.begin_submit();
        assert!(first.is_ok());
        assert!(matches!(
            session.begin_submit(),
            Err(Error::RequestInFlight)
        ));
    }

    #[test]
    fn test_select_mode_resets_everything() {
        let mut session = session_with_file(DetectionMode::Image);
        let (ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };
        session.complete(
            ticket,
            Err(ErrorInfo::new("detection failed: model unavailable")),
        );
        assert!(session.error().is_some());

        session.select_mode(DetectionMode::Video);
        assert_eq!(session.mode(), DetectionMode::Video);
        assert!(session.selected_file().is_none());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[test]
    fn test_select_file_clears_prior_outcome() {
        let mut session = session_with_file(DetectionMode::Image);
        let (ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };
        session.complete(ticket, Err(ErrorInfo::new("boom")));
        assert!(session.error().is_some());

        session.select_file(SelectedFile {
            name: "other.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![9],
        });
        assert!(session.error().is_none());
        assert!(session.result().is_none());
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut session = session_with_file(DetectionMode::Image);
        let (ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };

        // User switches tabs while the request is in flight.
        session.select_mode(DetectionMode::Video);

        let applied = session.complete(
            ticket,
            Ok(DetectionResult::Image {
                bear_detected: true,
                confidence: 0.9,
                processed_image: None,
                message: "stale".to_string(),
            }),
        );
        assert!(!applied);
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[test]
    fn test_stale_completion_after_new_file_selection() {
        let mut session = session_with_file(DetectionMode::Image);
        let (ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };

        session.select_file(SelectedFile {
            name: "newer.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![7],
        });

        let applied = session.complete(ticket, Err(ErrorInfo::new("too late")));
        assert!(!applied);
        assert!(session.error().is_none());
        // Session returned to Idle so the new file can be submitted.
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[test]
    fn test_stale_completion_leaves_newer_submission_in_flight() {
        let mut session = session_with_file(DetectionMode::Image);
        let (old_ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };

        // Mode switch and a fresh file start a second submission while the
        // first is still outstanding.
        session.select_mode(DetectionMode::Video);
        session.select_file(SelectedFile {
            name: "clip.mp4".to_string(),
            mime: "video/mp4".to_string(),
            bytes: vec![4],
        });
        let (new_ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };

        // Discarding the superseded completion must not free the slot owned
        // by the newer submission.
        assert!(!session.complete(old_ticket, Err(ErrorInfo::new("too late"))));
        assert_eq!(session.state(), RequestState::InFlight);
        assert!(matches!(
            session.begin_submit(),
            Err(Error::RequestInFlight)
        ));

        assert!(session.complete(
            new_ticket,
            Ok(DetectionResult::Video {
                alert_sent: false,
                max_consecutive_duration_seconds: 0.5,
            }),
        ));
        assert_eq!(session.state(), RequestState::Succeeded);
    }

    #[test]
    fn test_completion_exclusivity() {
        let mut session = session_with_file(DetectionMode::Video);
        let (ticket, _) = match session.begin_submit() {
            Ok(pair) => pair,
            Err(e) => unreachable!("begin_submit failed: {e}"),
        };
        session.complete(
            ticket,
            Ok(DetectionResult::Video {
                alert_sent: true,
                max_consecutive_duration_seconds: 3.2,
            }),
        );
        assert!(session.result().is_some());
        assert!(session.error().is_none());
        assert_eq!(session.state(), RequestState::Succeeded);
    }
}
