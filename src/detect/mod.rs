//! Detection workflow: mode selection, submission lifecycle, and result
//! normalization.

mod mode;
mod result;
mod session;

pub use mode::DetectionMode;
pub use result::{DetectionResult, ErrorInfo, RequestState, image_message};
pub use session::{DetectionSession, SelectedFile, SubmissionTicket};
