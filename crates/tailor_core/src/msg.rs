use crate::{CandidateProfile, ClipboardError, JobId, JobStatus, ProfileField, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the single URL input.
    SingleUrlChanged(String),
    /// User submitted the single URL input.
    SingleUrlSubmitted,
    /// User showed or hid the bulk input panel.
    BulkInputToggled,
    /// User edited the bulk input text.
    BulkInputChanged(String),
    /// User submitted the bulk input text.
    BulkUrlsSubmitted,
    /// Add URLs directly, bypassing the input fields.
    UrlsAdded(Vec<String>),
    /// User asked to prefill the bulk input from the clipboard.
    PasteFromClipboardClicked,
    /// Host finished reading the clipboard.
    ClipboardRead(Result<String, ClipboardError>),
    /// User removed one queue entry.
    RemoveUrlClicked { job_id: JobId },
    /// User emptied the queue.
    ClearAllClicked,
    /// External automation reported a status for an entry.
    JobStatusReported { job_id: JobId, status: JobStatus },
    /// External automation resolved a title for an entry.
    JobTitleResolved { job_id: JobId, title: String },
    /// User flipped the Workday flow switch.
    FlowToggled(bool),
    /// User clicked Start Workday Flow.
    StartFlowClicked,
    /// User cancelled the running flow.
    StopFlowClicked,
    /// Periodic ticker fired for `run`.
    FlowTick { run: RunId },
    /// User edited one field of the profile form.
    ProfileFieldChanged { field: ProfileField, value: String },
    /// User clicked Save Profile.
    SaveProfileClicked,
    /// Caller supplies a complete profile record to save.
    ProfileReplaced(CandidateProfile),
    /// User toggled password masking.
    PasswordVisibilityToggled,
    /// User dismissed the current notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
