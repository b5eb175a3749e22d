use std::time::Duration;

use crate::view_model::{self, AppViewModel};
use crate::{
    CandidateProfile, ClockSource, FlowProgress, IdSource, JobUrlQueue, ProfileField,
    ProfileStore,
};

/// Time between flow ticks unless the host configures otherwise.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short message for the user about the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the dashboard owns. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    queue: JobUrlQueue,
    profile: ProfileStore,
    profile_draft: CandidateProfile,
    password_visible: bool,
    flow: FlowProgress,
    flow_enabled: bool,
    single_input: String,
    bulk_input: String,
    bulk_visible: bool,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_queue(JobUrlQueue::new())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose queue uses the given id and clock sources.
    pub fn with_sources(ids: IdSource, clock: ClockSource) -> Self {
        Self::with_queue(JobUrlQueue::with_sources(ids, clock))
    }

    fn with_queue(queue: JobUrlQueue) -> Self {
        Self {
            queue,
            profile: ProfileStore::new(),
            profile_draft: CandidateProfile::default(),
            password_visible: false,
            flow: FlowProgress::new(),
            flow_enabled: true,
            single_input: String::new(),
            bulk_input: String::new(),
            bulk_visible: false,
            notice: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn queue(&self) -> &JobUrlQueue {
        &self.queue
    }

    pub fn profile(&self) -> &CandidateProfile {
        self.profile.profile()
    }

    pub fn profile_draft(&self) -> &CandidateProfile {
        &self.profile_draft
    }

    pub fn flow(&self) -> &FlowProgress {
        &self.flow
    }

    pub fn flow_enabled(&self) -> bool {
        self.flow_enabled
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn single_input(&self) -> &str {
        &self.single_input
    }

    pub fn bulk_input(&self) -> &str {
        &self.bulk_input
    }

    pub fn bulk_visible(&self) -> bool {
        self.bulk_visible
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn can_start_flow(&self) -> bool {
        self.flow_enabled && !self.flow.is_running()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn queue_mut(&mut self) -> &mut JobUrlQueue {
        &mut self.queue
    }

    pub(crate) fn flow_mut(&mut self) -> &mut FlowProgress {
        &mut self.flow
    }

    pub(crate) fn set_flow_enabled(&mut self, enabled: bool) {
        if self.flow_enabled != enabled {
            self.flow_enabled = enabled;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_single_input(&mut self, text: String) {
        if self.single_input != text {
            self.single_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn take_single_input(&mut self) -> String {
        self.mark_dirty();
        std::mem::take(&mut self.single_input)
    }

    pub(crate) fn set_bulk_input(&mut self, text: String) {
        if self.bulk_input != text {
            self.bulk_input = text;
            self.mark_dirty();
        }
    }

    /// Clipboard text lands in the bulk panel, which is shown if hidden.
    pub(crate) fn fill_bulk_from_clipboard(&mut self, text: String) {
        self.bulk_input = text;
        self.bulk_visible = true;
        self.mark_dirty();
    }

    pub(crate) fn toggle_bulk_visible(&mut self) {
        self.bulk_visible = !self.bulk_visible;
        self.mark_dirty();
    }

    /// Empties and hides the bulk panel after a successful submit.
    pub(crate) fn close_bulk_input(&mut self) {
        self.bulk_input.clear();
        self.bulk_visible = false;
        self.mark_dirty();
    }

    pub(crate) fn edit_profile_field(&mut self, field: ProfileField, value: String) {
        if self.profile_draft.field(field) != value {
            self.profile_draft.set_field(field, value);
            self.mark_dirty();
        }
    }

    pub(crate) fn save_profile(&mut self, profile: CandidateProfile) {
        self.profile_draft = profile.clone();
        self.profile.save(profile);
        self.mark_dirty();
    }

    pub(crate) fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}
