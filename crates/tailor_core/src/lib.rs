//! ATS Tailor core: pure dashboard state machine and view-model helpers.
mod clock;
mod effect;
mod error;
mod flow;
mod ids;
mod msg;
mod profile;
mod queue;
mod state;
mod stats;
mod update;
mod view_model;

pub use clock::ClockSource;
pub use effect::Effect;
pub use error::{ClipboardError, ParseFieldError, ParseStatusError};
pub use flow::{FlowProgress, FlowStep, RunId, TickOutcome, FLOW_STEPS, LAST_STEP};
pub use ids::{IdSource, JobId};
pub use msg::Msg;
pub use profile::{CandidateProfile, ProfileField, ProfileStore};
pub use queue::{display_title, parse_url_lines, JobStatus, JobUrlEntry, JobUrlQueue, StatusCounts};
pub use state::{AppState, Notice, NoticeKind, DEFAULT_STEP_INTERVAL};
pub use stats::{mock_stats, StatCard};
pub use update::update;
pub use view_model::{
    AppViewModel, FlowStepView, FlowView, JobRowView, ProfileView, QueueView, StepState,
};
