use chrono::{DateTime, Utc};

use crate::state::Notice;
use crate::{mock_stats, AppState, JobId, JobStatus, StatCard, StatusCounts, FLOW_STEPS};

const PASSWORD_MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub stats: Vec<StatCard>,
    pub flow: FlowView,
    pub queue: QueueView,
    pub profile: ProfileView,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowView {
    pub enabled: bool,
    pub is_running: bool,
    pub current_step: u8,
    pub can_start: bool,
    pub steps: Vec<FlowStepView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStepView {
    pub label: &'static str,
    pub description: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueView {
    pub job_count: usize,
    pub counts: StatusCounts,
    pub rows: Vec<JobRowView>,
    pub single_input: String,
    pub bulk_input: String,
    pub bulk_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub display_title: String,
    pub url: String,
    pub status: JobStatus,
    pub added_at: DateTime<Utc>,
}

/// Profile form contents. The password is masked unless visibility is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub location: String,
    pub password_visible: bool,
    pub unsaved_changes: bool,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    AppViewModel {
        stats: mock_stats().to_vec(),
        flow: flow_view(state),
        queue: queue_view(state),
        profile: profile_view(state),
        notice: state.notice().cloned(),
        dirty: state.is_dirty(),
    }
}

fn flow_view(state: &AppState) -> FlowView {
    let flow = state.flow();
    let current = flow.current_step();
    let steps = FLOW_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let index = index as u8;
            let step_state = if index < current {
                StepState::Completed
            } else if index == current && flow.is_running() {
                StepState::Current
            } else {
                StepState::Upcoming
            };
            FlowStepView {
                label: step.label,
                description: step.description,
                state: step_state,
            }
        })
        .collect();

    FlowView {
        enabled: state.flow_enabled(),
        is_running: flow.is_running(),
        current_step: current,
        can_start: state.can_start_flow(),
        steps,
    }
}

fn queue_view(state: &AppState) -> QueueView {
    let queue = state.queue();
    QueueView {
        job_count: queue.len(),
        counts: queue.status_counts(),
        rows: queue
            .entries()
            .iter()
            .map(|entry| JobRowView {
                job_id: entry.id(),
                display_title: entry.display_title(),
                url: entry.url().to_string(),
                status: entry.status(),
                added_at: entry.added_at(),
            })
            .collect(),
        single_input: state.single_input().to_string(),
        bulk_input: state.bulk_input().to_string(),
        bulk_visible: state.bulk_visible(),
    }
}

fn profile_view(state: &AppState) -> ProfileView {
    let draft = state.profile_draft();
    let password = if state.password_visible() {
        draft.password.clone()
    } else {
        PASSWORD_MASK.to_string().repeat(draft.password.chars().count())
    };
    ProfileView {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.email.clone(),
        password,
        phone: draft.phone.clone(),
        location: draft.location.clone(),
        password_visible: state.password_visible(),
        unsaved_changes: draft != state.profile(),
    }
}
