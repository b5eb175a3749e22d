use tailor_logging::{tailor_debug, tailor_warn};

use crate::state::Notice;
use crate::{parse_url_lines, AppState, Effect, Msg, TickOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SingleUrlChanged(text) => {
            state.set_single_input(text);
            Vec::new()
        }
        Msg::SingleUrlSubmitted => {
            // Whitespace-only input stays in the box untouched.
            if state.single_input().trim().is_empty() {
                return (state, Vec::new());
            }
            let url = state.take_single_input();
            state.queue_mut().add_urls([url]);
            state.set_notice(Notice::success("URL added to queue"));
            Vec::new()
        }
        Msg::BulkInputToggled => {
            state.toggle_bulk_visible();
            Vec::new()
        }
        Msg::BulkInputChanged(text) => {
            state.set_bulk_input(text);
            Vec::new()
        }
        Msg::BulkUrlsSubmitted => {
            let urls = parse_url_lines(state.bulk_input());
            if urls.is_empty() {
                return (state, Vec::new());
            }
            let added = state.queue_mut().add_urls(urls);
            state.close_bulk_input();
            state.set_notice(Notice::success(format!(
                "{} URLs added to queue",
                added.len()
            )));
            Vec::new()
        }
        Msg::UrlsAdded(urls) => {
            if !state.queue_mut().add_urls(urls).is_empty() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PasteFromClipboardClicked => vec![Effect::ReadClipboard],
        Msg::ClipboardRead(Ok(text)) => {
            state.fill_bulk_from_clipboard(text);
            state.set_notice(Notice::success("Pasted from clipboard"));
            Vec::new()
        }
        Msg::ClipboardRead(Err(err)) => {
            tailor_warn!("Clipboard read failed: {}", err);
            state.set_notice(Notice::error("Failed to read clipboard"));
            Vec::new()
        }
        Msg::RemoveUrlClicked { job_id } => {
            if state.queue_mut().remove_url(job_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearAllClicked => {
            if !state.queue().is_empty() {
                state.queue_mut().clear_all();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobStatusReported { job_id, status } => {
            if state.queue_mut().set_status(job_id, status) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobTitleResolved { job_id, title } => {
            if state.queue_mut().set_title(job_id, title) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FlowToggled(enabled) => {
            state.set_flow_enabled(enabled);
            Vec::new()
        }
        Msg::StartFlowClicked => {
            if !state.flow_enabled() {
                tailor_debug!("Flow start ignored while disabled");
                return (state, Vec::new());
            }
            match state.flow_mut().start() {
                Some(run) => {
                    state.mark_dirty();
                    vec![Effect::StartFlowTicker { run }]
                }
                None => Vec::new(),
            }
        }
        Msg::StopFlowClicked => {
            if state.flow_mut().stop() {
                state.mark_dirty();
                vec![Effect::StopFlowTicker]
            } else {
                Vec::new()
            }
        }
        Msg::FlowTick { run } => match state.flow_mut().tick(run) {
            TickOutcome::Advanced { .. } => {
                state.mark_dirty();
                Vec::new()
            }
            TickOutcome::Finished => {
                state.mark_dirty();
                vec![Effect::StopFlowTicker]
            }
            TickOutcome::Ignored => Vec::new(),
        },
        Msg::ProfileFieldChanged { field, value } => {
            state.edit_profile_field(field, value);
            Vec::new()
        }
        Msg::SaveProfileClicked => {
            let draft = state.profile_draft().clone();
            state.save_profile(draft);
            state.set_notice(Notice::success("Candidate data saved"));
            Vec::new()
        }
        Msg::ProfileReplaced(profile) => {
            state.save_profile(profile);
            Vec::new()
        }
        Msg::PasswordVisibilityToggled => {
            state.toggle_password_visible();
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    if state.is_dirty() {
        tailor_debug!("State changed, {} effect(s) pending", effects.len());
    }
    (state, effects)
}
