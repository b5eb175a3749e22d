use std::fmt::Write;

use tailor_core::{
    AppViewModel, FlowView, JobRowView, JobStatus, NoticeKind, ProfileView, QueueView, StepState,
};

/// Renders the whole dashboard as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push_str("== ATS Tailor | Job Application Automation ==\n");
    render_stats(&mut out, view);
    out.push('\n');
    render_flow(&mut out, &view.flow);
    out.push('\n');
    render_queue(&mut out, &view.queue);
    out.push('\n');
    render_profile(&mut out, &view.profile);
    if let Some(notice) = &view.notice {
        let marker = match notice.kind {
            NoticeKind::Success => "OK",
            NoticeKind::Error => "ERR",
        };
        let _ = writeln!(out, "\n[{marker}] {}", notice.text);
    }
    out
}

fn render_stats(out: &mut String, view: &AppViewModel) {
    let cards: Vec<String> = view
        .stats
        .iter()
        .map(|card| match card.change {
            Some(change) => format!("{}: {} ({})", card.label, card.value, change),
            None => format!("{}: {}", card.label, card.value),
        })
        .collect();
    let _ = writeln!(out, "{}", cards.join(" | "));
}

fn render_flow(out: &mut String, flow: &FlowView) {
    let switch = if flow.enabled { "on" } else { "off" };
    let _ = writeln!(out, "Workday Full Flow [{switch}] 4-step automation");

    let steps: Vec<String> = flow
        .steps
        .iter()
        .map(|step| {
            let mark = match step.state {
                StepState::Completed => "[x]",
                StepState::Current => "[>]",
                StepState::Upcoming => "[ ]",
            };
            format!("{mark} {}", step.label)
        })
        .collect();
    let _ = writeln!(out, "  {}", steps.join(" -> "));

    let action = if flow.is_running {
        "Running Flow..."
    } else if flow.can_start {
        "Start Workday Flow (`start`)"
    } else {
        "Start Workday Flow (disabled)"
    };
    let _ = writeln!(out, "  {action}");
}

fn render_queue(out: &mut String, queue: &QueueView) {
    let _ = writeln!(
        out,
        "Bulk Apply Dashboard: {} URLs in queue",
        queue.job_count
    );
    if queue.rows.is_empty() {
        out.push_str("  No URLs in queue. Add job URLs to start bulk applying.\n");
    }
    for (index, row) in queue.rows.iter().enumerate() {
        let _ = writeln!(out, "{}", format_job_row(index + 1, row));
    }
    if !queue.single_input.is_empty() {
        let _ = writeln!(out, "  URL input: {}", queue.single_input);
    }
    if queue.bulk_visible {
        out.push_str("  Bulk input (one URL per line):\n");
        for line in queue.bulk_input.lines() {
            let _ = writeln!(out, "    | {line}");
        }
    }
}

fn format_job_row(number: usize, row: &JobRowView) -> String {
    format!(
        "  {number:>2}. {icon} {title} <{url}> [{status}] #{id}",
        icon = status_icon(row.status),
        title = row.display_title,
        url = row.url,
        status = row.status,
        id = row.job_id.short(),
    )
}

fn status_icon(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "..",
        JobStatus::Processing => "~~",
        JobStatus::Completed => "ok",
        JobStatus::Failed => "xx",
    }
}

fn render_profile(out: &mut String, profile: &ProfileView) {
    let title = if profile.unsaved_changes {
        "Candidate Profile (unsaved)"
    } else {
        "Candidate Profile"
    };
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  Name: {} {}", profile.first_name, profile.last_name);
    let _ = writeln!(out, "  Email: {}", profile.email);
    let _ = writeln!(out, "  Password: {}", profile.password);
    let _ = writeln!(out, "  Phone: {}", profile.phone);
    let _ = writeln!(out, "  Location: {}", profile.location);
}
