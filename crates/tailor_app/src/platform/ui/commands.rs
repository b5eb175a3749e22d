//! Line commands typed at the dashboard prompt.

use tailor_core::{AppViewModel, JobId, JobStatus, Msg, ParseFieldError, ParseStatusError};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  add <url>              add one job URL
  bulk                   show/hide the bulk input
  bulk-text <line>       append a line to the bulk input
  bulk-add               add every line of the bulk input
  paste                  fill the bulk input from the clipboard
  rm <n|id>              remove queue entry n (1-based) or by id prefix
  clear                  remove every queue entry
  status <n|id> <status> record pending/processing/completed/failed
  title <n|id> <text>    set the display title of an entry
  enable on|off          switch the Workday flow on or off
  start | stop           start or cancel the Workday flow
  set <field> <value>    edit a profile field (first_name, last_name,
                         email, password, phone, location)
  save                   save the profile
  show-password          toggle password masking
  dismiss                dismiss the current notice
  show                   redraw the dashboard
  help                   this text
  quit                   exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("no queue entry matches `{0}`")]
    NoSuchEntry(String),
    #[error("expected `on` or `off`, got `{0}`")]
    BadSwitch(String),
    #[error(transparent)]
    Status(#[from] ParseStatusError),
    #[error(transparent)]
    Field(#[from] ParseFieldError),
}

/// Parses one input line. The view resolves entry numbers to job ids.
pub fn parse_command(line: &str, view: &AppViewModel) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msgs = match word.to_ascii_lowercase().as_str() {
        "" | "show" => return Ok(Command::Redraw),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "add" => {
            let url = required(rest, "add", "a URL")?;
            vec![
                Msg::SingleUrlChanged(url.to_string()),
                Msg::SingleUrlSubmitted,
            ]
        }
        "bulk" => vec![Msg::BulkInputToggled],
        "bulk-text" => {
            let text = if view.queue.bulk_input.is_empty() {
                rest.to_string()
            } else {
                format!("{}\n{}", view.queue.bulk_input, rest)
            };
            vec![Msg::BulkInputChanged(text)]
        }
        "bulk-add" => vec![Msg::BulkUrlsSubmitted],
        "paste" => vec![Msg::PasteFromClipboardClicked],
        "rm" | "remove" => {
            let key = required(rest, "rm", "an entry number or id")?;
            vec![Msg::RemoveUrlClicked {
                job_id: resolve_entry(key, view)?,
            }]
        }
        "clear" => vec![Msg::ClearAllClicked],
        "status" => {
            let (key, status) = split_pair(rest, "status", "an entry and a status")?;
            vec![Msg::JobStatusReported {
                job_id: resolve_entry(key, view)?,
                status: status.parse::<JobStatus>()?,
            }]
        }
        "title" => {
            let (key, title) = split_pair(rest, "title", "an entry and a title")?;
            vec![Msg::JobTitleResolved {
                job_id: resolve_entry(key, view)?,
                title: title.to_string(),
            }]
        }
        "enable" => {
            let enabled = match required(rest, "enable", "on or off")? {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => return Err(CommandError::BadSwitch(other.to_string())),
            };
            vec![Msg::FlowToggled(enabled)]
        }
        "start" => vec![Msg::StartFlowClicked],
        "stop" => vec![Msg::StopFlowClicked],
        "set" => {
            // Values may be empty, e.g. `set phone` clears the field.
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (required(rest, "set", "a field name")?, ""),
            };
            vec![Msg::ProfileFieldChanged {
                field: field.parse()?,
                value: value.to_string(),
            }]
        }
        "save" => vec![Msg::SaveProfileClicked],
        "show-password" => vec![Msg::PasswordVisibilityToggled],
        "dismiss" => vec![Msg::NoticeDismissed],
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(msgs))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

fn split_pair<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<(&'a str, &'a str), CommandError> {
    match rest.split_once(char::is_whitespace) {
        Some((first, second)) if !second.trim().is_empty() => Ok((first, second.trim())),
        _ => Err(CommandError::MissingArgument { command, what }),
    }
}

/// `3` means the third row; anything else is matched as an id prefix.
fn resolve_entry(key: &str, view: &AppViewModel) -> Result<JobId, CommandError> {
    let rows = &view.queue.rows;
    if let Ok(number) = key.parse::<usize>() {
        if let Some(row) = number.checked_sub(1).and_then(|index| rows.get(index)) {
            return Ok(row.job_id);
        }
    }
    let wanted = key.to_ascii_lowercase();
    let mut matches = rows
        .iter()
        .filter(|row| row.job_id.to_string().starts_with(&wanted));
    match (matches.next(), matches.next()) {
        (Some(row), None) => Ok(row.job_id),
        _ => Err(CommandError::NoSuchEntry(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use tailor_core::{update, AppState, ClockSource, IdSource, JobStatus, Msg, ProfileField};

    use super::{parse_command, Command, CommandError};

    fn view_with(urls: &[&str]) -> tailor_core::AppViewModel {
        let state = AppState::with_sources(IdSource::sequential(), ClockSource::System);
        let urls = urls.iter().map(|url| url.to_string()).collect();
        let (state, _) = update(state, Msg::UrlsAdded(urls));
        state.view()
    }

    fn dispatched(line: &str, view: &tailor_core::AppViewModel) -> Vec<Msg> {
        match parse_command(line, view) {
            Ok(Command::Dispatch(msgs)) => msgs,
            other => panic!("expected dispatch for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn add_submits_single_url() {
        let view = view_with(&[]);
        assert_eq!(
            dispatched("add https://a.com/job", &view),
            vec![
                Msg::SingleUrlChanged("https://a.com/job".to_string()),
                Msg::SingleUrlSubmitted
            ]
        );
    }

    #[test]
    fn bulk_text_appends_lines() {
        let state = AppState::new();
        let (state, _) = update(state, Msg::BulkInputChanged("first".to_string()));
        let msgs = dispatched("bulk-text second", &state.view());
        assert_eq!(
            msgs,
            vec![Msg::BulkInputChanged("first\nsecond".to_string())]
        );
    }

    #[test]
    fn rm_resolves_row_numbers() {
        let view = view_with(&["A", "B", "C"]);
        let msgs = dispatched("rm 2", &view);
        assert_eq!(
            msgs,
            vec![Msg::RemoveUrlClicked {
                job_id: view.queue.rows[1].job_id
            }]
        );
    }

    #[test]
    fn rm_out_of_range_is_an_error() {
        let view = view_with(&["A"]);
        assert_eq!(
            parse_command("rm 5", &view),
            Err(CommandError::NoSuchEntry("5".to_string()))
        );
    }

    #[test]
    fn status_parses_entry_and_value() {
        let view = view_with(&["A", "B"]);
        assert_eq!(
            dispatched("status 1 completed", &view),
            vec![Msg::JobStatusReported {
                job_id: view.queue.rows[0].job_id,
                status: JobStatus::Completed,
            }]
        );
        assert!(matches!(
            parse_command("status 1 done", &view),
            Err(CommandError::Status(_))
        ));
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        let view = view_with(&[]);
        assert_eq!(
            dispatched("set location Austin, United States", &view),
            vec![Msg::ProfileFieldChanged {
                field: ProfileField::Location,
                value: "Austin, United States".to_string(),
            }]
        );
    }

    #[test]
    fn enable_needs_on_or_off() {
        let view = view_with(&[]);
        assert_eq!(dispatched("enable off", &view), vec![Msg::FlowToggled(false)]);
        assert_eq!(
            parse_command("enable maybe", &view),
            Err(CommandError::BadSwitch("maybe".to_string()))
        );
    }

    #[test]
    fn unknown_and_control_words() {
        let view = view_with(&[]);
        assert_eq!(parse_command("quit", &view), Ok(Command::Quit));
        assert_eq!(parse_command("", &view), Ok(Command::Redraw));
        assert_eq!(parse_command("HELP", &view), Ok(Command::Help));
        assert_eq!(
            parse_command("launch", &view),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert!(matches!(
            parse_command("add", &view),
            Err(CommandError::MissingArgument { command: "add", .. })
        ));
    }
}
