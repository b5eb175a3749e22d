use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tailor_logging::{tailor_debug, tailor_info};
use url::Url;

use crate::{ClockSource, IdSource, JobId, ParseStatusError};

/// Lifecycle of a queued application. Entries always start `Pending`; every
/// other value is reported from outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobUrlEntry {
    id: JobId,
    url: String,
    title: String,
    status: JobStatus,
    added_at: DateTime<Utc>,
}

impl JobUrlEntry {
    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn display_title(&self) -> String {
        display_title(&self.url, &self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Ordered store of submitted job URLs. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobUrlQueue {
    entries: Vec<JobUrlEntry>,
    ids: IdSource,
    clock: ClockSource,
}

impl JobUrlQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sources(ids: IdSource, clock: ClockSource) -> Self {
        Self {
            entries: Vec::new(),
            ids,
            clock,
        }
    }

    /// Appends one `Pending` entry per non-blank string, in input order.
    /// Strings are trimmed but otherwise stored verbatim. Returns the new ids.
    pub fn add_urls<I, S>(&mut self, urls: I) -> Vec<JobId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added_at = self.clock.now();
        let mut added = Vec::new();
        for raw in urls {
            let url = raw.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            let id = self.fresh_id();
            self.entries.push(JobUrlEntry {
                id,
                url: url.to_string(),
                title: String::new(),
                status: JobStatus::Pending,
                added_at,
            });
            added.push(id);
        }
        if !added.is_empty() {
            tailor_info!(
                "Queued {} url(s), queue length now {}",
                added.len(),
                self.entries.len()
            );
        }
        added
    }

    /// Bulk ingestion from a line-delimited block.
    pub fn add_from_text(&mut self, text: &str) -> Vec<JobId> {
        self.add_urls(parse_url_lines(text))
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn remove_url(&mut self, id: JobId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tailor_debug!("Removed job {}", id);
        }
        removed
    }

    pub fn clear_all(&mut self) {
        tailor_info!("Clearing {} queued url(s)", self.entries.len());
        self.entries.clear();
    }

    /// Records an externally reported status. Unknown ids are ignored.
    pub fn set_status(&mut self, id: JobId, status: JobStatus) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.status != status => {
                tailor_debug!("Job {} status {} -> {}", id, entry.status, status);
                entry.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn set_title(&mut self, id: JobId, title: impl Into<String>) -> bool {
        let title = title.into();
        match self.entry_mut(id) {
            Some(entry) if entry.title != title => {
                entry.title = title;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: JobId) -> Option<&JobUrlEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[JobUrlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.entries
            .iter()
            .fold(StatusCounts::default(), |mut counts, entry| {
                match entry.status {
                    JobStatus::Pending => counts.pending += 1,
                    JobStatus::Processing => counts.processing += 1,
                    JobStatus::Completed => counts.completed += 1,
                    JobStatus::Failed => counts.failed += 1,
                }
                counts
            })
    }

    fn entry_mut(&mut self, id: JobId) -> Option<&mut JobUrlEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    fn fresh_id(&mut self) -> JobId {
        loop {
            let id = self.ids.next_id();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

/// Splits a pasted block into candidate URLs: one per line, trimmed, blanks dropped.
pub fn parse_url_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Label shown for an entry: its title, else the URL host without `www.`,
/// else the raw URL when it does not parse.
pub fn display_title(url: &str, title: &str) -> String {
    if !title.trim().is_empty() {
        return title.to_string();
    }
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_title, parse_url_lines, JobStatus, JobUrlQueue};
    use crate::{ClockSource, IdSource};

    #[test]
    fn text_block_ingestion_matches_line_parsing() {
        let mut queue = JobUrlQueue::with_sources(IdSource::sequential(), ClockSource::System);
        let ids = queue.add_from_text("https://a.com/job1\n\n  https://b.com/job2  \n");

        assert_eq!(ids.len(), 2);
        assert_eq!(queue.entries()[0].url(), "https://a.com/job1");
        assert_eq!(queue.entries()[1].url(), "https://b.com/job2");
        assert_eq!(queue.status_counts().pending, 2);

        assert!(queue.add_from_text("  \n\t\n").is_empty());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn parse_drops_blank_lines() {
        let lines = parse_url_lines("https://a.com/job1\n\n  https://b.com/job2  \n");
        assert_eq!(lines, vec!["https://a.com/job1", "https://b.com/job2"]);
    }

    #[test]
    fn parse_handles_crlf() {
        let lines = parse_url_lines("a\r\nb\r\n");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn title_wins_over_host() {
        assert_eq!(
            display_title("https://www.example.com/x", "Backend Engineer"),
            "Backend Engineer"
        );
    }

    #[test]
    fn host_strips_www() {
        assert_eq!(
            display_title("https://www.acme.wd5.myworkdayjobs.com/job/1", ""),
            "acme.wd5.myworkdayjobs.com"
        );
    }

    #[test]
    fn only_a_leading_www_is_stripped() {
        assert_eq!(
            display_title("https://jobs.www.example.com/x", ""),
            "jobs.www.example.com"
        );
    }

    #[test]
    fn unparseable_falls_back_to_raw() {
        assert_eq!(display_title("not a url", ""), "not a url");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Completed".parse::<JobStatus>(), Ok(JobStatus::Completed));
        assert!("done".parse::<JobStatus>().is_err());
    }
}
