use chrono::{DateTime, Utc};

/// Timestamp source for queue entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSource {
    #[default]
    System,
    /// Always reports the same instant; used by tests.
    Fixed(DateTime<Utc>),
}

impl ClockSource {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            ClockSource::System => Utc::now(),
            ClockSource::Fixed(at) => *at,
        }
    }
}
