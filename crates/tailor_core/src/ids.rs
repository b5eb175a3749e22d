use std::fmt;

use uuid::Uuid;

/// Opaque identifier of a queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(Uuid);

impl JobId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First eight hex digits, enough to tell entries apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Generator for fresh job ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdSource {
    /// Random v4 UUIDs.
    #[default]
    Random,
    /// Deterministic ids `1, 2, 3, ...` encoded as UUIDs; used by tests.
    Sequential { next: u128 },
}

impl IdSource {
    pub fn sequential() -> Self {
        IdSource::Sequential { next: 1 }
    }

    pub fn next_id(&mut self) -> JobId {
        match self {
            IdSource::Random => JobId(Uuid::new_v4()),
            IdSource::Sequential { next } => {
                let id = JobId(Uuid::from_u128(*next));
                *next += 1;
                id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IdSource;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = IdSource::sequential();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first.as_uuid().as_u128(), 1);
        assert_eq!(second.as_uuid().as_u128(), 2);
        assert_eq!(first.short(), "00000000");
    }

    #[test]
    fn random_ids_differ() {
        let mut ids = IdSource::Random;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
