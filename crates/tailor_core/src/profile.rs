use std::fmt;
use std::str::FromStr;

use tailor_logging::tailor_info;

use crate::ParseFieldError;

/// Autofill credentials and contact details. No field is validated here.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CandidateProfile {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
}

impl CandidateProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::Password => &self.password,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Email => &mut self.email,
            ProfileField::Password => &mut self.password,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
        };
        *slot = value.into();
    }
}

// Keeps the password out of logs.
impl fmt::Debug for CandidateProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateProfile")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("location", &self.location)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Email,
    Password,
    FirstName,
    LastName,
    Phone,
    Location,
}

impl ProfileField {
    /// Form order: name row first, then contact and credentials.
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Password,
        ProfileField::Phone,
        ProfileField::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Email => "Email",
            ProfileField::Password => "Password",
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Phone => "Phone",
            ProfileField::Location => "Location",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Password => "password",
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Phone => "phone",
            ProfileField::Location => "location",
        }
    }
}

impl FromStr for ProfileField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        let wanted = match wanted.as_str() {
            "firstname" => "first_name".to_string(),
            "lastname" => "last_name".to_string(),
            _ => wanted,
        };
        ProfileField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| ParseFieldError(s.trim().to_string()))
    }
}

/// Holds the single saved profile. It always exists and starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileStore {
    profile: CandidateProfile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole record; nothing is merged from the previous one.
    pub fn save(&mut self, profile: CandidateProfile) {
        tailor_info!("Saving candidate profile {:?}", profile);
        self.profile = profile;
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateProfile, ProfileField};

    #[test]
    fn debug_redacts_password() {
        let profile = CandidateProfile {
            password: "hunter2".to_string(),
            ..CandidateProfile::default()
        };
        let rendered = format!("{profile:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn field_names_parse_in_several_spellings() {
        assert_eq!("firstName".parse(), Ok(ProfileField::FirstName));
        assert_eq!("last-name".parse(), Ok(ProfileField::LastName));
        assert_eq!("EMAIL".parse(), Ok(ProfileField::Email));
        assert!("age".parse::<ProfileField>().is_err());
    }
}
