use pretty_assertions::assert_eq;
use tailor_core::{update, AppState, CandidateProfile, Msg, ProfileField};

fn init_logging() {
    tailor_logging::initialize_for_tests();
}

fn edit(state: AppState, field: ProfileField, value: &str) -> AppState {
    update(
        state,
        Msg::ProfileFieldChanged {
            field,
            value: value.to_string(),
        },
    )
    .0
}

#[test]
fn profile_starts_empty() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.profile(), &CandidateProfile::default());
}

#[test]
fn saved_profile_reads_back_exactly() {
    init_logging();
    let state = edit(AppState::new(), ProfileField::FirstName, "Ada");
    let state = edit(state, ProfileField::LastName, "Lovelace");
    let state = edit(state, ProfileField::Email, "ada@example.com");
    let state = edit(state, ProfileField::Password, "s3cret");
    let state = edit(state, ProfileField::Phone, "+1 555 0100");
    let state = edit(state, ProfileField::Location, "Austin, United States");
    assert!(state.view().profile.unsaved_changes);

    let (state, effects) = update(state, Msg::SaveProfileClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.profile(),
        &CandidateProfile {
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Austin, United States".to_string(),
        }
    );
    let view = state.view();
    assert!(!view.profile.unsaved_changes);
    assert_eq!(view.notice.unwrap().text, "Candidate data saved");
}

#[test]
fn drafts_are_not_saved_until_requested() {
    init_logging();
    let state = edit(AppState::new(), ProfileField::Email, "draft@example.com");

    assert_eq!(state.profile().email, "");
    assert_eq!(state.profile_draft().email, "draft@example.com");
}

#[test]
fn replace_is_wholesale() {
    init_logging();
    let first = CandidateProfile {
        email: "a@example.com".to_string(),
        phone: "123".to_string(),
        ..CandidateProfile::default()
    };
    let second = CandidateProfile {
        first_name: "Grace".to_string(),
        ..CandidateProfile::default()
    };

    let (state, _) = update(AppState::new(), Msg::ProfileReplaced(first));
    let (state, _) = update(state, Msg::ProfileReplaced(second.clone()));

    assert_eq!(state.profile(), &second);
    assert_eq!(state.profile().phone, "");
    assert_eq!(state.profile_draft(), &second);
}

#[test]
fn password_is_masked_until_revealed() {
    init_logging();
    let state = edit(AppState::new(), ProfileField::Password, "abc");
    assert_eq!(state.view().profile.password, "•••");

    let (state, _) = update(state, Msg::PasswordVisibilityToggled);
    let view = state.view();
    assert!(view.profile.password_visible);
    assert_eq!(view.profile.password, "abc");
}
