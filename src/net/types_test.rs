use super::*;

// =============================================================
// Feed and detail payloads
// =============================================================

#[test]
fn event_page_parses_backend_field_names() {
    let page: EventPage = serde_json::from_str(
        r#"{"events":[{"_id":"e1","title":"Hack Night","description":"Bring a laptop","thumbnail":"https://utfs.io/f/a.png"},{"_id":"e2","title":"Career Fair","description":""}]}"#,
    )
    .unwrap();
    assert_eq!(page.events.len(), 2);
    assert_eq!(page.events[0].id, "e1");
    assert_eq!(page.events[0].thumbnail.as_deref(), Some("https://utfs.io/f/a.png"));
    assert_eq!(page.events[1].thumbnail, None);
}

#[test]
fn event_page_without_events_key_is_empty() {
    let page: EventPage = serde_json::from_str("{}").unwrap();
    assert!(page.events.is_empty());
}

#[test]
fn event_detail_parses_registration_and_gallery() {
    let detail: EventDetail = serde_json::from_str(
        r#"{"_id":"e9","title":"Robotics Expo","description":"Demos","date":"2025-03-14T00:00:00.000Z","time":"17:30","location":"Hall B","registeredUsers":["u1","u2"],"eventimages":["a.jpg"]}"#,
    )
    .unwrap();
    assert_eq!(detail.participant_count(), 2);
    assert!(detail.is_registered("u2"));
    assert!(!detail.is_registered("u3"));
    assert_eq!(detail.event_images, vec!["a.jpg".to_owned()]);
    assert_eq!(detail.thumbnail, None);
}

#[test]
fn event_detail_defaults_missing_lists() {
    let detail: EventDetail = serde_json::from_str(r#"{"_id":"e1","title":"Quiz"}"#).unwrap();
    assert!(detail.registered_users.is_empty());
    assert!(detail.event_images.is_empty());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_event_serializes_enum_values_in_snake_case() {
    let event = NewEvent {
        title: "Intro to Rust".to_owned(),
        description: "Ownership basics".to_owned(),
        date: "2025-04-01".to_owned(),
        time: "10:00".to_owned(),
        location: "Lab 3".to_owned(),
        category: EventCategory::Workshop,
        branch: Branch::Cse,
        thumbnail: "https://utfs.io/f/t.png".to_owned(),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["category"], "workshop");
    assert_eq!(value["branch"], "cse");
    assert_eq!(value["thumbnail"], "https://utfs.io/f/t.png");
}

#[test]
fn signup_request_uses_confirm_password_key_and_skips_missing_year() {
    let req = SignupRequest {
        name: "Asha".to_owned(),
        email: "asha@campus.edu".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
        role: Role::SuperAdmin,
        year: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["confirmPassword"], "pw");
    assert_eq!(value["role"], "super_admin");
    assert!(value.get("year").is_none());
}

#[test]
fn registration_request_uses_user_id_key() {
    let value = serde_json::to_value(RegistrationRequest { user_id: "u7".to_owned() }).unwrap();
    assert_eq!(value, serde_json::json!({ "userId": "u7" }));
}

// =============================================================
// Login response shapes
// =============================================================

#[test]
fn login_response_accepts_wrapped_user() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"user":{"_id":"u1","role":"admin","name":"Dev"}}"#).unwrap();
    let user = resp.into_user();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name.as_deref(), Some("Dev"));
}

#[test]
fn login_response_accepts_bare_user() {
    let resp: LoginResponse = serde_json::from_str(r#"{"id":"u2","role":"student"}"#).unwrap();
    let user = resp.into_user();
    assert_eq!(user.id, "u2");
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.name, None);
}

// =============================================================
// Enum helpers
// =============================================================

#[test]
fn enum_parse_round_trips_option_values() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    for year in Year::ALL {
        assert_eq!(Year::parse(year.as_str()), Some(year));
    }
    assert_eq!(EventCategory::parse("conference"), Some(EventCategory::Conference));
    assert_eq!(Branch::parse("ece"), Some(Branch::Ece));
    assert_eq!(Branch::parse(""), None);
}

#[test]
fn display_date_formats_iso_dates() {
    assert_eq!(display_date("2025-03-14T00:00:00.000Z"), "03/14/2025");
    assert_eq!(display_date("2025-03-14"), "03/14/2025");
}

#[test]
fn display_date_passes_through_unknown_formats() {
    assert_eq!(display_date("next Tuesday"), "next Tuesday");
    assert_eq!(display_date(""), "");
}
