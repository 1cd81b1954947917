use super::*;

fn detail(registered: &[&str]) -> EventDetail {
    EventDetail {
        id: "e42".to_owned(),
        title: "Robotics Expo".to_owned(),
        description: "Demos from every branch".to_owned(),
        date: "2024-11-20T00:00:00.000Z".to_owned(),
        time: "10:00".to_owned(),
        location: "Main Quad".to_owned(),
        registered_users: registered.iter().map(|id| (*id).to_owned()).collect(),
        event_images: Vec::new(),
        thumbnail: None,
    }
}

// =============================================================
// Registration toggle
// =============================================================

#[test]
fn unregistered_user_joins() {
    let event = detail(&["someone-else"]);
    let action = registration_action(&event, Some("u1"));
    assert_eq!(action, RegistrationAction::Register);
    assert_eq!(registration_label(action), "Join Event");
}

#[test]
fn registered_user_leaves() {
    let event = detail(&["u1", "u2"]);
    let action = registration_action(&event, Some("u1"));
    assert_eq!(action, RegistrationAction::Unregister);
    assert_eq!(registration_label(action), "Leave Event");
    assert_eq!(action.success_message(), "Unregistered successfully");
}

#[test]
fn missing_user_defaults_to_join() {
    assert_eq!(registration_action(&detail(&["u1"]), None), RegistrationAction::Register);
}

// =============================================================
// Load states
// =============================================================

#[test]
fn pending_fetch_is_loading() {
    assert_eq!(detail_view(&None), DetailView::Loading);
}

#[test]
fn not_found_status_has_own_screen() {
    let state = Some(Err(ApiError::Status { status: 404, message: Some("Event not found".to_owned()) }));
    assert_eq!(detail_view(&state), DetailView::NotFound);
}

#[test]
fn other_failures_prefer_server_message() {
    let state = Some(Err(ApiError::Status { status: 500, message: Some("Database down".to_owned()) }));
    assert_eq!(detail_view(&state), DetailView::Failed("Database down".to_owned()));

    let state = Some(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(detail_view(&state), DetailView::Failed("Failed to load event details".to_owned()));
}

#[test]
fn loaded_event_is_ready() {
    let event = detail(&[]);
    assert_eq!(detail_view(&Some(Ok(event.clone()))), DetailView::Ready(event));
}
