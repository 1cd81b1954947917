use super::*;

fn cfg() -> ApiConfig {
    ApiConfig::new("https://api.club.test/", "/api/uploadthing")
}

#[test]
fn events_page_url_includes_cursor() {
    assert_eq!(events_page_url(&cfg(), 1), "https://api.club.test/api/event?page=1");
    assert_eq!(events_page_url(&cfg(), 12), "https://api.club.test/api/event?page=12");
}

#[test]
fn event_urls_format_expected_paths() {
    assert_eq!(events_url(&cfg()), "https://api.club.test/api/event");
    assert_eq!(event_url(&cfg(), "e42"), "https://api.club.test/api/event/e42");
    assert_eq!(event_images_url(&cfg(), "e42"), "https://api.club.test/api/event/e42/images");
}

#[test]
fn registration_url_uses_action_segment() {
    assert_eq!(
        registration_url(&cfg(), "e1", RegistrationAction::Register),
        "https://api.club.test/api/event/e1/register"
    );
    assert_eq!(
        registration_url(&cfg(), "e1", RegistrationAction::Unregister),
        "https://api.club.test/api/event/e1/unregister"
    );
}

#[test]
fn registered_events_url_is_keyed_by_user() {
    assert_eq!(
        registered_events_url(&cfg(), "u9"),
        "https://api.club.test/api/event/u9/myregisteredevents"
    );
}

#[test]
fn auth_urls_support_same_origin_base() {
    let same_origin = ApiConfig::new("", "");
    assert_eq!(auth_url(&same_origin, "login"), "/api/auth/login");
    assert_eq!(auth_url(&cfg(), "register"), "https://api.club.test/api/auth/register");
}

#[test]
fn registration_action_success_messages() {
    assert_eq!(RegistrationAction::Register.success_message(), "Registered successfully");
    assert_eq!(RegistrationAction::Unregister.success_message(), "Unregistered successfully");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn feed_source_is_unavailable_outside_browser() {
    let source = EventFeedSource { config: cfg() };
    let result = futures::executor::block_on(source.fetch_page(1));
    assert_eq!(result, Err(ApiError::Unavailable));
}
