use super::*;

fn ready() -> EventDraft {
    EventDraft {
        title: " Rust Workshop ".to_owned(),
        description: "Ownership from scratch".to_owned(),
        date: "2024-10-05".to_owned(),
        time: "14:30".to_owned(),
        location: "Seminar Hall".to_owned(),
        category: Some(EventCategory::Workshop),
        branch: Some(Branch::Cse),
        accept_terms: true,
        thumbnail: Some("https://files.example/thumb.png".to_owned()),
    }
}

#[test]
fn ready_draft_becomes_new_event() {
    let event = validate_new_event(&ready()).unwrap();
    assert_eq!(event.title, "Rust Workshop");
    assert_eq!(event.category, EventCategory::Workshop);
    assert_eq!(event.thumbnail, "https://files.example/thumb.png");
}

#[test]
fn missing_fields_are_reported_first() {
    let mut draft = ready();
    draft.location = " ".to_owned();
    draft.accept_terms = false;
    assert_eq!(validate_new_event(&draft), Err("Please fill in all required fields."));

    let mut draft = ready();
    draft.branch = None;
    assert_eq!(validate_new_event(&draft), Err("Please fill in all required fields."));
}

#[test]
fn terms_must_be_accepted() {
    let mut draft = ready();
    draft.accept_terms = false;
    draft.thumbnail = None;
    assert_eq!(validate_new_event(&draft), Err("Please accept the terms and conditions"));
}

#[test]
fn thumbnail_is_required() {
    let mut draft = ready();
    draft.thumbnail = None;
    assert_eq!(validate_new_event(&draft), Err("Please upload a thumbnail image"));
}
