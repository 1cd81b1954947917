use super::*;

fn filled() -> SignupForm {
    SignupForm {
        name: " Mina Rao ".to_owned(),
        email: "mina@college.edu".to_owned(),
        password: "pa55word".to_owned(),
        confirm_password: "pa55word".to_owned(),
        role: Role::Student,
        year: Some(Year::SecondYear),
    }
}

#[test]
fn complete_form_becomes_request() {
    let request = validate_signup(&filled()).unwrap();
    assert_eq!(request.name, "Mina Rao");
    assert_eq!(request.role, Role::Student);
    assert_eq!(request.year, Some(Year::SecondYear));
}

#[test]
fn blank_required_field_is_rejected() {
    let mut form = filled();
    form.confirm_password = "  ".to_owned();
    assert_eq!(validate_signup(&form), Err("Please fill in all required fields."));

    let mut form = filled();
    form.name = String::new();
    assert_eq!(validate_signup(&form), Err("Please fill in all required fields."));
}

#[test]
fn mismatched_passwords_are_rejected() {
    let mut form = filled();
    form.confirm_password = "pa55w0rd".to_owned();
    assert_eq!(validate_signup(&form), Err("Passwords do not match."));
}

#[test]
fn year_is_optional() {
    let mut form = filled();
    form.year = None;
    assert_eq!(validate_signup(&form).unwrap().year, None);
}
