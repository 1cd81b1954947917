use super::*;

#[test]
fn root_margin_formats_pixels() {
    assert_eq!(root_margin(100), "100px");
    assert_eq!(root_margin(0), "0px");
}
