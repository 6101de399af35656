use grantdesk_core::{initials, UNKNOWN_INITIALS};

#[test]
fn titled_full_name_uses_given_and_family_initials() {
    assert_eq!(initials(Some("Dr. Jane Smith")), "JS");
}

#[test]
fn two_part_name_uses_second_part_prefix() {
    assert_eq!(initials(Some("Mr. Einstein")), "EI");
    assert_eq!(initials(Some("Jane Smith")), "SM");
}

#[test]
fn single_part_name_uses_its_prefix() {
    assert_eq!(initials(Some("Plato")), "PL");
    assert_eq!(initials(Some("plato")), "PL");
}

#[test]
fn empty_or_absent_name_uses_placeholder() {
    assert_eq!(initials(Some("")), UNKNOWN_INITIALS);
    assert_eq!(initials(None), "?");
}
