use super::*;

#[test]
fn normalize_code_input_uppercases_and_trims() {
    assert_eq!(normalize_code_input(" abc123 "), "ABC123");
    assert_eq!(normalize_code_input("XYZ789"), "XYZ789");
}

#[test]
fn request_input_trims_and_requires_an_email() {
    assert_eq!(
        validate_request_input("  user@school.example  "),
        Ok("user@school.example".to_owned())
    );
    assert_eq!(validate_request_input("   "), Err("Enter your school email first."));
}

#[test]
fn verify_input_requires_both_fields() {
    assert_eq!(
        validate_verify_input(" a@b.com ", " ABC123 "),
        Ok(("a@b.com".to_owned(), "ABC123".to_owned()))
    );
    assert!(validate_verify_input("", "ABC123").is_err());
    assert!(validate_verify_input("a@b.com", "   ").is_err());
}

#[test]
fn verify_input_rejects_wrong_code_length() {
    assert!(validate_verify_input("a@b.com", "ABCDE").is_err());
    assert!(validate_verify_input("a@b.com", "ABCDEFG").is_err());
}
