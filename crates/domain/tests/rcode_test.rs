use dnslink_domain::rcode::{rcode_detail, rcode_name, RCODE_NXDOMAIN};
use dnslink_domain::{LookupError, RCodeError};

#[test]
fn test_rcode_error_fields() {
    let error = RCodeError::new(2, "_dnslink.example.com");

    assert_eq!(error.rcode, 2);
    assert_eq!(error.code, "RCODE_2");
    assert_eq!(error.name, "ServFail");
    assert_eq!(error.domain, "_dnslink.example.com");
    assert!(!error.is_nxdomain());
}

#[test]
fn test_nxdomain() {
    let error = RCodeError::nxdomain("_dnslink.missing.com");

    assert_eq!(error.rcode, RCODE_NXDOMAIN);
    assert!(error.is_nxdomain());
    assert!(LookupError::from(error).is_not_found());
}

#[test]
fn test_display_includes_detail_and_name() {
    let error = RCodeError::new(5, "a.com");
    assert_eq!(
        error.to_string(),
        "The name server refuses to perform the specified operation for policy reasons. (rcode=5, error=Refused, domain=a.com)"
    );
}

#[test]
fn test_unassigned_rcode() {
    let error = RCodeError::new(12, "a.com");

    assert_eq!(error.name, "");
    assert_eq!(error.detail(), "Undefined Error.");
    assert_eq!(error.to_string(), "Undefined Error. (rcode=12, domain=a.com)");
}

#[test]
fn test_rcode_table_edges() {
    assert_eq!(rcode_name(0), "Success");
    assert_eq!(rcode_name(11), "DSOTYPENI");
    assert_eq!(rcode_name(16), "BADVERS_BADSIG");
    assert_eq!(rcode_name(23), "BADCOOKIE");
    assert_eq!(rcode_name(24), "");
    assert_eq!(rcode_detail(3), "Non-Existent Domain.");
}

#[test]
fn test_rcode_error_serializes_name_as_error() {
    let value = serde_json::to_value(RCodeError::new(2, "a.com")).unwrap();
    assert_eq!(value["error"], "ServFail");
    assert_eq!(value["code"], "RCODE_2");
}

#[test]
fn test_other_lookup_errors_are_not_not_found() {
    assert!(!LookupError::NoServers.is_not_found());
    assert!(!LookupError::from(RCodeError::new(2, "a.com")).is_not_found());
}
