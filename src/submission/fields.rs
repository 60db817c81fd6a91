use std::sync::LazyLock;

use regex::Regex;

use crate::models::SubmissionRecord;

/// `<input type="email">` acceptance rule from the HTML living standard.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email pattern")
});

/// Same character class as the phone input's `pattern` attribute.
pub const PHONE_PATTERN: &str = r"[0-9+\-\s]+";

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{PHONE_PATTERN})$")).expect("valid phone pattern")
});

/// Check the constraints the form widgets enforce before a submit is
/// attempted. Returns one message per violation, empty when the record may
/// be submitted.
pub fn check_widgets(record: &SubmissionRecord) -> Vec<String> {
    let mut violations = Vec::new();

    let required = [
        ("Name", &record.name),
        ("Email", &record.email),
        ("Phone Number", &record.phone),
        ("Company Name", &record.company_name),
    ];
    for (label, value) in required {
        if value.is_empty() {
            violations.push(format!("{label} is required"));
        }
    }

    if !record.email.is_empty() && !EMAIL.is_match(&record.email) {
        violations.push("Email must be a valid email address".to_string());
    }

    if !record.phone.is_empty() && !PHONE.is_match(&record.phone) {
        violations.push(
            "Phone Number may only contain digits, spaces, '+' and '-'".to_string(),
        );
    }

    violations
}
