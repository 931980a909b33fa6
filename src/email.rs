//! Email shape check used by the contact form.
//!
//! Deliberately loose: one `@` with non-blank text on both sides and a dot in
//! the domain part. Quoted local parts and other RFC 5322 forms are rejected,
//! and plenty of undeliverable addresses pass.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("email pattern failed to compile: {err}");
        None
    }
});

/// Whether `email` has the `local@domain.tld` shape.
///
/// The value is checked as given; callers decide whether to trim first.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}
