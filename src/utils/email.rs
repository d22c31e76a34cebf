//! Email address validation.
use lazy_static::lazy_static;
use regex::Regex;

/// Longest address accepted, local part plus `@` plus domain.
const MAX_LENGTH: usize = 320;
/// Longest local part accepted.
const MAX_LOCAL_LENGTH: usize = 64;

/// Whether `email` is a syntactically valid address.
///
/// Accepts dot-atom local parts and dotted host names with an alphabetic or
/// punycode top-level domain. Quoted local parts and IP literals are rejected.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "Hard-coded regexes are known to compile"
)]
pub fn is_valid(email: &str) -> bool {
    lazy_static! {
        static ref LOCAL: Regex =
            Regex::new(r"^[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+(?:\.[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+)*$")
                .expect("Failed to compile regex!?!");
        static ref DOMAIN: Regex = Regex::new(
            r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9]{1,59})$"
        )
        .expect("Failed to compile regex!?!");
    }
    if email.len() > MAX_LENGTH {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_LENGTH && LOCAL.is_match(local) && DOMAIN.is_match(domain)
}
