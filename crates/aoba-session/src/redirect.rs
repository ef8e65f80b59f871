//! Login redirect builder used by route protection.

/// Build the login URL for an unauthenticated request into `area`. The
/// `from` parameter lets the login flow bounce the browser back to the
/// area it attempted.
pub fn login_redirect(area: &str) -> String {
    format!("/login?from={area}")
}
