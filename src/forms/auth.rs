//! Login form.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Originally requested path, carried through the login round-trip.
    pub next: Option<String>,
}

impl LoginForm {
    /// The redirect target after a successful login. Only same-site absolute
    /// paths are accepted so the `next` parameter cannot become an open
    /// redirect; anything else falls back to the dashboard root.
    pub fn redirect_target(&self) -> &str {
        sanitize_next(self.next.as_deref()).unwrap_or("/")
    }
}

/// Accepts `/path`-style internal targets only.
pub fn sanitize_next(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//"))
}
