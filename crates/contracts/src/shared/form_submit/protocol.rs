//! Request/response contract between the interceptor and the server.
//!
//! Every intercepted request carries `x-spinner: true` and is fetched with
//! manual redirect handling, so a native 3xx never reaches the page as a
//! followed redirect. A server that wants the browser to move on after such
//! a request answers `200` with a `location` header holding a path on the
//! current origin; the interceptor then navigates to `origin + location`.
//! Every other response shape leaves the page where it is.

use serde::{Deserialize, Serialize};

/// Header attached to every intercepted request.
pub const SPINNER_HEADER: &str = "x-spinner";
pub const SPINNER_HEADER_VALUE: &str = "true";

pub const CONTENT_TYPE_HEADER: &str = "content-type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Response header naming the path to navigate to.
pub const LOCATION_HEADER: &str = "location";

/// The only status that triggers client-side navigation.
pub const NAVIGATE_STATUS: u16 = 200;

/// The part of a response the interceptor looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundResponse {
    pub status: u16,
    pub location: Option<String>,
}

impl InboundResponse {
    pub fn new(status: u16, location: Option<String>) -> Self {
        Self { status, location }
    }

    /// Full navigation target for this response, if it asks for one.
    ///
    /// `location` is treated as a path on `origin`, never as an absolute URL.
    pub fn navigation_target(&self, origin: &str) -> Option<String> {
        if self.status != NAVIGATE_STATUS {
            return None;
        }
        let location = self.location.as_deref().filter(|l| !l.is_empty())?;
        let origin = origin.trim_end_matches('/');
        if location.starts_with('/') {
            Some(format!("{}{}", origin, location))
        } else {
            Some(format!("{}/{}", origin, location))
        }
    }
}

/// How a submission settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The browser was sent to this URL.
    Navigated(String),
    /// No navigation was requested; the page is left as is.
    Stayed { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://shop.example";

    #[test]
    fn test_200_with_location_navigates() {
        let response = InboundResponse::new(200, Some("/results/42".into()));
        assert_eq!(
            response.navigation_target(ORIGIN),
            Some("https://shop.example/results/42".to_string())
        );
    }

    #[test]
    fn test_redirect_status_never_navigates() {
        let response = InboundResponse::new(302, Some("/results/42".into()));
        assert_eq!(response.navigation_target(ORIGIN), None);
        assert_eq!(InboundResponse::new(301, None).navigation_target(ORIGIN), None);
    }

    #[test]
    fn test_200_without_location_stays() {
        assert_eq!(InboundResponse::new(200, None).navigation_target(ORIGIN), None);
        assert_eq!(
            InboundResponse::new(200, Some(String::new())).navigation_target(ORIGIN),
            None
        );
    }

    #[test]
    fn test_other_success_codes_stay() {
        let response = InboundResponse::new(201, Some("/created".into()));
        assert_eq!(response.navigation_target(ORIGIN), None);
    }

    #[test]
    fn test_relative_location_is_joined_with_slash() {
        let response = InboundResponse::new(200, Some("results?q=1".into()));
        assert_eq!(
            response.navigation_target("https://shop.example/"),
            Some("https://shop.example/results?q=1".to_string())
        );
    }
}
