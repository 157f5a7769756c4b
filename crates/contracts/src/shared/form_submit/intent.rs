use serde::{Deserialize, Serialize};

use super::protocol::{CONTENT_TYPE_HEADER, FORM_URLENCODED, SPINNER_HEADER, SPINNER_HEADER_VALUE};
use super::{FieldSet, FormMethod, SubmitError};

/// What the user asked for when submitting the form.
///
/// Built once per submit event from the form's `action`, `method` and the
/// current control values, then dropped when the request settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionIntent {
    pub action: String,
    pub method: String,
    pub fields: FieldSet,
}

/// Transport-independent description of the fetch to perform.
///
/// Redirects are always handled manually by whoever sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRequest {
    pub method: FormMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl SubmissionIntent {
    pub fn new(action: impl Into<String>, method: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            fields,
        }
    }

    /// Build the request for this intent.
    ///
    /// Fails with [`SubmitError::UnsupportedMethod`] for anything but GET
    /// and POST; nothing is sent in that case.
    pub fn to_request(&self) -> Result<OutboundRequest, SubmitError> {
        let method = FormMethod::parse(&self.method)?;
        let spinner = (SPINNER_HEADER.to_string(), SPINNER_HEADER_VALUE.to_string());

        let request = match method {
            FormMethod::Post => OutboundRequest {
                method,
                url: self.action.clone(),
                headers: vec![
                    (CONTENT_TYPE_HEADER.to_string(), FORM_URLENCODED.to_string()),
                    spinner,
                ],
                body: Some(self.fields.to_urlencoded()),
            },
            FormMethod::Get => OutboundRequest {
                method,
                url: append_query(&self.action, &self.fields.to_urlencoded()),
                headers: vec![spinner],
                body: None,
            },
        };
        Ok(request)
    }
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query string of the URL, without the `?`.
    pub fn query(&self) -> Option<&str> {
        let without_fragment = self.url.split('#').next().unwrap_or_default();
        without_fragment.split_once('?').map(|(_, q)| q)
    }
}

fn append_query(action: &str, query: &str) -> String {
    if query.is_empty() {
        return action.to_string();
    }
    let (base, fragment) = match action.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (action, None),
    };
    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };
    match fragment {
        Some(fragment) => format!("{}{}{}#{}", base, separator, query, fragment),
        None => format!("{}{}{}", base, separator, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> FieldSet {
        vec![
            ("q", "red shoes"),
            ("size", "42"),
            ("size", "43"),
            ("note", ""),
            ("city", "Санкт-Петербург"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_post_body_round_trips() {
        let intent = SubmissionIntent::new("/search", "post", sample_fields());
        let request = intent.to_request().unwrap();

        assert_eq!(request.method, FormMethod::Post);
        assert_eq!(request.url, "/search");
        assert_eq!(request.query(), None);
        let body = request.body.as_deref().unwrap();
        assert_eq!(FieldSet::from_urlencoded(body), sample_fields());
    }

    #[test]
    fn test_post_headers() {
        let request = SubmissionIntent::new("/search", "POST", sample_fields())
            .to_request()
            .unwrap();
        assert_eq!(request.header("x-spinner"), Some("true"));
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_get_query_round_trips() {
        let intent = SubmissionIntent::new("https://shop.example/search", "GET", sample_fields());
        let request = intent.to_request().unwrap();

        assert_eq!(request.method, FormMethod::Get);
        assert!(request.body.is_none());
        assert!(request.url.starts_with("https://shop.example/search?"));
        assert_eq!(
            FieldSet::from_urlencoded(request.query().unwrap()),
            sample_fields()
        );
        assert_eq!(request.header("x-spinner"), Some("true"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn test_get_extends_existing_query() {
        let fields: FieldSet = vec![("q", "boots")].into_iter().collect();
        let request = SubmissionIntent::new("/search?lang=en#top", "get", fields)
            .to_request()
            .unwrap();
        assert_eq!(request.url, "/search?lang=en&q=boots#top");
    }

    #[test]
    fn test_get_without_fields_keeps_action() {
        let request = SubmissionIntent::new("/search", "get", FieldSet::new())
            .to_request()
            .unwrap();
        assert_eq!(request.url, "/search");
    }

    #[test]
    fn test_unsupported_method_builds_nothing() {
        let result = SubmissionIntent::new("/search", "put", sample_fields()).to_request();
        assert_eq!(result, Err(SubmitError::UnsupportedMethod("put".to_string())));
    }
}
