use std::net::IpAddr;

use axum::http::HeaderMap;
use showroom_core::Visitor;

use crate::error::{ApiError, ApiResult};

pub const VISITOR_ID_HEADER: &str = "x-visitor-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
const MAX_VISITOR_ID_LEN: usize = 128;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First tag of `Accept-Language`, without its quality weight.
fn primary_locale(accept_language: &str) -> Option<String> {
    accept_language
        .split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(str::to_string)
}

/// Originating client: the left-most `X-Forwarded-For` entry.
fn client_ip(forwarded_for: &str) -> Option<IpAddr> {
    forwarded_for
        .split(',')
        .next()
        .and_then(|ip| ip.trim().parse().ok())
}

/// Build the visitor from request headers.
///
/// Visitor ids become storage keys, so only short visible-ASCII ids are
/// accepted.
pub fn visitor_from_headers(headers: &HeaderMap) -> ApiResult<Visitor> {
    let mut visitor = Visitor::anonymous();

    if let Some(id) = header(headers, VISITOR_ID_HEADER) {
        if id.len() > MAX_VISITOR_ID_LEN || !id.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ApiError::BadRequest(format!(
                "X-Visitor-Id must be at most {MAX_VISITOR_ID_LEN} visible ASCII characters"
            )));
        }
        visitor = visitor.with_id(id);
    }
    if let Some(ip) = header(headers, FORWARDED_FOR_HEADER).and_then(client_ip) {
        visitor = visitor.with_client_ip(ip);
    }
    if let Some(locale) = header(headers, "accept-language").and_then(primary_locale) {
        visitor = visitor.with_locale(locale);
    }
    Ok(visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_all_hints() {
        let mut headers = HeaderMap::new();
        headers.insert("x-visitor-id", HeaderValue::from_static("v-1"));
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert(
            "accept-language",
            HeaderValue::from_static("en-GB;q=0.9,en;q=0.8"),
        );

        let visitor = visitor_from_headers(&headers).unwrap();
        assert_eq!(visitor.id.as_deref(), Some("v-1"));
        assert_eq!(visitor.client_ip, Some("203.0.113.9".parse().unwrap()));
        assert_eq!(visitor.locale.as_deref(), Some("en-GB"));
    }

    #[test]
    fn missing_headers_give_anonymous_visitor() {
        let visitor = visitor_from_headers(&HeaderMap::new()).unwrap();
        assert_eq!(visitor, Visitor::anonymous());
    }

    #[test]
    fn garbage_hints_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("unknown"));
        headers.insert("accept-language", HeaderValue::from_static("*"));
        let visitor = visitor_from_headers(&headers).unwrap();
        assert_eq!(visitor.client_ip, None);
        assert_eq!(visitor.locale, None);
    }

    #[test]
    fn rejects_unusable_visitor_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-visitor-id", HeaderValue::from_static("has space"));
        assert!(matches!(
            visitor_from_headers(&headers),
            Err(ApiError::BadRequest(_))
        ));
    }
}
