//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://discord.com/api/webhooks/1/abc").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_creates_empty_post_request() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_json_body_sets_body_and_content_type() {
        let body = br#"{"embeds":[]}"#.to_vec();
        let req = HttpRequest::post(test_url()).with_json_body(body.clone());

        assert_eq!(req.body, Some(body));
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

mod http_response {
    use super::*;

    #[test]
    fn body_text_returns_utf8_body() {
        let resp = HttpResponse::new(http::StatusCode::BAD_REQUEST, b"bad embed".to_vec());
        assert_eq!(resp.body_text(), Some("bad embed"));
    }

    #[test]
    fn body_text_is_none_for_empty_body() {
        let resp = HttpResponse::new(http::StatusCode::NO_CONTENT, vec![]);
        assert_eq!(resp.body_text(), None);
    }

    #[test]
    fn body_text_is_none_for_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![0xff, 0xfe]);
        assert_eq!(resp.body_text(), None);
    }
}
