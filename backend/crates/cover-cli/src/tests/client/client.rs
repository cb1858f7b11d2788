use crate::{Client, ClientError};

use error_location::ErrorLocation;
use std::panic::Location;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("abc.def.ghi"));
    assert_eq!(client.token, Some("abc.def.ghi".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:8000", None);
    assert!(client.token.is_none());
}

#[test]
fn test_status_only_for_api_errors() {
    let api = ClientError::Api {
        status: 404,
        code: "NOT_FOUND".into(),
        message: "gone".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(api.status(), Some(404));
    assert_eq!(ClientError::input("bad").status(), None);
}
