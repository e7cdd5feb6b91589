//! Property-based tests for session tokens and the authorization header

use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use proptest::prelude::*;
use taskmanager::backend::auth::sessions::{TokenError, TokenService};
use taskmanager::backend::auth::users::User;
use taskmanager::backend::middleware::{authenticate, extract_token};

fn service() -> TokenService {
    TokenService::new("proptest-secret", Duration::from_secs(3600))
}

proptest! {
    #[test]
    fn test_claims_survive_issue_and_verify(id in 1i64..i64::MAX, username in "[a-zA-Z0-9_]{1,32}") {
        let tokens = service();
        let user = User { id, username: username.clone(), password_hash: String::new() };

        let claims = tokens.verify(&tokens.issue(&user).unwrap()).unwrap();
        prop_assert_eq!(claims.id, id);
        prop_assert_eq!(claims.username, username);
    }

    #[test]
    fn test_arbitrary_strings_never_verify(token in "[ -~]{0,200}") {
        prop_assert!(matches!(service().verify(&token), Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_header_never_panics_and_never_authenticates(value in "[ -~]{0,120}") {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&value).unwrap());

        let _ = extract_token(&headers);
        prop_assert!(authenticate(&service(), &headers).is_err());
    }
}
