//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kickoff_core::ids::UserId;

use crate::error::ApiError;

/// Header carrying the signed-in user's identifier, set by the auth layer
/// in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The signed-in user making the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(UserId::new(value)))
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, Request};

    use super::*;

    async fn extract(request: Request<()>) -> Result<CurrentUser, ApiError> {
        let (mut parts, ()) = request.into_parts();
        CurrentUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_reads_user_from_header() {
        let request = Request::builder()
            .header(USER_ID_HEADER, " kaka ")
            .body(())
            .unwrap();

        let CurrentUser(user_id) = extract(request).await.unwrap();

        assert_eq!(user_id, UserId::new("kaka"));
    }

    #[tokio::test]
    async fn test_reads_non_ascii_user_id() {
        let request = Request::builder()
            .header(USER_ID_HEADER, HeaderValue::from_bytes("josé".as_bytes()).unwrap())
            .body(())
            .unwrap();

        let CurrentUser(user_id) = extract(request).await.unwrap();

        assert_eq!(user_id, UserId::new("josé"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unauthenticated() {
        let request = Request::builder()
            .header(USER_ID_HEADER, HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap())
            .body(())
            .unwrap();

        assert!(matches!(
            extract(request).await,
            Err(ApiError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthenticated() {
        let request = Request::builder().body(()).unwrap();

        assert!(matches!(
            extract(request).await,
            Err(ApiError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_blank_header_is_unauthenticated() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "")
            .body(())
            .unwrap();

        assert!(matches!(
            extract(request).await,
            Err(ApiError::Unauthenticated)
        ));
    }
}
