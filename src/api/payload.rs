//! Body extraction for notification requests (JSON or urlencoded form)

use axum::{
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    Form, Json,
};

use crate::error::AppError;
use crate::metrics::RelayMetrics;
use crate::notification::NotificationRequest;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A [`NotificationRequest`] read from either a JSON or a form body.
///
/// Parse failures become [`AppError::InvalidBody`] so they render as a
/// `400 {"error": ...}` like other client errors. Bodies over the size
/// limit keep their 413. Any other content type yields an empty request,
/// which then fails validation on the missing fields.
#[derive(Debug)]
pub struct NotificationPayload(pub NotificationRequest);

enum BodyKind {
    Json,
    Form,
    /// No usable content type; the body is ignored and the request is empty
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == FORM_CONTENT_TYPE {
        BodyKind::Form
    } else if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for NotificationPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let result = match body_kind(&req) {
            BodyKind::Form => Form::<NotificationRequest>::from_request(req, state)
                .await
                .map(|Form(request)| request)
                .map_err(|e| (e.status(), e.body_text())),
            BodyKind::Json => Json::<NotificationRequest>::from_request(req, state)
                .await
                .map(|Json(request)| request)
                .map_err(|e| (e.status(), e.body_text())),
            BodyKind::Other => Ok(NotificationRequest::default()),
        };

        result.map(Self).map_err(|(status, message)| {
            RelayMetrics::record_rejected();
            if status == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(message)
            } else {
                AppError::InvalidBody(message)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(content_type: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_body_kind() {
        assert!(matches!(
            body_kind(&request_with(Some("application/json"))),
            BodyKind::Json
        ));
        assert!(matches!(
            body_kind(&request_with(Some("application/json; charset=utf-8"))),
            BodyKind::Json
        ));
        assert!(matches!(
            body_kind(&request_with(Some("application/merge-patch+json"))),
            BodyKind::Json
        ));
        assert!(matches!(
            body_kind(&request_with(Some("application/x-www-form-urlencoded"))),
            BodyKind::Form
        ));
        assert!(matches!(
            body_kind(&request_with(Some("text/plain"))),
            BodyKind::Other
        ));
        assert!(matches!(body_kind(&request_with(None)), BodyKind::Other));
    }
}
