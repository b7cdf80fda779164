pub mod discussion;
pub mod todo;

use axum::{
    Json, async_trait,
    body::Body,
    extract::FromRequest,
    http::{Request, header::CONTENT_TYPE},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;
use validator::ValidationErrors;

use crate::error::AppError;

/// 同时接受 JSON 和表单提交的请求体提取器
///
/// `application/json` bodies go through [`Json`]; anything else is decoded as
/// `application/x-www-form-urlencoded`, where repeated keys (`assignees=a&assignees=b`)
/// collect into a `Vec`.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, Body> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Invalid JSON format: {}", e)))?;
            Ok(JsonOrForm(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Invalid form data: {}", e)))?;
            Ok(JsonOrForm(value))
        }
    }
}

/// Collapses derive-generated errors into a single validation error, keeping
/// the first field message as the client-facing text.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field))
            })
        })
        .collect();
    messages.sort();

    match messages.into_iter().next() {
        Some(message) => AppError::validation(message),
        None => AppError::validation("Validation failed"),
    }
}

/// 常用验证规则
pub mod rules {
    use validator::ValidateEmail;

    pub fn is_blank(value: &str) -> bool {
        value.trim().is_empty()
    }

    pub fn is_valid_email(email: &str) -> bool {
        email.validate_email()
    }
}
