//! Organization API - fetch list and create via backend

use crate::domain::a002_organization::ui::create_form::OperationError;
use crate::shared::api_utils::api_base;
use contracts::domain::a002_organization::aggregate::{CreateOrganizationRequest, Organization};
use contracts::domain::common::ApiErrorBody;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    resp_value.dyn_into().map_err(|e| format!("{e:?}"))
}

async fn read_text(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// GET /api/organization
pub async fn fetch_organizations() -> Result<Vec<Organization>, String> {
    let resp = send("GET", "/api/organization", None).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = read_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST /api/organization
///
/// Transport failures carry no message, so the dialog shows its fallback text.
pub async fn create_organization(
    request: &CreateOrganizationRequest,
) -> Result<Organization, OperationError> {
    let body = serde_json::to_string(request).map_err(|e| {
        log::error!("serialize create request: {e}");
        OperationError::without_message()
    })?;

    let resp = send("POST", "/api/organization", Some(body))
        .await
        .map_err(|e| {
            log::error!("POST /api/organization failed: {e}");
            OperationError::without_message()
        })?;

    let text = read_text(&resp).await.map_err(|e| {
        log::error!("read create response: {e}");
        OperationError::without_message()
    })?;

    if !resp.ok() {
        log::warn!("create organization rejected: HTTP {}", resp.status());
        return Err(parse_error_body(&text));
    }

    serde_json::from_str(&text).map_err(|e| {
        log::error!("parse created organization: {e}");
        OperationError::without_message()
    })
}

fn parse_error_body(text: &str) -> OperationError {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(body) => OperationError {
            message: body.message,
            field_errors: body.errors,
        },
        Err(_) => OperationError::without_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_with_message() {
        let err = parse_error_body(r#"{"message":"Name taken"}"#);
        assert_eq!(err.message.as_deref(), Some("Name taken"));
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn test_parse_error_body_with_field_errors() {
        let err = parse_error_body(
            r#"{"message":"Name must be at least 3 characters long","errors":[{"field":"name","message":"Name must be at least 3 characters long"}]}"#,
        );
        assert_eq!(err.field_errors.len(), 1);
        assert_eq!(err.field_errors[0].field, "name");
    }

    #[test]
    fn test_parse_error_body_not_json() {
        assert_eq!(
            parse_error_body("Internal Server Error"),
            OperationError::without_message()
        );
        assert_eq!(parse_error_body("{}").message, None);
    }
}
