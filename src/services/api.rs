//! HTTP service layer for the WindSightAI backend.
//!
//! Every call maps a REST endpoint to a typed result. Failures are never
//! propagated past the caller's `match`; the UI turns them into toasts.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData, RequestCredentials};

use crate::config::BACKEND_URL;
use crate::types::{
    AppError, AppResult, LoginRequest, LoginResponse, RegisterRequest, Upload,
};

fn api_url(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}

/// URL of the original image for an upload.
pub fn upload_image_url(filename: &str) -> String {
    format!("{}/api/image/upload/{}", BACKEND_URL, filename)
}

/// URL of the analyzed output image.
pub fn output_image_url(result_path: &str) -> String {
    format!("{}/api/image/output/{}", BACKEND_URL, result_path)
}

/// Pull the `error` field out of a JSON error body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Api {
        status,
        message: extract_error_message(&body).unwrap_or_default(),
    }
}

/// Fetch the full upload list for a user.
pub async fn fetch_uploads(user_id: &str) -> AppResult<Vec<Upload>> {
    let url = api_url(&format!("/api/uploads?user_id={}", user_id));
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Upload>>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Upload one image as multipart form data. The response body is unused.
pub async fn upload_file(file: &File, user_id: &str) -> AppResult<()> {
    let form = FormData::new().map_err(|e| AppError::Browser(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| AppError::Browser(format!("{:?}", e)))?;
    form.append_with_str("user_id", user_id)
        .map_err(|e| AppError::Browser(format!("{:?}", e)))?;

    let response = Request::post(&api_url("/api/upload"))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Ask the server to analyze an upload. The response body is unused.
pub async fn trigger_analysis(upload_id: u64) -> AppResult<()> {
    let url = api_url(&format!("/api/analyze/{}", upload_id));
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Sign in and get back the user's id.
pub async fn login(request: &LoginRequest) -> AppResult<LoginResponse> {
    let response = Request::post(&api_url("/api/login"))
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Create an account. The response body is unused.
pub async fn register(request: &RegisterRequest) -> AppResult<()> {
    let response = Request::post(&api_url("/api/register"))
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Invalidate the server-side session. Best-effort; callers may ignore it.
pub async fn logout() -> AppResult<()> {
    let response = Request::post(&api_url("/api/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "model unavailable"}"#),
            Some("model unavailable".to_string())
        );
        assert_eq!(extract_error_message(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_image_urls() {
        assert_eq!(
            upload_image_url("blade_042.png"),
            format!("{}/api/image/upload/blade_042.png", BACKEND_URL)
        );
        assert_eq!(
            output_image_url("blade_042_annotated.png"),
            format!("{}/api/image/output/blade_042_annotated.png", BACKEND_URL)
        );
    }
}
