//! REST API helpers for communicating with the detection backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses both collapse into a single
//! `Err(String)` so call sites log or alert without distinguishing them, and
//! local state is left exactly as it was before the attempt.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::PlateRecord;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Origin of the detection backend. The client is served separately from
/// the recognition pipeline, so requests target a fixed foreign origin.
const API_BASE: &str = "http://localhost:5000";

#[cfg(any(test, feature = "hydrate"))]
fn plates_endpoint() -> String {
    format!("{API_BASE}/api/plates")
}

#[cfg(any(test, feature = "hydrate"))]
fn plate_endpoint(id: i64) -> String {
    format!("{API_BASE}/api/plates/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_multiple_endpoint() -> String {
    format!("{API_BASE}/api/delete-multiple")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_email_endpoint() -> String {
    format!("{API_BASE}/api/sendemail")
}

/// URL of a record's cropped plate image.
pub fn plate_image_url(filename: &str) -> String {
    format!("{API_BASE}/plates/{filename}")
}

/// URL of a record's full camera frame.
pub fn original_image_url(filename: &str) -> String {
    format!("{API_BASE}/original_images/{filename}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_request_failed_message(status: u16) -> String {
    format!("list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_request_failed_message(status: u16) -> String {
    format!("update request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_request_failed_message(status: u16) -> String {
    format!("delete request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bulk_delete_request_failed_message(status: u16) -> String {
    format!("bulk delete request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_email_request_failed_message(status: u16) -> String {
    format!("send email request failed: {status}")
}

/// Fetch the full detection list from `GET /api/plates`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body does not decode.
pub async fn fetch_plates() -> Result<Vec<PlateRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&plates_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_request_failed_message(resp.status()));
        }
        resp.json::<Vec<PlateRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Update one record's plate text via `PUT /api/plates/{id}`.
///
/// The response body is ignored; on success the caller patches its local
/// cache with the value it sent.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn update_plate(id: i64, plate: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "plate": plate });
        let resp = gloo_net::http::Request::put(&plate_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(update_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, plate);
        Err("not available on server".to_owned())
    }
}

/// Delete one record via `DELETE /api/plates/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_plate(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&plate_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Delete a set of records in one request via `POST /api/delete-multiple`.
///
/// The backend either fully succeeds or the whole call is treated as a
/// failure; there is no partial-success reporting.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_plates(ids: &[i64]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "ids": ids });
        let resp = gloo_net::http::Request::post(&delete_multiple_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(bulk_delete_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    message: Option<String>,
}

/// Email a set of records via `POST /api/sendemail`.
///
/// Returns the server-provided status message when one is present; callers
/// supply their own fallback text. Mutates nothing on either side of the
/// wire from the client's point of view.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn send_email(ids: &[i64]) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "ids": ids });
        let resp = gloo_net::http::Request::post(&send_email_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(send_email_request_failed_message(resp.status()));
        }
        let body: Option<SendEmailResponse> = resp.json().await.ok();
        Ok(body.and_then(|b| b.message))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Err("not available on server".to_owned())
    }
}
