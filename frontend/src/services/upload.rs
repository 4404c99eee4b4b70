//! Document upload with progress reporting.
//!
//! `fetch` has no upload progress events, so the transfer goes through
//! `XMLHttpRequest`. The request's load/error/abort handlers are wired
//! straight to a promise's resolve/reject functions and awaited.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::api_url;
use crate::services::api::error_detail;
use crate::types::{AppError, AppResult, UploadResponse};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Interpret a 2xx upload body. A body that is not the expected JSON is
/// still a finished upload, just one without a task id.
pub fn parse_upload_body(body: &str) -> UploadResponse {
    match serde_json::from_str::<UploadResponse>(body) {
        Ok(response) => response,
        Err(e) => {
            log::warn!("⚠️ Upload body is not valid JSON ({}), continuing without task id", e);
            UploadResponse::default()
        }
    }
}

/// Send `file` as multipart field `file` to the scan upload endpoint.
///
/// `on_progress` receives percentages computed from the browser's upload
/// events; callers clamp them.
pub async fn upload_document(file: File, on_progress: impl Fn(f64) + 'static) -> AppResult<UploadResponse> {
    let form = FormData::new().map_err(|e| AppError::Upload(js_error(e)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| AppError::Upload(js_error(e)))?;

    let xhr = XmlHttpRequest::new().map_err(|e| AppError::Upload(js_error(e)))?;
    xhr.open("POST", &api_url("/scan/upload"))
        .map_err(|e| AppError::Upload(js_error(e)))?;

    let upload = xhr.upload().map_err(|e| AppError::Upload(js_error(e)))?;
    let onprogress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() && ev.total() > 0.0 {
            on_progress(ev.loaded() / ev.total() * 100.0);
        }
    });
    upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));

    let mut wire = |resolve: js_sys::Function, reject: js_sys::Function| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
        xhr.set_onabort(Some(&reject));
        xhr.set_ontimeout(Some(&reject));
    };
    let done = js_sys::Promise::new(&mut wire);

    log::info!("📤 Uploading {} ({} bytes)", file.name(), file.size());
    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| AppError::Network(js_error(e)))?;

    let outcome = JsFuture::from(done).await;
    upload.set_onprogress(None);
    drop(onprogress);
    outcome.map_err(|_| AppError::Network("connection to the upload endpoint failed".to_string()))?;

    let status = xhr.status().map_err(|e| AppError::Network(js_error(e)))?;
    let body = xhr
        .response_text()
        .map_err(|e| AppError::Network(js_error(e)))?
        .unwrap_or_default();

    if !(200..300).contains(&status) {
        return Err(AppError::Http {
            status,
            message: error_detail(&body).unwrap_or_else(|| "Upload rejected".to_string()),
        });
    }

    let response = parse_upload_body(&body);
    log::info!("✅ Upload accepted, task id: {:?}", response.task_id);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_body_with_task_id() {
        let response = parse_upload_body(
            r#"{"task_id": "9b2f", "message": "Unified fraud analysis concluded."}"#,
        );
        assert_eq!(response.task_id.as_deref(), Some("9b2f"));
    }

    #[test]
    fn test_malformed_upload_body_has_no_task_id() {
        assert_eq!(parse_upload_body("<html>ok</html>").task_id, None);
        assert_eq!(parse_upload_body("").task_id, None);
    }
}
