use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::{ApiRequest, ApiResponse};
use crate::config::ClientConfig;
use crate::error::ApiError;

fn js_err(context: &str, err: JsValue) -> ApiError {
    ApiError::Request(format!("{context}: {err:?}"))
}

fn multipart_body(request: &ApiRequest) -> Result<Option<JsValue>, ApiError> {
    let ApiRequest::UploadAsset { upload, .. } = request else {
        return Ok(None);
    };
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| js_err("blob", e))?;
    let form = FormData::new().map_err(|e| js_err("form data", e))?;
    form.append_with_blob_and_filename("file", &blob, &upload.file_name)
        .map_err(|e| js_err("form data", e))?;
    Ok(Some(form.into()))
}

pub async fn execute(config: &ClientConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let url = config.url(&request.path());

    let opts = RequestInit::new();
    opts.set_method(request.method().as_str());
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    let multipart = multipart_body(request)?;
    let json = if multipart.is_none() { request.json_body()? } else { None };
    if let Some(form) = &multipart {
        opts.set_body(form);
    } else if let Some(body) = &json {
        opts.set_body(&JsValue::from_str(body));
    }

    let fetch_request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_err("request", e))?;
    let headers = fetch_request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| js_err("headers", e))?;
    if json.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| js_err("headers", e))?;
    }
    if let Some(token) = &config.auth_token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| js_err("headers", e))?;
    }

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Request("no window in wasm environment".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|e| ApiError::Network(format!("{url}: {e:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".into()))?;

    let text_promise = response.text().map_err(|e| js_err("response body", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::Network(format!("{url}: {e:?}")))?
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".into()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            url,
            body: text.trim().to_string(),
        });
    }

    request.decode(&text)
}
