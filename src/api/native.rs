use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

use super::{ApiRequest, ApiResponse, Method};
use crate::config::ClientConfig;
use crate::error::ApiError;

pub fn execute(config: &ClientConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let url = config.url(&request.path());
    let builder = match request.method() {
        Method::Get => client.get(&url),
        Method::Post => client.post(&url),
        Method::Patch => client.patch(&url),
    };
    let builder = with_body(with_headers(builder, config), request)?;

    let response = builder
        .send()
        .map_err(|e| ApiError::Network(format!("{url}: {e}")))?;
    let status = response.status();
    let text = response
        .text()
        .map_err(|e| ApiError::Network(format!("{url}: {e}")))?;

    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            url,
            body: text.trim().to_string(),
        });
    }

    request.decode(&text)
}

fn with_headers(builder: RequestBuilder, config: &ClientConfig) -> RequestBuilder {
    let builder = builder
        .header(USER_AGENT, concat!("campus-quiz/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json");
    match &config.auth_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

fn with_body(builder: RequestBuilder, request: &ApiRequest) -> Result<RequestBuilder, ApiError> {
    if let ApiRequest::UploadAsset { upload, .. } = request {
        let part = Part::bytes(upload.bytes.as_ref().clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        return Ok(builder.multipart(Form::new().part("file", part)));
    }

    Ok(match request.json_body()? {
        Some(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
        None => builder,
    })
}
