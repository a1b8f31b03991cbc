//! Requests to the analysis backend.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, Response};
use spectrum_core::messages::{parse_table_update, parse_upload_result, TableUpdate, UploadResult};

/// POST `init` to `url` and return the response body. Non-2xx statuses are errors.
async fn post_text(url: &str, init: &RequestInit) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    let request = Request::new_with_str_and_init(url, init)
        .map_err(|e| format!("request: {e:?}"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Response cast failed".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("text: {e:?}"))?;
    text.as_string().ok_or("Not a string".to_string())
}

/// Send `file` as multipart field `file`. The browser sets the boundary header.
pub async fn upload_file(url: &str, file: &File) -> Result<UploadResult, String> {
    let form = FormData::new().map_err(|e| format!("FormData: {e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("FormData append: {e:?}"))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let body = post_text(url, &init).await?;
    parse_upload_result(&body)
}

/// Send a JSON `body` and decode the eight table values.
pub async fn update_table(url: &str, body: &str) -> Result<TableUpdate, String> {
    let headers = Headers::new().map_err(|e| format!("Headers: {e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Headers set: {e:?}"))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let text = post_text(url, &init).await?;
    parse_table_update(&text)
}
