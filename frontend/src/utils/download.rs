use wasm_bindgen::JsCast;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Hands `bytes` to the browser as a file download named `filename`.
pub fn trigger_blob_download(filename: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&anchor)
        .map_err(|_| "Append failed".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// `attendance-report_<from>_<to>.csv`
pub fn report_filename(from: chrono::NaiveDate, to: chrono::NaiveDate) -> String {
    format!(
        "attendance-report_{}_{}.csv",
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d")
    )
}
