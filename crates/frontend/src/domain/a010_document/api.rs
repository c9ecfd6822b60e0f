use crate::shared::api_client;
use contracts::domain::a010_document::aggregate::{upload_fields, Document};
use contracts::shared::api_error::ApiError;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

fn js_error(e: JsValue) -> ApiError {
    ApiError::decode(format!("{:?}", e))
}

/// `POST /documentos` as multipart: the file plus the metadata fields.
pub async fn upload_document(document: &Document, file: File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(upload_fields::FILE, &file, &file.name())
        .map_err(js_error)?;
    for (name, value) in document.upload_text_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    log::debug!("uploading document '{}' ({} bytes)", file.name(), file.size());
    api_client::post_multipart("/documentos", form).await?;
    Ok(())
}
