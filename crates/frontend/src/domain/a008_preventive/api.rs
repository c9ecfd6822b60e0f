use crate::shared::api_client;
use contracts::domain::a008_preventive::aggregate::{PreventiveAttachment, ATTACHMENT_FILE_FIELD};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

fn attachments_path(preventive_id: EntityId) -> String {
    format!("/preventivos/{}/anexos", preventive_id)
}

pub async fn fetch_attachments(
    preventive_id: EntityId,
) -> Result<Vec<PreventiveAttachment>, ApiError> {
    let raw = api_client::get_json(&attachments_path(preventive_id)).await?;
    api_client::decode_rows(raw, PreventiveAttachment::from_raw)
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::decode(format!("{:?}", e))
}

pub async fn upload_attachment(preventive_id: EntityId, file: File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(ATTACHMENT_FILE_FIELD, &file, &file.name())
        .map_err(js_error)?;
    api_client::post_multipart(&attachments_path(preventive_id), form).await?;
    Ok(())
}

pub async fn delete_attachment(
    preventive_id: EntityId,
    attachment_id: EntityId,
) -> Result<(), ApiError> {
    api_client::delete(&format!(
        "{}/{}",
        attachments_path(preventive_id),
        attachment_id
    ))
    .await
}
