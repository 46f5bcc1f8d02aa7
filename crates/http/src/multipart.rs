//! Multipart form reading for the image upload endpoints.

use axum::extract::Multipart;
use facevault_core::{ValidationError, validate_image_file};

use crate::api_error::ApiError;

/// Fields of an `image` (+ optional `person_id`) form.
#[derive(Debug, Default)]
pub(crate) struct ImageForm {
    pub person_id: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl ImageForm {
    pub fn person_id(&mut self) -> Result<String, ValidationError> {
        self.person_id
            .take()
            .filter(|id| !id.trim().is_empty())
            .ok_or(ValidationError::MissingField("person_id"))
    }

    pub fn image(&mut self) -> Result<Vec<u8>, ValidationError> {
        self.image.take().ok_or(ValidationError::MissingField("image"))
    }
}

/// Read the form, rejecting an `image` part whose declared type is not allowed
/// before its body is buffered.
pub(crate) async fn read_image_form(mut multipart: Multipart) -> Result<ImageForm, ApiError> {
    let mut form = ImageForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("person_id") => form.person_id = Some(field.text().await?),
            Some("image") => {
                if let Err(e) = validate_image_file(field.content_type()) {
                    tracing::warn!(content_type = ?field.content_type(), "rejected upload type");
                    return Err(e.into());
                }
                form.image = Some(field.bytes().await?.to_vec());
            },
            other => tracing::debug!(field = ?other, "ignoring multipart field"),
        }
    }
    Ok(form)
}
