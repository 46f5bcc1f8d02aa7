//! Request types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub person_id: String,
    /// `data:image/<type>;base64,<payload>`
    pub image_base64: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeRequest {
    pub image_base64: String,
}
