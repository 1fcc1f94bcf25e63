use serde::Serialize;

pub mod character;
pub mod favorite;
pub mod meta;
pub mod planet;
pub mod user;

/// Confirmation body returned by every DELETE endpoint.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
