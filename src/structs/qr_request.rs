use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::theme::ThemeSpec;

#[derive(Deserialize, Validate)]
pub struct CreateQrRequest {
    #[validate(length(min = 1, message = "UPI ID is required"))]
    pub upi_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    pub theme: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
}

#[derive(Serialize)]
pub struct QrResponse {
    pub qr_value: String,
    pub theme: ThemeSpec,
}

#[derive(Deserialize)]
pub struct QrImageParams {
    pub value: String,
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub format: Option<String>, // "svg" (default) or "png"
    pub size: Option<u32>,
    pub download: Option<bool>,
    pub name: Option<String>, // filename stem for downloads
}
