use serde::{Deserialize, Serialize};

use crate::models::theme::ThemeSpec;

#[derive(Serialize)]
pub struct ShareLinkResponse {
    pub share_url: String,
}

#[derive(Deserialize)]
pub struct SharedQrParams {
    pub qr: Option<String>,
}

#[derive(Serialize)]
pub struct SharedQrResponse {
    pub upi_id: String,
    pub name: String,
    pub amount: String,
    pub theme: ThemeSpec,
    pub qr_value: String,
}
