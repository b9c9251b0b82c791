use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SaveQrRequest {
    pub upi_id: String,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    pub theme: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub qr_value: String,
}

#[derive(Deserialize)]
pub struct GallerySearchParams {
    pub search: Option<String>,
    pub theme: Option<String>,
}

#[derive(Serialize)]
pub struct SaveQrResponse {
    pub id: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct GalleryStatsResponse {
    pub total: usize,
    pub themes: usize,
    pub capacity: usize,
}
