use std::collections::HashSet;

use actix_web::{HttpResponse, Responder, Result, error, web};

use crate::models::gallery::GalleryRecord;
use crate::models::payment::PaymentIntent;
use crate::models::theme::resolve_theme;
use crate::state::app_state::AppState;
use crate::storage::gallery::GALLERY_CAPACITY;
use crate::structs::gallery_request::{
    GallerySearchParams, GalleryStatsResponse, SaveQrRequest, SaveQrResponse,
};

/// Save a generated QR code to the gallery
pub async fn save_to_gallery(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<SaveQrRequest>,
) -> Result<impl Responder> {
    let intent = PaymentIntent::new(req.upi_id, req.name, req.amount);

    // Saving is gated on a complete intent and an already-built deep link
    if !intent.is_complete() || req.qr_value.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "UPI ID and name are required"
        })));
    }

    let theme = resolve_theme(
        req.theme.as_deref(),
        req.foreground.as_deref(),
        req.background.as_deref(),
    );
    let record = GalleryRecord::new(intent, theme, req.qr_value);
    let response = SaveQrResponse {
        id: record.id.clone(),
        created_at: record.created_at.clone(),
    };

    app_state
        .gallery
        .insert(record)
        .map_err(|e| error::ErrorInternalServerError(format!("Failed to persist gallery: {}", e)))?;

    Ok(HttpResponse::Created().json(response))
}

/// List saved QR codes, newest first
pub async fn get_gallery(
    app_state: web::Data<AppState>,
    query: web::Query<GallerySearchParams>,
) -> Result<impl Responder> {
    let records = app_state.gallery.list();

    // Search and theme filters are layered here on the read side; the store
    // itself never filters
    let filtered: Vec<GalleryRecord> = records
        .into_iter()
        .filter(|record| {
            let matches_search = match &query.search {
                Some(term) if !term.is_empty() => {
                    let term = term.to_lowercase();
                    record.payment_intent.name.to_lowercase().contains(&term)
                        || record.payment_intent.upi_id.to_lowercase().contains(&term)
                }
                _ => true,
            };
            let matches_theme = match &query.theme {
                Some(id) if !id.is_empty() => record.theme.id == *id,
                _ => true,
            };
            matches_search && matches_theme
        })
        .collect();

    Ok(HttpResponse::Ok().json(filtered))
}

/// Gallery usage counters
pub async fn get_gallery_stats(app_state: web::Data<AppState>) -> Result<impl Responder> {
    let records = app_state.gallery.list();
    let themes = records
        .iter()
        .map(|record| record.theme.id.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(HttpResponse::Ok().json(GalleryStatsResponse {
        total: records.len(),
        themes,
        capacity: GALLERY_CAPACITY,
    }))
}

/// Remove one QR code from the gallery
pub async fn delete_from_gallery(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder> {
    let id = path.into_inner();

    app_state
        .gallery
        .remove(&id)
        .map_err(|e| error::ErrorInternalServerError(format!("Failed to persist gallery: {}", e)))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Removed from gallery"
    })))
}

/// Remove every QR code from the gallery
pub async fn clear_gallery(app_state: web::Data<AppState>) -> Result<impl Responder> {
    app_state
        .gallery
        .clear()
        .map_err(|e| error::ErrorInternalServerError(format!("Failed to clear gallery: {}", e)))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Gallery cleared"
    })))
}
