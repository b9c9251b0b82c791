use actix_web::{HttpResponse, Responder, Result, web};
use validator::Validate;

use crate::models::payment::PaymentIntent;
use crate::models::theme::resolve_theme;
use crate::structs::qr_request::CreateQrRequest;
use crate::structs::share_request::{ShareLinkResponse, SharedQrParams, SharedQrResponse};
use crate::utils::deep_link::build_deep_link;
use crate::utils::share_codec::{decode_shareable, encode_shareable};

/// Create a shareable link that embeds the full QR state in its `qr`
/// query parameter
pub async fn create_share_link(
    web::Json(req): web::Json<CreateQrRequest>,
) -> Result<impl Responder> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let intent = PaymentIntent::new(req.upi_id, req.name, req.amount);
    let theme = resolve_theme(
        req.theme.as_deref(),
        req.foreground.as_deref(),
        req.background.as_deref(),
    );

    // Construct the viewer URL
    let host = std::env::var("HOST").unwrap_or_else(|_| String::from("http://localhost:8080"));
    let share_url = encode_shareable(&intent, &theme, &format!("{}/view", host));

    Ok(HttpResponse::Ok().json(ShareLinkResponse { share_url }))
}

/// Decode a shared QR link and rebuild the deep link it carries
pub async fn view_shared(query: web::Query<SharedQrParams>) -> Result<impl Responder> {
    let encoded = match &query.qr {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "No QR data found in URL"
            })));
        }
    };

    match decode_shareable(encoded) {
        Ok(payload) => {
            let intent = payload.intent();
            let qr_value = build_deep_link(&intent);
            let theme = payload.theme_spec();

            Ok(HttpResponse::Ok().json(SharedQrResponse {
                upi_id: intent.upi_id,
                name: intent.name,
                amount: intent.amount,
                theme,
                qr_value,
            }))
        }
        Err(e) => {
            log::warn!("Failed to decode shared QR payload: {}", e);
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Invalid QR data"
            })))
        }
    }
}
