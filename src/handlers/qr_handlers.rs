use actix_web::{HttpResponse, Responder, Result, error, http, web};
use validator::Validate;

use crate::models::payment::PaymentIntent;
use crate::models::theme::{builtin_themes, resolve_theme};
use crate::structs::qr_request::{CreateQrRequest, QrImageParams, QrResponse};
use crate::utils::deep_link::build_deep_link;
use crate::utils::qr_render::{render_png, render_svg};

/// Build a UPI deep link for the submitted payment details
pub async fn create_qr(web::Json(req): web::Json<CreateQrRequest>) -> Result<impl Responder> {
    // Validate the payment details
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let intent = PaymentIntent::new(req.upi_id, req.name, req.amount);
    let theme = resolve_theme(
        req.theme.as_deref(),
        req.foreground.as_deref(),
        req.background.as_deref(),
    );
    let qr_value = build_deep_link(&intent);

    Ok(HttpResponse::Ok().json(QrResponse { qr_value, theme }))
}

/// Render a deep-link value as a themed QR image (SVG by default, PNG on
/// request)
pub async fn render_qr_image(query: web::Query<QrImageParams>) -> Result<HttpResponse> {
    let params = query.into_inner();

    if params.value.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing QR value"
        })));
    }

    let foreground = params.fg.as_deref().unwrap_or("#000000");
    let background = params.bg.as_deref().unwrap_or("#FFFFFF");

    match params.format.as_deref().unwrap_or("svg") {
        "png" => {
            let size = params.size.unwrap_or(400);
            let png = render_png(&params.value, foreground, background, size)
                .map_err(|e| error::ErrorInternalServerError(format!("QR rendering error: {}", e)))?;

            let mut response = HttpResponse::Ok();
            response.content_type("image/png");
            if params.download.unwrap_or(false) {
                let stem = params.name.as_deref().unwrap_or("upi");
                let filename = format!(
                    "{}-qr-code.png",
                    stem.split_whitespace().collect::<Vec<_>>().join("-")
                );
                response.append_header((
                    http::header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ));
            }
            Ok(response.body(png))
        }
        "svg" => {
            let size = params.size.unwrap_or(200);
            let svg = render_svg(&params.value, foreground, background, size)
                .map_err(|e| error::ErrorInternalServerError(format!("QR rendering error: {}", e)))?;

            Ok(HttpResponse::Ok().content_type("image/svg+xml").body(svg))
        }
        other => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Unsupported image format: {}", other)
        }))),
    }
}

/// List the built-in theme palette
pub async fn get_themes() -> impl Responder {
    HttpResponse::Ok().json(builtin_themes())
}
