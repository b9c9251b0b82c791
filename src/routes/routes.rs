use actix_web::web;

use crate::handlers::gallery_handlers::{
    clear_gallery, delete_from_gallery, get_gallery, get_gallery_stats, save_to_gallery,
};
use crate::handlers::health_handlers::health_check;
use crate::handlers::qr_handlers::{create_qr, get_themes, render_qr_image};
use crate::handlers::share_handlers::{create_share_link, view_shared};

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Shared QR viewer at the root level, matching the `<base>?qr=` link shape
    cfg.route("/view", web::get().to(view_shared));
    cfg.service(
        web::scope("/api")
            .route("/qr", web::post().to(create_qr))
            .route("/qr/image", web::get().to(render_qr_image))
            .route("/themes", web::get().to(get_themes))
            .route("/gallery", web::post().to(save_to_gallery))
            .route("/gallery", web::get().to(get_gallery))
            .route("/gallery", web::delete().to(clear_gallery))
            .route("/gallery/stats", web::get().to(get_gallery_stats))
            .route("/gallery/{id}", web::delete().to(delete_from_gallery))
            .route("/share", web::post().to(create_share_link))
            .route("/health/check", web::get().to(health_check)),
    );
}
