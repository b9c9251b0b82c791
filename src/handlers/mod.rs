pub mod gallery_handlers;
pub mod health_handlers;
pub mod qr_handlers;
pub mod share_handlers;
