pub mod gallery_request;
pub mod qr_request;
pub mod share_request;
