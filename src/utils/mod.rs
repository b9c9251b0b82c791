pub mod deep_link;
pub mod qr_render;
pub mod share_codec;
