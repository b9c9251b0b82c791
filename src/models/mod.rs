pub mod gallery;
pub mod payment;
pub mod theme;
