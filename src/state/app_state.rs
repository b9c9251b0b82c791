use crate::storage::gallery::GalleryStore;

/// Shared application state: the gallery with its injected storage backend,
/// constructed once at startup.
pub struct AppState {
    pub gallery: GalleryStore,
}
