mod file_loader;
mod preview_renderer;
mod preview_store;

pub use file_loader::load_photo_file;
pub use preview_renderer::ImagePreviewRenderer;
pub use preview_store::InMemoryPreviewStore;
