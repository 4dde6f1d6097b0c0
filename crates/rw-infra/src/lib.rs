pub mod answers;
pub mod config;
pub mod http;
pub mod photo;

pub use answers::{load_answers, Answers};
pub use config::{PreviewConfig, RegistrationClientConfig};
pub use http::HttpRegistrationGateway;
pub use photo::{load_photo_file, ImagePreviewRenderer, InMemoryPreviewStore};
