//! Profile photo selection and preview lifecycle.
//!
//! 头像选择与预览资源生命周期。

mod file;
mod handler;
mod mime;
mod preview;

pub use file::{PhotoFile, PhotoSource};
pub use handler::{PhotoHandler, PhotoRejected};
pub use mime::MimeType;
pub use preview::{PreviewId, PreviewImage, PreviewLease};
