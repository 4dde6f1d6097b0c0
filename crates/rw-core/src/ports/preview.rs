use crate::photo::{PhotoFile, PreviewId, PreviewImage};

/// Derives a displayable rendition from a selected image file.
pub trait PreviewRendererPort: Send + Sync {
    fn render(&self, file: &PhotoFile) -> anyhow::Result<PreviewImage>;
}

/// Holds live previews. Every acquired id is released exactly once.
pub trait PreviewStorePort: Send + Sync {
    fn acquire(&self, image: PreviewImage) -> PreviewId;
    fn release(&self, id: &PreviewId);
}

#[cfg(test)]
mockall::mock! {
    pub PreviewRenderer {}

    impl PreviewRendererPort for PreviewRenderer {
        fn render(&self, file: &PhotoFile) -> anyhow::Result<PreviewImage>;
    }
}

#[cfg(test)]
mockall::mock! {
    pub PreviewStore {}

    impl PreviewStorePort for PreviewStore {
        fn acquire(&self, image: PreviewImage) -> PreviewId;
        fn release(&self, id: &PreviewId);
    }
}
