/// Image download collaborator: rewrites remote image links in rendered note
/// content to locally stored copies under `assets_dir`.
#[async_trait::async_trait]
pub trait ImageReplacer: Send + Sync {
    async fn replace_images(&self, content: String, assets_dir: &str) -> String;
}

/// Leaves content untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepRemoteImages;

#[async_trait::async_trait]
impl ImageReplacer for KeepRemoteImages {
    async fn replace_images(&self, content: String, _assets_dir: &str) -> String {
        content
    }
}
