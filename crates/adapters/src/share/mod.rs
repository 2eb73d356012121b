use memeforge_application::{ApplicationError, ClipboardTarget, ShareTarget};

/// A headless host has no native share sheet; reporting the capability
/// as absent lets the service walk its fallback chain.
#[derive(Debug, Default)]
pub struct HeadlessShareTarget;

impl ShareTarget for HeadlessShareTarget {
    fn share(&self, _file_name: &str, _png: &[u8]) -> Result<bool, ApplicationError> {
        Ok(false)
    }
}

/// No clipboard-image support either; the chain ends at download-only.
#[derive(Debug, Default)]
pub struct HeadlessClipboard;

impl ClipboardTarget for HeadlessClipboard {
    fn copy_image(&self, _png: &[u8]) -> Result<bool, ApplicationError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_capabilities_are_absent_not_failing() {
        assert!(!HeadlessShareTarget
            .share("meme.png", b"png")
            .expect("absence is not an error"));
        assert!(!HeadlessClipboard
            .copy_image(b"png")
            .expect("absence is not an error"));
    }
}
