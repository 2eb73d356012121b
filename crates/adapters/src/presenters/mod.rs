use memeforge_application::ShareOutcome;
use memeforge_domain::{GalleryEntry, Surface};

pub fn present_entry_row(entry: &GalleryEntry) -> String {
    format!(
        "{}\t{}\t{} payload bytes",
        entry.id,
        entry.created_at,
        entry.payload.len()
    )
}

pub fn present_loaded(surface: Surface) -> String {
    format!(
        "image loaded ({}x{}), add your captions",
        surface.width, surface.height
    )
}

pub fn present_saved(entry: &GalleryEntry) -> String {
    format!("meme added to the gallery as {}", entry.id)
}

pub fn present_share_outcome(outcome: ShareOutcome) -> String {
    match outcome {
        ShareOutcome::Shared => "meme shared".to_string(),
        ShareOutcome::CopiedToClipboard => "meme copied to the clipboard".to_string(),
        ShareOutcome::DownloadOnly => {
            "sharing not supported on this host, use export instead".to_string()
        }
    }
}
