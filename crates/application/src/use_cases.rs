use memeforge_domain::Color;

#[derive(Debug, Clone)]
pub struct LoadImageCommand {
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SetCaptionsCommand {
    pub top: String,
    pub bottom: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SetStyleCommand {
    pub font_size: u32,
    pub text_color: Color,
    pub outline_color: Color,
}

#[derive(Debug, Clone, Default)]
pub struct ResetEditorCommand;

#[derive(Debug, Clone, Default)]
pub struct RenderFrameCommand;

#[derive(Debug, Clone, Default)]
pub struct SaveToGalleryCommand;

#[derive(Debug, Clone, Default)]
pub struct ListGalleryCommand;

#[derive(Debug, Clone)]
pub struct ReuseEntryCommand {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct ExportFrameCommand {
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct ExportEntryCommand {
    pub id: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShareFrameCommand;

#[derive(Debug, Clone, Default)]
pub struct ClearGalleryCommand;
