use std::fs;
use std::path::PathBuf;

use memeforge_application::{ApplicationError, ExportSink};

/// Writes exported frames into a fixed directory, the CLI's stand-in
/// for a browser download.
#[derive(Debug, Clone)]
pub struct FsExportSink {
    export_dir: PathBuf,
}

impl FsExportSink {
    pub fn new(export_dir: String) -> Self {
        Self {
            export_dir: PathBuf::from(export_dir),
        }
    }
}

impl ExportSink for FsExportSink {
    fn export(&self, file_name: &str, png: &[u8]) -> Result<String, ApplicationError> {
        if file_name.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "export file name must not be empty".to_string(),
            ));
        }

        fs::create_dir_all(&self.export_dir)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        let destination = self.export_dir.join(file_name);
        fs::write(&destination, png).map_err(|error| ApplicationError::Io(error.to_string()))?;
        Ok(destination.to_string_lossy().to_string())
    }
}
