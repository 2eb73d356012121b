#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gallery_path: String,
    pub gallery_key: String,
    pub export_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gallery_path: "gallery.sqlite3".to_string(),
            gallery_key: "memeforge-gallery".to_string(),
            export_dir: "exports".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_paths_and_a_fixed_key() {
        let config = AppConfig::default();
        assert_eq!(config.gallery_path, "gallery.sqlite3");
        assert_eq!(config.gallery_key, "memeforge-gallery");
        assert_eq!(config.export_dir, "exports");
    }
}
