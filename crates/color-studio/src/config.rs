use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Environment variable naming a font file to use instead of the search list.
pub const FONT_ENV: &str = "COLOR_STUDIO_FONT";

/// Startup settings for the studio window.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    /// Initial logical window size.
    pub size: (f64, f64),
    pub min_size: (f64, f64),
    /// Length of the background and text color transitions.
    pub fade: Duration,
    /// Font files tried in order; the first readable one is used.
    pub font_paths: Vec<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Color Studio".to_string(),
            size: (1024.0, 720.0),
            min_size: (480.0, 360.0),
            fade: Duration::from_millis(1000),
            font_paths: [
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "/Library/Fonts/Arial.ttf",
                "C:\\Windows\\Fonts\\segoeui.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

impl StudioConfig {
    /// Defaults, with the font named by `COLOR_STUDIO_FONT` tried first.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(FONT_ENV) {
            config.font_paths.insert(0, PathBuf::from(path));
        }
        config
    }

    /// Reads the first font file that exists.
    pub fn load_font(&self) -> Result<(PathBuf, Vec<u8>)> {
        for path in &self.font_paths {
            match std::fs::read(path) {
                Ok(bytes) => return Ok((path.clone(), bytes)),
                Err(e) => log::debug!("font {} not usable: {e}", path.display()),
            }
        }
        if self.font_paths.is_empty() {
            bail!("no font paths configured");
        }
        let tried: Vec<String> = self.font_paths.iter().map(|p| p.display().to_string()).collect();
        Err(anyhow::anyhow!("tried {}", tried.join(", ")))
            .with_context(|| format!("no usable font found; set {FONT_ENV} to a .ttf file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fade_is_one_second() {
        assert_eq!(StudioConfig::default().fade, Duration::from_millis(1000));
    }

    #[test]
    fn load_font_reports_every_path() {
        let config = StudioConfig {
            font_paths: vec![PathBuf::from("/nonexistent/a.ttf"), PathBuf::from("/nonexistent/b.ttf")],
            ..StudioConfig::default()
        };
        let err = config.load_font().expect_err("no font should load");
        let chain = format!("{err:#}");
        assert!(chain.contains(FONT_ENV));
        assert!(chain.contains("/nonexistent/a.ttf") && chain.contains("/nonexistent/b.ttf"));
    }

    #[test]
    fn load_font_with_no_paths_fails() {
        let config = StudioConfig { font_paths: Vec::new(), ..StudioConfig::default() };
        assert!(config.load_font().is_err());
    }

    #[test]
    fn load_font_returns_first_readable() {
        let dir = std::env::temp_dir().join(format!("color-studio-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let font = dir.join("fake.ttf");
        std::fs::write(&font, b"bytes").expect("write");
        let config = StudioConfig {
            font_paths: vec![dir.join("missing.ttf"), font.clone()],
            ..StudioConfig::default()
        };
        let (path, bytes) = config.load_font().expect("font");
        assert_eq!(path, font);
        assert_eq!(bytes, b"bytes");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
