use crate::pdf::ExportOptions;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest page side accepted, in pixels. A3 at 1200 dpi still fits.
pub const MAX_PAGE_SIDE_PX: u32 = 20_000;

/// Page and export configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    // Page geometry
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub dpi: f32,
    pub background: Background,

    // Output
    pub output_dir: Option<PathBuf>,
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            dpi: 300.0,
            background: Background::WHITE,
            output_dir: None,
            open_after_export: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let settings: Settings = serde_json::from_slice(&bytes)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Page size in pixels
    pub fn page_dimensions_px(&self) -> (u32, u32) {
        self.paper_size.dimensions_px(self.orientation, self.dpi)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            dpi: self.dpi,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(PageError::Config(format!(
                "DPI must be a positive number, got {}",
                self.dpi
            )));
        }

        let (width, height) = self.page_dimensions_px();
        if width == 0 || height == 0 {
            return Err(PageError::Config(format!(
                "{} paper at {} dpi is {}x{} pixels",
                self.paper_size.name(),
                self.dpi,
                width,
                height
            )));
        }
        if width > MAX_PAGE_SIDE_PX || height > MAX_PAGE_SIDE_PX {
            return Err(PageError::Config(format!(
                "{} paper at {} dpi is {}x{} pixels, over the {} pixel limit",
                self.paper_size.name(),
                self.dpi,
                width,
                height,
                MAX_PAGE_SIDE_PX
            )));
        }

        Ok(())
    }
}
