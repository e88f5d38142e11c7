//! Application state shared by the front-ends
//!
//! A [`Session`] owns the page queue, the list of files that produced it, and
//! the active [`Settings`]. Each user action maps to one method, and every
//! method reports back with [`Status`] values instead of failing, so a front-end
//! only has to display them.

use crate::compose::compose;
use crate::io::load_image;
use crate::naming::output_path;
use crate::pdf::export_pdf;
use crate::platform::Desktop;
use crate::queue::PageQueue;
use crate::settings::Settings;
use crate::types::*;
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of a user action, displayed as a short message
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Added { path: PathBuf },
    Skipped { path: PathBuf, reason: String },
    NothingSelected,
    Converted { path: PathBuf, pages: usize },
    ExportFailed { reason: String },
    NothingToConvert,
    Cleared { count: usize },
    NothingToClear,
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Skipped { .. } | Status::ExportFailed { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Added { path } => write!(f, "Added {}", path.display()),
            Status::Skipped { reason, .. } => write!(f, "Skipped: {reason}"),
            Status::NothingSelected => write!(f, "No Files Selected."),
            Status::Converted { path, pages } => {
                write!(f, "Done! Saved {pages} page(s) to {}", path.display())
            }
            Status::ExportFailed { reason } => write!(f, "Export failed: {reason}"),
            Status::NothingToConvert => write!(f, "No Files to Convert."),
            Status::Cleared { count } => write!(f, "Cleared {count} file(s)."),
            Status::NothingToClear => write!(f, "No Files to Clear."),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    queue: PageQueue,
    files: Vec<PathBuf>,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            queue: PageQueue::new(),
            files: Vec::new(),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. A change of page size is refused while pages
    /// are queued.
    pub fn set_settings(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        if !self.queue.is_empty()
            && settings.page_dimensions_px() != self.settings.page_dimensions_px()
        {
            return Err(PageError::Config(
                "Clear the queued files before changing the page size".to_string(),
            ));
        }
        self.settings = settings;
        Ok(())
    }

    pub fn queue(&self) -> &PageQueue {
        &self.queue
    }

    /// Source files of the queued pages, in page order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn page_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Load, compose and queue each file in order. A file that fails is
    /// reported and the rest are still processed.
    pub fn add_images<P: AsRef<Path>>(&mut self, paths: &[P]) -> Vec<Status> {
        if paths.is_empty() {
            return vec![logged(Status::NothingSelected)];
        }

        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let status = match self.add_image(path) {
                    Ok(()) => Status::Added {
                        path: path.to_owned(),
                    },
                    Err(e) => Status::Skipped {
                        path: path.to_owned(),
                        reason: e.to_string(),
                    },
                };
                logged(status)
            })
            .collect()
    }

    fn add_image(&mut self, path: &Path) -> Result<()> {
        let image = load_image(path)?;
        let (page_width, page_height) = self.settings.page_dimensions_px();
        let page = compose(&image, page_width, page_height, self.settings.background)?;
        self.queue.push(page)?;
        self.files.push(path.to_owned());
        Ok(())
    }

    /// Export the queue as one PDF named after `base_name` (or `now` when
    /// blank), creating the output directory if needed. The queue is emptied
    /// on success and kept on failure.
    pub fn convert<D, Tz>(&mut self, base_name: &str, desktop: &D, now: &DateTime<Tz>) -> Status
    where
        D: Desktop + ?Sized,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if self.queue.is_empty() {
            return logged(Status::NothingToConvert);
        }

        let dir = self
            .settings
            .output_dir
            .clone()
            .unwrap_or_else(|| desktop.default_output_dir());
        let path = output_path(&dir, base_name, now);

        if let Err(e) = self.export(&dir, &path) {
            return logged(Status::ExportFailed {
                reason: e.to_string(),
            });
        }

        let pages = self.queue.clear();
        self.files.clear();

        if self.settings.open_after_export {
            if let Err(e) = desktop.open_document(&path) {
                log::warn!("Could not open {}: {}", path.display(), e);
            }
        }

        logged(Status::Converted { path, pages })
    }

    fn export(&self, dir: &Path, path: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(|source| PageError::Write {
            path: dir.to_owned(),
            source,
        })?;
        export_pdf(self.queue.pages(), path, &self.settings.export_options())
    }

    /// Drop every queued page
    pub fn clear(&mut self) -> Status {
        if self.queue.is_empty() {
            return logged(Status::NothingToClear);
        }

        let count = self.queue.clear();
        self.files.clear();
        logged(Status::Cleared { count })
    }
}

/// Every status is logged once here, failures at warn
fn logged(status: Status) -> Status {
    if status.is_error() {
        log::warn!("{status}");
    } else {
        log::info!("{status}");
    }
    status
}
