use chrono::Local;
use eframe::egui;
use pdf_image_pages::{NativeDesktop, SUPPORTED_EXTENSIONS, Session, Settings, Status, is_supported};
use std::path::PathBuf;

use crate::logger::AppLogger;
use crate::views::{self, Action};

pub struct ImageToPdfApp {
    session: Session,
    desktop: NativeDesktop,

    // Edited copy of the session settings
    draft: Settings,
    name: String,
    status: Option<Status>,

    logger: AppLogger,
}

impl ImageToPdfApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        let session = Session::default();
        let draft = session.settings().clone();

        Self {
            session,
            desktop: NativeDesktop,
            draft,
            name: String::new(),
            status: None,
            logger,
        }
    }

    // The session already logged it
    fn report(&mut self, status: Status) {
        self.status = Some(status);
    }

    fn add_files(&mut self, paths: &[PathBuf]) {
        for status in self.session.add_images(paths) {
            self.report(status);
        }
    }

    fn select_files(&mut self) {
        let paths = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .pick_files()
            .unwrap_or_default();
        self.add_files(&paths);
    }

    fn convert(&mut self) {
        let status = self
            .session
            .convert(&self.name, &self.desktop, &Local::now());
        self.report(status);
    }

    fn clear(&mut self) {
        let status = self.session.clear();
        self.report(status);
    }

    fn apply_settings(&mut self) {
        if let Err(e) = self.session.set_settings(self.draft.clone()) {
            log::warn!("{e}");
            self.draft = self.session.settings().clone();
        }
    }
}

impl eframe::App for ImageToPdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dropped image files are added like a selection
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| is_supported(path))
                .collect()
        });
        if !dropped.is_empty() {
            self.add_files(&dropped);
        }

        egui::SidePanel::left("settings")
            .min_width(220.0)
            .show(ctx, |ui| {
                let locked = !self.session.is_empty();
                if views::settings::show(ui, &mut self.draft, locked) {
                    self.apply_settings();
                }
            });

        egui::TopBottomPanel::bottom("activity")
            .resizable(true)
            .min_height(100.0)
            .show(ctx, |ui| {
                views::activity::show(ui, &self.logger);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            views::file_log::show(ui, self.session.files());
            ui.separator();

            match views::controls::show(ui, &mut self.name) {
                Some(Action::Select) => self.select_files(),
                Some(Action::Convert) => self.convert(),
                Some(Action::Clear) => self.clear(),
                None => {}
            }

            if let Some(status) = &self.status {
                ui.add_space(5.0);
                if status.is_error() {
                    ui.colored_label(ui.visuals().warn_fg_color, status.to_string());
                } else {
                    ui.label(status.to_string());
                }
            }
        });
    }
}
