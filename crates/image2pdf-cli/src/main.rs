use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use pdf_image_pages::{Background, NativeDesktop, Session, Settings, Status};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "image2pdf",
    about = "Fit images onto pages and export them as one PDF",
    version
)]
struct Cli {
    /// Input images, one page each, in the given order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output file name (timestamped name when omitted)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Output directory (defaults to the documents folder)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON settings file; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page resolution in dots per inch
    #[arg(long)]
    dpi: Option<f32>,

    /// Background color: #rrggbb, white or black
    #[arg(long)]
    background: Option<Background>,

    /// Open the PDF once written
    #[arg(long)]
    open: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_image_pages::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for pdf_image_pages::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(paper) = self.paper {
            settings.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            settings.orientation = orientation.into();
        }
        if let Some(dpi) = self.dpi {
            settings.dpi = dpi;
        }
        if let Some(background) = self.background {
            settings.background = background;
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = Some(dir.clone());
        }
        if self.open {
            settings.open_after_export = true;
        }

        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut session = Session::new(cli.settings()?)?;

    let (width, height) = session.settings().page_dimensions_px();
    log::info!(
        "{} page at {} dpi ({}x{} px)",
        session.settings().paper_size.name(),
        session.settings().dpi,
        width,
        height
    );

    let added = session.add_images(&cli.images);
    log::debug!("{} of {} image(s) queued", session.page_count(), added.len());

    let status = session.convert(&cli.name, &NativeDesktop, &chrono::Local::now());
    match status {
        Status::Converted { .. } => {
            println!("{status}");
            Ok(())
        }
        other => bail!("{other}"),
    }
}
