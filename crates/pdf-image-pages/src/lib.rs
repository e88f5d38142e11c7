mod compose;
mod io;
mod naming;
mod page;
mod pdf;
mod platform;
mod queue;
mod session;
mod settings;
mod types;

pub use compose::{compose, fit_placement};
pub use io::{SUPPORTED_EXTENSIONS, is_supported, load_image};
pub use naming::{DEFAULT_NAME_FORMAT, output_file_name, output_path};
pub use page::Page;
pub use pdf::{ExportOptions, export_pdf, render_pdf};
pub use platform::{Desktop, HeadlessDesktop, NativeDesktop};
pub use queue::PageQueue;
pub use session::{Session, Status};
pub use settings::{MAX_PAGE_SIDE_PX, Settings};
pub use types::*;
