pub mod config;
pub mod desktop;
pub mod discovery;
pub mod layout;
pub mod palette;
pub mod process;
pub mod theme;
pub mod utils;

#[cfg(feature = "gui")]
pub mod gui;
#[cfg(feature = "gui")]
pub mod thumbnail;

pub use config::PickerConfig;
pub use desktop::WallpaperBackend;
pub use layout::{GridSpec, Layout};
pub use process::{CommandRunner, SystemRunner, ToolCommand};
pub use theme::ThemeDispatcher;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Desktop environment error: {0}")]
    DesktopEnv(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Palette error: {0}")]
    Palette(String),

    #[cfg(feature = "gui")]
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
