use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string())));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// App data dir: settings file plus optional `images/` with slide artwork.
pub static PATH_FOLIO: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("folio");
    }
    PATH_LOCAL_SHARE.join("folio")
});

pub static PATH_IMAGES: LazyLock<PathBuf> = LazyLock::new(|| PATH_FOLIO.join("images"));
