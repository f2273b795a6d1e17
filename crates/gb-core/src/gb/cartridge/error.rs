use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("ROM header is truncated: need at least {expected:#06X} bytes, got {actual:#06X}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("the ROM has an invalid header checksum (stored {stored:#04X}, computed {computed:#04X})")]
    InvalidHeaderChecksum { stored: u8, computed: u8 },

    #[error("Unknown controller type: {0:#04X}")]
    UnknownControllerType(u8),

    #[error("the ZIP file {} contains no Game Boy ROM", .0.display())]
    InvalidContainer(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable ZIP file: {0}")]
    Container(#[from] zip::result::ZipError),
}
