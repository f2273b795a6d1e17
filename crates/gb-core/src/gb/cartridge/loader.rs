use crate::gb::cartridge::error::CartridgeError;
use crate::trace;
use std::fmt;
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const ROM_EXTENSIONS: [&str; 2] = [".gb", ".gbc"];

/// Where a cartridge image was loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RomSource {
    Memory,
    File(PathBuf),
    Archive { archive: PathBuf, entry: String },
}

impl RomSource {
    /// File name shown in reports; the archive name for zipped ROMs.
    pub fn name(&self) -> String {
        let path = match self {
            RomSource::Memory => return String::new(),
            RomSource::File(path) => path,
            RomSource::Archive { archive, .. } => archive,
        };
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for RomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomSource::Memory => write!(f, "<memory>"),
            RomSource::File(path) => write!(f, "{}", path.display()),
            RomSource::Archive { archive, entry } => write!(f, "{}:{}", archive.display(), entry),
        }
    }
}

/// A raw cartridge image and its origin. Nothing has been validated yet.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub source: RomSource,
    pub data: Vec<u8>,
}

impl LoadedImage {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        LoadedImage {
            source: RomSource::Memory,
            data,
        }
    }

    /// Reads `path`, unpacking the first ROM entry if it is a `.zip`.
    pub fn from_path(path: &Path) -> Result<Self, CartridgeError> {
        if is_zip(path) {
            let file = File::open(path).map_err(|source| CartridgeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            return Self::from_zip(file, path);
        }

        let data = fs::read(path).map_err(|source| CartridgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), data.len());
        trace!("[LOAD] {} ({} bytes)", path.display(), data.len());

        Ok(LoadedImage {
            source: RomSource::File(path.to_path_buf()),
            data,
        })
    }

    /// Scans the archive in listing order and reads the first `.gb`/`.gbc` entry.
    ///
    /// `archive` only names the container in errors and in the resulting source.
    pub fn from_zip<R: Read + Seek>(reader: R, archive: &Path) -> Result<Self, CartridgeError> {
        let mut zip = ZipArchive::new(reader)?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;
            if entry.is_dir() || !is_rom_name(entry.name()) {
                continue;
            }

            let name = entry.name().to_string();
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data).map_err(|source| CartridgeError::Io {
                path: archive.join(&name),
                source,
            })?;
            log::debug!("loaded {} from {} ({} bytes)", name, archive.display(), data.len());
            trace!("[LOAD] {}:{} ({} bytes)", archive.display(), name, data.len());

            return Ok(LoadedImage {
                source: RomSource::Archive {
                    archive: archive.to_path_buf(),
                    entry: name,
                },
                data,
            });
        }

        Err(CartridgeError::InvalidContainer(archive.to_path_buf()))
    }
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn is_rom_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    ROM_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
