use crate::trace;
use checksum::HeaderValidator;
use error::CartridgeError;
use header::{LOGO, MIN_IMAGE_LEN, ParsedHeader};
use loader::{LoadedImage, RomSource};
use report::{HeaderReport, ReportValue};
use std::fmt;
use std::path::Path;

pub mod checksum;
pub mod error;
pub mod header;
pub mod loader;
pub mod report;
pub mod tables;


/// A loaded, header-validated cartridge image.
///
/// The image is never mutated after construction and the header is decoded
/// exactly once, in the constructor.
#[derive(Clone, Debug)]
pub struct Cartridge {
    source: RomSource,
    data: Vec<u8>,
    header: ParsedHeader,
}

impl Cartridge {
    /// Loads a `.gb`/`.gbc` file, or the first ROM inside a `.zip`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Cartridge, CartridgeError> {
        Cartridge::from_image(LoadedImage::from_path(path.as_ref())?)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Cartridge, CartridgeError> {
        Cartridge::from_image(LoadedImage::from_bytes(data))
    }

    pub fn from_image(image: LoadedImage) -> Result<Cartridge, CartridgeError> {
        let LoadedImage { source, data } = image;

        if data.len() < MIN_IMAGE_LEN {
            return Err(CartridgeError::TruncatedHeader {
                expected: MIN_IMAGE_LEN,
                actual: data.len(),
            });
        }

        let validator = HeaderValidator::new(&data);
        if !validator.header_checksum_ok() {
            return Err(CartridgeError::InvalidHeaderChecksum {
                stored: validator.stored_header_checksum(),
                computed: validator.computed_header_checksum(),
            });
        }

        let header = ParsedHeader::decode(&data)?;
        if !header.global_checksum {
            log::warn!("{}: global checksum mismatch", source);
        }
        if !header.nintendo_logo {
            log::warn!("{}: Nintendo logo does not match", source);
        }
        log::debug!("{}: {} ({})", source, header.title, header.controller_type);
        trace!("[CART] {} type={} rom={}", header.title, header.controller_type, header.rom_size);

        Ok(Cartridge {
            source,
            data,
            header,
        })
    }

    pub fn header(&self) -> &ParsedHeader {
        &self.header
    }

    pub fn source(&self) -> &RomSource {
        &self.source
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn title(&self) -> &str {
        &self.header.title
    }

    pub fn publisher(&self) -> &'static str {
        self.header.publisher
    }

    pub fn version(&self) -> f64 {
        self.header.version
    }

    /// The 48-byte bitmap at $0104 that the boot ROM scrolls down the screen.
    pub fn logo(&self) -> &[u8] {
        &self.data[LOGO.span.start()..LOGO.span.end()]
    }

    pub fn has_nintendo_logo(&self) -> bool {
        self.header.nintendo_logo
    }

    /// Header checksum result, ANDed with the global checksum when `complete`.
    pub fn is_valid(&self, complete: bool) -> bool {
        if !self.header.header_checksum {
            return false;
        }
        !complete || self.header.global_checksum
    }

    pub fn report(&self) -> HeaderReport {
        let header = &self.header;
        let mut report = HeaderReport::new();
        report.push("cgb", ReportValue::Flag(header.cgb));
        report.push("code", ReportValue::Text(header.manufacturer_code.clone()));
        report.push("destination", ReportValue::Text(header.destination.to_string()));
        report.push("file", ReportValue::Text(self.source.to_string()));
        report.push("licensee", ReportValue::Text(header.new_licensee.clone()));
        report.push("old_licensee", ReportValue::Text(header.old_licensee.to_string()));
        report.push("publisher", ReportValue::Text(header.publisher.to_string()));
        report.push("ram_size", ReportValue::Text(header.ram_size.to_string()));
        report.push("rom_size", ReportValue::Text(header.rom_size.to_string()));
        report.push("sgb", ReportValue::Flag(header.sgb));
        report.push("title", ReportValue::Text(header.title.clone()));
        report.push("type", ReportValue::Text(header.controller_type.to_string()));
        report.push("valid", ReportValue::Flag(header.header_checksum));
        report.push("valid_complete", ReportValue::Flag(header.global_checksum));
        report.push("version", ReportValue::Number(header.version));
        report
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cartridge<name={:?}, title={:?}, version={:?}, destination={:?}, publisher={:?}, color={}, valid={}>",
            self.source.name(),
            self.header.title,
            self.header.version,
            self.header.destination.to_string(),
            self.header.publisher,
            self.header.cgb,
            self.is_valid(true),
        )
    }
}
