//! Cartridge header layout ($0100-$014F) and field decoding.
//!
//! Every field is described by a static [`HeaderField`]: where it lives in the
//! image and which [`DecodeRule`] turns its bytes into a value.
//! [`ParsedHeader::decode`] applies each rule once and keeps the typed result.

use crate::gb::cartridge::checksum;
use crate::gb::cartridge::error::CartridgeError;
use crate::gb::cartridge::tables;
use std::fmt;

/// Images shorter than this are rejected before decoding.
pub const MIN_IMAGE_LEN: usize = 0x014F;

pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

const CGB_COMPATIBLE: u8 = 0x80;
const CGB_ONLY: u8 = 0xC0;
const SGB_SUPPORTED: u8 = 0x03;
const USE_NEW_LICENSEE: u8 = 0x33;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldSpan {
    Byte(usize),
    /// Half-open `[start, end)`
    Range(usize, usize),
}

impl FieldSpan {
    pub const fn start(&self) -> usize {
        match *self {
            FieldSpan::Byte(addr) => addr,
            FieldSpan::Range(start, _) => start,
        }
    }

    pub const fn end(&self) -> usize {
        match *self {
            FieldSpan::Byte(addr) => addr + 1,
            FieldSpan::Range(_, end) => end,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeRule {
    Bitmap,
    Text,
    CgbFlag,
    SgbFlag,
    ControllerType,
    RomSize,
    RamSize,
    Destination,
    OldLicensee,
    MaskRomVersion,
    HeaderChecksum,
    GlobalChecksum,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderField {
    pub name: &'static str,
    pub span: FieldSpan,
    pub rule: DecodeRule,
}

pub const LOGO: HeaderField = HeaderField::new("logo", FieldSpan::Range(0x0104, 0x0134), DecodeRule::Bitmap);
pub const TITLE: HeaderField = HeaderField::new("title", FieldSpan::Range(0x0134, 0x013F), DecodeRule::Text);
pub const MANUFACTURER_CODE: HeaderField =
    HeaderField::new("code", FieldSpan::Range(0x013F, 0x0143), DecodeRule::Text);
pub const CGB_FLAG: HeaderField = HeaderField::new("cgb", FieldSpan::Byte(0x0143), DecodeRule::CgbFlag);
pub const NEW_LICENSEE: HeaderField =
    HeaderField::new("licensee", FieldSpan::Range(0x0144, 0x0146), DecodeRule::Text);
pub const SGB_FLAG: HeaderField = HeaderField::new("sgb", FieldSpan::Byte(0x0146), DecodeRule::SgbFlag);
pub const CONTROLLER_TYPE: HeaderField =
    HeaderField::new("type", FieldSpan::Byte(0x0147), DecodeRule::ControllerType);
pub const ROM_SIZE: HeaderField = HeaderField::new("rom_size", FieldSpan::Byte(0x0148), DecodeRule::RomSize);
pub const RAM_SIZE: HeaderField = HeaderField::new("ram_size", FieldSpan::Byte(0x0149), DecodeRule::RamSize);
pub const DESTINATION: HeaderField =
    HeaderField::new("destination", FieldSpan::Byte(0x014A), DecodeRule::Destination);
pub const OLD_LICENSEE: HeaderField =
    HeaderField::new("old_licensee", FieldSpan::Byte(0x014B), DecodeRule::OldLicensee);
pub const MASK_ROM_VERSION: HeaderField =
    HeaderField::new("version", FieldSpan::Byte(0x014C), DecodeRule::MaskRomVersion);
pub const HEADER_CHECKSUM: HeaderField =
    HeaderField::new("header_checksum", FieldSpan::Byte(0x014D), DecodeRule::HeaderChecksum);
pub const GLOBAL_CHECKSUM: HeaderField =
    HeaderField::new("global_checksum", FieldSpan::Range(0x014E, 0x0150), DecodeRule::GlobalChecksum);

/// Every header field in address order.
pub const HEADER_FIELDS: [HeaderField; 14] = [
    LOGO,
    TITLE,
    MANUFACTURER_CODE,
    CGB_FLAG,
    NEW_LICENSEE,
    SGB_FLAG,
    CONTROLLER_TYPE,
    ROM_SIZE,
    RAM_SIZE,
    DESTINATION,
    OLD_LICENSEE,
    MASK_ROM_VERSION,
    HEADER_CHECKSUM,
    GLOBAL_CHECKSUM,
];

impl HeaderField {
    pub const fn new(name: &'static str, span: FieldSpan, rule: DecodeRule) -> Self {
        Self { name, span, rule }
    }

    /// The field's raw bytes, or `None` if the image stops short of it.
    pub fn bytes<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        data.get(self.span.start()..self.span.end())
    }

    fn byte(&self, data: &[u8]) -> u8 {
        data[self.span.start()]
    }

    /// Latin-1 text with trailing NUL padding removed.
    fn text(&self, data: &[u8]) -> String {
        let raw: String = data[self.span.start()..self.span.end()]
            .iter()
            .map(|&b| b as char)
            .collect();
        raw.trim_end_matches('\0').to_string()
    }

    /// Decodes this field alone.
    ///
    /// Fields past the end of `data` come back as [`FieldValue::Missing`];
    /// only an unknown controller type is an error.
    pub fn decode(&self, data: &[u8]) -> Result<FieldValue, CartridgeError> {
        let Some(raw) = self.bytes(data) else {
            return Ok(FieldValue::Missing);
        };

        let value = match self.rule {
            DecodeRule::Bitmap => FieldValue::Bytes(raw.to_vec()),
            DecodeRule::Text => FieldValue::Text(self.text(data)),
            DecodeRule::CgbFlag => FieldValue::Flag(is_cgb(self.byte(data))),
            DecodeRule::SgbFlag => FieldValue::Flag(self.byte(data) == SGB_SUPPORTED),
            DecodeRule::ControllerType => FieldValue::Controller(ControllerType::decode(self.byte(data))?),
            DecodeRule::RomSize => FieldValue::Size(MemorySize::rom(self.byte(data))),
            DecodeRule::RamSize => FieldValue::Size(MemorySize::ram(self.byte(data))),
            DecodeRule::Destination => FieldValue::Destination(Destination::from(self.byte(data))),
            DecodeRule::OldLicensee => FieldValue::OldLicensee(OldLicensee::from(self.byte(data))),
            DecodeRule::MaskRomVersion => FieldValue::Version(mask_rom_version(self.byte(data))),
            DecodeRule::HeaderChecksum => FieldValue::Byte(self.byte(data)),
            DecodeRule::GlobalChecksum => FieldValue::Word(u16::from_be_bytes([raw[0], raw[1]])),
        };
        Ok(value)
    }
}

fn is_cgb(flag: u8) -> bool {
    flag == CGB_COMPATIBLE || flag == CGB_ONLY
}

fn mask_rom_version(byte: u8) -> f64 {
    1.0 + f64::from(byte) / 10.0
}

/// A single decoded field, as produced by [`HeaderField::decode`].
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Missing,
    Bytes(Vec<u8>),
    Text(String),
    Flag(bool),
    Controller(ControllerType),
    Size(MemorySize),
    Destination(Destination),
    OldLicensee(OldLicensee),
    Version(f64),
    Byte(u8),
    Word(u16),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => write!(f, "-"),
            FieldValue::Bytes(bytes) => {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
                write!(f, "{}", hex.join(" "))
            }
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Controller(controller) => write!(f, "{}", controller),
            FieldValue::Size(size) => write!(f, "{}", size),
            FieldValue::Destination(destination) => write!(f, "{}", destination),
            FieldValue::OldLicensee(licensee) => write!(f, "{:?}", licensee.to_string()),
            FieldValue::Version(version) => write!(f, "{:?}", version),
            FieldValue::Byte(byte) => write!(f, "${:02X}", byte),
            FieldValue::Word(word) => write!(f, "${:04X}", word),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControllerType {
    pub code: u8,
    pub name: &'static str,
}

impl ControllerType {
    pub fn decode(code: u8) -> Result<Self, CartridgeError> {
        tables::controller_type(code)
            .map(|name| ControllerType { code, name })
            .ok_or(CartridgeError::UnknownControllerType(code))
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared ROM or RAM size. `bytes` is `None` for codes missing from the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemorySize {
    pub code: u8,
    pub bytes: Option<u32>,
    pub label: &'static str,
}

impl MemorySize {
    pub fn rom(code: u8) -> Self {
        Self::from_lookup(code, tables::rom_size(code))
    }

    pub fn ram(code: u8) -> Self {
        Self::from_lookup(code, tables::ram_size(code))
    }

    fn from_lookup(code: u8, entry: Option<(u32, &'static str)>) -> Self {
        match entry {
            Some((bytes, label)) => MemorySize {
                code,
                bytes: Some(bytes),
                label,
            },
            None => MemorySize {
                code,
                bytes: None,
                label: tables::UNKNOWN,
            },
        }
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Japan,
    World,
}

impl From<u8> for Destination {
    fn from(code: u8) -> Self {
        match code {
            0x00 => Destination::Japan,
            _ => Destination::World,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Japan => f.write_str("Japan"),
            Destination::World => f.write_str("World"),
        }
    }
}

/// The byte at $014B. 0x33 defers to the new licensee code at $0144.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OldLicensee {
    UseNewLicensee,
    Code(u8),
}

impl From<u8> for OldLicensee {
    fn from(code: u8) -> Self {
        match code {
            USE_NEW_LICENSEE => OldLicensee::UseNewLicensee,
            code => OldLicensee::Code(code),
        }
    }
}

impl fmt::Display for OldLicensee {
    /// Empty when the new licensee is in use, two uppercase hex digits otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OldLicensee::UseNewLicensee => Ok(()),
            OldLicensee::Code(code) => write!(f, "{:02X}", code),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedHeader {
    pub nintendo_logo: bool,
    /// Title with the manufacturer code appended
    pub title: String,
    pub manufacturer_code: String,
    pub cgb: bool,
    pub new_licensee: String,
    pub sgb: bool,
    pub controller_type: ControllerType,
    pub rom_size: MemorySize,
    pub ram_size: MemorySize,
    pub destination: Destination,
    pub old_licensee: OldLicensee,
    pub version: f64,
    pub header_checksum: bool,
    pub global_checksum: bool,
    pub publisher: &'static str,
}

/// Decodes `$field` and unwraps the `FieldValue::$variant` payload.
/// Any other value means the image stops short of the field.
macro_rules! decode_as {
    ($field:expr, $data:expr, $variant:ident) => {
        match $field.decode($data)? {
            FieldValue::$variant(value) => value,
            _ => {
                return Err(CartridgeError::TruncatedHeader {
                    expected: $field.span.end(),
                    actual: $data.len(),
                })
            }
        }
    };
}

impl ParsedHeader {
    /// Decodes every field of `data` through its [`HeaderField`] descriptor.
    ///
    /// Checksums are evaluated but not enforced here; rejecting a bad header
    /// checksum is up to the caller.
    pub fn decode(data: &[u8]) -> Result<ParsedHeader, CartridgeError> {
        if data.len() < MIN_IMAGE_LEN {
            return Err(CartridgeError::TruncatedHeader {
                expected: MIN_IMAGE_LEN,
                actual: data.len(),
            });
        }

        let logo = decode_as!(LOGO, data, Bytes);
        let manufacturer_code = decode_as!(MANUFACTURER_CODE, data, Text);
        let mut title = decode_as!(TITLE, data, Text);
        title.push_str(&manufacturer_code);

        let new_licensee = decode_as!(NEW_LICENSEE, data, Text);
        let old_licensee = decode_as!(OLD_LICENSEE, data, OldLicensee);
        let publisher = match old_licensee {
            OldLicensee::UseNewLicensee => tables::new_licensee(&new_licensee),
            OldLicensee::Code(_) => tables::old_licensee(&old_licensee.to_string()),
        };

        let stored_header_checksum = decode_as!(HEADER_CHECKSUM, data, Byte);
        // Missing when the image stops at $014E
        let global_checksum = match GLOBAL_CHECKSUM.decode(data)? {
            FieldValue::Word(stored) => stored == checksum::global_checksum(data),
            _ => false,
        };

        Ok(ParsedHeader {
            nintendo_logo: logo == NINTENDO_LOGO,
            title,
            manufacturer_code,
            cgb: decode_as!(CGB_FLAG, data, Flag),
            new_licensee,
            sgb: decode_as!(SGB_FLAG, data, Flag),
            controller_type: decode_as!(CONTROLLER_TYPE, data, Controller),
            rom_size: decode_as!(ROM_SIZE, data, Size),
            ram_size: decode_as!(RAM_SIZE, data, Size),
            destination: decode_as!(DESTINATION, data, Destination),
            old_licensee,
            version: decode_as!(MASK_ROM_VERSION, data, Version),
            header_checksum: stored_header_checksum == checksum::header_checksum(data),
            global_checksum,
            publisher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gb::test_utils::RomBuilder;

    #[test]
    fn field_spans_are_contiguous_and_ordered() {
        for pair in HEADER_FIELDS.windows(2) {
            assert_eq!(
                pair[0].span.end(),
                pair[1].span.start(),
                "{} should end where {} starts",
                pair[0].name,
                pair[1].name
            );
        }
        assert_eq!(HEADER_FIELDS[0].span.start(), 0x0104);
        assert_eq!(HEADER_FIELDS[13].span.end(), 0x0150);
    }

    #[test]
    fn decode_super_mario_land() {
        let data = RomBuilder::super_mario_land().build();
        let header = ParsedHeader::decode(&data).unwrap();

        assert_eq!(header.title, "SUPER MARIOLAND");
        assert_eq!(header.manufacturer_code, "LAND");
        assert!(!header.cgb);
        assert_eq!(header.new_licensee, "");
        assert!(!header.sgb);
        assert_eq!(header.controller_type.name, "MBC1");
        assert_eq!(header.rom_size.bytes, Some(64 * 1024));
        assert_eq!(header.rom_size.to_string(), "64KB");
        assert_eq!(header.ram_size.bytes, Some(0));
        assert_eq!(header.ram_size.to_string(), "0KB");
        assert_eq!(header.destination, Destination::Japan);
        assert_eq!(header.old_licensee, OldLicensee::Code(0x01));
        assert_eq!(header.old_licensee.to_string(), "01");
        assert_eq!(header.version, 1.1);
        assert!(header.header_checksum);
        assert!(header.global_checksum);
        assert_eq!(header.publisher, "Nintendo");
    }

    #[test]
    fn title_without_code_is_stripped() {
        let data = RomBuilder::new(0x8000).title("TETRIS").build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.title, "TETRIS");
        assert_eq!(header.manufacturer_code, "");
    }

    #[test]
    fn title_is_latin1() {
        let data = RomBuilder::new(0x8000).bytes(0x0134, b"POK\xC3\x89MON").build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.title, "POKÃ\u{89}MON");
    }

    #[test]
    fn cgb_flag_values() {
        for (flag, expected) in [(0x00, false), (0x80, true), (0xC0, true), (0x84, false), (0x40, false)] {
            let data = RomBuilder::new(0x8000).byte(0x0143, flag).build();
            let header = ParsedHeader::decode(&data).unwrap();
            assert_eq!(header.cgb, expected, "flag {:02X}", flag);
        }
    }

    #[test]
    fn sgb_flag_requires_exactly_3() {
        for (flag, expected) in [(0x00, false), (0x03, true), (0x01, false), (0x13, false)] {
            let data = RomBuilder::new(0x8000).byte(0x0146, flag).build();
            let header = ParsedHeader::decode(&data).unwrap();
            assert_eq!(header.sgb, expected, "flag {:02X}", flag);
        }
    }

    #[test]
    fn unknown_controller_type_is_fatal() {
        let data = RomBuilder::new(0x8000).byte(0x0147, 0x04).build();
        let err = ParsedHeader::decode(&data).unwrap_err();
        assert!(matches!(err, CartridgeError::UnknownControllerType(0x04)));
    }

    #[test]
    fn unknown_sizes_degrade_to_sentinel() {
        let data = RomBuilder::new(0x8000).byte(0x0148, 0x20).byte(0x0149, 0x07).build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.rom_size.bytes, None);
        assert_eq!(header.rom_size.to_string(), "Unknown");
        assert_eq!(header.ram_size.bytes, None);
        assert_eq!(header.ram_size.to_string(), "Unknown");
    }

    #[test]
    fn destination_is_japan_only_for_zero() {
        assert_eq!(Destination::from(0x00), Destination::Japan);
        assert_eq!(Destination::from(0x01), Destination::World);
        assert_eq!(Destination::from(0xFF), Destination::World);
    }

    #[test]
    fn mask_rom_version_is_one_plus_tenths() {
        assert_eq!(mask_rom_version(0), 1.0);
        assert_eq!(mask_rom_version(1), 1.1);
        assert_eq!(mask_rom_version(10), 2.0);
    }

    #[test]
    fn old_licensee_0x33_uses_new_code() {
        let data = RomBuilder::new(0x8000)
            .byte(0x014B, 0x33)
            .bytes(0x0144, b"01")
            .build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.old_licensee, OldLicensee::UseNewLicensee);
        assert_eq!(header.old_licensee.to_string(), "");
        assert_eq!(header.new_licensee, "01");
        assert_eq!(header.publisher, "Nintendo");
    }

    #[test]
    fn old_licensee_0x33_with_empty_new_code_is_unknown() {
        let data = RomBuilder::new(0x8000).byte(0x014B, 0x33).build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.new_licensee, "");
        assert_eq!(header.publisher, "Unknown");
    }

    #[test]
    fn old_licensee_is_not_overridden_by_new_code() {
        let data = RomBuilder::new(0x8000)
            .byte(0x014B, 0x08)
            .bytes(0x0144, b"01")
            .build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.publisher, "Capcom");
    }

    #[test]
    fn unknown_old_licensee_is_unknown() {
        let data = RomBuilder::new(0x8000).byte(0x014B, 0x02).build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert_eq!(header.old_licensee.to_string(), "02");
        assert_eq!(header.publisher, "Unknown");
    }

    #[test]
    fn truncated_image_is_rejected() {
        let data = vec![0u8; MIN_IMAGE_LEN - 1];
        let err = ParsedHeader::decode(&data).unwrap_err();
        assert!(matches!(
            err,
            CartridgeError::TruncatedHeader {
                expected: 0x014F,
                actual: 0x014E
            }
        ));
    }

    #[test]
    fn single_fields_decode_through_descriptors() {
        let data = RomBuilder::super_mario_land().build();
        assert_eq!(TITLE.decode(&data).unwrap(), FieldValue::Text("SUPER MARIO".into()));
        assert_eq!(MANUFACTURER_CODE.decode(&data).unwrap(), FieldValue::Text("LAND".into()));
        assert_eq!(CGB_FLAG.decode(&data).unwrap(), FieldValue::Flag(false));
        assert_eq!(MASK_ROM_VERSION.decode(&data).unwrap(), FieldValue::Version(1.1));
        assert_eq!(LOGO.decode(&data).unwrap(), FieldValue::Bytes(NINTENDO_LOGO.to_vec()));
        assert_eq!(
            GLOBAL_CHECKSUM.decode(&data[..0x014F]).unwrap(),
            FieldValue::Missing
        );
    }

    #[test]
    fn field_values_render_for_listing() {
        assert_eq!(FieldValue::Byte(0x0A).to_string(), "$0A");
        assert_eq!(FieldValue::Word(0x1234).to_string(), "$1234");
        assert_eq!(FieldValue::Text("LAND".into()).to_string(), "\"LAND\"");
        assert_eq!(FieldValue::Version(1.0).to_string(), "1.0");
        assert_eq!(FieldValue::Missing.to_string(), "-");
    }

    #[test]
    fn parsed_header_agrees_with_every_descriptor() {
        let data = RomBuilder::super_mario_land()
            .byte(0x0143, 0xC0)
            .byte(0x0146, 0x03)
            .byte(0x014A, 0x01)
            .build();
        let header = ParsedHeader::decode(&data).unwrap();

        for field in HEADER_FIELDS {
            assert_ne!(field.decode(&data).unwrap(), FieldValue::Missing, "{}", field.name);
        }
        assert_eq!(LOGO.decode(&data).unwrap(), FieldValue::Bytes(NINTENDO_LOGO.to_vec()));
        assert!(header.nintendo_logo);
        assert_eq!(CGB_FLAG.decode(&data).unwrap(), FieldValue::Flag(header.cgb));
        assert!(header.cgb);
        assert_eq!(SGB_FLAG.decode(&data).unwrap(), FieldValue::Flag(header.sgb));
        assert!(header.sgb);
        assert_eq!(NEW_LICENSEE.decode(&data).unwrap(), FieldValue::Text(header.new_licensee.clone()));
        assert_eq!(CONTROLLER_TYPE.decode(&data).unwrap(), FieldValue::Controller(header.controller_type));
        assert_eq!(ROM_SIZE.decode(&data).unwrap(), FieldValue::Size(header.rom_size));
        assert_eq!(RAM_SIZE.decode(&data).unwrap(), FieldValue::Size(header.ram_size));
        assert_eq!(DESTINATION.decode(&data).unwrap(), FieldValue::Destination(header.destination));
        assert_eq!(header.destination, Destination::World);
        assert_eq!(OLD_LICENSEE.decode(&data).unwrap(), FieldValue::OldLicensee(header.old_licensee));
        assert_eq!(MASK_ROM_VERSION.decode(&data).unwrap(), FieldValue::Version(header.version));
        assert_eq!(HEADER_CHECKSUM.decode(&data).unwrap(), FieldValue::Byte(data[0x014D]));
        assert_eq!(
            GLOBAL_CHECKSUM.decode(&data).unwrap(),
            FieldValue::Word(u16::from_be_bytes([data[0x014E], data[0x014F]]))
        );
    }

    #[test]
    fn checksums_are_reported_not_enforced() {
        let mut data = RomBuilder::super_mario_land().build();
        data[0x014D] ^= 0xFF;
        data[0x014E] ^= 0xFF;
        let header = ParsedHeader::decode(&data).unwrap();
        assert!(!header.header_checksum);
        assert!(!header.global_checksum);
    }

    #[test]
    fn image_ending_before_global_checksum_reports_false() {
        let data = RomBuilder::super_mario_land().build();
        let header = ParsedHeader::decode(&data[..0x014F]).unwrap();
        assert!(header.header_checksum);
        assert!(!header.global_checksum);
    }

    #[test]
    fn wrong_logo_is_flagged() {
        let data = RomBuilder::super_mario_land().byte(0x0133, 0x00).build();
        let header = ParsedHeader::decode(&data).unwrap();
        assert!(!header.nintendo_logo);
    }
}
