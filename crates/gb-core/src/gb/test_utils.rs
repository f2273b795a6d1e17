//! Fixtures for building cartridge images in tests.

use crate::gb::cartridge::checksum::{GLOBAL_CHECKSUM_HI, GLOBAL_CHECKSUM_LO, HEADER_CHECKSUM_ADDR};
use crate::gb::cartridge::checksum::{global_checksum, header_checksum};
use crate::gb::cartridge::header::NINTENDO_LOGO;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a zero-filled image with a given header, then fixes up both checksums.
#[derive(Clone, Debug)]
pub struct RomBuilder {
    data: Vec<u8>,
}

impl RomBuilder {
    /// A blank image of `size` bytes. Controller type 0x00 (ROM ONLY) is valid,
    /// so the result loads as-is.
    pub fn new(size: usize) -> Self {
        assert!(size >= 0x0150, "image must hold a full header");
        RomBuilder {
            data: vec![0; size],
        }
    }

    /// The header of Super Mario Land (JUE) v1.1 on a 64KB image.
    pub fn super_mario_land() -> Self {
        RomBuilder::new(0x10000)
            .bytes(0x0100, &[0x00, 0xC3, 0x50, 0x01])
            .bytes(0x0104, &NINTENDO_LOGO)
            .title("SUPER MARIO")
            .bytes(0x013F, b"LAND")
            .byte(0x0147, 0x01)
            .byte(0x0148, 0x01)
            .byte(0x0149, 0x00)
            .byte(0x014A, 0x00)
            .byte(0x014B, 0x01)
            .byte(0x014C, 0x01)
    }

    /// Writes `title` at $0134. The rest of the title field is left untouched.
    pub fn title(self, title: &str) -> Self {
        let title = &title.as_bytes()[..title.len().min(11)];
        self.bytes(0x0134, title)
    }

    pub fn byte(mut self, addr: usize, value: u8) -> Self {
        self.data[addr] = value;
        self
    }

    pub fn bytes(mut self, addr: usize, values: &[u8]) -> Self {
        self.data[addr..addr + values.len()].copy_from_slice(values);
        self
    }

    /// The image as written so far, checksums untouched.
    pub fn raw(self) -> Vec<u8> {
        self.data
    }

    /// The image with a correct header checksum and big-endian global checksum.
    pub fn build(mut self) -> Vec<u8> {
        self.data[HEADER_CHECKSUM_ADDR] = header_checksum(&self.data);
        let [hi, lo] = global_checksum(&self.data).to_be_bytes();
        self.data[GLOBAL_CHECKSUM_HI] = hi;
        self.data[GLOBAL_CHECKSUM_LO] = lo;
        self.data
    }
}

/// An in-memory zip holding `entries` in the given order, stored uncompressed.
pub fn zip_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }

    writer.finish().unwrap().into_inner()
}
