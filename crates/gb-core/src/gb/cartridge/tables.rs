use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Returned for any licensee or size code missing from the tables below.
pub const UNKNOWN: &str = "Unknown";

/// Memory bank controller name for the cartridge type byte at $0147.
pub fn controller_type(code: u8) -> Option<&'static str> {
    let name = match code {
        0x00 => "ROM ONLY",
        0x01 => "MBC1",
        0x02 => "MBC1+RAM",
        0x03 => "MBC1+RAM+BATTERY",
        0x05 => "MBC2",
        0x06 => "MBC2+BATTERY",
        0x08 => "ROM+RAM",
        0x09 => "ROM+RAM+BATTERY",
        0x0B => "MMM01",
        0x0C => "MMM01+RAM",
        0x0D => "MMM01+RAM+BATTERY",
        0x0F => "MBC3+TIMER+BATTERY",
        0x10 => "MBC3+TIMER+RAM+BATTERY",
        0x11 => "MBC3",
        0x12 => "MBC3+RAM",
        0x13 => "MBC3+RAM+BATTERY",
        0x15 => "MBC4",
        0x16 => "MBC4+RAM",
        0x17 => "MBC4+RAM+BATTERY",
        0x19 => "MBC5",
        0x1A => "MBC5+RAM",
        0x1B => "MBC5+RAM+BATTERY",
        0x1C => "MBC5+RUMBLE",
        0x1D => "MBC5+RUMBLE+RAM",
        0x1E => "MBC5+RUMBLE+RAM+BATTERY",
        0xFC => "POCKET CAMERA",
        0xFD => "BANDAI TAMA5",
        0xFE => "HuC3",
        0xFF => "HuC1+RAM+BATTERY",
        _ => return None,
    };
    Some(name)
}

/// ROM size in bytes and its display label for the byte at $0148.
///
/// Codes 0x00-0x07 are "32KB shl N". The three odd sizes are the 72, 80 and
/// 96 bank carts.
pub fn rom_size(code: u8) -> Option<(u32, &'static str)> {
    const KB: u32 = 1024;
    let size = match code {
        0x00 => (32 * KB, "32KB"),
        0x01 => (64 * KB, "64KB"),
        0x02 => (128 * KB, "128KB"),
        0x03 => (256 * KB, "256KB"),
        0x04 => (512 * KB, "512KB"),
        0x05 => (1024 * KB, "1MB"),
        0x06 => (2048 * KB, "2MB"),
        0x07 => (4096 * KB, "4MB"),
        0x52 => (72 * 16 * KB, "1.1MB"),
        0x53 => (80 * 16 * KB, "1.2MB"),
        0x54 => (96 * 16 * KB, "1.5MB"),
        _ => return None,
    };
    Some(size)
}

/// External RAM size in bytes and its display label for the byte at $0149.
pub fn ram_size(code: u8) -> Option<(u32, &'static str)> {
    let size = match code {
        0x00 => (0, "0KB"),
        0x01 => (2 * 1024, "2KB"),
        0x02 => (8 * 1024, "8KB"),
        0x03 => (32 * 1024, "32KB"),
        _ => return None,
    };
    Some(size)
}

/// Publishers keyed by the two hex digits of the old licensee byte ($014B).
pub static OLD_LICENSEES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("00", "None"),
        ("01", "Nintendo"),
        ("08", "Capcom"),
        ("09", "Hot-B"),
        ("0A", "Jaleco"),
        ("0B", "Coconuts"),
        ("0C", "Elite Systems"),
        ("13", "Electronic Arts"),
        ("18", "Hudson Soft"),
        ("19", "ITC Entertainment"),
        ("1A", "Yanoman"),
        ("1D", "Clary"),
        ("1F", "Virgin"),
        ("24", "PCM Complete"),
        ("25", "San-X"),
        ("28", "Kotobuki Systems"),
        ("29", "Seta"),
        ("30", "Infogrames"),
        ("31", "Nintendo"),
        ("32", "Bandai"),
        ("34", "Konami"),
        ("35", "Hector"),
        ("38", "Capcom"),
        ("39", "Banpresto"),
        ("3C", "Entertainment i"),
        ("3E", "Gremlin"),
        ("41", "Ubi Soft"),
        ("42", "Atlus"),
        ("44", "Malibu"),
        ("46", "Angel"),
        ("47", "Spectrum Holoby"),
        ("49", "Irem"),
        ("4A", "Virgin"),
        ("4D", "Malibu"),
        ("4F", "U.S. Gold"),
        ("50", "Absolute"),
        ("51", "Acclaim"),
        ("52", "Activision"),
        ("53", "American Sammy"),
        ("54", "GameTek"),
        ("55", "Park Place"),
        ("56", "LJN"),
        ("57", "Matchbox"),
        ("59", "Milton Bradley"),
        ("5A", "Mindscape"),
        ("5B", "Romstar"),
        ("5C", "Naxat Soft"),
        ("5D", "Tradewest"),
        ("60", "Titus"),
        ("61", "Virgin"),
        ("67", "Ocean"),
        ("69", "Electronic Arts"),
        ("6E", "Elite Systems"),
        ("6F", "Electro Brain"),
        ("70", "Infogrames"),
        ("71", "Interplay"),
        ("72", "Broderbund"),
        ("73", "Sculptered Soft"),
        ("75", "The Sales Curve"),
        ("78", "THQ"),
        ("79", "Accolade"),
        ("7A", "Triffix Entertainment"),
        ("7C", "Microprose"),
        ("7F", "Kemco"),
        ("80", "Misawa Entertainment"),
        ("83", "Lozc"),
        ("86", "Tokuma Shoten Intermedia"),
        ("8B", "Bullet-Proof Software"),
        ("8C", "Vic Tokai"),
        ("8E", "Ape"),
        ("8F", "I'Max"),
        ("91", "Chunsoft"),
        ("92", "Video System"),
        ("93", "Tsuburaya"),
        ("95", "Varie"),
        ("96", "Yonezawa/S'Pal"),
        ("97", "Kaneko"),
        ("99", "Arc"),
        ("9A", "Nihon Bussan"),
        ("9B", "Tecmo"),
        ("9C", "Imagineer"),
        ("9D", "Banpresto"),
        ("9F", "Nova"),
        ("A1", "Hori Electric"),
        ("A2", "Bandai"),
        ("A4", "Konami"),
        ("A6", "Kawada"),
        ("A7", "Takara"),
        ("A9", "Technos Japan"),
        ("AA", "Broderbund"),
        ("AC", "Toei Animation"),
        ("AD", "Toho"),
        ("AF", "Namco"),
        ("B0", "Acclaim"),
        ("B1", "ASCII or Nexoft"),
        ("B2", "Bandai"),
        ("B4", "Enix"),
        ("B6", "HAL"),
        ("B7", "SNK"),
        ("B9", "Pony Canyon"),
        ("BA", "Culture Brain"),
        ("BB", "Sunsoft"),
        ("BD", "Sony Imagesoft"),
        ("BF", "Sammy"),
        ("C0", "Taito"),
        ("C2", "Kemco"),
        ("C3", "Squaresoft"),
        ("C4", "Tokuma Shoten Intermedia"),
        ("C5", "Data East"),
        ("C6", "Tonkin House"),
        ("C8", "Koei"),
        ("C9", "UFL"),
        ("CA", "Ultra"),
        ("CB", "Vap"),
        ("CC", "Use"),
        ("CD", "Meldac"),
        ("CE", "Pony Canyon"),
        ("CF", "Angel"),
        ("D0", "Taito"),
        ("D1", "Sofel"),
        ("D2", "Quest"),
        ("D3", "Sigma Enterprises"),
        ("D4", "Ask Kodansha"),
        ("D6", "Naxat Soft"),
        ("D7", "Copya Systems"),
        ("D9", "Banpresto"),
        ("DA", "Tomy"),
        ("DB", "LJN"),
        ("DD", "NCS"),
        ("DE", "Human"),
        ("DF", "Altron"),
        ("E0", "Jaleco"),
        ("E1", "Towachiki"),
        ("E2", "Uutaka"),
        ("E3", "Varie"),
        ("E5", "Epoch"),
        ("E7", "Athena"),
        ("E8", "Asmik"),
        ("E9", "Natsume"),
        ("EA", "King Records"),
        ("EB", "Atlus"),
        ("EC", "Epic/Sony Records"),
        ("EE", "IGS"),
        ("F0", "A Wave"),
        ("F3", "Extreme Entertainment"),
        ("FF", "LJN"),
    ])
});

/// Publishers keyed by the two ASCII characters at $0144-$0145.
pub static NEW_LICENSEES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("00", "None"),
        ("01", "Nintendo"),
        ("08", "Capcom"),
        ("13", "Electronic Arts"),
        ("18", "Hudson Soft"),
        ("19", "B-AI"),
        ("20", "KSS"),
        ("22", "POW"),
        ("24", "PCM Complete"),
        ("25", "San-X"),
        ("28", "Kemco Japan"),
        ("29", "Seta"),
        ("30", "Viacom"),
        ("31", "Nintendo"),
        ("32", "Bandai"),
        ("33", "Ocean/Acclaim"),
        ("34", "Konami"),
        ("35", "Hector"),
        ("37", "Taito"),
        ("38", "Hudson"),
        ("39", "Banpresto"),
        ("41", "Ubi Soft"),
        ("42", "Atlus"),
        ("44", "Malibu"),
        ("46", "Angel"),
        ("47", "Bullet-Proof"),
        ("49", "Irem"),
        ("50", "Absolute"),
        ("51", "Acclaim"),
        ("52", "Activision"),
        ("53", "American Sammy"),
        ("54", "Konami"),
        ("55", "Hi Tech Entertainment"),
        ("56", "LJN"),
        ("57", "Matchbox"),
        ("58", "Mattel"),
        ("59", "Milton Bradley"),
        ("60", "Titus"),
        ("61", "Virgin"),
        ("64", "LucasArts"),
        ("67", "Ocean"),
        ("69", "Electronic Arts"),
        ("70", "Infogrames"),
        ("71", "Interplay"),
        ("72", "Broderbund"),
        ("73", "Sculptured"),
        ("75", "SCI"),
        ("78", "THQ"),
        ("79", "Accolade"),
        ("80", "Misawa"),
        ("83", "Lozc"),
        ("86", "Tokuma Shoten Intermedia"),
        ("87", "Tsukuda Original"),
        ("91", "Chunsoft"),
        ("92", "Video System"),
        ("93", "Ocean/Acclaim"),
        ("95", "Varie"),
        ("96", "Yonezawa/S'Pal"),
        ("97", "Kaneko"),
        ("99", "Pack-In-Soft"),
        ("A4", "Konami"),
    ])
});

pub fn old_licensee(code: &str) -> &'static str {
    OLD_LICENSEES.get(code).copied().unwrap_or(UNKNOWN)
}

pub fn new_licensee(code: &str) -> &'static str {
    NEW_LICENSEES.get(code).copied().unwrap_or(UNKNOWN)
}
