use anyhow::{Context, Result};
use gb_core::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Check,
    Dump,
    Boot,
}

impl Action {
    fn parse(value: &str) -> Option<Action> {
        match value {
            "check" => Some(Action::Check),
            "dump" => Some(Action::Dump),
            "boot" => Some(Action::Boot),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Options {
    rom_path: PathBuf,
    action: Action,
    verbose: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut rom_path: Option<String> = None;
    let mut action: Option<Action> = None;
    let mut verbose = false;

    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ if rom_path.is_none() => rom_path = Some(arg),
            _ if action.is_none() => {
                action = Some(Action::parse(&arg).ok_or_else(|| format!("Invalid action: {arg}"))?);
            }
            _ => return Err(format!("Unexpected argument: {arg}")),
        }
    }

    let rom_path = rom_path.ok_or("Missing ROM path.")?;
    let action = action.ok_or("Missing action.")?;

    Ok(Options {
        rom_path: expand_home(&rom_path, env::var("HOME").ok().as_deref()),
        action,
        verbose,
    })
}

/// Replaces a leading `~` with `home`, if there is one.
fn expand_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            PathBuf::from(format!("{home}{rest}"))
        }
        _ => PathBuf::from(path),
    }
}

fn print_usage() {
    eprintln!("Usage: gb-cart FILE ACTION [options]");
    eprintln!();
    eprintln!("Actions:");
    eprintln!("  check      Check the ROM FILE integrity");
    eprintln!("  dump       Print the ROM FILE headers");
    eprintln!("  boot       Load FILE and print the initial machine state");
    eprintln!("Options:");
    eprintln!("  -v, --verbose    Debug logging (otherwise RUST_LOG applies)");
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn check(cartridge: &Cartridge, name: &str) -> (String, i32) {
    if cartridge.is_valid(true) {
        (format!("[OK] {name}"), EXIT_OK)
    } else {
        (format!("[NG] {name}"), EXIT_FAILURE)
    }
}

fn dump(report: &HeaderReport) -> Vec<String> {
    report
        .iter()
        .map(|(name, value)| format!("{:.<16} {}", name, value))
        .collect()
}

fn run(opts: &Options) -> Result<i32> {
    let path = opts.rom_path.as_path();

    match opts.action {
        Action::Check => {
            let cartridge = Cartridge::open(path).with_context(|| format!("Failed to load {}", path.display()))?;
            let (line, code) = check(&cartridge, &file_name(path));
            println!("{line}");
            Ok(code)
        }
        Action::Dump => {
            let cartridge = Cartridge::open(path).with_context(|| format!("Failed to load {}", path.display()))?;
            for line in dump(&cartridge.report()) {
                println!("{line}");
            }
            Ok(EXIT_OK)
        }
        Action::Boot => {
            let gameboy = GameBoy::load(path).with_context(|| format!("Failed to boot {}", path.display()))?;
            print!("{gameboy}");
            log::debug!("user program: {} bytes", gameboy.user_program().len());
            gb_core::trace_dump!();
            Ok(EXIT_OK)
        }
    }
}

fn main() {
    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            process::exit(EXIT_USAGE);
        }
    };

    let mut logger = env_logger::Builder::from_default_env();
    if opts.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&opts) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(EXIT_FAILURE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_core::gb::test_utils::RomBuilder;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_file_and_action() {
        let opts = parse_args(args(&["mario.gb", "dump"])).unwrap();
        assert_eq!(opts.rom_path, PathBuf::from("mario.gb"));
        assert_eq!(opts.action, Action::Dump);
        assert!(!opts.verbose);

        let opts = parse_args(args(&["-v", "mario.zip", "boot"])).unwrap();
        assert_eq!(opts.action, Action::Boot);
        assert!(opts.verbose);
    }

    #[test]
    fn missing_arguments_are_usage_errors() {
        assert_eq!(parse_args(args(&[])).unwrap_err(), "Missing ROM path.");
        assert_eq!(parse_args(args(&["mario.gb"])).unwrap_err(), "Missing action.");
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!(
            parse_args(args(&["mario.gb", "play"])).unwrap_err(),
            "Invalid action: play"
        );
        assert!(parse_args(args(&["mario.gb", "check", "extra"])).is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        assert_eq!(expand_home("~/roms/a.gb", Some("/home/me")), PathBuf::from("/home/me/roms/a.gb"));
        assert_eq!(expand_home("~", Some("/home/me")), PathBuf::from("/home/me"));
        assert_eq!(expand_home("~bob/a.gb", Some("/home/me")), PathBuf::from("~bob/a.gb"));
        assert_eq!(expand_home("~/a.gb", None), PathBuf::from("~/a.gb"));
        assert_eq!(expand_home("roms/a.gb", Some("/home/me")), PathBuf::from("roms/a.gb"));
    }

    #[test]
    fn check_reports_ok_and_ng() {
        let good = Cartridge::from_bytes(RomBuilder::super_mario_land().build()).unwrap();
        assert_eq!(check(&good, "mario.gb"), ("[OK] mario.gb".to_string(), EXIT_OK));

        let mut data = RomBuilder::super_mario_land().build();
        data[0x4000] ^= 0xFF;
        let bad = Cartridge::from_bytes(data).unwrap();
        assert_eq!(check(&bad, "mario.gb"), ("[NG] mario.gb".to_string(), EXIT_FAILURE));
    }

    #[test]
    fn dump_pads_names_with_dots() {
        let cartridge = Cartridge::from_bytes(RomBuilder::super_mario_land().build()).unwrap();
        let lines = dump(&cartridge.report());

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "cgb............. false");
        assert_eq!(lines[10], "title........... SUPER MARIOLAND");
        assert_eq!(lines[13], "valid_complete.. true");
        assert_eq!(lines[14], "version......... 1.1");
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name(Path::new("/roms/Tetris.gb")), "Tetris.gb");
    }
}
