mod def;
include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));
use clap::Parser;
use std::io::Read;

pub mod log;

impl From<crate::yaml::Error> for String {
    fn from(e: crate::yaml::Error) -> Self {
        e.to_string()
    }
}

pub fn run() -> Result<bool, String> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.unwrap_or_else(Vec::new); // Provide an empty Vec if cli.log is None
    let logs = logs
        .iter()
        .flat_map(|log| log.split(',')) // Split each log entry on commas
        .map(str::trim) // Trim whitespace from each resulting entry
        .filter(|s| !s.is_empty()) // Remove empty strings
        .collect::<Vec<&str>>(); // Collect into a Vec<&str>

    let mut settings = crate::config::Settings::load()?;

    // -v flags win over the configured default level
    let base: ::log::LevelFilter = if cli.verbose > 0 {
        log::level_from_verbose(cli.verbose)
    } else {
        settings
            .log_level
            .parse()
            .map_err(|_| format!("Unknown log level in config: {:?}", settings.log_level))?
    };

    // Upon failure, display error message and usage string
    log::setup(base, logs, cli.log_time)?;

    if cli.color && cli.no_color {
        return Err("Cannot use both --color and --no-color".to_string());
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        // use crate version
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("Rust: {}", RUSTC_VERSION);
        return Ok(true);
    }

    match &cli.action {
        Some(def::Actions::Copy { file, at, offset }) => {
            let text = read_input(file.as_deref())?;
            let cursor = cursor_offset(&text, at.as_deref(), *offset, true)?;
            match crate::ops::copy_key_path(&text, cursor) {
                Ok(Some(path)) => println!("{}", path),
                Ok(None) => {
                    if !cli.quiet {
                        eprintln!("No key at the given position");
                    }
                    return Ok(false);
                }
                Err(e) => {
                    if cli.quiet {
                        return Ok(false);
                    }
                    return Err(e.to_string());
                }
            }
        }
        Some(def::Actions::Paste {
            path,
            file,
            at,
            offset,
            indent,
            tabs,
        }) => {
            let text = read_input(file.as_deref())?;
            let cursor = cursor_offset(&text, at.as_deref(), *offset, false)?;
            if let Some(width) = indent {
                settings.indent_width = *width;
                settings.use_tabs = false;
            }
            if *tabs {
                settings.use_tabs = true;
            }
            let unit = settings.indent_unit();
            match crate::ops::paste_key_path(&text, path, cursor, &unit) {
                Ok(crate::ops::PasteAction::Insert {
                    kind,
                    text: insertion,
                    insert_offset,
                    cursor_offset,
                }) => {
                    let edited = crate::ops::apply_insert(&text, insert_offset, &insertion);
                    ::log::debug!("{:?} insert, cursor lands at offset {}", kind, cursor_offset);
                    print!("{}", edited);
                }
                Ok(crate::ops::PasteAction::Navigate { target }) => {
                    ::log::info!(
                        "key path already exists at {}:{}",
                        target.line + 1,
                        target.col + 1
                    );
                    print!("{}", text);
                }
                Ok(crate::ops::PasteAction::NotAPath) => {
                    if !cli.quiet {
                        eprintln!("Not a key path: {:?}", path);
                    }
                    return Ok(false);
                }
                Err(e) => {
                    if cli.quiet {
                        return Ok(false);
                    }
                    return Err(e.to_string());
                }
            }
        }
        Some(def::Actions::Locate { path, file }) => {
            let text = read_input(file.as_deref())?;
            let trimmed = crate::yaml::normalize_key_path(path);
            if !crate::yaml::is_valid_key_path(trimmed) {
                if !cli.quiet {
                    eprintln!("Not a key path: {:?}", path);
                }
                return Ok(false);
            }
            let segments = crate::yaml::split_key_path(trimmed);
            let doc = match crate::yaml::parse_document(&text) {
                Ok(doc) => doc,
                Err(e) => {
                    if cli.quiet {
                        return Ok(false);
                    }
                    return Err(e.to_string());
                }
            };
            match crate::yaml::find_key_path(&doc, &segments) {
                Some(loc) => println!("{}:{}", loc.line + 1, loc.col + 1),
                None => {
                    if !cli.quiet {
                        eprintln!("Key path not found: {}", trimmed);
                    }
                    return Ok(false);
                }
            }
        }
        None => {
            return Err("Missing action".to_string());
        }
    }
    Ok(true)
}

fn read_input(file: Option<&str>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| e.to_string())?;
            Ok(buffer)
        }
    }
}

/// Resolve the cursor position flags to a char offset.
fn cursor_offset(
    text: &str,
    at: Option<&str>,
    offset: Option<usize>,
    required: bool,
) -> Result<usize, String> {
    if let Some(offset) = offset {
        return Ok(offset);
    }
    if let Some(at) = at {
        let (line, col) = parse_position(at)?;
        return Ok(crate::yaml::LineIndex::new(text).offset_at(line, col));
    }
    if required {
        return Err("Missing cursor position (use --at LINE:COL or --offset N)".to_string());
    }
    Ok(0)
}

/// Parse a 1-based `LINE:COL` position into 0-based line and column.
fn parse_position(at: &str) -> Result<(usize, usize), String> {
    let Some((line, col)) = at.split_once(':') else {
        return Err(format!("Invalid position (expected LINE:COL): {:?}", at));
    };
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("Invalid line number: {:?}", at))?;
    let col: usize = col
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column number: {:?}", at))?;
    if line == 0 || col == 0 {
        return Err(format!("Positions are 1-based: {:?}", at));
    }
    Ok((line - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_positions() {
        assert_eq!(parse_position("3:5").unwrap(), (2, 4));
        assert_eq!(parse_position(" 1:1 ").unwrap(), (0, 0));
    }

    #[test]
    fn rejects_bad_positions() {
        assert!(parse_position("3").is_err());
        assert!(parse_position("0:1").is_err());
        assert!(parse_position("3:0").is_err());
        assert!(parse_position("a:b").is_err());
    }
}
