//! Logging setup on stderr, built on fern.

use colored::*;
use log::{Level, LevelFilter};

/// Map `-v` occurrences to a log level.
pub fn level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// `components` holds `name[=level]` specs from `--log`; a bare name
/// enables trace logging for that component only.
pub fn setup(base: LevelFilter, components: Vec<&str>, log_time: bool) -> Result<(), String> {
    let time_format =
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let time = if log_time {
                let now = time::OffsetDateTime::now_local()
                    .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
                format!("{} ", now.format(&time_format).unwrap_or_default())
            } else {
                String::new()
            };
            out.finish(format_args!(
                "{}{} {} {}",
                time,
                color_level(record.level()),
                record.target().dimmed(),
                message
            ))
        })
        .level(base);

    for spec in components {
        let (name, level) = parse_component(spec)?;
        dispatch = dispatch.level_for(target_for(name), level);
    }

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| format!("Could not initialize logging: {}", e))
}

fn color_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".bright_red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".magenta(),
    }
}

/// Parse one `component[=level]` spec.
fn parse_component(spec: &str) -> Result<(&str, LevelFilter), String> {
    match spec.split_once('=') {
        Some((name, level)) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("Missing component name in log spec: {:?}", spec));
            }
            Ok((name, parse_level(level.trim())?))
        }
        None => Ok((spec, LevelFilter::Trace)),
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(format!("Unknown log level: {:?}", level)),
    }
}

/// Bare component names target modules of this crate.
fn target_for(name: &str) -> String {
    if name.contains("::") {
        name.to_string()
    } else {
        format!("yamlkey::{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_component_specs() {
        assert_eq!(parse_component("ops").unwrap(), ("ops", LevelFilter::Trace));
        assert_eq!(
            parse_component("ops=debug").unwrap(),
            ("ops", LevelFilter::Debug)
        );
        assert!(parse_component("=debug").is_err());
        assert!(parse_component("ops=loud").is_err());
    }

    #[test]
    fn expands_bare_names_to_crate_targets() {
        assert_eq!(target_for("ops"), "yamlkey::ops");
        assert_eq!(target_for("other::module"), "other::module");
    }

    #[test]
    fn maps_verbosity() {
        assert_eq!(level_from_verbose(0), LevelFilter::Warn);
        assert_eq!(level_from_verbose(1), LevelFilter::Info);
        assert_eq!(level_from_verbose(2), LevelFilter::Debug);
        assert_eq!(level_from_verbose(3), LevelFilter::Trace);
    }
}
