//! Simple TOML reader for fixture configuration
//!
//! A minimal line-oriented parser for the subset `fixture.toml` uses. It
//! does NOT support the full TOML spec and needs no allocator.
//!
//! Supported:
//! - `key = value` pairs (integer, quoted string)
//! - The `[timing]` section header
//! - Comments (`# ...`), whole-line or trailing
//!
//! Root keys fill [`FixtureConfig`]; `[timing]` keys fill
//! [`TimingConfig`](super::TimingConfig). The result is validated before
//! it is returned.

use super::types::{ConfigError, FixtureConfig};
use crate::control::OperatorMode;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (1-based line)
    InvalidSection(usize),
    /// Line is not `key = value` (1-based line)
    InvalidLine(usize),
    /// Key not valid in its section (1-based line)
    UnknownKey(usize),
    /// Value of the wrong type or out of range (1-based line)
    InvalidValue(usize),
    /// Parsed, but failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
}

/// Parse `fixture.toml` text into a validated [`FixtureConfig`]
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<FixtureConfig, ParseError> {
    let mut config = FixtureConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            section = match header.strip_suffix(']').map(str::trim) {
                Some("timing") => Section::Timing,
                _ => return Err(ParseError::InvalidSection(line_no)),
            };
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or(ParseError::InvalidLine(line_no))?;

        match section {
            Section::Root => apply_root(&mut config, key, value, line_no)?,
            Section::Timing => apply_timing(&mut config, key, value, line_no)?,
        }
    }

    config.validate()?;
    Ok(config)
}

fn apply_root(
    config: &mut FixtureConfig,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    match key {
        "start_address" => config.start_address = parse_int(value, line_no)?,
        "red" => config.red = parse_int(value, line_no)?,
        "green" => config.green = parse_int(value, line_no)?,
        "blue" => config.blue = parse_int(value, line_no)?,
        "mode" => {
            config.mode = parse_str(value)
                .and_then(OperatorMode::from_name)
                .ok_or(ParseError::InvalidValue(line_no))?;
        }
        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}

fn apply_timing(
    config: &mut FixtureConfig,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    let timing = &mut config.timing;
    match key {
        "break_us" => timing.break_us = parse_int(value, line_no)?,
        "mark_us" => timing.mark_us = parse_int(value, line_no)?,
        "inter_frame_gap_us" => timing.inter_frame_gap_us = parse_int(value, line_no)?,
        "watchdog_slack_us" => timing.watchdog_slack_us = parse_int(value, line_no)?,
        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Integer with optional `_` separators, range-checked into `T`
fn parse_int<T: TryFrom<u64>>(value: &str, line_no: usize) -> Result<T, ParseError> {
    let mut acc: u64 = 0;
    let mut digits = 0;

    for c in value.chars() {
        match c {
            '_' => continue,
            '0'..='9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(c as u64 - '0' as u64))
                    .ok_or(ParseError::InvalidValue(line_no))?;
                digits += 1;
            }
            _ => return Err(ParseError::InvalidValue(line_no)),
        }
    }

    if digits == 0 {
        return Err(ParseError::InvalidValue(line_no));
    }

    T::try_from(acc).map_err(|_| ParseError::InvalidValue(line_no))
}

fn parse_str(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}
