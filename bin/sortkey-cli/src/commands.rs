use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use smol_str::SmolStr;
use sortkey::{Key, KeyError};

use crate::cli::Command;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    pub value: u64,
    pub key: SmolStr,
}

/// Which column(s) of each record plain-text output prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Key,
    Value,
    Both,
}

#[derive(Debug)]
pub struct Report {
    pub records: Vec<Record>,
    pub columns: Columns,
    pub failures: usize,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum InputError {
    #[error("Not an integer: {0}")]
    Parse(#[from] std::num::ParseIntError),

    /// Too large even for a `u64`, so there is no value to put in `KeyError::KeyOverflow`
    #[error("Value {0} exceeds the maximum key value 9007199254740991")]
    TooLarge(SmolStr),

    #[error("Cannot encode negative value {0}")]
    TooSmall(SmolStr),

    #[error(transparent)]
    Key(#[from] KeyError),
}

fn encode_one(input: &str) -> Result<Key, InputError> {
    let input = input.trim();

    let key = if input.starts_with('-') {
        match input.parse::<i64>() {
            Ok(value) => Key::new(value),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => return Err(InputError::TooSmall(input.into())),
            Err(e) => return Err(e.into()),
        }
    } else {
        match input.parse::<u64>() {
            Ok(value) => Key::from_u64(value),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(InputError::TooLarge(input.into())),
            Err(e) => return Err(e.into()),
        }
    };

    Ok(key?)
}

impl Report {
    fn new(columns: Columns) -> Self {
        Report {
            records: Vec::new(),
            columns,
            failures: 0,
        }
    }

    fn fail(&mut self, input: &str, err: impl std::fmt::Display) {
        log::error!("{input:?}: {err}");
        self.failures += 1;
    }

    pub fn write(&self, json: bool, mut out: impl Write) -> anyhow::Result<()> {
        if json {
            serde_json::to_writer(&mut out, &self.records)?;
            writeln!(out)?;
        } else {
            for Record { value, key } in &self.records {
                match self.columns {
                    Columns::Key => writeln!(out, "{key}")?,
                    Columns::Value => writeln!(out, "{value}")?,
                    Columns::Both => writeln!(out, "{key}\t{value}")?,
                }
            }
        }

        out.flush()?;

        Ok(())
    }
}

pub fn encode(values: &[String]) -> Report {
    let mut report = Report::new(Columns::Key);

    for input in values {
        match encode_one(input) {
            Ok(key) => {
                log::trace!("{input} => {key}");
                report.records.push(Record {
                    value: key.value(),
                    key: key.into(),
                });
            }
            Err(e) => report.fail(input, e),
        }
    }

    report
}

pub fn decode(keys: &[String], bounded: bool) -> Report {
    let mut report = Report::new(Columns::Value);

    let decode = if bounded { sortkey::decode_bounded } else { sortkey::decode };

    for input in keys {
        match decode(input) {
            Ok(value) => {
                log::trace!("{input} => {value}");
                report.records.push(Record {
                    value,
                    key: SmolStr::new(input),
                });
            }
            Err(e) => report.fail(input, e),
        }
    }

    report
}

pub fn sort(input: impl BufRead) -> anyhow::Result<Report> {
    let mut report = Report::new(Columns::Both);
    let mut keys = Vec::new();

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match encode_one(&line) {
            Ok(key) => keys.push(key),
            Err(e) => report.fail(&line, e),
        }
    }

    log::debug!("Sorting {} keys", keys.len());
    keys.sort_unstable();

    report.records.extend(keys.into_iter().map(|key| Record {
        value: key.value(),
        key: key.into(),
    }));

    Ok(report)
}

/// Runs a command, writing its output to `out`.
///
/// Fails after writing if any input could not be processed.
pub fn run(command: Option<Command>, input: impl BufRead, out: impl Write) -> anyhow::Result<()> {
    let Some(command) = command else {
        anyhow::bail!("No command given, see `sortkey --help`");
    };

    let (report, json) = match command {
        Command::Encode(cmd) => (encode(&cmd.values), cmd.json),
        Command::Decode(cmd) => (decode(&cmd.keys, cmd.bounded), cmd.json),
        Command::Sort(cmd) => (sort(input)?, cmd.json),
    };

    report.write(json, out)?;

    if report.failures > 0 {
        anyhow::bail!("{} input(s) could not be processed", report.failures);
    }

    Ok(())
}
