//! Item records in delimited text.
//!
//! One record per line, comma separated:
//!
//! ```text
//! #Name,Barley,Herbs,...,Granite,Mountains,Marshes,Size
//! Avalon,1,,1,,,,,,,,,1,,,,3,2,XL
//! ```
//!
//! After the name comes one presence column per attribute in universe
//! order (any non-empty value means present), then one integer column per
//! slot kind in catalog order, then a size code (`XL`, `L`, `M`, anything
//! else is small). Lines starting with `#` and blank lines are skipped.
//! Trailing extra columns are ignored.

use crate::catalog::Catalog;
use crate::coverage::{Attribute, AttributeSet, Item, SizeTier};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Errors raised while reading item records.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A record has fewer columns than the catalog requires.
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A slot column does not hold a non-negative integer.
    SlotCount {
        line: usize,
        column: usize,
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read records: {}", e),
            LoadError::FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected at least {} fields, found {}",
                line, expected, found
            ),
            LoadError::SlotCount { line, column, value } => write!(
                f,
                "line {}: column {} is not a slot count: '{}'",
                line, column, value
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Parses one record. `line` is the 1-based line number used in errors.
pub fn parse_record(record: &str, line: usize, catalog: &Catalog) -> Result<Item, LoadError> {
    let attributes = catalog.universe().len();
    let slots = catalog.slot_kinds().len();
    let expected = 1 + attributes + slots + 1;

    let fields: Vec<&str> = record.trim().split(',').collect();
    if fields.len() < expected {
        return Err(LoadError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }

    let name = fields[0].trim();

    let present: AttributeSet = fields[1..=attributes]
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(i, _)| Attribute::new(i))
        .collect();

    let slot_start = 1 + attributes;
    let slot_counts = fields[slot_start..slot_start + slots]
        .iter()
        .enumerate()
        .map(|(k, v)| {
            v.trim().parse::<u32>().map_err(|_| LoadError::SlotCount {
                line,
                column: slot_start + k + 1,
                value: v.to_string(),
            })
        })
        .collect::<Result<Vec<u32>, LoadError>>()?;

    let size = SizeTier::from_code(fields[slot_start + slots]);

    Ok(Item::new(name, present, slot_counts, size))
}

/// Reads every record from `reader`.
pub fn load_items<R: Read>(reader: R, catalog: &Catalog) -> Result<Vec<Item>, LoadError> {
    let mut items = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        items.push(parse_record(trimmed, idx + 1, catalog)?);
    }
    tracing::debug!(count = items.len(), catalog = catalog.name(), "loaded item records");
    Ok(items)
}

/// Reads every record from the file at `path`.
pub fn load_items_from_path<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Vec<Item>, LoadError> {
    let file = File::open(path)?;
    load_items(file, catalog)
}
