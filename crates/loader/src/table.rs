// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Header-mapped CSV tables.

use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::LoaderError;

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Maps normalized header names to column positions.
fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect()
}

/// A fully read CSV file whose columns are addressed by normalized header.
pub struct Table {
    file: &'static str,
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl Table {
    /// Reads `file` from `dir`, checking that every `required` column exists.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::Csv` if the file cannot be read and
    /// `LoaderError::MissingHeaders` if required columns are absent.
    pub fn read(dir: &Path, file: &'static str, required: &[&str]) -> Result<Self, LoaderError> {
        let csv_error = |source: csv::Error| LoaderError::Csv { file, source };

        let mut reader: csv::Reader<std::fs::File> = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(dir.join(file))
            .map_err(csv_error)?;

        let columns: HashMap<String, usize> = header_map(reader.headers().map_err(csv_error)?);

        let missing: Vec<String> = required
            .iter()
            .filter(|name| !columns.contains_key(**name))
            .map(|name| String::from(*name))
            .collect();
        if !missing.is_empty() {
            return Err(LoaderError::MissingHeaders { file, missing });
        }

        let records: Vec<StringRecord> = reader
            .records()
            .collect::<Result<_, _>>()
            .map_err(csv_error)?;

        Ok(Self {
            file,
            columns,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates the data rows, numbered from 1.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(move |(idx, record)| Row {
                table: self,
                number: idx + 1,
                record,
            })
    }
}

/// One data row of a [`Table`].
pub struct Row<'a> {
    table: &'a Table,
    number: usize,
    record: &'a StringRecord,
}

impl Row<'_> {
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the trimmed value of column `name`, or `""` if the column or
    /// cell is missing.
    pub fn field(&self, name: &str) -> &str {
        self.table
            .columns
            .get(name)
            .and_then(|&idx| self.record.get(idx))
            .unwrap_or_default()
    }

    /// Parses column `name`.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::InvalidField` if the value does not parse.
    pub fn parse<T: FromStr>(&self, name: &'static str) -> Result<T, LoaderError> {
        let value: &str = self.field(name);
        value.parse::<T>().map_err(|_| self.invalid(name, value))
    }

    /// Parses column `name`, treating an empty cell as absent.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::InvalidField` if a non-empty value does not parse.
    pub fn parse_optional<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, LoaderError> {
        let value: &str = self.field(name);
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse::<T>()
            .map(Some)
            .map_err(|_| self.invalid(name, value))
    }

    /// Splits a comma-separated column into trimmed, non-empty tokens.
    pub fn list(&self, name: &str) -> impl Iterator<Item = &str> {
        self.field(name)
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn invalid(&self, field: &'static str, value: &str) -> LoaderError {
        LoaderError::InvalidField {
            file: self.table.file,
            row: self.number,
            field,
            value: value.to_string(),
        }
    }
}
