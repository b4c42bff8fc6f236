//! CSV loader: headed files become labeled records feeding the engine.

use std::path::Path;
use std::rc::Rc;

use seqr_core::Sequence;

use crate::error::{IoError, Result};

/// One row of labeled fields. Cheap to clone: the header list is shared
/// across all rows of a dataset.
#[derive(Debug, Clone)]
pub struct Record {
    headers: Rc<Vec<String>>,
    fields: Vec<String>,
}

impl Record {
    /// The field under `name`, if the header exists and the row carries it.
    pub fn field(&self, name: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == name)?;
        self.fields.get(idx).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// An in-memory CSV dataset: headers plus rows of labeled fields.
pub struct Dataset {
    headers: Rc<Vec<String>>,
    rows: Vec<Record>,
}

impl Dataset {
    /// Load a headed CSV file from the local filesystem.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;
        let headers = Rc::new(
            reader
                .headers()?
                .iter()
                .map(str::to_string)
                .collect::<Vec<_>>(),
        );
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(Record {
                headers: Rc::clone(&headers),
                fields: record.iter().map(str::to_string).collect(),
            });
        }
        tracing::debug!(rows = rows.len(), path = %path.display(), "loaded csv dataset");
        Ok(Dataset { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as a repeatable sequence.
    pub fn rows(&self) -> Sequence<Record> {
        Sequence::from_values(self.rows.clone())
    }

    /// One column as strings, in row order. Short rows contribute empty
    /// fields.
    pub fn column(&self, name: &str) -> Result<Sequence<String>> {
        let idx = self.index_of(name)?;
        let values: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.fields.get(idx).cloned().unwrap_or_default())
            .collect();
        Ok(Sequence::from_values(values))
    }

    /// One column parsed as numbers, in row order. The first cell that
    /// fails to parse fails the whole load.
    pub fn column_f64(&self, name: &str) -> Result<Sequence<f64>> {
        let idx = self.index_of(name)?;
        let mut values = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let raw = row.fields.get(idx).map(String::as_str).unwrap_or("");
            let parsed = raw.trim().parse::<f64>().map_err(|_| IoError::Parse {
                column: name.to_string(),
                value: raw.to_string(),
            })?;
            values.push(parsed);
        }
        Ok(Sequence::from_values(values))
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn(name.to_string()))
    }
}
