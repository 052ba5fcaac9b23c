//! Access to the host tables.
//!
//! The pipeline never talks to a concrete host client. It asks a
//! [`TableSource`] for a sheet by its fixed schema name and decodes the
//! returned rows into typed [`Sheet`] structs.

mod rows;

use std::collections::{BTreeMap, HashMap};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{DataError, DataResult, HostError};

pub use rows::{
    ENpcBase, ENpcResident, Item, Level, Map, TripleTriad, TripleTriadCard,
    TripleTriadCardRarity, TripleTriadCardResident, TripleTriadCardType, TripleTriadResident,
    TripleTriadRule,
};

/// A typed row of a host table.
pub trait Sheet: Serialize + DeserializeOwned {
    /// Fixed schema name the host exposes the table under.
    const NAME: &'static str;

    /// Numeric row id assigned by the host.
    fn row_id(&self) -> u32;
}

/// Read-only provider of host tables.
///
/// `Ok(None)` means the host does not expose the table at all. Errors are
/// transient faults of the host itself (it may fail under concurrent access).
pub trait TableSource: Send + Sync {
    /// Return every row of the named sheet.
    fn raw_sheet(&self, name: &str) -> Result<Option<Vec<Value>>, HostError>;
}

/// Rows of one host table ordered by ascending row id.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<u32, T>,
}

impl<T: Sheet> Table<T> {
    /// Build a table, rejecting duplicate row ids.
    pub fn from_rows(rows: impl IntoIterator<Item = T>) -> DataResult<Self> {
        let mut map = BTreeMap::new();
        for row in rows {
            let id = row.row_id();
            if map.insert(id, row).is_some() {
                return Err(DataError::schema(T::NAME, format!("duplicate row id {id}")));
            }
        }
        Ok(Self { rows: map })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by its id.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Rows in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Row ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }
}

/// Fetch and decode a sheet. `Ok(None)` when the host has no such table.
pub fn load_sheet<T: Sheet>(source: &dyn TableSource) -> DataResult<Option<Table<T>>> {
    let Some(raw) = source.raw_sheet(T::NAME)? else {
        return Ok(None);
    };

    let rows = raw
        .into_iter()
        .map(serde_json::from_value::<T>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| DataError::Decode {
            table: T::NAME,
            source,
        })?;
    Table::from_rows(rows).map(Some)
}

/// Like [`load_sheet`] but a missing table is a schema mismatch.
pub fn require_sheet<T: Sheet>(source: &dyn TableSource) -> DataResult<Table<T>> {
    load_sheet(source)?.ok_or_else(|| DataError::schema(T::NAME, "sheet is missing"))
}

/// In-memory snapshot of host tables.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    sheets: HashMap<String, Vec<Value>>,
}

impl SnapshotSource {
    /// Empty snapshot; every sheet reports as missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a sheet from typed rows.
    pub fn with_sheet<T: Sheet>(
        mut self,
        rows: impl IntoIterator<Item = T>,
    ) -> serde_json::Result<Self> {
        self.insert_sheet(rows)?;
        Ok(self)
    }

    /// Insert (or replace) a sheet from typed rows.
    ///
    /// Nothing is replaced when a row fails to serialize.
    pub fn insert_sheet<T: Sheet>(
        &mut self,
        rows: impl IntoIterator<Item = T>,
    ) -> serde_json::Result<()> {
        let values = rows
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.sheets.insert(T::NAME.to_string(), values);
        Ok(())
    }

    /// Drop a sheet so that it reports as missing.
    pub fn remove_sheet(&mut self, name: &str) {
        self.sheets.remove(name);
    }

    /// Build from a JSON object mapping sheet names to row arrays.
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        let sheets: HashMap<String, Vec<Value>> = serde_json::from_value(value)?;
        Ok(Self { sheets })
    }

    /// Parse a JSON document mapping sheet names to row arrays.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Names of the sheets present in the snapshot.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }
}

impl TableSource for SnapshotSource {
    fn raw_sheet(&self, name: &str) -> Result<Option<Vec<Value>>, HostError> {
        Ok(self.sheets.get(name).cloned())
    }
}
