//! CSV-backed record store.
//!
//! The sole persistence primitive of the application: every entity is one
//! CSV file, loaded whole into memory and written back whole on every
//! mutation. Saves go through a temp file in the data directory followed by
//! an atomic rename, so a failed write never leaves a truncated table, and
//! a per-entity mutex is held across each read-modify-write cycle so two
//! writers cannot silently drop each other's rows.
//!
//! Two views are offered: a raw [`Table`] of header + string rows for the
//! migrator, and typed serde access for the ledgers. Typed saves preserve
//! columns the schema does not know about: extra columns found in the file
//! (written by a newer deployment) are carried through the rewrite, keyed
//! by [`Record::key`].

/// Startup seeding and additive schema migration
pub mod migrate;

use crate::config::StorageConfig;
use crate::entities::Record;
use crate::errors::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// The closed set of persisted entities.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// Livestock inventory (the herd book proper)
    Livestock,
    /// Pasture register
    Pastures,
    /// Daily checklist log
    Checklist,
    /// Fixed-staff roster
    Staff,
    /// Market quote history
    Market,
    /// Day-labor payroll ledger
    DayLabor,
}

impl Entity {
    /// Every entity, in migration order.
    pub const ALL: [Self; 6] = [
        Self::Livestock,
        Self::Pastures,
        Self::Checklist,
        Self::Staff,
        Self::Market,
        Self::DayLabor,
    ];

    /// Stable key used in configuration and log output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Livestock => "livestock",
            Self::Pastures => "pastures",
            Self::Checklist => "checklist",
            Self::Staff => "staff",
            Self::Market => "market",
            Self::DayLabor => "day_labor",
        }
    }

    /// File name of the backing CSV table.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Livestock => "livestock.csv",
            Self::Pastures => "pastures.csv",
            Self::Checklist => "checklist.csv",
            Self::Staff => "staff.csv",
            Self::Market => "market.csv",
            Self::DayLabor => "day_labor.csv",
        }
    }

    /// Current full column set, in persisted order.
    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Livestock => &[
                "id",
                "tag",
                "category",
                "weight_kg",
                "purchase_cost",
                "entry_date",
                "pasture",
                "status",
                "exit_date",
                "exit_reason",
                "sale_value",
            ],
            Self::Pastures => &["name", "area_ha", "forage_type"],
            Self::Checklist => &["date", "responsible", "salt", "water", "fence", "notes"],
            Self::Staff => &["id", "name", "role", "function", "phone", "status"],
            Self::Market => &[
                "date",
                "cattle_price_per_unit",
                "calf_price_per_head",
                "feed_price",
            ],
            Self::DayLabor => &[
                "date",
                "worker_name",
                "service",
                "daily_rate",
                "days_worked",
                "total_paid",
                "notes",
            ],
        }
    }

    /// Resolves an entity from its stable key.
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.key() == key)
            .ok_or_else(|| Error::UnknownEntity {
                name: key.to_string(),
            })
    }

    const fn index(self) -> usize {
        match self {
            Self::Livestock => 0,
            Self::Pastures => 1,
            Self::Checklist => 2,
            Self::Staff => 3,
            Self::Market => 4,
            Self::DayLabor => 5,
        }
    }
}

/// A raw, untyped view of one persisted table: the header row plus every
/// data row as strings. This is the shape the migrator works on, since it
/// must handle files whose column set predates the current schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    /// Column names, in file order
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// An empty table carrying the given header set.
    #[must_use]
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Position of a column by name, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Adds a column with a default value for every existing row, unless a
    /// column of that name already exists. Returns whether anything changed.
    pub fn ensure_column(&mut self, name: &str, default: &str) -> bool {
        if self.column_index(name).is_some() {
            return false;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(default.to_string());
        }
        true
    }
}

/// Whole-file CSV persistence with per-entity write serialization.
pub struct RecordStore {
    config: StorageConfig,
    locks: [Mutex<()>; Entity::ALL.len()],
}

impl RecordStore {
    /// Creates a store over the given storage layout. No I/O happens here;
    /// files are created by [`migrate::seed`] before any handler runs.
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            locks: Default::default(),
        }
    }

    /// The storage layout this store was built with.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn lock(&self, entity: Entity) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another writer panicked mid-save; the
        // temp-file replace keeps the table itself consistent.
        self.locks[entity.index()]
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Loads the raw table for an entity.
    pub fn load_table(&self, entity: Entity) -> Result<Table> {
        let path = self.config.path_for(entity);
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Table { headers, rows })
    }

    /// Overwrites the persisted table for an entity with the given raw
    /// table, atomically from the caller's perspective.
    pub fn save_table(&self, entity: Entity, table: &Table) -> Result<()> {
        let _guard = self.lock(entity);
        self.save_table_locked(entity, table)
    }

    fn save_table_locked(&self, entity: Entity, table: &Table) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        self.replace_file(entity, &into_bytes(writer)?)
    }

    /// Loads every row of an entity as a typed record. Columns are matched
    /// by header name, so extra columns and reordered files are tolerated.
    pub fn load<T: DeserializeOwned>(&self, entity: Entity) -> Result<Vec<T>> {
        let path = self.config.path_for(entity);
        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    /// Overwrites an entity's table with the given typed rows. The header
    /// row is always written from [`Entity::headers`], so saving an empty
    /// slice still leaves a loadable header-only file. Extra columns found
    /// in the current file are kept, re-associated by [`Record::key`].
    pub fn save<T>(&self, entity: Entity, rows: &[T]) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Record,
    {
        let _guard = self.lock(entity);
        // No readable file means nothing to carry over.
        let Ok(table) = self.load_table(entity) else {
            return self.save_locked(entity, rows);
        };
        let extra = extra_columns(entity, &table);
        if extra.is_empty() {
            return self.save_locked(entity, rows);
        }
        let existing: Vec<T> = typed_rows(&table)?;
        let carried = carried_extras(&existing, &table, &extra);
        self.save_with_extras_locked(entity, rows, &extra, carried)
    }

    /// Runs a read-modify-write cycle against an entity while holding its
    /// write lock for the whole cycle, closing the lost-update window that
    /// separate load/save calls would leave open. If the closure leaves the
    /// rows unchanged, the file is not rewritten.
    pub fn update<T, R, F>(&self, entity: Entity, mutate: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned + Record + Clone + PartialEq,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = self.lock(entity);
        let table = self.load_table(entity)?;
        let mut rows: Vec<T> = typed_rows(&table)?;
        let extra = extra_columns(entity, &table);
        let carried = carried_extras(&rows, &table, &extra);

        let original = rows.clone();
        let outcome = mutate(&mut rows);
        if rows == original {
            return Ok(outcome);
        }
        if extra.is_empty() {
            self.save_locked(entity, &rows)?;
        } else {
            self.save_with_extras_locked(entity, &rows, &extra, carried)?;
        }
        Ok(outcome)
    }

    /// Writes typed rows together with carried extra columns: the header
    /// row is the schema followed by the extra column names, and each row's
    /// extra cells are taken from the carried entry matching its key (blank
    /// for rows the file had never seen). Duplicate keys are consumed in
    /// table order.
    fn save_with_extras_locked<T>(
        &self,
        entity: Entity,
        rows: &[T],
        extra: &[(usize, String)],
        mut carried: Vec<(String, Vec<String>)>,
    ) -> Result<()>
    where
        T: Serialize + Record,
    {
        let mut merged = Table::with_headers(entity.headers());
        merged.headers.extend(extra.iter().map(|(_, h)| h.clone()));
        for (mut cells, row) in schema_cells(rows)?.into_iter().zip(rows) {
            let extras = match carried.iter().position(|(key, _)| *key == row.key()) {
                Some(idx) => carried.remove(idx).1,
                None => vec![String::new(); extra.len()],
            };
            cells.extend(extras);
            merged.rows.push(cells);
        }
        self.save_table_locked(entity, &merged)
    }

    fn save_locked<T: Serialize>(&self, entity: Entity, rows: &[T]) -> Result<()> {
        // The header row is written explicitly so that an empty table
        // still carries its schema; rows then serialize positionally.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(entity.headers())?;
        for row in rows {
            writer.serialize(row)?;
        }
        self.replace_file(entity, &into_bytes(writer)?)
    }

    /// Writes the new file contents next to the target and renames it over
    /// the original, so a crash mid-save never leaves a truncated table.
    fn replace_file(&self, entity: Entity, contents: &[u8]) -> Result<()> {
        let path = self.config.path_for(entity);
        let dir = path.parent().map_or_else(|| ".".into(), ToOwned::to_owned);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents)?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Deserializes a raw table into typed rows, matching columns by header
/// name the same way [`RecordStore::load`] does.
fn typed_rows<T: DeserializeOwned>(table: &Table) -> Result<Vec<T>> {
    let headers = csv::StringRecord::from(table.headers.clone());
    let mut rows = Vec::with_capacity(table.rows.len());
    for cells in &table.rows {
        let record = csv::StringRecord::from(cells.clone());
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}

/// File columns the entity schema does not know about, with their position
/// in the file's header row.
fn extra_columns(entity: Entity, table: &Table) -> Vec<(usize, String)> {
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !entity.headers().iter().any(|s| *s == header.as_str()))
        .map(|(i, header)| (i, header.clone()))
        .collect()
}

/// Pairs each row's key with its extra-column cells. `rows` and the table's
/// raw rows are the same rows in the same order.
fn carried_extras<T: Record>(
    rows: &[T],
    table: &Table,
    extra: &[(usize, String)],
) -> Vec<(String, Vec<String>)> {
    rows.iter()
        .zip(&table.rows)
        .map(|(row, cells)| {
            let extras = extra
                .iter()
                .map(|(i, _)| cells.get(*i).cloned().unwrap_or_default())
                .collect();
            (row.key(), extras)
        })
        .collect()
}

/// Serializes typed rows and reads them back as raw string cells, giving
/// the schema-column half of a merged row.
fn schema_cells<T: Serialize>(rows: &[T]) -> Result<Vec<Vec<String>>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = into_bytes(writer)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes.as_slice());
    let mut cells = Vec::with_capacity(rows.len());
    for record in reader.records() {
        cells.push(record?.iter().map(str::to_string).collect());
    }
    Ok(cells)
}
