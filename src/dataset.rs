//! Tabular record lookup.
//!
//! A [`Dataset`] is a read-only, in-memory load of a delimited file holding
//! one row per person/record, with the columns `Name`, `Company Name`,
//! `Email`, `Phone`, and `DATE AND TIME`. The load is all-or-nothing: a
//! missing required column or a single unparseable timestamp fails the whole
//! load, so malformed data surfaces at load time rather than as a
//! lookup-time surprise.
//!
//! Searching is deliberately unranked. [`Dataset::suggest`] unions every
//! field value containing the term; [`Dataset::resolve`] takes the first
//! matching row in the dataset's existing order. First match wins — there is
//! no scoring among candidates.

use std::{collections::BTreeSet, fs::File, io::Read, path::Path};

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{clock::ClockStamp, error::ClockSyncError};

/// The fixed layout of the `DATE AND TIME` column: month-day-year
/// hour:minute, e.g. `03-14-2024 09:15`. Seconds are not recorded.
pub const DATASET_TIME_LAYOUT: &str = "%m-%d-%Y %H:%M";

const REQUIRED_COLUMNS: [&str; 5] = ["Name", "Company Name", "Email", "Phone", "DATE AND TIME"];

/// Row shape as it appears on disk; converted to [`DatasetRecord`] during
/// load so timestamp failures get typed, row-numbered errors.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Company Name")]
    company_name: Option<String>,
    #[serde(rename = "Email")]
    email: Option<String>,
    #[serde(rename = "Phone")]
    phone: Option<String>,
    #[serde(rename = "DATE AND TIME")]
    date_and_time: String,
}

/// One loaded dataset row.
///
/// The four searchable fields are optional — an absent value is excluded
/// from matching for that field, never an error. The timestamp is always
/// present and parsed (a row without one fails the load).
#[derive(Debug, Clone)]
pub struct DatasetRecord {
    /// Person name.
    pub name: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number, stored as text.
    pub phone: Option<String>,
    /// Calendar timestamp with minute precision.
    pub date_and_time: NaiveDateTime,
}

/// A searchable field of a [`DatasetRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// The `Name` column.
    Name,
    /// The `Company Name` column.
    CompanyName,
    /// The `Email` column.
    Email,
    /// The `Phone` column.
    Phone,
}

impl SearchField {
    /// All searchable fields, in column order.
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::CompanyName,
        SearchField::Email,
        SearchField::Phone,
    ];

    fn value<'a>(&self, record: &'a DatasetRecord) -> Option<&'a str> {
        match self {
            SearchField::Name => record.name.as_deref(),
            SearchField::CompanyName => record.company_name.as_deref(),
            SearchField::Email => record.email.as_deref(),
            SearchField::Phone => record.phone.as_deref(),
        }
    }
}

/// An immutable, in-memory dataset of person/record rows.
///
/// Loaded once per session; search methods take `&self` and never mutate, so
/// concurrent reads are safe.
///
/// # Example
///
/// ```no_run
/// use clocksync::{Dataset, SearchField};
///
/// let dataset = Dataset::from_path("visitors.csv")?;
/// let names = dataset.suggest("jo", &[SearchField::Name]);
/// let start = dataset.resolve("Acme");
/// # Ok::<(), clocksync::ClockSyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<DatasetRecord>,
}

impl Dataset {
    /// Load a dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// - [`ClockSyncError::DatasetOpen`] if the file cannot be opened.
    /// - Any error from [`from_reader`](Dataset::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ClockSyncError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| ClockSyncError::DatasetOpen {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        log::debug!("Loading dataset from {path:?}");
        Self::from_reader(file)
    }

    /// Load a dataset from any reader producing CSV text.
    ///
    /// The load is all-or-nothing: every row must deserialize and every
    /// row's timestamp must parse with [`DATASET_TIME_LAYOUT`].
    ///
    /// # Errors
    ///
    /// - [`ClockSyncError::MissingColumn`] if a required column is absent.
    /// - [`ClockSyncError::TimestampParse`] on the first row whose timestamp
    ///   does not parse.
    /// - [`ClockSyncError::DatasetRead`] on any other read/deserialize
    ///   failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ClockSyncError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(ClockSyncError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            let raw = row?;
            let date_and_time =
                NaiveDateTime::parse_from_str(&raw.date_and_time, DATASET_TIME_LAYOUT).map_err(
                    |_| ClockSyncError::TimestampParse {
                        row: index + 1,
                        value: raw.date_and_time.clone(),
                    },
                )?;
            records.push(DatasetRecord {
                name: raw.name,
                company_name: raw.company_name,
                email: raw.email,
                phone: raw.phone,
                date_and_time,
            });
        }

        log::debug!("Loaded {} dataset records", records.len());
        Ok(Self { records })
    }

    /// The loaded rows, in file order.
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect every value of the given fields, across all rows, that
    /// contains `term` as a case-insensitive substring.
    ///
    /// Results are a set — duplicates collapse and order carries no meaning.
    /// An empty `term` is a substring of anything and so matches every
    /// present value.
    pub fn suggest(&self, term: &str, fields: &[SearchField]) -> BTreeSet<String> {
        let needle = term.to_lowercase();
        let mut suggestions = BTreeSet::new();
        for field in fields {
            for record in &self.records {
                if let Some(value) = field.value(record) {
                    if value.to_lowercase().contains(&needle) {
                        suggestions.insert(value.to_string());
                    }
                }
            }
        }
        suggestions
    }

    /// Resolve a search term to the timestamp of the first matching row.
    ///
    /// A row matches when `term` is a case-insensitive substring of its
    /// name, company name, email, *or* phone — any one field qualifies the
    /// row. Among matches the first row in the dataset's existing order
    /// wins; there is no ranking. The matched row's timestamp is returned as
    /// an `HH:MM:SS` clock value with the date portion discarded.
    ///
    /// Returns `None` when no row matches. An empty `term` matches every
    /// row, so a non-empty dataset then resolves to its first row.
    pub fn resolve(&self, term: &str) -> Option<ClockStamp> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .find(|record| {
                SearchField::ALL.iter().any(|field| {
                    field
                        .value(record)
                        .is_some_and(|value| value.to_lowercase().contains(&needle))
                })
            })
            .map(|record| ClockStamp::from_time(record.date_and_time.time()))
    }
}

/// Narrow a suggestion set to the values that case-insensitively start with
/// `term`.
///
/// This is the pick-list narrowing step that sits between
/// [`Dataset::suggest`] and [`Dataset::resolve`]: when the narrowed list is
/// non-empty, hosts typically offer it for selection and replace the term
/// with the chosen value before resolving. Presentation is the host's
/// business; the narrowing rule lives here because the subsequent lookup
/// depends on it.
pub fn narrow_to_prefix(suggestions: &BTreeSet<String>, term: &str) -> Vec<String> {
    let prefix = term.to_lowercase();
    suggestions
        .iter()
        .filter(|value| value.to_lowercase().starts_with(&prefix))
        .cloned()
        .collect()
}
