//! Item records and the validated input table

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EmapError, Result};

/// Separator for member lists supplied as a single delimited string,
/// e.g. `"TP53/BRCA1/MYC"`
pub const MEMBER_SEPARATOR: char = '/';

/// One input row: a labeled item carrying a set of member identifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique key within one table
    pub id: String,

    /// Display string carried into label placement
    pub label: String,

    /// Member identifiers (e.g. gene symbols) used for overlap computation
    pub members: BTreeSet<String>,

    /// Numeric weight used for representative selection
    pub size: f64,

    /// Numeric value used for node coloring by the rendering layer
    pub score: f64,
}

impl Item {
    /// Create a new item from an already-split member set
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        members: BTreeSet<String>,
        size: f64,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            members,
            size,
            score,
        }
    }

    /// Create a new item with members given as one `/`-separated string
    pub fn with_delimited_members(
        id: impl Into<String>,
        label: impl Into<String>,
        members: &str,
        size: f64,
        score: f64,
    ) -> Self {
        Self::new(id, label, split_members(members), size, score)
    }
}

fn split_members(members: &str) -> BTreeSet<String> {
    members
        .split(MEMBER_SEPARATOR)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validated, ordered collection of items
///
/// Construction checks the whole table up front: at least one item, and
/// every id non-empty and unique. Row order is preserved, and the row
/// index doubles as the node index in the overlap graph.
#[derive(Debug, Clone)]
pub struct EnrichmentTable {
    items: Vec<Item>,
    index_by_id: HashMap<String, u32>,
}

impl EnrichmentTable {
    /// Validate a list of items and build the id index
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(EmapError::EmptyTable);
        }

        let mut index_by_id = HashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(EmapError::MissingField {
                    row,
                    field: "id".to_string(),
                });
            }
            if index_by_id.insert(item.id.clone(), row as u32).is_some() {
                return Err(EmapError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self { items, index_by_id })
    }

    /// Load a table from a JSON array of records
    ///
    /// Field names follow this crate (`id`, `label`, `members`, `size`,
    /// `score`), with the clusterProfiler-style column names (`ID`,
    /// `Description`, `geneID`, `Count`, `p.adjust`) accepted as aliases.
    /// `members` may be an array of strings or one `/`-separated string.
    pub fn from_json_records(json: &str) -> Result<Self> {
        let rows: Vec<Value> = serde_json::from_str(json)?;
        log::debug!("Parsing {} item records", rows.len());

        let mut items = Vec::with_capacity(rows.len());
        for (row, record) in rows.iter().enumerate() {
            items.push(parse_record(row, record)?);
        }

        Self::new(items)
    }

    /// Number of items in the table
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a validated table; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in input order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at the given row/node index
    pub fn item(&self, index: u32) -> &Item {
        &self.items[index as usize]
    }

    /// Row/node index for an item id
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.index_by_id.get(id).copied()
    }

    /// Linearly rescale item sizes into a target visual range
    ///
    /// The mapping is inverted: the largest original size lands on
    /// `new_min` and the smallest on `new_min + new_range`. If every item
    /// shares the same size there is no span to map over, so all sizes
    /// fall back to the midpoint of the target range.
    pub fn rescale_sizes(&mut self, new_min: f64, new_range: f64) {
        let max = self.items.iter().map(|i| i.size).fold(f64::NEG_INFINITY, f64::max);
        let min = self.items.iter().map(|i| i.size).fold(f64::INFINITY, f64::min);
        let span = max - min;

        if span == 0.0 {
            log::warn!(
                "All {} items share size {}; rescaling to midpoint of target range",
                self.items.len(),
                max
            );
            let midpoint = new_min + new_range / 2.0;
            for item in &mut self.items {
                item.size = midpoint;
            }
            return;
        }

        for item in &mut self.items {
            item.size = new_min + new_range * (max - item.size) / span;
        }
    }
}

fn parse_record(row: usize, record: &Value) -> Result<Item> {
    let id = string_field(row, record, &["id", "ID"])?;
    let label = string_field(row, record, &["label", "Description"])?;
    let members = members_field(row, record, &["members", "geneID"])?;
    let size = number_field(row, record, &["size", "Count"])?;
    let score = number_field(row, record, &["score", "p.adjust"])?;
    Ok(Item::new(id, label, members, size, score))
}

fn field<'a>(record: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| record.get(name))
}

fn missing(row: usize, names: &[&str]) -> EmapError {
    EmapError::MissingField {
        row,
        field: names[0].to_string(),
    }
}

fn string_field(row: usize, record: &Value, names: &[&str]) -> Result<String> {
    field(record, names)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(row, names))
}

fn number_field(row: usize, record: &Value, names: &[&str]) -> Result<f64> {
    field(record, names)
        .and_then(Value::as_f64)
        .ok_or_else(|| missing(row, names))
}

fn members_field(row: usize, record: &Value, names: &[&str]) -> Result<BTreeSet<String>> {
    match field(record, names) {
        Some(Value::String(delimited)) => Ok(split_members(delimited)),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| missing(row, names))
            })
            .collect(),
        _ => Err(missing(row, names)),
    }
}
