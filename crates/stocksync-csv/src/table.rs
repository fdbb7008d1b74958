//! In-memory table types with scalar inference

use bson::{Bson, Document as BsonDocument};

/// A single inferred cell value
///
/// Inference order mirrors what a default data-frame loader does: an empty
/// cell (or a literal NA marker) is null, then boolean, integer, and float
/// parses are tried, and anything else stays a string. Cell text is not
/// trimmed; `" 12 "` is a string, not an integer.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Markers treated as missing values, matching common loader defaults
const NA_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

impl Field {
    /// Infer a field value from raw cell text
    pub fn infer(raw: &str) -> Field {
        if NA_MARKERS.contains(&raw) {
            return Field::Null;
        }
        match raw {
            "True" | "TRUE" | "true" => return Field::Bool(true),
            "False" | "FALSE" | "false" => return Field::Bool(false),
            _ => {}
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Field::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Field::Float(f);
        }
        Field::Str(raw.to_string())
    }

    /// Convert to a BSON value
    pub fn to_bson(&self) -> Bson {
        match self {
            Field::Null => Bson::Null,
            Field::Bool(b) => Bson::Boolean(*b),
            Field::Int(i) => Bson::Int64(*i),
            Field::Float(f) => Bson::Double(*f),
            Field::Str(s) => Bson::String(s.clone()),
        }
    }
}

/// One row of the source table: column name to field value, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Field)>,
}

impl Record {
    /// Build a record by pairing header names with inferred cell values
    ///
    /// A short row leaves its trailing columns null, matching loader
    /// behavior for ragged-but-parseable input.
    pub fn from_row<'a, I>(headers: &[String], cells: I) -> Record
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = cells.into_iter();
        let fields = headers
            .iter()
            .map(|name| {
                let value = cells.next().map_or(Field::Null, Field::infer);
                (name.clone(), value)
            })
            .collect();
        Record { fields }
    }

    /// Look up a field by column name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterate over (column, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Convert the record to a BSON document, preserving column order
    pub fn to_document(&self) -> BsonDocument {
        let mut doc = BsonDocument::new();
        for (name, value) in &self.fields {
            doc.insert(name.clone(), value.to_bson());
        }
        doc
    }
}

/// A loaded table: ordered column names plus one record per data row
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert every record to a BSON document, in row order
    pub fn to_documents(&self) -> Vec<BsonDocument> {
        self.records.iter().map(Record::to_document).collect()
    }
}
