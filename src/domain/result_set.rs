use serde::Serialize;

use crate::domain::Record;

/// Decoded outcome of one query.
///
/// `Many` may be empty; a zero-length `Many` and a `Single` are different outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultSet {
    Single(Record),
    Many(Vec<Record>),
}

impl ResultSet {
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Single(_) => 1,
            ResultSet::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        match self {
            ResultSet::Single(record) => std::slice::from_ref(record).iter(),
            ResultSet::Many(records) => records.iter(),
        }
    }

    /// The only record, if the set holds exactly one.
    pub fn single(&self) -> Option<&Record> {
        match self {
            ResultSet::Single(record) => Some(record),
            ResultSet::Many(records) if records.len() == 1 => records.first(),
            ResultSet::Many(_) => None,
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            ResultSet::Single(record) => vec![record],
            ResultSet::Many(records) => records,
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
