//! Status book collection, acquisition and loading
//!
//! The [`CommunityStatusCollection`] is built once per load and is read-only
//! afterwards: searching returns a filtered copy and exporting serializes the
//! whole sequence.

use crate::app::models::CommunityStatus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::status_parser::ParseStats;

pub mod export;
pub mod fetch;
pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

/// Community records in source file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityStatusCollection {
    pub(crate) records: Vec<CommunityStatus>,
}

impl CommunityStatusCollection {
    pub fn new(records: Vec<CommunityStatus>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommunityStatus> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CommunityStatus] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CommunityStatus> {
        self.records.get(index)
    }

    pub fn into_records(self) -> Vec<CommunityStatus> {
        self.records
    }
}

impl FromIterator<CommunityStatus> for CommunityStatusCollection {
    fn from_iter<I: IntoIterator<Item = CommunityStatus>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for CommunityStatusCollection {
    type Item = CommunityStatus;
    type IntoIter = std::vec::IntoIter<CommunityStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommunityStatusCollection {
    type Item = &'a CommunityStatus;
    type IntoIter = std::slice::Iter<'a, CommunityStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Everything a load produced
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub collection: CommunityStatusCollection,
    pub stats: ParseStats,
    /// File the collection was read from
    pub source_path: PathBuf,
    /// Whether the file had to be downloaded first
    pub downloaded: bool,
    pub load_duration: Duration,
}
