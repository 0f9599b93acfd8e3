//! Community lookup and search
//!
//! Substring search over name, county and identifier. There is no query
//! language; every method returns records in source order.

use super::CommunityStatusCollection;
use crate::app::models::CommunityStatus;

impl CommunityStatusCollection {
    /// Find communities matching `term` (case-insensitive)
    ///
    /// A record matches when its name or county contains the term, or when
    /// its identifier written in decimal contains it. The result is a new
    /// collection in original order; no match gives an empty collection.
    ///
    /// # Examples
    /// ```
    /// # use nfip_status::{CommunityStatus, CommunityStatusCollection};
    /// let collection = CommunityStatusCollection::new(vec![CommunityStatus {
    ///     id: 60213,
    ///     name: "ANAHEIM, CITY OF".to_string(),
    ///     ..Default::default()
    /// }]);
    ///
    /// assert_eq!(collection.search("anaheim").len(), 1);
    /// assert_eq!(collection.search("6021").len(), 1);
    /// assert!(collection.search("99999").is_empty());
    /// ```
    pub fn search(&self, term: &str) -> CommunityStatusCollection {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|community| matches_term(community, &term))
            .cloned()
            .collect()
    }

    /// All records carrying `id` (identifiers are not guaranteed unique)
    pub fn find_by_id(&self, id: i64) -> Vec<&CommunityStatus> {
        self.records
            .iter()
            .filter(|community| community.id == id)
            .collect()
    }

    /// Number of communities currently participating in the NFIP
    pub fn participating_count(&self) -> usize {
        self.records
            .iter()
            .filter(|community| community.participating_community)
            .count()
    }

    /// Number of communities with a Community Rating System entry date
    pub fn rating_system_count(&self) -> usize {
        self.records
            .iter()
            .filter(|community| community.in_rating_system())
            .count()
    }

    /// Map dates present across the collection, out of four per record
    pub fn known_date_count(&self) -> usize {
        self.records
            .iter()
            .map(CommunityStatus::known_date_count)
            .sum()
    }
}

/// `term` must already be lower-cased
fn matches_term(community: &CommunityStatus, term: &str) -> bool {
    community.name.to_lowercase().contains(term)
        || community.county.to_lowercase().contains(term)
        || community.id.to_string().contains(term)
}
