//! Output records and the pure merge that builds them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::gbif::SpeciesDetail;

/// Stable numeric key of a taxon in the GBIF backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonKey(pub u64);

impl fmt::Display for TaxonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The classification ranks carried by every record, from broadest to narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Phylum => "phylum",
            Rank::Class => "class",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Genus => "genus",
            Rank::Species => "species",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank name to value. A rank the service did not report is an empty string, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDetail {
    pub phylum: String,
    pub class: String,
    pub order: String,
    pub family: String,
    pub genus: String,
    pub species: String,
}

impl TaxonomyDetail {
    /// Copies the ranks out of a detail payload. `species` is always `canonical_name`.
    pub fn from_detail(detail: &SpeciesDetail, canonical_name: &str) -> Self {
        let rank = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            phylum: rank(&detail.phylum),
            class: rank(&detail.class),
            order: rank(&detail.order),
            family: rank(&detail.family),
            genus: rank(&detail.genus),
            species: canonical_name.to_string(),
        }
    }

    pub fn get(&self, rank: Rank) -> &str {
        match rank {
            Rank::Phylum => &self.phylum,
            Rank::Class => &self.class,
            Rank::Order => &self.order,
            Rank::Family => &self.family,
            Rank::Genus => &self.genus,
            Rank::Species => &self.species,
        }
    }
}

/// One enriched species as written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub display: String,
    pub sci: String,
    pub taxonomy: TaxonomyDetail,
}

/// Picks the canonical species name from a detail payload, or the seed's own name
/// when the payload has none.
pub fn canonical_name(detail: &SpeciesDetail, seed_name: &str) -> String {
    match detail.species.as_deref().map(str::trim) {
        Some(species) if !species.is_empty() => species.to_string(),
        _ => seed_name.to_string(),
    }
}

/// Merges a resolved name, its display name and its ranks into one record.
pub fn assemble(
    canonical_name: &str,
    display_name: &str,
    taxonomy: TaxonomyDetail,
) -> OutputRecord {
    OutputRecord {
        id: canonical_name.to_string(),
        display: display_name.to_string(),
        sci: canonical_name.to_string(),
        taxonomy,
    }
}

/// Distinct non-empty values seen at each rank, sorted.
pub fn rank_summary(records: &[OutputRecord]) -> BTreeMap<Rank, BTreeSet<String>> {
    let mut summary: BTreeMap<Rank, BTreeSet<String>> =
        Rank::ALL.iter().map(|rank| (*rank, BTreeSet::new())).collect();

    for record in records {
        for rank in Rank::ALL {
            let value = record.taxonomy.get(rank);
            if value.is_empty() {
                continue;
            }
            if let Some(values) = summary.get_mut(&rank) {
                values.insert(value.to_string());
            }
        }
    }

    summary
}
