//! Timezone catalog - region/city mapping derived from the IANA database
//!
//! Built once at startup from `chrono_tz::TZ_VARIANTS` and held read-only
//! for the lifetime of the app.

use chrono_tz::Tz;

/// The synthetic region pinned to the top of the region list.
pub const UTC_REGION: &str = "UTC";

/// A region and its cities, in first-seen enumeration order.
#[derive(Debug, Clone)]
struct RegionEntry {
    name: String,
    cities: Vec<String>,
}

/// Region -> cities mapping over every zone the database knows about.
///
/// Identifiers are split on the first `/`: the leading component is the
/// region, the remainder is the city. Multi-component zones like
/// `America/Indiana/Indianapolis` therefore keep a city of
/// `Indiana/Indianapolis`, which round-trips back into a valid identifier.
/// Identifiers with no `/` (UTC, GMT, and a handful of legacy aliases)
/// become regions with an empty city list.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<RegionEntry>,
}

impl Catalog {
    /// Enumerate the timezone database and build the mapping.
    pub fn build() -> Self {
        // UTC is pinned first regardless of where the database enumerates it.
        let mut regions = vec![RegionEntry {
            name: UTC_REGION.to_string(),
            cities: Vec::new(),
        }];

        for tz in chrono_tz::TZ_VARIANTS.iter() {
            let (region, city) = match tz.name().split_once('/') {
                Some((r, c)) => (r, Some(c)),
                None => (tz.name(), None),
            };
            if region == UTC_REGION {
                continue;
            }

            let idx = match regions.iter().position(|e| e.name == region) {
                Some(idx) => idx,
                None => {
                    regions.push(RegionEntry {
                        name: region.to_string(),
                        cities: Vec::new(),
                    });
                    regions.len() - 1
                }
            };

            if let Some(city) = city {
                let entry = &mut regions[idx];
                if !entry.cities.iter().any(|c| c == city) {
                    entry.cities.push(city.to_string());
                }
            }
        }

        Self { regions }
    }

    /// Selectable region names, UTC first, the rest in first-seen order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|e| e.name.as_str())
    }

    /// Cities for a region, de-duplicated, in first-seen order.
    ///
    /// Empty for UTC, for a slashless region, or for an unknown region.
    pub fn cities(&self, region: &str) -> &[String] {
        self.regions
            .iter()
            .find(|e| e.name == region)
            .map(|e| e.cities.as_slice())
            .unwrap_or(&[])
    }

    /// First cataloged city of a region, used as the selection default.
    pub fn first_city(&self, region: &str) -> Option<&str> {
        self.cities(region).first().map(String::as_str)
    }

    /// Whether the region exists in the catalog.
    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.iter().any(|e| e.name == region)
    }
}

/// Resolve a (region, city) pair into its IANA identifier.
///
/// UTC and other city-less regions resolve to the bare region name.
pub fn timezone_id(region: &str, city: Option<&str>) -> String {
    match city {
        Some(city) if region != UTC_REGION => format!("{}/{}", region, city),
        _ => region.to_string(),
    }
}

/// Parse a (region, city) pair into a `Tz`.
pub fn resolve_timezone(region: &str, city: Option<&str>) -> Result<Tz, String> {
    let id = timezone_id(region, city);
    id.parse::<Tz>()
        .map_err(|_| format!("Invalid timezone: {}", id))
}
