//! Selection state - the user's chosen region, city, and shortcut presets

use chrono_tz::Tz;

use crate::catalog::{self, Catalog, UTC_REGION};

/// A named preset that fills in a (region, city) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub label: &'static str,
    pub region: &'static str,
    pub city: Option<&'static str>,
}

/// The timezone shortcut row, in display order.
pub const TIMEZONE_SHORTCUTS: &[Shortcut] = &[
    Shortcut { label: "UTC", region: "UTC", city: None },
    Shortcut { label: "PST", region: "America", city: Some("Los_Angeles") },
    Shortcut { label: "MST", region: "America", city: Some("Denver") },
    Shortcut { label: "CST", region: "America", city: Some("Chicago") },
    Shortcut { label: "EST", region: "America", city: Some("New_York") },
];

/// The user's current region/city choice.
///
/// Region and city are only ever set from catalog-derived options or
/// shortcut presets, so no validation beyond the setter rules is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub region: Option<String>,
    pub city: Option<String>,
}

impl Selection {
    /// Set the region, applying the city defaulting rules:
    /// UTC forces city to none; a region with at least one cataloged city
    /// auto-selects its first city; a city-less region leaves city unset.
    pub fn set_region(&mut self, catalog: &Catalog, region: &str) {
        self.region = Some(region.to_string());
        if region == UTC_REGION {
            self.city = None;
        } else {
            self.city = catalog.first_city(region).map(str::to_string);
        }
    }

    /// Set the city directly (from the catalog-derived city options).
    pub fn set_city(&mut self, city: &str) {
        self.city = Some(city.to_string());
    }

    /// Apply a shortcut preset, bypassing the auto-first-city rule.
    pub fn apply_shortcut(&mut self, shortcut: &Shortcut) {
        self.region = Some(shortcut.region.to_string());
        self.city = shortcut.city.map(str::to_string);
    }

    /// Seed the selection from an IANA identifier, typically the system
    /// timezone guessed at startup. Unknown regions are ignored.
    pub fn seed_from_identifier(&mut self, catalog: &Catalog, id: &str) {
        let (region, city) = match id.split_once('/') {
            Some((r, c)) => (r, Some(c)),
            None => (id, None),
        };
        if !catalog.contains_region(region) {
            return;
        }
        self.region = Some(region.to_string());
        self.city = if region == UTC_REGION {
            None
        } else {
            city.map(str::to_string)
        };
    }

    /// Whether the selection is complete enough to convert with.
    ///
    /// A non-UTC region that has cataloged cities needs a city; UTC and
    /// slashless regions (GMT, Japan, ...) are complete on their own.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        match self.region.as_deref() {
            None => false,
            Some(UTC_REGION) => true,
            Some(region) => self.city.is_some() || catalog.cities(region).is_empty(),
        }
    }

    /// The effective IANA identifier, or `None` when no region is chosen.
    pub fn timezone_id(&self) -> Option<String> {
        self.region
            .as_deref()
            .map(|r| catalog::timezone_id(r, self.city.as_deref()))
    }

    /// Resolve the selection into a `Tz`.
    pub fn resolve(&self) -> Result<Tz, String> {
        let region = self.region.as_deref().ok_or("No region selected")?;
        catalog::resolve_timezone(region, self.city.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_forces_city_to_none() {
        let catalog = Catalog::build();
        let mut sel = Selection::default();
        sel.set_region(&catalog, "America");
        assert!(sel.city.is_some());
        sel.set_region(&catalog, "UTC");
        assert_eq!(sel.city, None);
    }

    #[test]
    fn region_with_cities_auto_selects_first() {
        let catalog = Catalog::build();
        let mut sel = Selection::default();
        sel.set_region(&catalog, "America");
        let first = catalog.first_city("America").unwrap();
        assert_eq!(sel.city.as_deref(), Some(first));
    }

    #[test]
    fn cityless_region_leaves_city_unset() {
        let catalog = Catalog::build();
        let mut sel = Selection::default();
        sel.set_region(&catalog, "GMT");
        assert_eq!(sel.city, None);
        assert_eq!(sel.timezone_id().as_deref(), Some("GMT"));
    }

    #[test]
    fn utc_shortcut() {
        let catalog = Catalog::build();
        let mut sel = Selection::default();
        sel.set_region(&catalog, "America");
        sel.apply_shortcut(&TIMEZONE_SHORTCUTS[0]);
        assert_eq!(sel.region.as_deref(), Some("UTC"));
        assert_eq!(sel.city, None);
    }

    #[test]
    fn pst_shortcut() {
        let mut sel = Selection::default();
        let pst = TIMEZONE_SHORTCUTS
            .iter()
            .find(|s| s.label == "PST")
            .unwrap();
        sel.apply_shortcut(pst);
        assert_eq!(sel.region.as_deref(), Some("America"));
        assert_eq!(sel.city.as_deref(), Some("Los_Angeles"));
        assert_eq!(sel.resolve().unwrap().name(), "America/Los_Angeles");
    }

    #[test]
    fn all_shortcuts_resolve() {
        for shortcut in TIMEZONE_SHORTCUTS {
            let mut sel = Selection::default();
            sel.apply_shortcut(shortcut);
            assert!(sel.resolve().is_ok(), "shortcut {} broken", shortcut.label);
        }
    }

    #[test]
    fn seed_from_system_style_identifier() {
        let catalog = Catalog::build();
        let mut sel = Selection::default();
        sel.seed_from_identifier(&catalog, "Europe/London");
        assert_eq!(sel.region.as_deref(), Some("Europe"));
        assert_eq!(sel.city.as_deref(), Some("London"));

        sel.seed_from_identifier(&catalog, "Narnia/Lantern");
        // Unknown identifier leaves the selection untouched.
        assert_eq!(sel.region.as_deref(), Some("Europe"));
    }

    #[test]
    fn incomplete_until_region_chosen() {
        let catalog = Catalog::build();
        let sel = Selection::default();
        assert!(!sel.is_complete(&catalog));
        assert_eq!(sel.timezone_id(), None);
        assert!(sel.resolve().is_err());

        let mut sel = Selection::default();
        sel.set_region(&catalog, "UTC");
        assert!(sel.is_complete(&catalog));
    }
}
