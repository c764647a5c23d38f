//! Trait abstraction for the country/city lookup to enable mocking in tests

/// Read-only source of selectable countries and their cities
#[cfg_attr(test, mockall::automock)]
pub trait CityLookup {
    /// Country names in display order
    fn countries(&self) -> Vec<String>;

    /// Cities of `country` in display order, empty for an unknown country
    fn cities(&self, country: &str) -> Vec<String>;

    /// Whether `city` is one of the cities listed for `country`
    fn has_city(&self, country: &str, city: &str) -> bool {
        self.cities(country).iter().any(|c| c == city)
    }
}
