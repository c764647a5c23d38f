//! Country/city lookup used by the country and city selects

mod countries;
mod traits;

pub use countries::CountryCatalog;
pub use traits::CityLookup;

#[cfg(test)]
pub use countries::CountryEntry;
#[cfg(test)]
pub use traits::MockCityLookup;
