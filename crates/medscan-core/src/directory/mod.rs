//! Hospital directory: CSV ingestion, filtering, and statistics.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::csv;
use crate::models::Hospital;

/// Directory loading errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Search and filter criteria for the hospital list.
///
/// `search` is a substring match over name, city, and facilities; `city`
/// and `specialty` are exact. Empty/None criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct HospitalFilter {
    pub search: String,
    pub city: Option<String>,
    pub specialty: Option<String>,
}

/// Aggregate statistics over a hospital set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Hospital count
    pub hospitals: usize,
    /// Sum of bed capacities
    pub total_beds: u64,
    /// Sum of ICU seats
    pub total_icu_seats: u64,
    /// Hospitals accepting the Ayushman scheme
    pub ayushman_enabled: usize,
}

impl DirectoryStats {
    /// Compute statistics for a (possibly filtered) hospital set.
    pub fn for_hospitals<'a, I>(hospitals: I) -> Self
    where
        I: IntoIterator<Item = &'a Hospital>,
    {
        let mut stats = DirectoryStats {
            hospitals: 0,
            total_beds: 0,
            total_icu_seats: 0,
            ayushman_enabled: 0,
        };
        for hospital in hospitals {
            stats.hospitals += 1;
            stats.total_beds += u64::from(hospital.bed_capacity);
            stats.total_icu_seats += u64::from(hospital.icu_seats);
            if hospital.ayushman_enabled {
                stats.ayushman_enabled += 1;
            }
        }
        stats
    }
}

/// The in-memory hospital directory.
#[derive(Debug, Clone, Default)]
pub struct HospitalDirectory {
    hospitals: Vec<Hospital>,
}

impl HospitalDirectory {
    /// Build a directory from already-constructed hospitals.
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    /// Load from CSV text with header columns
    /// `id, name, city, bed_capacity, icu_seats, ayushman_enabled, rating,
    /// contact, address, facilities` (facilities `|`-separated).
    ///
    /// Columns are resolved by header name, so column order does not
    /// matter. Malformed numbers degrade to zero.
    pub fn from_csv(text: &str) -> Self {
        let table = csv::Table::parse(text);

        let hospitals = table
            .rows()
            .iter()
            .map(|row| Hospital {
                id: table.field(row, "id").parse().unwrap_or(0),
                name: table.field(row, "name").to_string(),
                city: table.field(row, "city").to_string(),
                bed_capacity: table.field(row, "bed_capacity").parse().unwrap_or(0),
                icu_seats: table.field(row, "icu_seats").parse().unwrap_or(0),
                ayushman_enabled: csv::parse_bool(table.field(row, "ayushman_enabled")),
                rating: table.field(row, "rating").parse().unwrap_or(0.0),
                contact: table.field(row, "contact").to_string(),
                address: table.field(row, "address").to_string(),
                facilities: csv::split_list(table.field(row, "facilities")),
            })
            .collect::<Vec<_>>();

        info!(hospitals = hospitals.len(), "hospital directory loaded");

        Self { hospitals }
    }

    /// Load from a CSV file on disk.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_csv(&text))
    }

    /// All hospitals in file order.
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Look up a hospital by id.
    pub fn get(&self, id: u32) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    /// Apply search and filter criteria, preserving file order.
    pub fn filter(&self, filter: &HospitalFilter) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|h| {
                let matches_search =
                    filter.search.trim().is_empty() || h.matches_term(filter.search.trim());
                let matches_city = filter.city.as_deref().map_or(true, |c| h.city == c);
                let matches_specialty = filter
                    .specialty
                    .as_deref()
                    .map_or(true, |s| h.has_facility(s));
                matches_search && matches_city && matches_specialty
            })
            .collect()
    }

    /// Sorted unique city names.
    pub fn cities(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .hospitals
            .iter()
            .map(|h| h.city.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Sorted unique facility/specialty tags.
    pub fn specialties(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .hospitals
            .iter()
            .flat_map(|h| h.facilities.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Statistics over the whole directory.
    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats::for_hospitals(&self.hospitals)
    }

    /// The "name, address, city" query string a presentation layer feeds
    /// into a maps search URL.
    pub fn maps_query(hospital: &Hospital) -> String {
        format!("{}, {}, {}", hospital.name, hospital.address, hospital.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,city,bed_capacity,icu_seats,ayushman_enabled,rating,contact,address,facilities
1,City Care Hospital,Pune,250,40,Yes,4.3,020-1234567,12 MG Road,Cardiology|Neurology|ICU
2,Lotus Multispeciality,Mumbai,400,60,No,4.1,022-7654321,3 Marine Drive,Oncology|Cardiology
3,Green Valley Clinic,Pune,80,8,Yes,3.9,020-9876543,45 FC Road,General Medicine
";

    fn directory() -> HospitalDirectory {
        HospitalDirectory::from_csv(SAMPLE)
    }

    #[test]
    fn test_from_csv() {
        let dir = directory();
        assert_eq!(dir.hospitals().len(), 3);

        let first = &dir.hospitals()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.city, "Pune");
        assert_eq!(first.bed_capacity, 250);
        assert!(first.ayushman_enabled);
        assert_eq!(first.facilities, vec!["Cardiology", "Neurology", "ICU"]);
        assert!(!dir.hospitals()[1].ayushman_enabled);
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let dir = directory();
        assert_eq!(dir.filter(&HospitalFilter::default()).len(), 3);
    }

    #[test]
    fn test_search_filter() {
        let dir = directory();
        let filter = HospitalFilter {
            search: "cardio".into(),
            ..Default::default()
        };
        let hits = dir.filter(&filter);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 2);
    }

    #[test]
    fn test_city_and_specialty_filters() {
        let dir = directory();

        let by_city = dir.filter(&HospitalFilter {
            city: Some("Pune".into()),
            ..Default::default()
        });
        assert_eq!(by_city.len(), 2);

        let combined = dir.filter(&HospitalFilter {
            city: Some("Pune".into()),
            specialty: Some("Cardiology".into()),
            ..Default::default()
        });
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, 1);
    }

    #[test]
    fn test_cities_and_specialties_sorted_unique() {
        let dir = directory();
        assert_eq!(dir.cities(), vec!["Mumbai", "Pune"]);
        assert_eq!(
            dir.specialties(),
            vec![
                "Cardiology",
                "General Medicine",
                "ICU",
                "Neurology",
                "Oncology"
            ]
        );
    }

    #[test]
    fn test_stats() {
        let dir = directory();
        let stats = dir.stats();
        assert_eq!(stats.hospitals, 3);
        assert_eq!(stats.total_beds, 730);
        assert_eq!(stats.total_icu_seats, 108);
        assert_eq!(stats.ayushman_enabled, 2);

        // Stats over a filtered subset
        let filtered = dir.filter(&HospitalFilter {
            city: Some("Pune".into()),
            ..Default::default()
        });
        let subset = DirectoryStats::for_hospitals(filtered.into_iter());
        assert_eq!(subset.hospitals, 2);
        assert_eq!(subset.total_beds, 330);
    }

    #[test]
    fn test_maps_query() {
        let dir = directory();
        let hospital = dir.get(1).unwrap();
        assert_eq!(
            HospitalDirectory::maps_query(hospital),
            "City Care Hospital, 12 MG Road, Pune"
        );
    }

    #[test]
    fn test_malformed_numbers_degrade() {
        let dir = HospitalDirectory::from_csv(
            "id,name,city,bed_capacity,icu_seats,ayushman_enabled,rating,contact,address,facilities\n\
             x,Broken,Delhi,lots,,maybe,high,,,\n",
        );
        let h = &dir.hospitals()[0];
        assert_eq!(h.id, 0);
        assert_eq!(h.bed_capacity, 0);
        assert!(!h.ayushman_enabled);
        assert_eq!(h.rating, 0.0);
        assert!(h.facilities.is_empty());
    }
}
