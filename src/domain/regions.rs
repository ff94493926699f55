use thiserror::Error;

/// A selectable region and the city name the prayer-times API expects for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub display_name: String,
    pub lookup_id: String,
}

impl Region {
    pub fn new(display_name: impl Into<String>, lookup_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            lookup_id: lookup_id.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("region directory cannot be empty")]
    Empty,
    #[error("duplicate region display name: {0}")]
    DuplicateName(String),
}

/// Uzbek regions in keyboard order, each mapped to its administrative centre.
const UZBEKISTAN_REGIONS: &[(&str, &str)] = &[
    ("Toshkent", "Tashkent"),
    ("Andijon", "Andijan"),
    ("Farg‘ona", "Fergana"),
    ("Namangan", "Namangan"),
    ("Samarqand", "Samarkand"),
    ("Buxoro", "Bukhara"),
    ("Navoiy", "Navoi"),
    ("Jizzax", "Jizzakh"),
    ("Sirdaryo", "Gulistan"),
    ("Qashqadaryo", "Karshi"),
    ("Surxondaryo", "Termez"),
    ("Xorazm", "Urgench"),
    ("Toshkent v.", "Nurafshon"),
    ("Qoraqalpog‘iston", "Nukus"),
];

/// Immutable ordered table of regions.
///
/// Display names are unique; lookups are exact and case-sensitive. The order
/// of [`RegionDirectory::display_names`] is the order the table was built with
/// and drives the reply keyboard layout.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    regions: Vec<Region>,
}

impl RegionDirectory {
    pub fn new(regions: Vec<Region>) -> Result<Self, DirectoryError> {
        if regions.is_empty() {
            return Err(DirectoryError::Empty);
        }

        for (i, region) in regions.iter().enumerate() {
            if regions[..i]
                .iter()
                .any(|earlier| earlier.display_name == region.display_name)
            {
                return Err(DirectoryError::DuplicateName(region.display_name.clone()));
            }
        }

        Ok(Self { regions })
    }

    pub fn uzbekistan() -> Self {
        Self {
            regions: UZBEKISTAN_REGIONS
                .iter()
                .map(|(name, city)| Region::new(*name, *city))
                .collect(),
        }
    }

    /// Returns the lookup id for an exact display-name match.
    pub fn resolve(&self, display_name: &str) -> Option<&str> {
        self.find(display_name).map(|r| r.lookup_id.as_str())
    }

    pub fn find(&self, display_name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.display_name == display_name)
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.find(display_name).is_some()
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.display_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionDirectory {
    fn default() -> Self {
        Self::uzbekistan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_configured_name_resolves() {
        let directory = RegionDirectory::uzbekistan();
        for (name, city) in UZBEKISTAN_REGIONS {
            assert_eq!(directory.resolve(name), Some(*city));
        }
    }

    #[test]
    fn test_lookup_ids_are_distinct() {
        let directory = RegionDirectory::uzbekistan();
        let ids: HashSet<&str> = directory
            .display_names()
            .into_iter()
            .filter_map(|name| directory.resolve(name))
            .collect();
        assert_eq!(ids.len(), directory.len());
    }

    #[test]
    fn test_display_order_matches_table() {
        let directory = RegionDirectory::uzbekistan();
        let names = directory.display_names();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "Toshkent");
        assert_eq!(names[1], "Andijon");
        assert_eq!(names[12], "Toshkent v.");
        assert_eq!(names[13], "Qoraqalpog‘iston");
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let directory = RegionDirectory::uzbekistan();
        assert_eq!(directory.resolve("toshkent"), None);
        assert_eq!(directory.resolve("Toshkent "), None);
        assert_eq!(directory.resolve("Tashkent"), None);
        assert_eq!(directory.resolve(""), None);
    }

    #[test]
    fn test_custom_directory_rejects_duplicates() {
        let result = RegionDirectory::new(vec![
            Region::new("A", "Alpha"),
            Region::new("B", "Beta"),
            Region::new("A", "Gamma"),
        ]);
        assert_eq!(result.unwrap_err(), DirectoryError::DuplicateName("A".to_string()));
        assert_eq!(RegionDirectory::new(Vec::new()).unwrap_err(), DirectoryError::Empty);
    }

    #[test]
    fn test_custom_directory_keeps_insertion_order() {
        let directory = RegionDirectory::new(vec![
            Region::new("Zeta", "Z"),
            Region::new("Alpha", "A"),
        ])
        .unwrap();
        assert_eq!(directory.display_names(), vec!["Zeta", "Alpha"]);
        assert!(directory.contains("Alpha"));
        assert!(!directory.is_empty());
    }
}
