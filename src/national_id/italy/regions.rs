use std::collections::HashMap;
use std::io::BufRead;

use crate::error::RegionTableError;

/// Resolves the 4 character place of birth code (codice catastale) of an Italian fiscal code
/// to the name of the municipality or foreign country.
pub trait RegionLookup: Send + Sync {
    fn region_name(&self, code: &str) -> Option<&str>;
}

/// In-memory region table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItalianRegions {
    names_by_code: HashMap<String, String>,
}

impl ItalianRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut regions = Self::new();
        for (code, name) in entries {
            regions.insert(code, name);
        }
        regions
    }

    /// Reads a table whose first line is a header, followed by `code,name` rows. Columns after
    /// the name and blank lines are ignored.
    pub fn from_csv_reader(reader: impl BufRead) -> Result<Self, RegionTableError> {
        let mut regions = Self::new();
        for (idx, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split(',').map(str::trim);
            match (columns.next(), columns.next()) {
                (Some(code), Some(name)) if !code.is_empty() && !name.is_empty() => {
                    regions.insert(code, name);
                }
                // line numbers are 1-based
                _ => return Err(RegionTableError::MalformedLine(idx + 1)),
            }
        }
        Ok(regions)
    }

    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.names_by_code
            .insert(code.into().to_ascii_uppercase(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_code.is_empty()
    }
}

impl RegionLookup for ItalianRegions {
    fn region_name(&self, code: &str) -> Option<&str> {
        self.names_by_code.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_csv_reader() {
        let csv = "code,name\nF205,MILANO (MI)\n\nZ404, STATI UNITI D'AMERICA ,extra\n";
        let regions = ItalianRegions::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.region_name("F205"), Some("MILANO (MI)"));
        assert_eq!(regions.region_name("Z404"), Some("STATI UNITI D'AMERICA"));
        assert_eq!(regions.region_name("code"), None);
    }

    #[test]
    fn test_malformed_line() {
        let csv = "code,name\nF205,MILANO (MI)\nH227\n";
        let err = ItalianRegions::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RegionTableError::MalformedLine(3)));

        let csv = "code,name\n,MILANO (MI)\n";
        let err = ItalianRegions::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RegionTableError::MalformedLine(2)));
    }

    #[test]
    fn test_empty_table() {
        let regions = ItalianRegions::from_csv_reader("code,name\n".as_bytes()).unwrap();
        assert!(regions.is_empty());
        assert_eq!(ItalianRegions::from_csv_reader("".as_bytes()).unwrap(), regions);
    }

    #[test]
    fn test_from_entries_and_insert() {
        let mut regions = ItalianRegions::from_entries([("a065", "AFRICO (RC)")]);
        regions.insert("H227", "REINO (BN)");
        assert_eq!(regions.region_name("A065"), Some("AFRICO (RC)"));
        assert_eq!(regions.region_name("H227"), Some("REINO (BN)"));
        assert_eq!(regions.region_name("H228"), None);
    }
}
