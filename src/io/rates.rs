// src/io/rates.rs

use crate::error::{RepositoryError, Result};
use crate::model::elements::{lookup_species, Species};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One `<species>.json` file in a rate folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateFile {
    pub element: Species,
    /// Top-level keys of the file, in file order.
    pub charges: Vec<String>,
}

/// File stem -> contents summary.
pub type AvailableRates = BTreeMap<String, RateFile>;

/// Lists every `.json` rate file in `folder` with its charge states.
pub fn rates_in_folder(folder: &Path) -> Result<AvailableRates> {
    let entries = fs::read_dir(folder).map_err(|e| RepositoryError::io(folder, e))?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RepositoryError::io(folder, e))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::debug!("Skipping {:?}: file name is not valid UTF-8", path);
            continue;
        };
        if let Some(stem) = name.strip_suffix(".json") {
            files.push((stem.to_string(), path));
        }
    }

    log::info!("Found {} rate files in {:?}", files.len(), folder);

    files
        .into_par_iter()
        .map(|(stem, path)| -> Result<(String, RateFile)> {
            let element = lookup_species(&stem)?;
            let charges = read_charges(&path)?;
            log::debug!("{:?}: {} -> {} charge states", path, element, charges.len());
            Ok((stem, RateFile { element, charges }))
        })
        .collect()
}

/// Reads the top-level keys of a rate file.
pub fn read_charges(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| RepositoryError::io(path, e))?;
    let reader = BufReader::new(file);
    let content: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| RepositoryError::json(path, e))?;

    match content {
        serde_json::Value::Object(map) => Ok(map.keys().cloned().collect()),
        _ => Err(RepositoryError::NotAnObject(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_reads_each_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ne.json", r#"{"0": {}, "1": {}, "2": {}}"#);
        write(dir.path(), "d.json", r#"{"0": {}}"#);

        let rates = rates_in_folder(dir.path()).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates["ne"].charges, vec!["0", "1", "2"]);
        assert_eq!(rates["ne"].element.atomic_number(), 10);
        assert_eq!(rates["d"].charges, vec!["0"]);
        assert_eq!(rates["d"].element.name(), "deuterium");
    }

    #[test]
    fn test_keeps_file_key_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "c.json", r#"{"5": 1, "0": 2, "3": 3}"#);
        let rates = rates_in_folder(dir.path()).unwrap();
        assert_eq!(rates["c"].charges, vec!["5", "0", "3"]);
    }

    #[test]
    fn test_skips_directories_and_other_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "he.json", r#"{"1": {}}"#);
        write(dir.path(), "README.txt", "not a rate file");
        fs::create_dir(dir.path().join("old.json")).unwrap();

        let rates = rates_in_folder(dir.path()).unwrap();
        assert_eq!(rates.keys().collect::<Vec<_>>(), vec!["he"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "ar.json", r#"{"0": {}}"#);
        File::create(dir.path().join(OsStr::from_bytes(b"\xffne.json"))).unwrap();

        let rates = rates_in_folder(dir.path()).unwrap();
        assert_eq!(rates.keys().collect::<Vec<_>>(), vec!["ar"]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = TempDir::new().unwrap();
        assert!(rates_in_folder(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = rates_in_folder(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, RepositoryError::Io { .. }));
    }

    #[test]
    fn test_unknown_species() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "xx.json", "{}");
        let err = rates_in_folder(dir.path()).unwrap_err();
        assert!(matches!(err, RepositoryError::UnknownSpecies(ref n) if n == "xx"));
    }

    #[test]
    fn test_malformed_and_non_object() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.json", "{ not json");
        assert!(matches!(
            read_charges(&dir.path().join("bad.json")),
            Err(RepositoryError::Json { .. })
        ));

        write(dir.path(), "list.json", "[1, 2]");
        assert!(matches!(
            read_charges(&dir.path().join("list.json")),
            Err(RepositoryError::NotAnObject(_))
        ));
    }
}
