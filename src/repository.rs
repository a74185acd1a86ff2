// src/repository.rs

use crate::config::default_repository_path;
use crate::error::Result;
use crate::io::rates::{rates_in_folder, AvailableRates};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Atomic rates stored directly under the repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateType {
    Ionisation,
    Recombination,
}

impl RateType {
    pub fn dir_name(self) -> &'static str {
        match self {
            RateType::Ionisation => "ionisation",
            RateType::Recombination => "recombination",
        }
    }
}

/// Radiated power rates, stored under `radiated_power/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiatedPowerType {
    Continuum,
    ChargeExchange,
    Line,
}

impl RadiatedPowerType {
    pub fn dir_name(self) -> &'static str {
        match self {
            RadiatedPowerType::Continuum => "continuum",
            RadiatedPowerType::ChargeExchange => "cx",
            RadiatedPowerType::Line => "line",
        }
    }
}

/// Any rate folder in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    Atomic(RateType),
    RadiatedPower(RadiatedPowerType),
}

impl RateKind {
    pub const ALL: [RateKind; 5] = [
        RateKind::Atomic(RateType::Ionisation),
        RateKind::Atomic(RateType::Recombination),
        RateKind::RadiatedPower(RadiatedPowerType::Continuum),
        RateKind::RadiatedPower(RadiatedPowerType::ChargeExchange),
        RateKind::RadiatedPower(RadiatedPowerType::Line),
    ];

    /// Folder holding this kind of rate, relative to the repository root.
    pub fn relative_dir(self) -> PathBuf {
        match self {
            RateKind::Atomic(t) => PathBuf::from(t.dir_name()),
            RateKind::RadiatedPower(t) => Path::new("radiated_power").join(t.dir_name()),
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateKind::Atomic(t) => f.write_str(t.dir_name()),
            RateKind::RadiatedPower(t) => f.write_str(t.dir_name()),
        }
    }
}

impl FromStr for RateKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ionisation" | "ionization" => Ok(RateKind::Atomic(RateType::Ionisation)),
            "recombination" => Ok(RateKind::Atomic(RateType::Recombination)),
            "continuum" => Ok(RateKind::RadiatedPower(RadiatedPowerType::Continuum)),
            "cx" | "charge_exchange" => Ok(RateKind::RadiatedPower(RadiatedPowerType::ChargeExchange)),
            "line" => Ok(RateKind::RadiatedPower(RadiatedPowerType::Line)),
            other => Err(format!(
                "unknown rate kind '{}', expected one of: ionisation, recombination, continuum, cx, line",
                other
            )),
        }
    }
}

/// A rate repository rooted at a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    root: PathBuf,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(default_repository_path())
    }
}

impl Repository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `None` means the default repository.
    pub fn open(root: Option<&Path>) -> Self {
        match root {
            Some(p) => Self::new(p),
            None => Self::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder(&self, kind: RateKind) -> PathBuf {
        self.root.join(kind.relative_dir())
    }

    pub fn available(&self, kind: RateKind) -> Result<AvailableRates> {
        let folder = self.folder(kind);
        log::info!("Scanning {} rates in {:?}", kind, folder);
        rates_in_folder(&folder)
    }

    pub fn recombination_rates(&self) -> Result<AvailableRates> {
        self.available(RateKind::Atomic(RateType::Recombination))
    }

    pub fn ionisation_rates(&self) -> Result<AvailableRates> {
        self.available(RateKind::Atomic(RateType::Ionisation))
    }

    pub fn continuum_radiated_power(&self) -> Result<AvailableRates> {
        self.available(RateKind::RadiatedPower(RadiatedPowerType::Continuum))
    }

    pub fn charge_exchange_radiated_power(&self) -> Result<AvailableRates> {
        self.available(RateKind::RadiatedPower(RadiatedPowerType::ChargeExchange))
    }

    pub fn line_radiated_power(&self) -> Result<AvailableRates> {
        self.available(RateKind::RadiatedPower(RadiatedPowerType::Line))
    }
}

pub fn available_recombination_rates(repository_path: Option<&Path>) -> Result<AvailableRates> {
    Repository::open(repository_path).recombination_rates()
}

pub fn available_ionisation_rates(repository_path: Option<&Path>) -> Result<AvailableRates> {
    Repository::open(repository_path).ionisation_rates()
}

pub fn available_continuum_radiated_power(repository_path: Option<&Path>) -> Result<AvailableRates> {
    Repository::open(repository_path).continuum_radiated_power()
}

pub fn available_charge_exchange_radiated_power(repository_path: Option<&Path>) -> Result<AvailableRates> {
    Repository::open(repository_path).charge_exchange_radiated_power()
}

pub fn available_line_radiated_power(repository_path: Option<&Path>) -> Result<AvailableRates> {
    Repository::open(repository_path).line_radiated_power()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use std::fs;
    use tempfile::TempDir;

    fn build_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for kind in RateKind::ALL {
            fs::create_dir_all(root.join(kind.relative_dir())).unwrap();
        }
        fs::write(root.join("ionisation/ne.json"), r#"{"0": {}, "1": {}}"#).unwrap();
        fs::write(root.join("ionisation/h.json"), r#"{"0": {}}"#).unwrap();
        fs::write(root.join("recombination/ne.json"), r#"{"1": {}, "2": {}}"#).unwrap();
        fs::write(root.join("radiated_power/continuum/c.json"), r#"{"1": {}}"#).unwrap();
        fs::write(root.join("radiated_power/cx/d.json"), r#"{"0": {}}"#).unwrap();
        fs::write(root.join("radiated_power/line/ar.json"), r#"{"3": {}, "4": {}}"#).unwrap();
        dir
    }

    #[test]
    fn test_folders() {
        let repo = Repository::new("/repo");
        assert_eq!(
            repo.folder(RateKind::Atomic(RateType::Ionisation)),
            PathBuf::from("/repo/ionisation")
        );
        assert_eq!(
            repo.folder(RateKind::RadiatedPower(RadiatedPowerType::ChargeExchange)),
            PathBuf::from("/repo/radiated_power/cx")
        );
    }

    #[test]
    fn test_available_atomic_rates() {
        let dir = build_repo();
        let ion = available_ionisation_rates(Some(dir.path())).unwrap();
        assert_eq!(ion.keys().collect::<Vec<_>>(), vec!["h", "ne"]);
        assert_eq!(ion["ne"].charges, vec!["0", "1"]);
        assert_eq!(ion["h"].element.name(), "protium");

        let rec = available_recombination_rates(Some(dir.path())).unwrap();
        assert_eq!(rec["ne"].charges, vec!["1", "2"]);
    }

    #[test]
    fn test_available_radiated_power() {
        let dir = build_repo();
        let root = Some(dir.path());
        assert_eq!(available_continuum_radiated_power(root).unwrap()["c"].charges, vec!["1"]);
        assert_eq!(
            available_charge_exchange_radiated_power(root).unwrap()["d"].element.atomic_number(),
            1
        );
        assert_eq!(available_line_radiated_power(root).unwrap()["ar"].charges, vec!["3", "4"]);
    }

    #[test]
    fn test_missing_rate_folder() {
        let dir = TempDir::new().unwrap();
        let err = Repository::new(dir.path()).ionisation_rates().unwrap_err();
        assert!(matches!(err, RepositoryError::Io { .. }));
    }

    #[test]
    fn test_rate_kind_parsing() {
        for kind in RateKind::ALL {
            assert_eq!(kind.to_string().parse::<RateKind>().unwrap(), kind);
        }
        assert_eq!(
            "Ionization".parse::<RateKind>().unwrap(),
            RateKind::Atomic(RateType::Ionisation)
        );
        assert!("nuclear".parse::<RateKind>().is_err());
    }

    #[test]
    fn test_default_repository() {
        assert!(Repository::open(None)
            .root()
            .ends_with(".cherab/openadas/repository"));
    }
}
