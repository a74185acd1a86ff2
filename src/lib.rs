//! Helpers for the local OpenADAS atomic rate repository: transition key
//! encoding, charge-state validation and listing of the rate files on disk.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod repository;
pub mod utils;

pub use config::{default_repository_path, Config};
pub use error::{RepositoryError, Result};
pub use io::{AvailableRates, RateFile};
pub use model::{
    charge_states, decode_transition, encode_transition, lookup_element, lookup_isotope,
    lookup_isotope_number, lookup_species, valid_charge, Element, Isotope, Level, Species,
};
pub use repository::{
    available_charge_exchange_radiated_power, available_continuum_radiated_power,
    available_ionisation_rates, available_line_radiated_power, available_recombination_rates,
    RadiatedPowerType, RateKind, RateType, Repository,
};
