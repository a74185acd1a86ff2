// src/io/mod.rs
pub mod rates;

pub use rates::{rates_in_folder, read_charges, AvailableRates, RateFile};
