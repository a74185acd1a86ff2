// src/model/charge.rs

use crate::model::elements::Species;
use std::ops::RangeInclusive;

/// True if the species can be ionised to `charge`.
pub fn valid_charge(species: &Species, charge: u32) -> bool {
    charge <= species.atomic_number()
}

/// Every charge state from neutral to fully stripped.
pub fn charge_states(species: &Species) -> RangeInclusive<u32> {
    0..=species.atomic_number()
}
