//src/model/mod.rs
pub mod charge;
pub mod elements;
pub mod transition;

// Re-exports for cleaner imports
pub use charge::{charge_states, valid_charge};
pub use elements::{lookup_element, lookup_isotope, lookup_isotope_number, lookup_species, Element, Isotope, Species};
pub use transition::{decode_transition, encode_transition, Level};
