// src/model/elements.rs

use crate::error::{RepositoryError, Result};
use serde::Serialize;
use std::fmt;

/// A chemical element from the periodic table.
#[derive(Debug, PartialEq, Serialize)]
pub struct Element {
    pub name: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u32,
    pub atomic_weight: f64,
}

/// A specific isotope of an element.
///
/// `atomic_number` is the parent element's; use [`Isotope::element`] to reach it.
#[derive(Debug, PartialEq, Serialize)]
pub struct Isotope {
    pub name: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub atomic_weight: f64,
}

impl Isotope {
    pub fn element(&self) -> &'static Element {
        &ELEMENTS[(self.atomic_number - 1) as usize]
    }
}

/// Whatever a rate file stem resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Species {
    Element(&'static Element),
    Isotope(&'static Isotope),
}

impl Species {
    pub fn name(&self) -> &'static str {
        match self {
            Species::Element(e) => e.name,
            Species::Isotope(i) => i.name,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Species::Element(e) => e.symbol,
            Species::Isotope(i) => i.symbol,
        }
    }

    pub fn atomic_number(&self) -> u32 {
        match self {
            Species::Element(e) => e.atomic_number,
            Species::Isotope(i) => i.atomic_number,
        }
    }

    pub fn element(&self) -> &'static Element {
        match self {
            Species::Element(e) => e,
            Species::Isotope(i) => i.element(),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

impl From<&'static Element> for Species {
    fn from(e: &'static Element) -> Self {
        Species::Element(e)
    }
}

impl From<&'static Isotope> for Species {
    fn from(i: &'static Isotope) -> Self {
        Species::Isotope(i)
    }
}

/// Finds an element by name, symbol or atomic number. Case-insensitive.
pub fn lookup_element(v: &str) -> Result<&'static Element> {
    let key = v.trim();
    // Only canonical decimals count as atomic numbers: "010" and "+10" are not neon.
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        return key
            .parse::<usize>()
            .ok()
            .filter(|_| !key.starts_with('0'))
            .and_then(|z| ELEMENTS.get(z - 1))
            .ok_or_else(|| RepositoryError::UnknownElement(v.to_string()));
    }

    ELEMENTS
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(key) || e.symbol.eq_ignore_ascii_case(key))
        .ok_or_else(|| RepositoryError::UnknownElement(v.to_string()))
}

/// Finds an isotope by name (`deuterium`, `helium3`) or symbol (`D`, `He3`).
pub fn lookup_isotope(v: &str) -> Result<&'static Isotope> {
    let key = v.trim();
    ISOTOPES
        .iter()
        .find(|i| i.name.eq_ignore_ascii_case(key) || i.symbol.eq_ignore_ascii_case(key))
        .ok_or_else(|| RepositoryError::UnknownIsotope(v.to_string()))
}

/// Finds an isotope from its element (any form [`lookup_element`] takes) and mass number.
pub fn lookup_isotope_number(element: &str, mass_number: u32) -> Result<&'static Isotope> {
    let el = lookup_element(element)?;
    ISOTOPES
        .iter()
        .find(|i| i.atomic_number == el.atomic_number && i.mass_number == mass_number)
        .ok_or_else(|| RepositoryError::UnknownIsotope(format!("{}{}", el.symbol, mass_number)))
}

/// Resolves a repository file stem. Isotopes win over elements, so `h` is protium.
pub fn lookup_species(name: &str) -> Result<Species> {
    if let Ok(iso) = lookup_isotope(name) {
        return Ok(Species::Isotope(iso));
    }
    match lookup_element(name) {
        Ok(el) => Ok(Species::Element(el)),
        Err(_) => Err(RepositoryError::UnknownSpecies(name.to_string())),
    }
}

const fn el(name: &'static str, symbol: &'static str, atomic_number: u32, atomic_weight: f64) -> Element {
    Element { name, symbol, atomic_number, atomic_weight }
}

const fn iso(
    name: &'static str,
    symbol: &'static str,
    atomic_number: u32,
    mass_number: u32,
    atomic_weight: f64,
) -> Isotope {
    Isotope { name, symbol, atomic_number, mass_number, atomic_weight }
}

/// Indexed by atomic number - 1. Weights are standard atomic weights, or the
/// mass number of the longest-lived isotope for elements without one.
pub static ELEMENTS: [Element; 118] = [
    // --- Period 1 ---
    el("hydrogen", "H", 1, 1.008),
    el("helium", "He", 2, 4.002602),
    // --- Period 2 ---
    el("lithium", "Li", 3, 6.94),
    el("beryllium", "Be", 4, 9.0121831),
    el("boron", "B", 5, 10.81),
    el("carbon", "C", 6, 12.011),
    el("nitrogen", "N", 7, 14.007),
    el("oxygen", "O", 8, 15.999),
    el("fluorine", "F", 9, 18.998403163),
    el("neon", "Ne", 10, 20.1797),
    // --- Period 3 ---
    el("sodium", "Na", 11, 22.98976928),
    el("magnesium", "Mg", 12, 24.305),
    el("aluminium", "Al", 13, 26.9815385),
    el("silicon", "Si", 14, 28.085),
    el("phosphorus", "P", 15, 30.973761998),
    el("sulfur", "S", 16, 32.06),
    el("chlorine", "Cl", 17, 35.45),
    el("argon", "Ar", 18, 39.948),
    // --- Period 4 ---
    el("potassium", "K", 19, 39.0983),
    el("calcium", "Ca", 20, 40.078),
    el("scandium", "Sc", 21, 44.955908),
    el("titanium", "Ti", 22, 47.867),
    el("vanadium", "V", 23, 50.9415),
    el("chromium", "Cr", 24, 51.9961),
    el("manganese", "Mn", 25, 54.938044),
    el("iron", "Fe", 26, 55.845),
    el("cobalt", "Co", 27, 58.933194),
    el("nickel", "Ni", 28, 58.6934),
    el("copper", "Cu", 29, 63.546),
    el("zinc", "Zn", 30, 65.38),
    el("gallium", "Ga", 31, 69.723),
    el("germanium", "Ge", 32, 72.630),
    el("arsenic", "As", 33, 74.921595),
    el("selenium", "Se", 34, 78.971),
    el("bromine", "Br", 35, 79.904),
    el("krypton", "Kr", 36, 83.798),
    // --- Period 5 ---
    el("rubidium", "Rb", 37, 85.4678),
    el("strontium", "Sr", 38, 87.62),
    el("yttrium", "Y", 39, 88.90584),
    el("zirconium", "Zr", 40, 91.224),
    el("niobium", "Nb", 41, 92.90637),
    el("molybdenum", "Mo", 42, 95.95),
    el("technetium", "Tc", 43, 98.0),
    el("ruthenium", "Ru", 44, 101.07),
    el("rhodium", "Rh", 45, 102.90550),
    el("palladium", "Pd", 46, 106.42),
    el("silver", "Ag", 47, 107.8682),
    el("cadmium", "Cd", 48, 112.414),
    el("indium", "In", 49, 114.818),
    el("tin", "Sn", 50, 118.710),
    el("antimony", "Sb", 51, 121.760),
    el("tellurium", "Te", 52, 127.60),
    el("iodine", "I", 53, 126.90447),
    el("xenon", "Xe", 54, 131.293),
    // --- Period 6 ---
    el("caesium", "Cs", 55, 132.90545196),
    el("barium", "Ba", 56, 137.327),
    el("lanthanum", "La", 57, 138.90547),
    el("cerium", "Ce", 58, 140.116),
    el("praseodymium", "Pr", 59, 140.90766),
    el("neodymium", "Nd", 60, 144.242),
    el("promethium", "Pm", 61, 145.0),
    el("samarium", "Sm", 62, 150.36),
    el("europium", "Eu", 63, 151.964),
    el("gadolinium", "Gd", 64, 157.25),
    el("terbium", "Tb", 65, 158.92535),
    el("dysprosium", "Dy", 66, 162.500),
    el("holmium", "Ho", 67, 164.93033),
    el("erbium", "Er", 68, 167.259),
    el("thulium", "Tm", 69, 168.93422),
    el("ytterbium", "Yb", 70, 173.045),
    el("lutetium", "Lu", 71, 174.9668),
    el("hafnium", "Hf", 72, 178.49),
    el("tantalum", "Ta", 73, 180.94788),
    el("tungsten", "W", 74, 183.84),
    el("rhenium", "Re", 75, 186.207),
    el("osmium", "Os", 76, 190.23),
    el("iridium", "Ir", 77, 192.217),
    el("platinum", "Pt", 78, 195.084),
    el("gold", "Au", 79, 196.966569),
    el("mercury", "Hg", 80, 200.592),
    el("thallium", "Tl", 81, 204.38),
    el("lead", "Pb", 82, 207.2),
    el("bismuth", "Bi", 83, 208.98040),
    el("polonium", "Po", 84, 209.0),
    el("astatine", "At", 85, 210.0),
    el("radon", "Rn", 86, 222.0),
    // --- Period 7 ---
    el("francium", "Fr", 87, 223.0),
    el("radium", "Ra", 88, 226.0),
    el("actinium", "Ac", 89, 227.0),
    el("thorium", "Th", 90, 232.0377),
    el("protactinium", "Pa", 91, 231.03588),
    el("uranium", "U", 92, 238.02891),
    el("neptunium", "Np", 93, 237.0),
    el("plutonium", "Pu", 94, 244.0),
    el("americium", "Am", 95, 243.0),
    el("curium", "Cm", 96, 247.0),
    el("berkelium", "Bk", 97, 247.0),
    el("californium", "Cf", 98, 251.0),
    el("einsteinium", "Es", 99, 252.0),
    el("fermium", "Fm", 100, 257.0),
    el("mendelevium", "Md", 101, 258.0),
    el("nobelium", "No", 102, 259.0),
    el("lawrencium", "Lr", 103, 266.0),
    el("rutherfordium", "Rf", 104, 267.0),
    el("dubnium", "Db", 105, 268.0),
    el("seaborgium", "Sg", 106, 269.0),
    el("bohrium", "Bh", 107, 270.0),
    el("hassium", "Hs", 108, 277.0),
    el("meitnerium", "Mt", 109, 278.0),
    el("darmstadtium", "Ds", 110, 281.0),
    el("roentgenium", "Rg", 111, 282.0),
    el("copernicium", "Cn", 112, 285.0),
    el("nihonium", "Nh", 113, 286.0),
    el("flerovium", "Fl", 114, 289.0),
    el("moscovium", "Mc", 115, 290.0),
    el("livermorium", "Lv", 116, 293.0),
    el("tennessine", "Ts", 117, 294.0),
    el("oganesson", "Og", 118, 294.0),
];

/// Isotopes that show up in fusion plasma rate data.
pub static ISOTOPES: [Isotope; 23] = [
    iso("protium", "H", 1, 1, 1.00782503207),
    iso("deuterium", "D", 1, 2, 2.0141017778),
    iso("tritium", "T", 1, 3, 3.0160492777),
    iso("helium3", "He3", 2, 3, 3.0160293191),
    iso("helium4", "He4", 2, 4, 4.00260325415),
    iso("lithium6", "Li6", 3, 6, 6.015122795),
    iso("lithium7", "Li7", 3, 7, 7.01600455),
    iso("beryllium9", "Be9", 4, 9, 9.0121822),
    iso("boron10", "B10", 5, 10, 10.0129370),
    iso("boron11", "B11", 5, 11, 11.0093054),
    iso("carbon12", "C12", 6, 12, 12.0),
    iso("carbon13", "C13", 6, 13, 13.0033548378),
    iso("nitrogen14", "N14", 7, 14, 14.0030740048),
    iso("nitrogen15", "N15", 7, 15, 15.0001088982),
    iso("oxygen16", "O16", 8, 16, 15.99491461956),
    iso("oxygen17", "O17", 8, 17, 16.99913170),
    iso("oxygen18", "O18", 8, 18, 17.9991610),
    iso("neon20", "Ne20", 10, 20, 19.9924401754),
    iso("neon21", "Ne21", 10, 21, 20.99384668),
    iso("neon22", "Ne22", 10, 22, 21.991385114),
    iso("argon36", "Ar36", 18, 36, 35.967545106),
    iso("argon38", "Ar38", 18, 38, 37.9627324),
    iso("argon40", "Ar40", 18, 40, 39.9623831225),
];
