// src/utils/report.rs

use crate::io::rates::AvailableRates;
use crate::repository::RateKind;
use std::path::Path;

/// Plain-text table of the species in one rate folder and their charge states.
pub fn rates_summary(kind: RateKind, root: &Path, rates: &AvailableRates) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rates: {}\n", kind));
    out.push_str(&format!("Repository: {}\n", root.display()));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<12} {:<4} {}\n",
        "File", "Species", "Z", "Charges"
    ));
    out.push_str("--------------------------------------------------\n");

    for (stem, file) in rates {
        out.push_str(&format!(
            "{:<8} {:<12} {:<4} {}\n",
            stem,
            file.element.name(),
            file.element.atomic_number(),
            file.charges.join(", ")
        ));
    }

    if rates.is_empty() {
        out.push_str("No rate files found.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rates::RateFile;
    use crate::model::elements::lookup_species;
    use crate::repository::RateType;

    #[test]
    fn test_summary_lists_each_species() {
        let mut rates = AvailableRates::new();
        rates.insert(
            "ne".to_string(),
            RateFile {
                element: lookup_species("ne").unwrap(),
                charges: vec!["0".into(), "1".into()],
            },
        );
        let text = rates_summary(RateKind::Atomic(RateType::Ionisation), Path::new("/repo"), &rates);
        assert!(text.starts_with("Rates: ionisation\n"));
        assert!(text.contains("neon"));
        assert!(text.contains("0, 1"));
        assert!(!text.contains("No rate files"));
    }

    #[test]
    fn test_summary_empty() {
        let text = rates_summary(
            RateKind::Atomic(RateType::Recombination),
            Path::new("/repo"),
            &AvailableRates::new(),
        );
        assert!(text.ends_with("No rate files found.\n"));
    }
}
