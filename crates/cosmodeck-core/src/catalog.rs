use crate::epoch::{EpochRecord, VisualStyle};

const LAMBDA_CDM_NOTE: &str = "Prediction note: this future state is a simplified \
extrapolation from current cosmological models (Lambda-CDM). The actual long-term \
future is subject to ongoing research and potential unknown physics.";

const HEAT_DEATH_NOTE: &str = "Prediction note: this future state is a simplified \
extrapolation from current cosmological models (Lambda-CDM). The actual long-term \
future is subject to ongoing research and potential unknown physics. This scenario \
additionally assumes continued dark energy dominance and proton stability (or a \
very long decay time).";

// Times are approximate and illustrative.
const EPOCHS: &[EpochRecord] = &[
    EpochRecord {
        name: "Big Bang Singularity",
        time_since_origin: "0 (origin)",
        temperature: None,
        description: "The universe begins as an infinitely hot and dense point.",
        note: None,
        visual_style: VisualStyle::Singularity,
    },
    EpochRecord {
        name: "Inflation",
        time_since_origin: "~ 1e-34 seconds",
        temperature: Some("~10^27 K"),
        description: "Rapid exponential expansion. The universe is filled with \
quark-gluon plasma.",
        note: None,
        visual_style: VisualStyle::Inflation,
    },
    EpochRecord {
        name: "Nucleosynthesis",
        time_since_origin: "~ 3 minutes",
        temperature: Some("~10^9 K"),
        description: "Protons and neutrons fuse to form the first light nuclei \
(hydrogen, helium, lithium). The universe is an opaque plasma.",
        note: None,
        visual_style: VisualStyle::PlasmaSoup,
    },
    EpochRecord {
        name: "Recombination",
        time_since_origin: "~ 377 thousand years",
        temperature: Some("~3000 K"),
        description: "The universe cools enough for electrons to combine with \
nuclei, forming neutral atoms. Light can travel freely (the CMB is released) and \
the universe becomes transparent.",
        note: None,
        visual_style: VisualStyle::TransparentAtoms,
    },
    EpochRecord {
        name: "Dark Ages & First Stars",
        time_since_origin: "~ 400 million years",
        temperature: Some("~60 K"),
        description: "Gravity slowly pulls matter together. The first stars and \
galaxies begin to form, reionizing the universe.",
        note: None,
        visual_style: VisualStyle::FirstStructures,
    },
    EpochRecord {
        name: "Galaxy Formation Peak",
        time_since_origin: "~ 3.0 billion years",
        temperature: Some("~10 K"),
        description: "Peak era of star formation and galaxy assembly. Quasars are \
common.",
        note: None,
        visual_style: VisualStyle::FormingGalaxies,
    },
    EpochRecord {
        name: "Present Day",
        time_since_origin: "~ 13.8 billion years",
        temperature: Some("2.7 K (CMB)"),
        description: "The universe is dominated by dark energy, leading to \
accelerated expansion. Complex structures (clusters, superclusters) exist.",
        note: None,
        visual_style: VisualStyle::ModernGalaxies,
    },
    EpochRecord {
        name: "Future - Continued Expansion",
        time_since_origin: "~ 100 billion years",
        temperature: Some("< 1 K"),
        description: "Accelerated expansion continues. Galaxies move further \
apart. Star formation declines.",
        note: Some(LAMBDA_CDM_NOTE),
        visual_style: VisualStyle::DistantGalaxies,
    },
    EpochRecord {
        name: "Future - Heat Death?",
        time_since_origin: "~ 100 trillion years",
        temperature: Some("-> 0 K"),
        description: "If expansion continues indefinitely: star formation ceases, \
stars die, black holes evaporate (very long term). The universe approaches \
maximum entropy.",
        note: Some(HEAT_DEATH_NOTE),
        visual_style: VisualStyle::EmptyCold,
    },
];

/// The ordered, immutable sequence of epochs, compiled into the binary.
///
/// Constructed once at startup and shared read-only; the navigator keeps
/// every index it hands out inside `0..len()`, so the `None` arm of
/// [`Catalog::get`] is unreachable in normal operation.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [EpochRecord],
}

impl Catalog {
    pub fn new() -> Self {
        Self { records: EPOCHS }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static EpochRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static EpochRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &'static [EpochRecord] {
        self.records
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_epochs_in_order() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.get(0).unwrap().name, "Big Bang Singularity");
        assert_eq!(catalog.get(8).unwrap().name, "Future - Heat Death?");
        assert!(catalog.get(9).is_none());
    }

    #[test]
    fn singularity_has_no_defined_temperature() {
        let catalog = Catalog::new();
        assert!(catalog.get(0).unwrap().temperature.is_none());
        // Every other epoch has one.
        for record in catalog.iter().skip(1) {
            assert!(record.temperature.is_some(), "{} missing temp", record.name);
        }
    }

    #[test]
    fn only_future_epochs_carry_prediction_notes() {
        let catalog = Catalog::new();
        for record in catalog.iter() {
            assert_eq!(
                record.note.is_some(),
                record.name.starts_with("Future"),
                "unexpected note policy for {}",
                record.name
            );
        }
    }

    #[test]
    fn visual_styles_are_distinct() {
        let catalog = Catalog::new();
        let mut seen = std::collections::HashSet::new();
        for record in catalog.iter() {
            assert!(seen.insert(record.visual_style), "duplicate style");
        }
    }
}
