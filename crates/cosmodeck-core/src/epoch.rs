use serde::Serialize;
use std::fmt;

/// One predefined stage of cosmic history.
///
/// All fields are display-ready: times and temperatures are authored as
/// human-readable strings, not quantities. `temperature` is `None` where
/// the notion is not meaningful (the singularity has no defined
/// temperature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpochRecord {
    pub name: &'static str,
    pub time_since_origin: &'static str,
    pub temperature: Option<&'static str>,
    pub description: &'static str,
    /// Caveat appended to the description for speculative entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub visual_style: VisualStyle,
}

/// Tag selecting which fixed drawing recipe renders an epoch's schematic.
///
/// One variant per recipe, so the scene dispatch is exhaustive — adding an
/// epoch with a new look means adding a variant and the compiler walks you
/// to every match that needs a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualStyle {
    Singularity,
    Inflation,
    PlasmaSoup,
    TransparentAtoms,
    FirstStructures,
    FormingGalaxies,
    ModernGalaxies,
    DistantGalaxies,
    EmptyCold,
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualStyle::Singularity => write!(f, "singularity"),
            VisualStyle::Inflation => write!(f, "inflation"),
            VisualStyle::PlasmaSoup => write!(f, "plasma-soup"),
            VisualStyle::TransparentAtoms => write!(f, "transparent-atoms"),
            VisualStyle::FirstStructures => write!(f, "first-structures"),
            VisualStyle::FormingGalaxies => write!(f, "forming-galaxies"),
            VisualStyle::ModernGalaxies => write!(f, "modern-galaxies"),
            VisualStyle::DistantGalaxies => write!(f, "distant-galaxies"),
            VisualStyle::EmptyCold => write!(f, "empty-cold"),
        }
    }
}
