//! Theme catalogs.
//!
//! A [`Catalog`] bundles everything a thematic dataset needs beyond the item
//! records themselves: the attribute universe in record column order, the
//! slot kinds, the weight table, the faction target sets and the tuning the
//! dataset was calibrated with. Two presets ship with the crate
//! ([`Catalog::albion`], [`Catalog::latium`]); custom datasets are built with
//! [`Catalog::new`].

mod presets;

use crate::anneal::AnnealConfig;
use crate::coverage::{AttributeSet, AttributeUniverse, CoverageObjective, CoverageWeights, ScoringError};
use std::fmt;
use std::str::FromStr;

/// Thematic dataset a catalog describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    Albion,
    Latium,
}

/// Population whose needs define a target attribute set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Faction {
    /// Every attribute of the universe.
    All,
    Celtic,
    Roman,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Albion => "albion",
            Theme::Latium => "latium",
        })
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Faction::All => "all",
            Faction::Celtic => "celtic",
            Faction::Roman => "roman",
        })
    }
}

impl FromStr for Theme {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "albion" => Ok(Theme::Albion),
            "latium" => Ok(Theme::Latium),
            other => Err(CatalogError::UnknownTheme(other.to_string())),
        }
    }
}

impl FromStr for Faction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Faction::All),
            "celtic" => Ok(Faction::Celtic),
            "roman" => Ok(Faction::Roman),
            other => Err(CatalogError::UnknownFactionName(other.to_string())),
        }
    }
}

/// Errors raised when building or querying a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    UnknownTheme(String),
    UnknownFactionName(String),
    /// The faction exists but this catalog defines no target for it.
    UnknownFaction { catalog: String, faction: Faction },
    Scoring(ScoringError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownTheme(name) => write!(f, "unknown theme '{}'", name),
            CatalogError::UnknownFactionName(name) => write!(f, "unknown faction '{}'", name),
            CatalogError::UnknownFaction { catalog, faction } => {
                write!(f, "catalog '{}' has no {} faction", catalog, faction)
            }
            CatalogError::Scoring(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<ScoringError> for CatalogError {
    fn from(err: ScoringError) -> Self {
        CatalogError::Scoring(err)
    }
}

/// Weight data and targets for one thematic dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    theme: Option<Theme>,
    universe: AttributeUniverse,
    slot_kinds: Vec<String>,
    weights: CoverageWeights,
    factions: Vec<(Faction, AttributeSet)>,
    extra_item_reduction_rate: f64,
    extra_item_penalty: f64,
    anneal: AnnealConfig,
}

impl Catalog {
    /// Assembles a catalog from raw data.
    ///
    /// `name` labels the dataset in logs and errors. `slot_kinds` lists slot
    /// columns in record order; the weight table must cover the whole
    /// universe and every slot kind. `Faction::All` is always available and
    /// need not be listed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        universe: AttributeUniverse,
        slot_kinds: Vec<String>,
        weights: CoverageWeights,
        factions: Vec<(Faction, AttributeSet)>,
        extra_item_reduction_rate: f64,
        extra_item_penalty: f64,
        anneal: AnnealConfig,
    ) -> Result<Self, CatalogError> {
        if weights.attribute_count() < universe.len() {
            return Err(ScoringError::InvalidParameter(format!(
                "weight table covers {} attributes, universe has {}",
                weights.attribute_count(),
                universe.len()
            ))
            .into());
        }
        if weights.slot_count() < slot_kinds.len() {
            return Err(ScoringError::InvalidParameter(format!(
                "weight table covers {} slot kinds, catalog declares {}",
                weights.slot_count(),
                slot_kinds.len()
            ))
            .into());
        }
        let catalog = Self {
            name: name.into(),
            theme: None,
            universe,
            slot_kinds,
            weights,
            factions,
            extra_item_reduction_rate,
            extra_item_penalty,
            anneal,
        };
        // surface bad decay/penalty values now rather than at solve time
        catalog.objective(Faction::All)?;
        Ok(catalog)
    }

    /// The built-in catalog for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Albion => Self::albion(),
            Theme::Latium => Self::latium(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The built-in theme this catalog was made from, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn universe(&self) -> &AttributeUniverse {
        &self.universe
    }

    pub fn slot_kinds(&self) -> &[String] {
        &self.slot_kinds
    }

    pub fn weights(&self) -> &CoverageWeights {
        &self.weights
    }

    pub fn extra_item_reduction_rate(&self) -> f64 {
        self.extra_item_reduction_rate
    }

    pub fn extra_item_penalty(&self) -> f64 {
        self.extra_item_penalty
    }

    /// Annealing tuning this dataset was calibrated with.
    pub fn anneal_config(&self) -> &AnnealConfig {
        &self.anneal
    }

    /// Factions with an explicit target, in declaration order.
    pub fn factions(&self) -> impl Iterator<Item = Faction> + '_ {
        self.factions.iter().map(|&(f, _)| f)
    }

    /// Target set of `faction`.
    pub fn target(&self, faction: Faction) -> Result<AttributeSet, CatalogError> {
        if faction == Faction::All {
            return Ok(self.universe.all());
        }
        self.factions
            .iter()
            .find(|&&(f, _)| f == faction)
            .map(|&(_, set)| set)
            .ok_or_else(|| CatalogError::UnknownFaction {
                catalog: self.name.clone(),
                faction,
            })
    }

    /// Coverage objective aimed at `faction`, using this catalog's weights.
    pub fn objective(&self, faction: Faction) -> Result<CoverageObjective, CatalogError> {
        let target = self.target(faction)?;
        Ok(CoverageObjective::new(
            target,
            self.weights.clone(),
            self.extra_item_reduction_rate,
            self.extra_item_penalty,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::SizeBonus;

    #[test]
    fn test_parse_theme_and_faction() {
        assert_eq!("Albion".parse::<Theme>().unwrap(), Theme::Albion);
        assert_eq!(" latium ".parse::<Theme>().unwrap(), Theme::Latium);
        assert!("anno".parse::<Theme>().is_err());
        assert_eq!("ROMAN".parse::<Faction>().unwrap(), Faction::Roman);
        assert!(matches!(
            "greek".parse::<Faction>(),
            Err(CatalogError::UnknownFactionName(_))
        ));
    }

    #[test]
    fn test_custom_catalog() {
        let universe = AttributeUniverse::new(["X", "Y"]).unwrap();
        let weights = CoverageWeights::new(vec![1.0, 2.0], vec![1.0], SizeBonus::default()).unwrap();
        let roman = universe.set_of(&["Y"]).unwrap();
        let catalog = Catalog::new(
            "xy",
            universe,
            vec!["Rivers".into()],
            weights,
            vec![(Faction::Roman, roman)],
            0.9,
            5.0,
            AnnealConfig::default(),
        )
        .unwrap();

        assert_eq!(catalog.name(), "xy");
        assert_eq!(catalog.theme(), None);
        assert_eq!(catalog.target(Faction::All).unwrap().len(), 2);
        assert_eq!(catalog.target(Faction::Roman).unwrap(), roman);
        assert_eq!(
            catalog.target(Faction::Celtic),
            Err(CatalogError::UnknownFaction {
                catalog: "xy".to_string(),
                faction: Faction::Celtic
            })
        );
        assert_eq!(catalog.objective(Faction::Roman).unwrap().target(), roman);
    }

    #[test]
    fn test_custom_catalog_rejects_short_weight_table() {
        let universe = AttributeUniverse::new(["X", "Y", "Z"]).unwrap();
        let weights = CoverageWeights::new(vec![1.0, 2.0], vec![], SizeBonus::default()).unwrap();
        let result = Catalog::new(
            "xyz",
            universe,
            vec![],
            weights,
            vec![],
            0.9,
            5.0,
            AnnealConfig::default(),
        );
        assert!(matches!(result, Err(CatalogError::Scoring(_))));
    }

    #[test]
    fn test_custom_catalog_rejects_bad_decay() {
        let universe = AttributeUniverse::new(["X"]).unwrap();
        let weights = CoverageWeights::new(vec![1.0], vec![], SizeBonus::default()).unwrap();
        let result = Catalog::new(
            "x",
            universe,
            vec![],
            weights,
            vec![],
            1.5,
            5.0,
            AnnealConfig::default(),
        );
        assert!(result.is_err());
    }
}
