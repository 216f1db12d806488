//! Built-in weight tables.
//!
//! Attribute weights follow the production-chain tiers of each dataset:
//! every chain an attribute feeds adds the tier's points, and construction
//! materials take half the combined value of the buildings they unlock.
//! Latium's sturgeon, gold ore and mineral weights assume ten slots of the
//! kind that works them and scale with the island's actual count.

use super::{Catalog, Faction, Theme};
use crate::anneal::AnnealConfig;
use crate::coverage::{Attribute, AttributeSet, AttributeUniverse, CoverageWeights, SizeBonus};

const ALBION_FERTILITIES: [&str; 15] = [
    "Barley",
    "Herbs",
    "Dye Plant",
    "Resin",
    "Saltwort",
    "Small Birds",
    "Flax",
    "Beaver",
    "Pony",
    "Sea Shell",
    "Iron",
    "Copper",
    "Silver",
    "Tin",
    "Granite",
];

const BARLEY: usize = 0;
const HERBS: usize = 1;
const DYE_PLANT: usize = 2;
const RESIN: usize = 3;
const SALTWORT: usize = 4;
const SMALL_BIRDS: usize = 5;
const FLAX: usize = 6;
const BEAVER: usize = 7;
const PONY: usize = 8;
const SEA_SHELL: usize = 9;
const IRON: usize = 10;
const COPPER: usize = 11;
const SILVER: usize = 12;
const TIN: usize = 13;
const GRANITE: usize = 14;

const STURGEON: usize = 9;
const MINERAL: usize = 12;
const GOLD_ORE: usize = 13;

const MOUNTAIN_SLOTS: usize = 0;
const RIVER_SLOTS: usize = 1;

const LATIUM_FERTILITIES: [&str; 14] = [
    "Mackerel",
    "Lavender",
    "Resin",
    "Olive",
    "Grapes",
    "Flax",
    "Murex Snail",
    "Sandarac",
    "Oyster",
    "Sturgeon",
    "Marble",
    "Iron",
    "Mineral",
    "Gold Ore",
];

fn set_of(indices: &[usize]) -> AttributeSet {
    indices.iter().map(|&i| Attribute::new(i)).collect()
}

fn tuning() -> AnnealConfig {
    AnnealConfig::default()
        .with_max_anneals(200)
        .with_max_trials(1000)
        .with_initial_temperature(1000.0)
        .with_cooling_rate(0.95)
}

impl Catalog {
    /// Albion: fifteen fertilities split between Celtic and Roman needs
    /// (iron serves both), with mountain and marsh slots.
    pub fn albion() -> Self {
        let mut w = [0.0; 15];

        // tier 2, celtic: beer, trousers, torcs, horns, shields
        w[BARLEY] += 70.0;
        w[DYE_PLANT] += 140.0;
        w[COPPER] += 140.0;
        w[TIN] += 140.0;

        // tier 2, roman: sausage, brooches, amphorae
        w[HERBS] += 70.0;
        w[SILVER] += 70.0;
        w[RESIN] += 70.0;

        // tier 3, celtic: beef, cloaks, pelt hats, chariots
        w[SALTWORT] += 100.0;
        w[DYE_PLANT] += 50.0;
        w[COPPER] += 50.0;
        w[BEAVER] += 50.0;
        w[PONY] += 50.0;

        // tier 3, roman: aspic, wigs, mirrors
        w[SMALL_BIRDS] += 50.0;
        w[FLAX] += 50.0;
        w[RESIN] += 50.0;
        w[SILVER] += 50.0;
        w[SEA_SHELL] += 50.0;

        // weapons and armor: (70 + 70) / 2
        w[IRON] = 70.0;

        // celtic tier 3 buildings: (50 + 50 + 50) / 2
        w[GRANITE] += 75.0;

        let celtic = set_of(&[BARLEY, DYE_PLANT, COPPER, TIN, SALTWORT, BEAVER, PONY, IRON, GRANITE]);
        let roman = set_of(&[HERBS, SILVER, RESIN, SMALL_BIRDS, FLAX, SEA_SHELL, IRON]);

        Catalog {
            name: Theme::Albion.to_string(),
            theme: Some(Theme::Albion),
            universe: AttributeUniverse::from_static(&ALBION_FERTILITIES),
            slot_kinds: vec!["Mountains".to_string(), "Marshes".to_string()],
            weights: CoverageWeights::from_parts(
                w.to_vec(),
                vec![5.0, 5.0],
                SizeBonus::new(400.0, 200.0, 100.0, 10.0),
            ),
            factions: vec![(Faction::Roman, roman), (Faction::Celtic, celtic)],
            extra_item_reduction_rate: 0.9,
            extra_item_penalty: 100.0,
            anneal: tuning(),
        }
    }

    /// Latium: fourteen fertilities for a single population, with mountain
    /// and river slots. Sturgeon and gold ore scale with river slots,
    /// mineral with mountain slots.
    pub fn latium() -> Self {
        let weights = vec![
            70.0,  // mackerel: garum
            70.0,  // lavender: soap
            50.0,  // resin: amphorae
            50.0,  // olive
            30.0,  // grapes: wine
            60.0,  // flax: togas, loungers
            30.0,  // murex snail: togas
            90.0,  // sandarac: writing tablets, loungers, lyres
            30.0,  // oyster: oysters with caviar
            30.0,  // sturgeon: oysters with caviar
            80.0,  // marble: (50 + 50 + 30 + 30 + 30) / 2
            50.0,  // iron: (50 + 50) / 2
            105.0, // mineral: fine glass, necklaces, mosaics
            60.0,  // gold ore: necklaces, lyres
        ];

        Catalog {
            name: Theme::Latium.to_string(),
            theme: Some(Theme::Latium),
            universe: AttributeUniverse::from_static(&LATIUM_FERTILITIES),
            slot_kinds: vec!["Mountains".to_string(), "Rivers".to_string()],
            weights: CoverageWeights::from_parts(
                weights,
                vec![5.0, 5.0],
                SizeBonus::new(300.0, 150.0, 75.0, 30.0),
            )
            .scaled_by(Attribute::new(STURGEON), RIVER_SLOTS, 10.0)
            .scaled_by(Attribute::new(GOLD_ORE), RIVER_SLOTS, 10.0)
            .scaled_by(Attribute::new(MINERAL), MOUNTAIN_SLOTS, 10.0),
            factions: Vec::new(),
            extra_item_reduction_rate: 0.9,
            extra_item_penalty: 200.0,
            anneal: tuning(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::coverage::{Item, SizeTier};

    #[test]
    fn test_albion_weights() {
        let catalog = Catalog::albion();
        let w = catalog.weights();
        let u = catalog.universe();
        let weight = |name: &str| w.attribute(u.lookup(name).unwrap());
        assert_eq!(weight("Dye Plant"), 190.0);
        assert_eq!(weight("Copper"), 190.0);
        assert_eq!(weight("Resin"), 120.0);
        assert_eq!(weight("Silver"), 120.0);
        assert_eq!(weight("Iron"), 70.0);
        assert_eq!(weight("Granite"), 75.0);
        assert_eq!(weight("Tin"), 140.0);
        assert_eq!(catalog.slot_kinds().len(), 2);
    }

    #[test]
    fn test_albion_factions() {
        let catalog = Catalog::albion();
        let celtic = catalog.target(Faction::Celtic).unwrap();
        let roman = catalog.target(Faction::Roman).unwrap();
        assert_eq!(celtic.len(), 9);
        assert_eq!(roman.len(), 7);
        // iron is shared; together they cover every fertility
        assert_eq!(celtic.intersection(roman).len(), 1);
        assert_eq!(celtic | roman, catalog.target(Faction::All).unwrap());
    }

    #[test]
    fn test_latium_has_no_factions() {
        let catalog = Catalog::latium();
        assert_eq!(catalog.target(Faction::All).unwrap().len(), 14);
        assert!(matches!(
            catalog.target(Faction::Roman),
            Err(CatalogError::UnknownFaction { .. })
        ));
        assert_eq!(catalog.factions().count(), 0);
    }

    #[test]
    fn test_presets_produce_valid_objectives() {
        for theme in [Theme::Albion, Theme::Latium] {
            let catalog = Catalog::for_theme(theme);
            assert_eq!(catalog.theme(), Some(theme));
            assert_eq!(catalog.name(), theme.to_string());
            assert!(catalog.objective(Faction::All).is_ok());
            assert!(catalog.anneal_config().validate().is_ok());
        }
    }

    #[test]
    fn test_latium_item_value() {
        let catalog = Catalog::latium();
        let u = catalog.universe();
        let attrs = u.set_of(&["Mackerel", "Olive", "Marble"]).unwrap();
        let item = Item::new("Capri", attrs, vec![8, 12], SizeTier::Large);
        let objective = catalog.objective(Faction::All).unwrap();
        // 70 + 50 + 80 + 5 * 8 + 5 * 12 + 150
        assert_eq!(objective.item_value(&item, u.all()), 450.0);
    }

    #[test]
    fn test_latium_slot_scaled_fertilities() {
        let catalog = Catalog::latium();
        let u = catalog.universe();
        let objective = catalog.objective(Faction::All).unwrap();

        // no mountains, twenty rivers: 30 * 20 / 10 + 5 * 20 + 150
        let sturgeon = Item::new("Ponza", u.set_of(&["Sturgeon"]).unwrap(), vec![0, 20], SizeTier::Large);
        assert_eq!(objective.item_value(&sturgeon, u.all()), 310.0);

        // 105 * 4 / 10 + 60 * 5 / 10 + 5 * 4 + 5 * 5 + 30
        let mixed = u.set_of(&["Mineral", "Gold Ore"]).unwrap();
        let elba = Item::new("Elba", mixed, vec![4, 5], SizeTier::Small);
        assert_eq!(objective.item_value(&elba, u.all()), 42.0 + 30.0 + 20.0 + 25.0 + 30.0);

        // scaling only applies while the attribute is still uncovered
        let covered = u.all() - u.set_of(&["Sturgeon"]).unwrap();
        assert_eq!(objective.item_value(&sturgeon, covered), 250.0);
    }
}
