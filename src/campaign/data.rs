//! Campaign region definitions.

use super::RegionDef;
use crate::core::constants::MAX_LEVELS_PER_REGION;

/// Returns all campaign regions (regions 1-12).
///
/// Every region runs the full 8-chapter, 64-level layout with three
/// battles per level; the variety lives in the drop and coin brackets,
/// not the shape.
pub fn get_all_regions() -> Vec<RegionDef> {
    let def = |id, name, boss_name| RegionDef {
        id,
        name,
        levels: MAX_LEVELS_PER_REGION,
        battles_per_level: 3,
        boss_name,
    };

    vec![
        // Bracket 1: the opening continent
        def(1, "Verdant Hollow", "Rootmaw"),
        def(2, "Sunken Causeway", "Tidecaller Morveth"),
        def(3, "Emberfall Ridge", "Cinder Queen"),
        def(4, "The Whispering Steppe", "Khan of Echoes"),
        // Bracket 2: the mid-game frontier
        def(5, "Gloamwood", "The Pale Stag"),
        def(6, "Shattered Bastion", "Warden Ironmark"),
        def(7, "Mirrormere", "Her Reflection"),
        def(8, "The Salt Wastes", "Brinelord Ussek"),
        // Bracket 3: the high passes
        def(9, "Stormspire Crags", "Sky-Tyrant Vaal"),
        def(10, "The Drowned Archive", "Archivist Null"),
        def(11, "Ashen Choir", "The Last Cantor"),
        // Bracket 4: the end of the map
        def(12, "Throne of the Unmade", "The Unmade King"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_REGIONS;

    #[test]
    fn test_region_ids_are_contiguous() {
        let regions = get_all_regions();
        assert_eq!(regions.len() as u32, MAX_REGIONS);
        for (i, region) in regions.iter().enumerate() {
            assert_eq!(region.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_every_region_has_full_layout() {
        for region in get_all_regions() {
            assert_eq!(region.levels, 64);
            assert_eq!(region.battles_per_level, 3);
            assert!(!region.name.is_empty());
            assert!(!region.boss_name.is_empty());
        }
    }
}
