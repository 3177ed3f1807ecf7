use arcnik_core::{
    AnimalKind, GearItem, GearPriority, GearStatus, SightingId, WildlifeSighting,
};

fn gear(
    id: u32,
    name: &str,
    category: &str,
    priority: GearPriority,
    status: GearStatus,
    tip: &str,
) -> GearItem {
    GearItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        priority,
        status,
        tip: tip.to_string(),
    }
}

pub fn gear_checklist() -> Vec<GearItem> {
    use GearPriority::{Essential, Recommended};
    use GearStatus::{Complete, InProgress, NotStarted};
    vec![
        gear(
            1,
            "Waterproof parka",
            "Outerwear",
            Essential,
            Complete,
            "Provided by expedition - ensure proper fit during embarkation",
        ),
        gear(
            2,
            "Thermal base layers (3 sets)",
            "Clothing",
            Essential,
            Complete,
            "Merino wool or synthetic recommended",
        ),
        gear(
            3,
            "Insulated boots",
            "Footwear",
            Essential,
            InProgress,
            "Must be waterproof and rated for -20°C",
        ),
        gear(
            4,
            "Polarized sunglasses",
            "Accessories",
            Essential,
            NotStarted,
            "UV protection essential due to ice reflection",
        ),
        gear(
            5,
            "Sunscreen SPF 50+",
            "Personal Care",
            Essential,
            Complete,
            "UV rays stronger due to ozone hole",
        ),
        gear(
            6,
            "Binoculars",
            "Equipment",
            Recommended,
            NotStarted,
            "8x42 or 10x42 recommended for wildlife viewing",
        ),
        gear(
            7,
            "Camera with extra batteries",
            "Equipment",
            Recommended,
            Complete,
            "Batteries drain faster in cold temperatures",
        ),
        gear(
            8,
            "Seasickness medication",
            "Medical",
            Recommended,
            NotStarted,
            "Drake Passage can be rough",
        ),
    ]
}

pub fn wildlife_log() -> Vec<WildlifeSighting> {
    vec![
        WildlifeSighting {
            id: SightingId::new(),
            species: "Gentoo Penguin".to_string(),
            kind: AnimalKind::Penguin,
            count: 45,
            location: "Neko Harbor".to_string(),
            // 2025-11-01 10:30 UTC
            logged_at_ms: 1_761_993_000_000,
        },
        WildlifeSighting {
            id: SightingId::new(),
            species: "Humpback Whale".to_string(),
            kind: AnimalKind::Whale,
            count: 2,
            location: "Gerlache Strait".to_string(),
            // 2025-11-01 14:15 UTC
            logged_at_ms: 1_762_006_500_000,
        },
        WildlifeSighting {
            id: SightingId::new(),
            species: "Weddell Seal".to_string(),
            kind: AnimalKind::Seal,
            count: 3,
            location: "Cuverville Island".to_string(),
            // 2025-10-31 16:45 UTC
            logged_at_ms: 1_761_929_100_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_ids_are_unique() {
        let items = gear_checklist();
        assert_eq!(items.len(), 8);
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.id as usize, index + 1);
        }
    }
}
