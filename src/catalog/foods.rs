use crate::models::{DisplayUnit, FoodClass, FoodItem, Nutrients};

use FoodClass::*;

/// Per-100 g nutrition: (name, calories, protein, carbs, fat, fiber).
const NUTRITION_TABLE: &[(&str, f64, f64, f64, f64, f64)] = &[
    ("Blanc de poulet", 165.0, 31.0, 0.0, 3.6, 0.0),
    ("Blanc de dinde", 135.0, 30.0, 0.0, 1.0, 0.0),
    ("Saumon", 208.0, 25.0, 0.0, 12.0, 0.0),
    ("Thon", 144.0, 30.0, 0.0, 1.0, 0.0),
    ("Cabillaud", 82.0, 18.0, 0.0, 0.7, 0.0),
    ("Bœuf maigre (5% MG)", 158.0, 26.0, 0.0, 5.0, 0.0),
    ("Œufs entiers", 155.0, 13.0, 1.1, 11.0, 0.0),
    ("Tofu ferme", 144.0, 15.0, 4.0, 9.0, 2.0),
    ("Riz basmati cuit", 121.0, 2.5, 25.0, 0.4, 0.4),
    ("Riz complet cuit", 111.0, 2.6, 23.0, 0.9, 1.8),
    ("Quinoa cuit", 120.0, 4.4, 22.0, 1.9, 2.8),
    ("Patate douce cuite", 76.0, 1.4, 17.0, 0.1, 2.5),
    ("Pomme de terre cuite", 77.0, 2.0, 17.0, 0.1, 2.2),
    ("Flocons d'avoine", 389.0, 16.9, 66.0, 6.9, 10.6),
    ("Pain complet", 247.0, 13.0, 41.0, 4.2, 7.0),
    ("Pain de mie complet", 259.0, 9.0, 43.0, 4.2, 6.0),
    ("Sarrasin cuit", 92.0, 3.4, 20.0, 0.6, 2.7),
    ("Orge perlé cuit", 123.0, 2.3, 28.0, 0.4, 3.8),
    ("Lentilles cuites", 116.0, 9.0, 20.0, 0.4, 7.9),
    ("Haricots rouges cuits", 127.0, 8.7, 23.0, 0.5, 6.4),
    ("Muesli sans sucre", 325.0, 8.2, 72.0, 3.3, 7.3),
    ("Brocolis", 25.0, 3.0, 4.0, 0.4, 3.0),
    ("Épinards", 23.0, 2.9, 3.6, 0.4, 2.2),
    ("Haricots verts", 31.0, 1.8, 7.0, 0.1, 3.4),
    ("Courgettes", 17.0, 1.2, 3.1, 0.3, 1.0),
    ("Tomates", 18.0, 0.9, 3.9, 0.2, 1.2),
    ("Avocat", 160.0, 2.0, 9.0, 15.0, 7.0),
    ("Huile d'olive", 884.0, 0.0, 0.0, 100.0, 0.0),
    ("Beurre de cacahuète", 588.0, 25.0, 20.0, 50.0, 8.0),
    ("Amandes", 579.0, 21.0, 22.0, 50.0, 12.0),
    ("Noix", 654.0, 15.0, 14.0, 65.0, 7.0),
    ("Fruits secs mélangés", 512.0, 15.0, 44.0, 32.0, 9.0),
    ("Yaourt grec 0%", 59.0, 10.0, 4.0, 0.4, 0.0),
    ("Skyr 0%", 57.0, 11.0, 4.0, 0.2, 0.0),
    ("Fromage blanc 0%", 47.0, 8.0, 4.0, 0.2, 0.0),
    ("Cottage cheese", 98.0, 11.0, 3.4, 4.3, 0.0),
    ("Ricotta", 174.0, 11.0, 3.0, 13.0, 0.0),
    ("Lait végétal", 24.0, 0.4, 4.2, 1.1, 0.4),
    ("Banane", 89.0, 1.1, 23.0, 0.3, 2.6),
    ("Pomme", 52.0, 0.3, 14.0, 0.2, 2.4),
    ("Compote sans sucre", 42.0, 0.1, 11.0, 0.1, 1.2),
    ("Protéine en poudre", 412.0, 82.0, 8.0, 8.0, 0.0),
    ("Barres protéinées", 375.0, 30.0, 35.0, 12.0, 5.0),
    ("Miel", 304.0, 0.3, 82.0, 0.0, 0.2),
    ("Chocolat noir 70%", 546.0, 7.8, 45.0, 31.0, 11.0),
    ("Yaourt aux fruits 0%", 56.0, 4.3, 7.7, 0.1, 0.0),
];

const HIGH_CARB: &[&str] = &[
    "Pain complet",
    "Pain de mie complet",
    "Riz basmati cuit",
    "Riz complet cuit",
    "Quinoa cuit",
    "Patate douce cuite",
    "Pomme de terre cuite",
    "Flocons d'avoine",
    "Sarrasin cuit",
    "Orge perlé cuit",
    "Lentilles cuites",
    "Haricots rouges cuits",
    "Muesli sans sucre",
    "Banane",
    "Pomme",
    "Compote sans sucre",
    "Miel",
];

const HIGH_PROTEIN: &[&str] = &[
    "Blanc de poulet",
    "Blanc de dinde",
    "Saumon",
    "Thon",
    "Cabillaud",
    "Bœuf maigre (5% MG)",
    "Œufs entiers",
    "Tofu ferme",
    "Protéine en poudre",
    "Yaourt grec 0%",
    "Skyr 0%",
    "Fromage blanc 0%",
    "Cottage cheese",
];

const HIGH_FAT: &[&str] = &[
    "Huile d'olive",
    "Avocat",
    "Beurre de cacahuète",
    "Amandes",
    "Noix",
    "Fruits secs mélangés",
    "Saumon",
    "Ricotta",
];

const VEGETABLES: &[&str] = &["Brocolis", "Épinards", "Haricots verts", "Courgettes", "Tomates"];

const NON_ESSENTIAL: &[&str] = &["Huile d'olive", "Avocat", "Miel", "Chocolat noir 70%"];

const WHOLE_FRUITS: &[&str] = &["Pomme", "Banane"];

const EGGS: &[&str] = &["Œufs entiers"];

/// Grams per unit for fruits sold whole.
const FRUIT_UNIT_GRAMS: f64 = 120.0;

fn display_unit(name: &str) -> Option<DisplayUnit> {
    let unit = match name {
        "Pain complet" => DisplayUnit::new(
            "tranches de pain complet",
            "tranche de pain complet",
            35.0,
        ),
        "Pain de mie complet" => {
            DisplayUnit::new("tranches de pain de mie", "tranche de pain de mie", 35.0)
        }
        "Œufs entiers" => DisplayUnit::new("œufs", "œuf", 60.0),
        "Pomme" => DisplayUnit::new("pommes", "pomme", FRUIT_UNIT_GRAMS),
        "Banane" => DisplayUnit::new("bananes", "banane", FRUIT_UNIT_GRAMS),
        "Avocat" => DisplayUnit::new("avocats", "avocat", 150.0).with_half_unit(),
        _ => return None,
    };
    Some(unit)
}

fn classes(name: &str) -> Vec<FoodClass> {
    [
        (HIGH_CARB, HighCarb),
        (HIGH_PROTEIN, HighProtein),
        (HIGH_FAT, HighFat),
        (VEGETABLES, Vegetable),
        (NON_ESSENTIAL, NonEssential),
        (WHOLE_FRUITS, WholeFruit),
        (EGGS, Egg),
    ]
    .into_iter()
    .filter(|(list, _)| list.contains(&name))
    .map(|(_, class)| class)
    .collect()
}

/// The built-in food table with units and classes attached.
pub fn builtin_foods() -> Vec<FoodItem> {
    NUTRITION_TABLE
        .iter()
        .map(|&(name, calories, protein, carbs, fat, fiber)| {
            let mut food = FoodItem::new(name, Nutrients::new(calories, protein, carbs, fat, fiber))
                .with_classes(&classes(name));
            if let Some(unit) = display_unit(name) {
                food = food.with_unit(unit);
            }
            food
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let foods = builtin_foods();
        let mut names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), foods.len());
    }

    #[test]
    fn test_class_lists_reference_known_foods() {
        let foods = builtin_foods();
        for list in [HIGH_CARB, HIGH_PROTEIN, HIGH_FAT, VEGETABLES, NON_ESSENTIAL, WHOLE_FRUITS, EGGS] {
            for name in list {
                assert!(foods.iter().any(|f| f.name == *name), "unknown food {}", name);
            }
        }
    }

    #[test]
    fn test_salmon_is_protein_and_fat() {
        let foods = builtin_foods();
        let salmon = foods.iter().find(|f| f.name == "Saumon").unwrap();
        assert!(salmon.has(HighProtein));
        assert!(salmon.has(HighFat));
        assert!(!salmon.has(NonEssential));
    }
}
