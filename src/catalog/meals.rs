use crate::models::MealCategory::{self, *};
use crate::models::PredefinedMeal;

type MealRow = (&'static str, MealCategory, &'static str, &'static [(&'static str, f64)]);

const MEALS: &[MealRow] = &[
    // Breakfasts
    (
        "pd1",
        Breakfast,
        "Petit-déjeuner protéiné aux œufs",
        &[("Œufs entiers", 120.0), ("Pain complet", 60.0), ("Avocat", 80.0), ("Tomates", 100.0)],
    ),
    (
        "pd2",
        Breakfast,
        "Bowl d'avoine aux fruits",
        &[
            ("Flocons d'avoine", 60.0),
            ("Banane", 120.0),
            ("Yaourt grec 0%", 150.0),
            ("Amandes", 20.0),
            ("Miel", 15.0),
        ],
    ),
    (
        "pd3",
        Breakfast,
        "Smoothie protéiné",
        &[
            ("Protéine en poudre", 30.0),
            ("Banane", 100.0),
            ("Flocons d'avoine", 40.0),
            ("Lait végétal", 250.0),
            ("Beurre de cacahuète", 15.0),
        ],
    ),
    (
        "pd4",
        Breakfast,
        "Tartines au fromage blanc",
        &[("Pain complet", 80.0), ("Fromage blanc 0%", 200.0), ("Miel", 20.0), ("Noix", 25.0)],
    ),
    (
        "pddce40b41",
        Breakfast,
        "Omelette au fromage blanc et flocons",
        &[
            ("Œufs entiers", 100.0),
            ("Fromage blanc 0%", 150.0),
            ("Flocons d'avoine", 40.0),
            ("Banane", 80.0),
        ],
    ),
    (
        "pdc700bcf4",
        Breakfast,
        "Pain complet, yaourt et fruits",
        &[("Pain complet", 80.0), ("Yaourt grec 0%", 150.0), ("Pomme", 120.0), ("Amandes", 15.0)],
    ),
    (
        "pdd8ffd5b2",
        Breakfast,
        "Smoothie banane skyr",
        &[
            ("Skyr 0%", 150.0),
            ("Banane", 100.0),
            ("Lait végétal", 200.0),
            ("Beurre de cacahuète", 15.0),
        ],
    ),
    // Lunches
    (
        "dej1",
        Lunch,
        "Poulet grillé aux légumes",
        &[
            ("Blanc de poulet", 150.0),
            ("Riz basmati cuit", 150.0),
            ("Brocolis", 200.0),
            ("Courgettes", 150.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dej2",
        Lunch,
        "Saumon quinoa",
        &[
            ("Saumon", 120.0),
            ("Quinoa cuit", 150.0),
            ("Épinards", 200.0),
            ("Avocat", 60.0),
            ("Huile d'olive", 8.0),
        ],
    ),
    (
        "dej3",
        Lunch,
        "Bowl végétarien",
        &[
            ("Tofu ferme", 120.0),
            ("Riz complet cuit", 150.0),
            ("Haricots verts", 150.0),
            ("Lentilles cuites", 100.0),
            ("Huile d'olive", 12.0),
        ],
    ),
    (
        "dej4",
        Lunch,
        "Bœuf aux patates douces",
        &[
            ("Bœuf maigre (5% MG)", 130.0),
            ("Patate douce cuite", 200.0),
            ("Haricots verts", 180.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dej4c9dd549",
        Lunch,
        "Poulet curry riz complet",
        &[
            ("Blanc de poulet", 160.0),
            ("Riz complet cuit", 140.0),
            ("Courgettes", 150.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dej1c26ddc2",
        Lunch,
        "Tofu lentilles et légumes verts",
        &[
            ("Tofu ferme", 130.0),
            ("Lentilles cuites", 130.0),
            ("Brocolis", 180.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dejb691034d",
        Lunch,
        "Saumon patates douces et haricots",
        &[
            ("Saumon", 130.0),
            ("Patate douce cuite", 200.0),
            ("Haricots verts", 150.0),
            ("Huile d'olive", 8.0),
        ],
    ),
    // Dinners
    (
        "din1",
        Dinner,
        "Poisson blanc aux légumes",
        &[
            ("Cabillaud", 150.0),
            ("Pomme de terre cuite", 180.0),
            ("Courgettes", 200.0),
            ("Épinards", 150.0),
            ("Huile d'olive", 8.0),
        ],
    ),
    (
        "din2",
        Dinner,
        "Dinde aux légumes verts",
        &[
            ("Blanc de dinde", 140.0),
            ("Sarrasin cuit", 120.0),
            ("Brocolis", 200.0),
            ("Haricots verts", 150.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "din3",
        Dinner,
        "Thon aux haricots",
        &[
            ("Thon", 120.0),
            ("Haricots rouges cuits", 150.0),
            ("Tomates", 200.0),
            ("Épinards", 150.0),
            ("Huile d'olive", 12.0),
        ],
    ),
    (
        "dinee955785",
        Dinner,
        "Cabillaud et légumes sautés",
        &[
            ("Cabillaud", 150.0),
            ("Épinards", 200.0),
            ("Courgettes", 150.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dinb3610a60",
        Dinner,
        "Thon et patate douce",
        &[
            ("Thon", 130.0),
            ("Patate douce cuite", 200.0),
            ("Tomates", 150.0),
            ("Huile d'olive", 10.0),
        ],
    ),
    (
        "dine130c78b",
        Dinner,
        "Dinde aux haricots rouges",
        &[
            ("Blanc de dinde", 140.0),
            ("Haricots rouges cuits", 160.0),
            ("Épinards", 150.0),
            ("Huile d'olive", 8.0),
        ],
    ),
    // Suppers
    (
        "sou1",
        Supper,
        "Collation protéinée du soir",
        &[("Cottage cheese", 150.0), ("Noix", 20.0), ("Pomme", 120.0)],
    ),
    (
        "sou2",
        Supper,
        "Yaourt aux fruits secs",
        &[("Yaourt grec 0%", 200.0), ("Fruits secs mélangés", 25.0), ("Miel", 10.0)],
    ),
    (
        "sou3f43e5c1",
        Supper,
        "Fromage blanc et noix",
        &[("Fromage blanc 0%", 200.0), ("Noix", 20.0), ("Compote sans sucre", 100.0)],
    ),
    (
        "sou178bd28f",
        Supper,
        "Yaourt grec, banane et amandes",
        &[("Yaourt grec 0%", 180.0), ("Banane", 100.0), ("Amandes", 15.0)],
    ),
    (
        "souf8e6582b",
        Supper,
        "Skyr aux fruits et noix",
        &[("Skyr 0%", 200.0), ("Pomme", 100.0), ("Noix", 15.0)],
    ),
    // Snacks
    ("col1", Snack, "Fruits et noix", &[("Pomme", 150.0), ("Amandes", 20.0)]),
    (
        "col2",
        Snack,
        "Yaourt protéiné",
        &[("Skyr 0%", 150.0), ("Banane", 100.0), ("Miel", 10.0)],
    ),
    (
        "col3",
        Snack,
        "Mix de noix et fruits secs",
        &[("Amandes", 20.0), ("Fruits secs mélangés", 25.0)],
    ),
    (
        "col4",
        Snack,
        "Smoothie léger",
        &[("Protéine en poudre", 20.0), ("Lait végétal", 200.0), ("Banane", 80.0)],
    ),
    (
        "col5",
        Snack,
        "Fromage blanc aux fruits",
        &[("Fromage blanc 0%", 150.0), ("Compote sans sucre", 100.0), ("Noix", 15.0)],
    ),
    (
        "col6",
        Snack,
        "Tartine légère",
        &[("Pain de mie complet", 30.0), ("Beurre de cacahuète", 15.0), ("Banane", 80.0)],
    ),
    (
        "col58a4f72f",
        Snack,
        "Barre protéinée et compote",
        &[("Barres protéinées", 40.0), ("Compote sans sucre", 100.0)],
    ),
    (
        "colc48cde24",
        Snack,
        "Yaourt grec, miel et noix",
        &[("Yaourt grec 0%", 150.0), ("Miel", 10.0), ("Noix", 15.0)],
    ),
    (
        "col45cbf3cd",
        Snack,
        "Pain de mie et fromage blanc",
        &[("Pain de mie complet", 40.0), ("Fromage blanc 0%", 100.0), ("Banane", 80.0)],
    ),
];

/// The built-in predefined meals.
pub fn builtin_meals() -> Vec<PredefinedMeal> {
    MEALS
        .iter()
        .map(|(id, category, name, items)| PredefinedMeal::new(id, *category, name, items))
        .collect()
}
