use std::collections::HashMap;

use crate::models::MealCategory::{self, *};
use crate::models::PredefinedMeal;

type AltRow = (&'static str, &'static str, &'static [(&'static str, f64)]);

/// Curated substitutes keyed by the display name of the meal they replace.
const ALTERNATIVES: &[(&str, MealCategory, &str, &[AltRow])] = &[
    (
        "Petit-déjeuner protéiné aux œufs",
        Breakfast,
        "pd1",
        &[
            (
                "alt1",
                "Omelette aux légumes et pain complet",
                &[
                    ("Œufs entiers", 120.0),
                    ("Pain complet", 60.0),
                    ("Courgettes", 100.0),
                    ("Tomates", 80.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt2",
                "Œufs brouillés avec flocons d'avoine salés",
                &[
                    ("Œufs entiers", 120.0),
                    ("Flocons d'avoine", 50.0),
                    ("Lait végétal", 150.0),
                    ("Épinards", 100.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt3",
                "Wrap de petit déjeuner aux œufs et avocat",
                &[
                    ("Œufs entiers", 120.0),
                    ("Pain de mie complet", 70.0),
                    ("Avocat", 60.0),
                    ("Tomates", 80.0),
                ],
            ),
        ],
    ),
    (
        "Bowl d'avoine aux fruits",
        Breakfast,
        "pd2",
        &[
            (
                "alt1",
                "Porridge au lait végétal et fruits rouges",
                &[
                    ("Flocons d'avoine", 60.0),
                    ("Lait végétal", 250.0),
                    ("Compote sans sucre", 100.0),
                    ("Amandes", 20.0),
                    ("Miel", 15.0),
                ],
            ),
            (
                "alt2",
                "Granola maison avec yaourt nature",
                &[
                    ("Muesli sans sucre", 50.0),
                    ("Yaourt grec 0%", 150.0),
                    ("Banane", 100.0),
                    ("Noix", 20.0),
                    ("Miel", 15.0),
                ],
            ),
            (
                "alt3",
                "Overnight oats à la pomme et cannelle",
                &[
                    ("Flocons d'avoine", 60.0),
                    ("Lait végétal", 200.0),
                    ("Pomme", 120.0),
                    ("Yaourt grec 0%", 100.0),
                    ("Amandes", 20.0),
                ],
            ),
        ],
    ),
    (
        "Smoothie protéiné",
        Breakfast,
        "pd3",
        &[
            (
                "alt1",
                "Smoothie banane-chocolat protéiné",
                &[
                    ("Protéine en poudre", 30.0),
                    ("Banane", 120.0),
                    ("Lait végétal", 250.0),
                    ("Flocons d'avoine", 40.0),
                    ("Beurre de cacahuète", 15.0),
                ],
            ),
            (
                "alt2",
                "Milkshake protéiné vanille-avoine",
                &[
                    ("Protéine en poudre", 30.0),
                    ("Flocons d'avoine", 50.0),
                    ("Lait végétal", 300.0),
                    ("Banane", 100.0),
                    ("Amandes", 15.0),
                ],
            ),
            (
                "alt3",
                "Smoothie aux fruits rouges et graines de chia",
                &[
                    ("Protéine en poudre", 30.0),
                    ("Compote sans sucre", 150.0),
                    ("Lait végétal", 250.0),
                    ("Flocons d'avoine", 40.0),
                    ("Amandes", 20.0),
                ],
            ),
        ],
    ),
    (
        "Tartines au fromage blanc",
        Breakfast,
        "pd4",
        &[
            (
                "alt1",
                "Pain complet + fromage blanc + compote sans sucre",
                &[
                    ("Pain complet", 80.0),
                    ("Fromage blanc 0%", 200.0),
                    ("Compote sans sucre", 100.0),
                    ("Noix", 25.0),
                ],
            ),
            (
                "alt2",
                "Pain intégral + ricotta + fruits rouges",
                &[
                    ("Pain complet", 80.0),
                    ("Ricotta", 150.0),
                    ("Compote sans sucre", 100.0),
                    ("Amandes", 20.0),
                    ("Miel", 15.0),
                ],
            ),
            (
                "alt3",
                "Galettes de riz + skyr + miel",
                &[
                    ("Pain de mie complet", 60.0),
                    ("Skyr 0%", 200.0),
                    ("Miel", 20.0),
                    ("Noix", 25.0),
                ],
            ),
        ],
    ),
    (
        "Poulet grillé aux légumes",
        Lunch,
        "dej1",
        &[
            (
                "alt1",
                "Poulet curry et riz complet",
                &[
                    ("Blanc de poulet", 150.0),
                    ("Riz complet cuit", 150.0),
                    ("Courgettes", 150.0),
                    ("Épinards", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
            (
                "alt2",
                "Wok de poulet aux légumes",
                &[
                    ("Blanc de poulet", 150.0),
                    ("Riz basmati cuit", 150.0),
                    ("Brocolis", 200.0),
                    ("Haricots verts", 150.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
            (
                "alt3",
                "Poulet au four avec patates douces",
                &[
                    ("Blanc de poulet", 150.0),
                    ("Patate douce cuite", 200.0),
                    ("Brocolis", 200.0),
                    ("Courgettes", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
        ],
    ),
    (
        "Saumon quinoa",
        Lunch,
        "dej2",
        &[
            (
                "alt1",
                "Saumon grillé et légumes vapeur",
                &[
                    ("Saumon", 120.0),
                    ("Riz basmati cuit", 150.0),
                    ("Brocolis", 200.0),
                    ("Haricots verts", 150.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt2",
                "Filet de saumon avec boulgour",
                &[
                    ("Saumon", 120.0),
                    ("Quinoa cuit", 150.0),
                    ("Épinards", 200.0),
                    ("Courgettes", 150.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt3",
                "Saumon à l'aneth et patate douce",
                &[
                    ("Saumon", 120.0),
                    ("Patate douce cuite", 180.0),
                    ("Épinards", 200.0),
                    ("Avocat", 60.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
        ],
    ),
    (
        "Bowl végétarien",
        Lunch,
        "dej3",
        &[
            (
                "alt1",
                "Tofu mariné et riz sauvage",
                &[
                    ("Tofu ferme", 120.0),
                    ("Riz complet cuit", 150.0),
                    ("Brocolis", 150.0),
                    ("Épinards", 150.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
            (
                "alt2",
                "Falafels et légumes rôtis",
                &[
                    ("Lentilles cuites", 150.0),
                    ("Quinoa cuit", 120.0),
                    ("Courgettes", 150.0),
                    ("Tomates", 150.0),
                    ("Huile d'olive", 15.0),
                ],
            ),
            (
                "alt3",
                "Curry de lentilles et riz basmati",
                &[
                    ("Lentilles cuites", 150.0),
                    ("Riz basmati cuit", 150.0),
                    ("Épinards", 200.0),
                    ("Tomates", 100.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
        ],
    ),
    (
        "Bœuf aux patates douces",
        Lunch,
        "dej4",
        &[
            (
                "alt1",
                "Steak haché 5% + riz + haricots verts",
                &[
                    ("Bœuf maigre (5% MG)", 130.0),
                    ("Riz basmati cuit", 150.0),
                    ("Haricots verts", 200.0),
                    ("Tomates", 100.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
            (
                "alt2",
                "Bœuf sauté aux légumes et nouilles",
                &[
                    ("Bœuf maigre (5% MG)", 130.0),
                    ("Quinoa cuit", 150.0),
                    ("Brocolis", 150.0),
                    ("Courgettes", 150.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
            (
                "alt3",
                "Boulettes de bœuf + semoule + courgettes",
                &[
                    ("Bœuf maigre (5% MG)", 130.0),
                    ("Quinoa cuit", 150.0),
                    ("Courgettes", 200.0),
                    ("Tomates", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
        ],
    ),
    (
        "Poisson blanc aux légumes",
        Dinner,
        "din1",
        &[
            (
                "alt1",
                "Filet de merlan + riz + épinards",
                &[
                    ("Cabillaud", 150.0),
                    ("Riz basmati cuit", 120.0),
                    ("Épinards", 200.0),
                    ("Courgettes", 150.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt2",
                "Colin et purée de patate douce",
                &[
                    ("Cabillaud", 150.0),
                    ("Patate douce cuite", 180.0),
                    ("Brocolis", 200.0),
                    ("Épinards", 150.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
            (
                "alt3",
                "Cabillaud vapeur et légumes grillés",
                &[
                    ("Cabillaud", 150.0),
                    ("Pomme de terre cuite", 180.0),
                    ("Courgettes", 200.0),
                    ("Haricots verts", 150.0),
                    ("Huile d'olive", 8.0),
                ],
            ),
        ],
    ),
    (
        "Dinde aux légumes verts",
        Dinner,
        "din2",
        &[
            (
                "alt1",
                "Filet de dinde grillé et pommes vapeur",
                &[
                    ("Blanc de dinde", 140.0),
                    ("Pomme de terre cuite", 180.0),
                    ("Brocolis", 200.0),
                    ("Épinards", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
            (
                "alt2",
                "Brochettes de dinde et légumes",
                &[
                    ("Blanc de dinde", 140.0),
                    ("Riz complet cuit", 120.0),
                    ("Courgettes", 200.0),
                    ("Tomates", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
            (
                "alt3",
                "Dinde au four + courgettes + riz",
                &[
                    ("Blanc de dinde", 140.0),
                    ("Riz basmati cuit", 120.0),
                    ("Courgettes", 200.0),
                    ("Haricots verts", 150.0),
                    ("Huile d'olive", 10.0),
                ],
            ),
        ],
    ),
    (
        "Thon aux haricots",
        Dinner,
        "din3",
        &[
            (
                "alt1",
                "Salade de thon aux pois chiches",
                &[
                    ("Thon", 120.0),
                    ("Lentilles cuites", 150.0),
                    ("Tomates", 200.0),
                    ("Épinards", 150.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
            (
                "alt2",
                "Wrap de thon et légumes",
                &[
                    ("Thon", 120.0),
                    ("Pain de mie complet", 70.0),
                    ("Avocat", 60.0),
                    ("Tomates", 150.0),
                    ("Épinards", 100.0),
                ],
            ),
            (
                "alt3",
                "Thon grillé et semoule",
                &[
                    ("Thon", 120.0),
                    ("Quinoa cuit", 150.0),
                    ("Brocolis", 200.0),
                    ("Courgettes", 150.0),
                    ("Huile d'olive", 12.0),
                ],
            ),
        ],
    ),
    (
        "Collation protéinée du soir",
        Supper,
        "sou1",
        &[
            (
                "alt1",
                "Fromage blanc + noix + baies",
                &[("Fromage blanc 0%", 150.0), ("Noix", 20.0), ("Compote sans sucre", 100.0)],
            ),
            (
                "alt2",
                "Skyr + fruits rouges",
                &[("Skyr 0%", 150.0), ("Compote sans sucre", 120.0), ("Amandes", 20.0)],
            ),
            (
                "alt3",
                "Œuf dur + carottes",
                &[("Œufs entiers", 60.0), ("Pomme", 120.0), ("Amandes", 20.0)],
            ),
        ],
    ),
    (
        "Yaourt aux fruits secs",
        Supper,
        "sou2",
        &[
            (
                "alt1",
                "Yaourt nature + amandes + miel",
                &[("Yaourt grec 0%", 200.0), ("Amandes", 25.0), ("Miel", 10.0)],
            ),
            (
                "alt2",
                "Skyr + figues sèches + noix",
                &[("Skyr 0%", 200.0), ("Fruits secs mélangés", 25.0), ("Miel", 10.0)],
            ),
            (
                "alt3",
                "Fromage blanc + fruits secs",
                &[("Fromage blanc 0%", 200.0), ("Fruits secs mélangés", 25.0), ("Miel", 10.0)],
            ),
        ],
    ),
    (
        "Fruits et noix",
        Snack,
        "col1",
        &[
            ("alt1", "Pomme + amandes", &[("Pomme", 150.0), ("Amandes", 20.0)]),
            ("alt2", "Poire + noix de cajou", &[("Pomme", 150.0), ("Noix", 20.0)]),
            ("alt3", "Banane + noisettes", &[("Banane", 120.0), ("Amandes", 20.0)]),
        ],
    ),
    (
        "Yaourt protéiné",
        Snack,
        "col2",
        &[
            (
                "alt1",
                "Skyr + banane + cannelle",
                &[("Skyr 0%", 150.0), ("Banane", 100.0), ("Miel", 10.0)],
            ),
            (
                "alt2",
                "Yaourt grec + flocons d'avoine",
                &[("Yaourt grec 0%", 150.0), ("Flocons d'avoine", 30.0), ("Miel", 10.0)],
            ),
            (
                "alt3",
                "Fromage blanc + compote sans sucre",
                &[("Fromage blanc 0%", 150.0), ("Compote sans sucre", 100.0), ("Noix", 15.0)],
            ),
        ],
    ),
    (
        "Barre protéinée maison",
        Snack,
        "col3",
        &[
            (
                "alt1",
                "Mix amandes et dattes",
                &[("Amandes", 25.0), ("Fruits secs mélangés", 20.0)],
            ),
            (
                "alt2",
                "Noix et fruits secs variés",
                &[("Noix", 20.0), ("Fruits secs mélangés", 25.0)],
            ),
            (
                "alt3",
                "Collation protéinée naturelle",
                &[
                    ("Protéine en poudre", 20.0),
                    ("Flocons d'avoine", 30.0),
                    ("Beurre de cacahuète", 15.0),
                ],
            ),
        ],
    ),
    (
        "Smoothie léger",
        Snack,
        "col4",
        &[
            (
                "alt1",
                "Smoothie fraise-banane",
                &[("Protéine en poudre", 20.0), ("Banane", 80.0), ("Lait végétal", 200.0)],
            ),
            (
                "alt2",
                "Smoothie mangue-lait d'amande",
                &[("Protéine en poudre", 20.0), ("Banane", 80.0), ("Lait végétal", 200.0)],
            ),
            (
                "alt3",
                "Smoothie vert (épinards-banane)",
                &[
                    ("Protéine en poudre", 20.0),
                    ("Banane", 80.0),
                    ("Épinards", 50.0),
                    ("Lait végétal", 200.0),
                ],
            ),
        ],
    ),
    (
        "Fromage blanc aux fruits",
        Snack,
        "col5",
        &[
            (
                "alt1",
                "Fromage blanc + fruits rouges",
                &[("Fromage blanc 0%", 150.0), ("Compote sans sucre", 100.0), ("Noix", 15.0)],
            ),
            (
                "alt2",
                "Skyr + pomme râpée",
                &[("Skyr 0%", 150.0), ("Pomme", 100.0), ("Amandes", 15.0)],
            ),
            (
                "alt3",
                "Yaourt nature + compote",
                &[("Yaourt grec 0%", 150.0), ("Compote sans sucre", 100.0), ("Noix", 15.0)],
            ),
        ],
    ),
    (
        "Tartine légère",
        Snack,
        "col6",
        &[
            (
                "alt1",
                "Pain de seigle + purée d'amande",
                &[("Pain complet", 30.0), ("Beurre de cacahuète", 15.0), ("Banane", 80.0)],
            ),
            (
                "alt2",
                "Pain complet + miel + noix",
                &[("Pain complet", 30.0), ("Miel", 15.0), ("Noix", 15.0)],
            ),
            (
                "alt3",
                "Tartine fromage frais et concombre",
                &[("Pain complet", 30.0), ("Fromage blanc 0%", 50.0), ("Banane", 80.0)],
            ),
        ],
    ),
];

/// The built-in alternates table, keyed by meal display name.
pub fn builtin_alternatives() -> HashMap<String, Vec<PredefinedMeal>> {
    ALTERNATIVES
        .iter()
        .map(|(meal_name, category, base_id, alts)| {
            let meals = alts
                .iter()
                .map(|(suffix, name, items)| {
                    let id = format!("{}-{}", base_id, suffix);
                    PredefinedMeal::new(&id, *category, name, items)
                })
                .collect();
            (meal_name.to_string(), meals)
        })
        .collect()
}
