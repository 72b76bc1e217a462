// Built-in Greek seed catalog so the office works before any admin edits.
// Amounts are grams of the stored (raw) form unless the unit says otherwise;
// recipe macros are per-serving snapshots, not recomputed from ingredients.

use tracing::info;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::{
    CostTier, DifficultyTier, FoodCategory, FoodForm, FoodItem, FoodMacros, Recipe,
    RecipeCategory, RecipeIngredient, RecipeMacros, TimeTier,
};

use super::{Catalog, CatalogSource};

/// Catalog source backed by the built-in seed data.
pub struct SeedSource;

impl CatalogSource for SeedSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(seed_catalog())
    }
}

/// Builds a fresh catalog snapshot from the seed data. Ids are minted per
/// load; references between recipes and foods stay internally consistent.
pub fn seed_catalog() -> Catalog {
    let (foods, recipes) = seed_data();
    info!(
        foods = foods.len(),
        recipes = recipes.len(),
        "loaded built-in catalog seed"
    );
    Catalog::new(foods, recipes)
}

fn food(
    name: &str,
    category: FoodCategory,
    form: FoodForm,
    conversion_factor: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    cost: CostTier,
) -> FoodItem {
    FoodItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        form,
        conversion_factor,
        macros: FoodMacros {
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
            sugars: None,
            saturated_fat: None,
        },
        micronutrients: None,
        tags: Vec::new(),
        cost: Some(cost),
    }
}

fn ing(food: &FoodItem, amount: f64) -> RecipeIngredient {
    RecipeIngredient {
        food_id: Some(food.id),
        name: food.name.clone(),
        amount,
        unit: "g".to_string(),
        note: None,
    }
}

fn ing_ml(food: &FoodItem, amount: f64) -> RecipeIngredient {
    RecipeIngredient {
        food_id: Some(food.id),
        name: food.name.clone(),
        amount,
        unit: "ml".to_string(),
        note: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    name: &str,
    category: RecipeCategory,
    description: &str,
    instructions: &[&str],
    time: TimeTier,
    difficulty: DifficultyTier,
    cost: CostTier,
    tags: &[&str],
    ingredients: Vec<RecipeIngredient>,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        servings: 1,
        time,
        difficulty,
        cost,
        tags: tags.iter().map(|s| s.to_string()).collect(),
        ingredients,
        macros: RecipeMacros {
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
        },
    }
}

#[allow(clippy::vec_init_then_push)]
fn seed_data() -> (Vec<FoodItem>, Vec<Recipe>) {
    use CostTier::{Cheap, Expensive, Moderate};
    use FoodCategory::{Dairy, Fats, Fruits, Other, Protein, Snacks, Starch, Vegetables};
    use FoodForm::{Cooked, Raw};

    // Protein
    let chicken = food("Κοτόπουλο στήθος", Protein, Raw, 0.75, 120.0, 22.5, 0.0, 2.6, Cheap);
    let beef = food("Μοσχάρι άπαχο", Protein, Raw, 0.70, 150.0, 21.0, 0.0, 7.0, Expensive);
    let salmon = food("Σολομός φιλέτο", Protein, Raw, 0.85, 208.0, 20.0, 0.0, 13.0, Expensive);
    let bream = food("Τσιπούρα φιλέτο", Protein, Raw, 0.80, 115.0, 19.5, 0.0, 3.8, Moderate);
    let turkey = food("Γαλοπούλα κιμάς", Protein, Raw, 0.75, 148.0, 19.7, 0.0, 7.7, Moderate);
    let egg = food("Αυγό", Protein, Raw, 1.0, 143.0, 12.6, 0.7, 9.5, Cheap);
    let lentils = food("Φακές", Protein, Raw, 2.3, 352.0, 24.6, 63.4, 1.1, Cheap);
    let tuna = food("Τόνος σε νερό", Protein, Cooked, 1.0, 116.0, 25.5, 0.0, 1.0, Moderate);

    // Starch
    let rice = food("Ρύζι μπασμάτι", Starch, Raw, 2.5, 360.0, 7.5, 78.0, 0.6, Cheap);
    let pasta = food("Μακαρόνια ολικής", Starch, Raw, 2.4, 348.0, 13.0, 68.0, 2.5, Cheap);
    let potato = food("Πατάτα", Starch, Raw, 0.90, 77.0, 2.0, 17.0, 0.1, Cheap);
    let bread = food("Ψωμί ολικής", Starch, Cooked, 1.0, 247.0, 13.0, 41.0, 3.4, Cheap);
    let mut bread_gf = food("Ψωμί χωρίς γλουτένη", Starch, Cooked, 1.0, 265.0, 4.0, 47.0, 6.0, Moderate);
    bread_gf.tags.push("gluten-free".to_string());
    let oats = food("Βρώμη νιφάδες", Starch, Raw, 1.0, 389.0, 16.9, 66.3, 6.9, Cheap);
    let mut quinoa = food("Κινόα", Starch, Raw, 2.7, 368.0, 14.1, 64.2, 6.1, Expensive);
    quinoa.tags.push("gluten-free".to_string());
    let mut rice_cake = food("Ρυζογκοφρέτα", Starch, Cooked, 1.0, 387.0, 8.1, 81.5, 2.8, Cheap);
    rice_cake.tags.push("gluten-free".to_string());
    let tortilla = food("Τορτίγια ολικής", Starch, Cooked, 1.0, 306.0, 8.5, 50.0, 7.5, Moderate);

    // Vegetables
    let tomato = food("Ντομάτα", Vegetables, Raw, 1.0, 18.0, 0.9, 3.9, 0.2, Cheap);
    let cucumber = food("Αγγούρι", Vegetables, Raw, 1.0, 15.0, 0.7, 3.6, 0.1, Cheap);
    let broccoli = food("Μπρόκολο", Vegetables, Raw, 0.95, 34.0, 2.8, 6.6, 0.4, Cheap);
    let spinach = food("Σπανάκι", Vegetables, Raw, 0.60, 23.0, 2.9, 3.6, 0.4, Cheap);
    let zucchini = food("Κολοκύθι", Vegetables, Raw, 0.90, 17.0, 1.2, 3.1, 0.3, Cheap);
    let lettuce = food("Μαρούλι", Vegetables, Raw, 1.0, 15.0, 1.4, 2.9, 0.2, Cheap);
    let carrot = food("Καρότο", Vegetables, Raw, 0.95, 41.0, 0.9, 9.6, 0.2, Cheap);
    let pepper = food("Πιπεριά", Vegetables, Raw, 0.90, 31.0, 1.0, 6.0, 0.3, Cheap);

    // Fruits
    let banana = food("Μπανάνα", Fruits, Raw, 1.0, 89.0, 1.1, 22.8, 0.3, Cheap);
    let apple = food("Μήλο", Fruits, Raw, 1.0, 52.0, 0.3, 13.8, 0.2, Cheap);
    let strawberries = food("Φράουλες", Fruits, Raw, 1.0, 32.0, 0.7, 7.7, 0.3, Moderate);
    let orange = food("Πορτοκάλι", Fruits, Raw, 1.0, 47.0, 0.9, 11.8, 0.1, Cheap);
    let mut prunes = food("Δαμάσκηνα αποξηραμένα", Fruits, Raw, 1.0, 240.0, 2.2, 63.9, 0.4, Moderate);
    prunes.tags.push("high-fiber".to_string());

    // Dairy
    let yogurt = food("Γιαούρτι στραγγιστό 2%", Dairy, Raw, 1.0, 73.0, 9.9, 3.9, 1.9, Cheap);
    let milk = food("Γάλα 1.5%", Dairy, Raw, 1.0, 47.0, 3.4, 4.9, 1.5, Cheap);
    let feta = food("Φέτα", Dairy, Raw, 1.0, 264.0, 14.2, 4.1, 21.3, Moderate);
    let cottage = food("Τυρί cottage", Dairy, Raw, 1.0, 98.0, 11.1, 3.4, 4.3, Moderate);

    // Fats
    let olive_oil = food("Ελαιόλαδο", Fats, Raw, 1.0, 884.0, 0.0, 0.0, 100.0, Moderate);
    let almonds = food("Αμύγδαλα", Fats, Raw, 1.0, 579.0, 21.2, 21.6, 49.9, Expensive);
    let walnuts = food("Καρύδια", Fats, Raw, 1.0, 654.0, 15.2, 13.7, 65.2, Expensive);
    let tahini = food("Ταχίνι", Fats, Raw, 1.0, 595.0, 17.0, 21.2, 53.8, Moderate);
    let avocado = food("Αβοκάντο", Fats, Raw, 1.0, 160.0, 2.0, 8.5, 14.7, Expensive);

    // Snacks
    let honey = food("Μέλι", Snacks, Raw, 1.0, 304.0, 0.3, 82.4, 0.0, Cheap);
    let dark_chocolate = food("Σοκολάτα υγείας 70%", Snacks, Raw, 1.0, 598.0, 7.8, 45.9, 42.6, Moderate);
    let crackers = food("Κράκερ ολικής", Snacks, Raw, 1.0, 421.0, 10.0, 66.0, 12.0, Cheap);
    let peanut_butter = food("Φυστικοβούτυρο", Snacks, Raw, 1.0, 588.0, 25.1, 20.0, 50.4, Moderate);

    // Other
    let cinnamon = food("Κανέλα", Other, Raw, 1.0, 247.0, 4.0, 80.6, 1.2, Cheap);

    let recipes = vec![
        // Breakfast pool
        recipe(
            "Βρώμη με γάλα, μπανάνα και μέλι",
            RecipeCategory::Breakfast,
            "Κρεμώδης βρώμη με φρούτο, μέλι και κανέλα.",
            &[
                "Σιγοβράζουμε τη βρώμη στο γάλα για 5 λεπτά.",
                "Προσθέτουμε μπανάνα σε ροδέλες, μέλι και κανέλα.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["easy-digest", "high-fiber", "cholesterol-friendly", "gastritis-friendly"],
            vec![
                ing(&oats, 60.0),
                ing_ml(&milk, 250.0),
                ing(&banana, 100.0),
                ing(&honey, 15.0),
                ing(&cinnamon, 2.0),
            ],
            420.0, 16.0, 72.0, 8.0,
        ),
        recipe(
            "Ομελέτα με ντομάτα και φέτα",
            RecipeCategory::Breakfast,
            "Αφράτη ομελέτα με φρέσκια ντομάτα και φέτα.",
            &[
                "Χτυπάμε τα αυγά και τα ρίχνουμε σε ζεσταμένο τηγάνι με ελαιόλαδο.",
                "Προσθέτουμε ντομάτα και φέτα, διπλώνουμε και σερβίρουμε.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "diabetes-friendly", "low-fodmap"],
            vec![
                ing(&egg, 110.0),
                ing(&tomato, 80.0),
                ing(&feta, 30.0),
                ing(&olive_oil, 10.0),
            ],
            380.0, 21.0, 5.0, 31.0,
        ),
        recipe(
            "Γιαούρτι με μέλι και καρύδια",
            RecipeCategory::Breakfast,
            "Στραγγιστό γιαούρτι με μέλι και καρύδια.",
            &["Βάζουμε το γιαούρτι σε μπολ και γαρνίρουμε με μέλι και καρύδια."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Moderate,
            &["gluten-free", "easy-digest"],
            vec![ing(&yogurt, 200.0), ing(&honey, 20.0), ing(&walnuts, 20.0)],
            350.0, 21.0, 27.0, 17.0,
        ),
        recipe(
            "Φρουτοσαλάτα με γιαούρτι και αμύγδαλα",
            RecipeCategory::Breakfast,
            "Δροσερή φρουτοσαλάτα εποχής με γιαούρτι.",
            &[
                "Κόβουμε τα φρούτα σε κύβους.",
                "Ανακατεύουμε με το γιαούρτι και προσθέτουμε τα αμύγδαλα.",
            ],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Moderate,
            &["salad", "gluten-free", "high-fiber"],
            vec![
                ing(&apple, 100.0),
                ing(&banana, 80.0),
                ing(&strawberries, 80.0),
                ing(&yogurt, 100.0),
                ing(&almonds, 15.0),
            ],
            300.0, 12.0, 46.0, 9.0,
        ),
        recipe(
            "Τοστ ολικής με αυγό και cottage",
            RecipeCategory::Breakfast,
            "Ψωμί ολικής με βραστό αυγό και τυρί cottage.",
            &[
                "Βράζουμε το αυγό για 8 λεπτά.",
                "Απλώνουμε το cottage στο ψωμί και προσθέτουμε το αυγό σε φέτες.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &[],
            vec![ing(&bread, 60.0), ing(&egg, 55.0), ing(&cottage, 50.0)],
            340.0, 22.0, 30.0, 14.0,
        ),
        // Snack pool
        recipe(
            "Γιαούρτι με φράουλες και μέλι",
            RecipeCategory::Snack,
            "Ελαφρύ σνακ με γιαούρτι και φράουλες.",
            &["Ανακατεύουμε το γιαούρτι με τις φράουλες και περιχύνουμε το μέλι."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "diabetes-friendly", "easy-digest", "uric-acid-friendly"],
            vec![ing(&yogurt, 150.0), ing(&strawberries, 100.0), ing(&honey, 10.0)],
            180.0, 16.0, 21.0, 3.0,
        ),
        recipe(
            "Smoothie μπανάνα με γάλα και ταχίνι",
            RecipeCategory::Snack,
            "Χορταστικό smoothie με μπανάνα και ταχίνι.",
            &["Χτυπάμε όλα τα υλικά στο μπλέντερ μέχρι να ομογενοποιηθούν."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["smoothie", "easy-digest", "gluten-free"],
            vec![ing(&banana, 100.0), ing_ml(&milk, 200.0), ing(&tahini, 15.0)],
            220.0, 9.0, 35.0, 10.0,
        ),
        recipe(
            "Μήλο με αμύγδαλα",
            RecipeCategory::Snack,
            "Φρούτο με μια χούφτα αμύγδαλα.",
            &["Κόβουμε το μήλο σε φέτες και συνοδεύουμε με τα αμύγδαλα."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "cholesterol-friendly", "high-fiber"],
            vec![ing(&apple, 150.0), ing(&almonds, 25.0)],
            200.0, 6.0, 26.0, 13.0,
        ),
        recipe(
            "Δαμάσκηνα με γιαούρτι",
            RecipeCategory::Snack,
            "Γιαούρτι με αποξηραμένα δαμάσκηνα.",
            &["Κόβουμε τα δαμάσκηνα και τα ανακατεύουμε με το γιαούρτι."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["constipation-friendly", "high-fiber", "gluten-free"],
            vec![ing(&prunes, 40.0), ing(&yogurt, 150.0)],
            190.0, 15.0, 30.0, 3.0,
        ),
        recipe(
            "Κράκερ ολικής με φυστικοβούτυρο",
            RecipeCategory::Snack,
            "Κράκερ ολικής άλεσης με φυστικοβούτυρο.",
            &["Απλώνουμε το φυστικοβούτυρο στα κράκερ."],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &[],
            vec![ing(&crackers, 30.0), ing(&peanut_butter, 20.0)],
            230.0, 8.0, 24.0, 12.0,
        ),
        recipe(
            "Ρυζογκοφρέτες με ταχίνι και μέλι",
            RecipeCategory::Snack,
            "Τραγανές ρυζογκοφρέτες με ταχίνι και μέλι.",
            &["Απλώνουμε το ταχίνι στις ρυζογκοφρέτες και περιχύνουμε το μέλι."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "low-fodmap"],
            vec![ing(&rice_cake, 20.0), ing(&tahini, 15.0), ing(&honey, 10.0)],
            210.0, 4.0, 30.0, 9.0,
        ),
        // Main pool, shared by lunch and dinner
        recipe(
            "Κοτόπουλο σχάρας με ρύζι και μπρόκολο",
            RecipeCategory::Main,
            "Κλασικό πιάτο με ψητό κοτόπουλο, ρύζι και μπρόκολο στον ατμό.",
            &[
                "Ψήνουμε το κοτόπουλο στη σχάρα.",
                "Βράζουμε το ρύζι και τον μπρόκολο στον ατμό.",
                "Σερβίρουμε με ελαιόλαδο.",
            ],
            TimeTier::Moderate,
            DifficultyTier::Medium,
            CostTier::Cheap,
            &["gluten-free", "diabetes-friendly"],
            vec![
                ing(&chicken, 150.0),
                ing(&rice, 75.0),
                ing(&broccoli, 150.0),
                ing(&olive_oil, 10.0),
            ],
            620.0, 46.0, 63.0, 17.0,
        ),
        recipe(
            "Φακές σούπα με καρότο",
            RecipeCategory::Main,
            "Παραδοσιακές φακές με καρότο και ντομάτα.",
            &[
                "Σοτάρουμε το καρότο, προσθέτουμε φακές και ντομάτα.",
                "Σιγοβράζουμε για 40 λεπτά μέχρι να μαλακώσουν.",
            ],
            TimeTier::Slow,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "cholesterol-friendly", "high-fiber"],
            vec![
                ing(&lentils, 90.0),
                ing(&carrot, 60.0),
                ing(&tomato, 60.0),
                ing(&olive_oil, 15.0),
            ],
            480.0, 23.0, 61.0, 15.0,
        ),
        recipe(
            "Σολομός φούρνου με κινόα και σπανάκι",
            RecipeCategory::Main,
            "Σολομός στον φούρνο με κινόα και σοταρισμένο σπανάκι.",
            &[
                "Ψήνουμε τον σολομό στους 200°C για 15 λεπτά.",
                "Βράζουμε την κινόα και σοτάρουμε το σπανάκι.",
            ],
            TimeTier::Moderate,
            DifficultyTier::Medium,
            CostTier::Expensive,
            &["gluten-free", "nafld-friendly", "cholesterol-friendly"],
            vec![
                ing(&salmon, 150.0),
                ing(&quinoa, 70.0),
                ing(&spinach, 100.0),
                ing(&olive_oil, 10.0),
            ],
            650.0, 42.0, 49.0, 30.0,
        ),
        recipe(
            "Μακαρόνια ολικής με κιμά γαλοπούλας",
            RecipeCategory::Main,
            "Μακαρόνια ολικής άλεσης με ελαφριά σάλτσα κιμά.",
            &[
                "Σοτάρουμε τον κιμά και προσθέτουμε την ντομάτα.",
                "Βράζουμε τα μακαρόνια και ενώνουμε με τη σάλτσα.",
            ],
            TimeTier::Moderate,
            DifficultyTier::Medium,
            CostTier::Moderate,
            &[],
            vec![
                ing(&pasta, 80.0),
                ing(&turkey, 120.0),
                ing(&tomato, 150.0),
                ing(&olive_oil, 10.0),
            ],
            700.0, 40.0, 66.0, 26.0,
        ),
        recipe(
            "Γεμιστά με ρύζι",
            RecipeCategory::Main,
            "Ντομάτες και πιπεριές γεμιστές με ρύζι και μυρωδικά.",
            &[
                "Αδειάζουμε ντομάτες και πιπεριές και ετοιμάζουμε τη γέμιση.",
                "Ψήνουμε στον φούρνο για μία ώρα στους 180°C.",
            ],
            TimeTier::Slow,
            DifficultyTier::Hard,
            CostTier::Cheap,
            &["gluten-free"],
            vec![
                ing(&tomato, 250.0),
                ing(&pepper, 150.0),
                ing(&rice, 70.0),
                ing(&olive_oil, 20.0),
            ],
            520.0, 9.0, 74.0, 21.0,
        ),
        recipe(
            "Μπιφτέκια γαλοπούλας με ψητές πατάτες",
            RecipeCategory::Main,
            "Ζουμερά μπιφτέκια γαλοπούλας με πατάτες φούρνου.",
            &[
                "Πλάθουμε τον κιμά με τριμμένο ψωμί και ψήνουμε.",
                "Ψήνουμε τις πατάτες με ελαιόλαδο μέχρι να ροδίσουν.",
            ],
            TimeTier::Moderate,
            DifficultyTier::Medium,
            CostTier::Moderate,
            &["diabetes-friendly"],
            vec![
                ing(&turkey, 150.0),
                ing(&bread, 20.0),
                ing(&potato, 200.0),
                ing(&olive_oil, 15.0),
            ],
            640.0, 38.0, 45.0, 33.0,
        ),
        recipe(
            "Ψαρόσουπα με λαχανικά",
            RecipeCategory::Main,
            "Ελαφριά ψαρόσουπα με πατάτα, καρότο και κολοκύθι.",
            &[
                "Βράζουμε τα λαχανικά μέχρι να μαλακώσουν.",
                "Προσθέτουμε το ψάρι και σιγοβράζουμε 15 λεπτά.",
            ],
            TimeTier::Slow,
            DifficultyTier::Medium,
            CostTier::Moderate,
            &["easy-digest", "gluten-free", "gastritis-friendly"],
            vec![
                ing(&bream, 180.0),
                ing(&potato, 150.0),
                ing(&carrot, 80.0),
                ing(&zucchini, 100.0),
                ing(&olive_oil, 15.0),
            ],
            430.0, 38.0, 30.0, 18.0,
        ),
        recipe(
            "Κοτόπουλο σχάρας με πατάτες και κολοκύθι",
            RecipeCategory::Main,
            "Ψητό κοτόπουλο με πατάτες και κολοκύθι σχάρας.",
            &["Ψήνουμε κοτόπουλο, πατάτες και κολοκύθι στη σχάρα και περιχύνουμε ελαιόλαδο."],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["ibs-friendly", "low-fodmap", "gluten-free"],
            vec![
                ing(&chicken, 150.0),
                ing(&potato, 180.0),
                ing(&zucchini, 120.0),
                ing(&olive_oil, 10.0),
            ],
            560.0, 41.0, 36.0, 22.0,
        ),
        recipe(
            "Σαλάτα με κοτόπουλο και αβοκάντο",
            RecipeCategory::Salad,
            "Πράσινη σαλάτα με ψητό κοτόπουλο και αβοκάντο.",
            &[
                "Ψήνουμε το κοτόπουλο και το κόβουμε σε λωρίδες.",
                "Ανακατεύουμε με μαρούλι, αγγούρι, αβοκάντο και λαδολέμονο.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Moderate,
            &["main", "gluten-free"],
            vec![
                ing(&lettuce, 100.0),
                ing(&chicken, 120.0),
                ing(&avocado, 70.0),
                ing(&cucumber, 80.0),
                ing(&olive_oil, 10.0),
            ],
            450.0, 32.0, 12.0, 30.0,
        ),
        recipe(
            "Meal prep κοτόπουλο εβδομάδας με ρύζι",
            RecipeCategory::MealPrep,
            "Μερίδα meal prep με κοτόπουλο, ρύζι και λαχανικά.",
            &[
                "Ψήνουμε διπλή ποσότητα κοτόπουλου και ρυζιού.",
                "Μοιράζουμε σε σκεύη με μπρόκολο και καρότο για την εβδομάδα.",
            ],
            TimeTier::Slow,
            DifficultyTier::Medium,
            CostTier::Cheap,
            &["main", "gluten-free", "diabetes-friendly"],
            vec![
                ing(&chicken, 160.0),
                ing(&rice, 80.0),
                ing(&broccoli, 120.0),
                ing(&carrot, 60.0),
                ing(&olive_oil, 10.0),
            ],
            600.0, 45.0, 65.0, 15.0,
        ),
        // Dinner-only pool, lighter plates
        recipe(
            "Ομελέτα με κολοκύθι και φέτα",
            RecipeCategory::Dinner,
            "Ελαφριά βραδινή ομελέτα με κολοκύθι.",
            &[
                "Σοτάρουμε το κολοκύθι μέχρι να μαλακώσει.",
                "Ρίχνουμε τα χτυπημένα αυγά και τη φέτα και ψήνουμε.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["gluten-free", "diabetes-friendly", "uric-acid-friendly"],
            vec![
                ing(&egg, 110.0),
                ing(&zucchini, 150.0),
                ing(&feta, 30.0),
                ing(&olive_oil, 10.0),
            ],
            380.0, 22.0, 6.0, 30.0,
        ),
        recipe(
            "Τορτίγια με κοτόπουλο και λαχανικά",
            RecipeCategory::Dinner,
            "Τορτίγια ολικής με κοτόπουλο, μαρούλι και γιαούρτι.",
            &[
                "Ζεσταίνουμε την τορτίγια και προσθέτουμε το ψημένο κοτόπουλο.",
                "Συμπληρώνουμε μαρούλι, ντομάτα και γιαούρτι και τυλίγουμε.",
            ],
            TimeTier::Fast,
            DifficultyTier::Easy,
            CostTier::Moderate,
            &[],
            vec![
                ing(&tortilla, 60.0),
                ing(&chicken, 100.0),
                ing(&lettuce, 50.0),
                ing(&tomato, 60.0),
                ing(&yogurt, 30.0),
            ],
            420.0, 33.0, 42.0, 12.0,
        ),
        recipe(
            "Ψητή τσιπούρα με σπανάκι και πατάτα",
            RecipeCategory::Dinner,
            "Τσιπούρα στον φούρνο με σπανάκι και βραστή πατάτα.",
            &[
                "Ψήνουμε την τσιπούρα με ελαιόλαδο και λεμόνι.",
                "Σερβίρουμε με σοταρισμένο σπανάκι και πατάτα.",
            ],
            TimeTier::Moderate,
            DifficultyTier::Easy,
            CostTier::Moderate,
            &["gluten-free", "nafld-friendly", "easy-digest"],
            vec![
                ing(&bream, 200.0),
                ing(&spinach, 150.0),
                ing(&potato, 100.0),
                ing(&olive_oil, 15.0),
            ],
            430.0, 42.0, 20.0, 20.0,
        ),
        // Authoring-only pools, not reachable from generation slots
        recipe(
            "Μους σοκολάτας με αβοκάντο",
            RecipeCategory::Dessert,
            "Σπιτική μους σοκολάτας με βάση το αβοκάντο.",
            &[
                "Λιώνουμε τη σοκολάτα σε μπεν μαρί.",
                "Χτυπάμε με το αβοκάντο και το μέλι μέχρι να γίνει βελούδινη.",
            ],
            TimeTier::Fast,
            DifficultyTier::Medium,
            CostTier::Moderate,
            &["gluten-free"],
            vec![ing(&dark_chocolate, 30.0), ing(&avocado, 80.0), ing(&honey, 15.0)],
            350.0, 5.0, 34.0, 23.0,
        ),
        recipe(
            "Πράσινο smoothie με σπανάκι και μπανάνα",
            RecipeCategory::Smoothie,
            "Smoothie με σπανάκι, μπανάνα και γάλα.",
            &["Χτυπάμε όλα τα υλικά στο μπλέντερ με λίγο πάγο."],
            TimeTier::VeryFast,
            DifficultyTier::Easy,
            CostTier::Cheap,
            &["smoothie", "gluten-free", "easy-digest"],
            vec![
                ing(&spinach, 50.0),
                ing(&banana, 120.0),
                ing_ml(&milk, 200.0),
                ing(&honey, 10.0),
            ],
            250.0, 9.0, 45.0, 4.0,
        ),
    ];

    let foods = vec![
        chicken, beef, salmon, bream, turkey, egg, lentils, tuna, rice, pasta, potato, bread,
        bread_gf, oats, quinoa, rice_cake, tortilla, tomato, cucumber, broccoli, spinach, zucchini,
        lettuce, carrot, pepper, banana, apple, strawberries, orange, prunes, yogurt, milk, feta,
        cottage, olive_oil, almonds, walnuts, tahini, avocado, honey, dark_chocolate, crackers,
        peanut_butter, cinnamon,
    ];

    (foods, recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::slots::meal_type_for;
    use crate::models::MealType;

    #[test]
    fn test_seed_ingredient_references_resolve() {
        let catalog = seed_catalog();

        for recipe in catalog.recipes() {
            for ingredient in &recipe.ingredients {
                let id = ingredient.food_id.unwrap_or_else(|| {
                    panic!("seed ingredient '{}' has no food id", ingredient.name)
                });
                assert!(
                    catalog.food_by_id(id).is_some(),
                    "ingredient '{}' of '{}' does not resolve",
                    ingredient.name,
                    recipe.name
                );
            }
        }
    }

    #[test]
    fn test_seed_recipes_have_positive_calories() {
        let catalog = seed_catalog();

        for recipe in catalog.recipes() {
            assert!(
                recipe.macros.calories > 0.0,
                "'{}' has non-positive calories",
                recipe.name
            );
            assert!(recipe.servings >= 1);
            assert!(!recipe.ingredients.is_empty());
        }
    }

    #[test]
    fn test_seed_covers_every_food_category() {
        let catalog = seed_catalog();
        use crate::models::FoodCategory::*;

        for category in [Protein, Starch, Vegetables, Fruits, Dairy, Fats, Snacks, Other] {
            assert!(
                catalog.foods().iter().any(|f| f.category == category),
                "no seed food in category {category:?}"
            );
        }
    }

    #[test]
    fn test_seed_pools_cover_every_meal_type() {
        let catalog = seed_catalog();

        for slot in ["breakfast", "snack1", "lunch", "dinner"] {
            let meal_type = meal_type_for(slot);
            let pool: Vec<_> = catalog
                .recipes()
                .iter()
                .filter(|r| crate::engine::selector::matches_meal_type(r, meal_type))
                .collect();
            assert!(!pool.is_empty(), "empty pool for {meal_type:?}");
            assert!(
                pool.iter().any(|r| r.has_tag("gluten-free")),
                "no gluten-free option for {meal_type:?}"
            );
        }
    }

    #[test]
    fn test_seed_has_context_filter_options_per_pool() {
        let catalog = seed_catalog();
        use crate::models::TimeTier;

        for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack] {
            let pool: Vec<_> = catalog
                .recipes()
                .iter()
                .filter(|r| crate::engine::selector::matches_meal_type(r, meal_type))
                .collect();
            assert!(
                pool.iter()
                    .any(|r| matches!(r.time, TimeTier::VeryFast | TimeTier::Fast)),
                "no quick option for {meal_type:?}"
            );
            assert!(
                pool.iter().any(|r| r.cost == CostTier::Cheap),
                "no cheap option for {meal_type:?}"
            );
        }
    }
}
