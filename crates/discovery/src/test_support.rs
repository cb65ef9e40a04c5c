//! Shared fixtures for unit tests.

use eatthisway_core::content::{Difficulty, RecipeIndex, RecipeSummary, SummaryImages};
use eatthisway_search::{FuzzyMatcher, Match, Result, SearchError, Searchable};

fn recipe(
    slug: &str,
    title: &str,
    description: &str,
    category: &str,
    cuisine: &str,
    difficulty: Difficulty,
    tags: &[&str],
) -> RecipeSummary {
    RecipeSummary {
        id: slug.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        cuisine: cuisine.to_string(),
        difficulty,
        total_time: 30,
        images: SummaryImages {
            thumbnail: format!("/images/{slug}-thumb.jpg"),
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating: 4.5,
        review_count: 10,
        featured: false,
    }
}

/// Ten recipes; three desserts, none both Breakfast and Italian.
pub fn sample_index() -> RecipeIndex {
    use Difficulty::*;

    RecipeIndex {
        categories: ["Dinner", "Dessert", "Breakfast"].map(String::from).to_vec(),
        cuisines: ["Italian", "French", "American", "Mexican", "Middle Eastern"]
            .map(String::from)
            .to_vec(),
        tags: Vec::new(),
        recipes: vec![
            recipe("chicken-parmesan", "Chicken Parmesan", "Breaded cutlets baked under marinara and mozzarella", "Dinner", "Italian", Medium, &["chicken", "cheese"]),
            recipe("chocolate-lava-cake", "Chocolate Lava Cake", "Warm cakes with a molten centre", "Dessert", "French", Hard, &["chocolate", "baking"]),
            recipe("fluffy-pancakes", "Fluffy Pancakes", "Buttermilk stack for slow weekends", "Breakfast", "American", Easy, &["brunch", "sweet"]),
            recipe("tiramisu", "Tiramisu", "Coffee soaked ladyfingers layered with mascarpone", "Dessert", "Italian", Medium, &["coffee", "no-bake"]),
            recipe("chicken-mole", "Chicken Mole", "Chicken simmered in a dark chocolate and chili sauce", "Dinner", "Mexican", Hard, &["chocolate", "spicy"]),
            recipe("huevos-rancheros", "Huevos Rancheros", "Fried eggs over tortillas with salsa", "Breakfast", "Mexican", Easy, &["eggs"]),
            recipe("lemon-tart", "Lemon Tart", "Bright curd in a buttery shell", "Dessert", "French", Medium, &["citrus", "baking"]),
            recipe("margherita-pizza", "Margherita Pizza", "Tomato, basil and fresh mozzarella", "Dinner", "Italian", Medium, &["pizza", "cheese"]),
            recipe("shakshuka", "Shakshuka", "Eggs poached in spiced tomato", "Breakfast", "Middle Eastern", Easy, &["eggs", "vegetarian"]),
            recipe("beef-bourguignon", "Beef Bourguignon", "Beef braised in red wine", "Dinner", "French", Hard, &["stew"]),
        ],
    }
}

/// Matcher that always fails.
#[derive(Debug, Clone, Copy)]
pub struct BrokenMatcher;

impl FuzzyMatcher for BrokenMatcher {
    fn search<'a, T>(&self, _corpus: &'a [T], _query: &str, _fields: &[String], _threshold: f64) -> Result<Vec<Match<'a, T>>>
    where
        T: Searchable + Sync,
    {
        Err(SearchError::Unavailable("index not built".to_string()))
    }
}
