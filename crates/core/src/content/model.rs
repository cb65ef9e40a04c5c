//! Recipe content records
//!
//! Field names follow the JSON content files (camelCase on disk).

use eatthisway_search::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fields searched by the recipe listing, in priority order.
pub const SEARCH_FIELDS: [&str; 5] = ["title", "description", "tags", "cuisine", "category"];

/// Every field name a [`RecipeSummary`] exposes to a matcher.
pub const SEARCHABLE_FIELDS: [&str; 7] = [
    "title",
    "description",
    "tags",
    "cuisine",
    "category",
    "slug",
    "difficulty",
];

/// Recipe difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Name as stored in content files
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no difficulty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}, expected one of Easy, Medium, Hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-sensitive, matching the stored names exactly
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Thumbnail reference carried by a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryImages {
    pub thumbnail: String,
}

/// Read-only projection of a recipe used for listing and search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    /// Minutes
    pub total_time: u32,
    pub images: SummaryImages,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 0 to 5
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Searchable for RecipeSummary {
    fn field_values(&self, field: &str) -> Option<Vec<&str>> {
        let values = match field {
            "title" => vec![self.title.as_str()],
            "description" => vec![self.description.as_str()],
            "tags" => self.tags.iter().map(String::as_str).collect(),
            "cuisine" => vec![self.cuisine.as_str()],
            "category" => vec![self.category.as_str()],
            "slug" => vec![self.slug.as_str()],
            "difficulty" => vec![self.difficulty.as_str()],
            _ => return None,
        };
        Some(values)
    }
}

/// The full content store index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIndex {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
}

impl RecipeIndex {
    /// Parse an index from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the index holds no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a summary by slug
    pub fn by_slug(&self, slug: &str) -> Option<&RecipeSummary> {
        self.recipes.iter().find(|r| r.slug == slug)
    }

    /// Featured recipes in index order
    pub fn featured(&self) -> impl Iterator<Item = &RecipeSummary> {
        self.recipes.iter().filter(|r| r.featured)
    }

    /// The first `n` declared categories
    pub fn top_categories(&self, n: usize) -> &[String] {
        &self.categories[..n.min(self.categories.len())]
    }

    /// Whether `category` is a declared category
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether `cuisine` is a declared cuisine
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeImages {
    pub main: String,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub step: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Full recipe detail record, one file per slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub author: Author,
    pub images: RecipeImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_facts: Option<NutritionFacts>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    pub published_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub featured: bool,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
}

/// Ingredients sharing a section heading
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientSection<'a> {
    /// `None` for ingredients listed without a section
    pub name: Option<&'a str>,
    pub ingredients: Vec<&'a Ingredient>,
}

impl Recipe {
    /// Project the detail record onto its listing summary
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            cuisine: self.cuisine.clone(),
            difficulty: self.difficulty,
            total_time: self.total_time,
            images: SummaryImages {
                thumbnail: self.images.thumbnail.clone(),
            },
            tags: self.tags.clone(),
            rating: self.rating,
            review_count: self.review_count,
            featured: self.featured,
        }
    }

    /// Group ingredients by section, keeping first-seen section order
    pub fn ingredient_sections(&self) -> Vec<IngredientSection<'_>> {
        let mut sections: Vec<IngredientSection<'_>> = Vec::new();
        for ingredient in &self.ingredients {
            let name = ingredient.section.as_deref();
            match sections.iter_mut().find(|s| s.name == name) {
                Some(section) => section.ingredients.push(ingredient),
                None => sections.push(IngredientSection {
                    name,
                    ingredients: vec![ingredient],
                }),
            }
        }
        sections
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const INDEX_JSON: &str = r#"{
        "categories": ["Dinner", "Dessert", "Breakfast"],
        "cuisines": ["Italian", "French", "American"],
        "tags": ["pasta", "chocolate", "quick"],
        "recipes": [
            {
                "id": "1",
                "title": "Chicken Parmesan",
                "slug": "chicken-parmesan",
                "description": "Crispy breaded chicken with marinara",
                "category": "Dinner",
                "cuisine": "Italian",
                "difficulty": "Medium",
                "totalTime": 45,
                "images": { "thumbnail": "/images/chicken-parmesan-thumb.jpg" },
                "tags": ["quick"],
                "rating": 4.8,
                "reviewCount": 120,
                "featured": true
            },
            {
                "id": "2",
                "title": "Chocolate Mousse",
                "slug": "chocolate-mousse",
                "description": "Airy dark chocolate dessert",
                "category": "Dessert",
                "cuisine": "French",
                "difficulty": "Hard",
                "totalTime": 30,
                "images": { "thumbnail": "/images/chocolate-mousse-thumb.jpg" },
                "tags": ["chocolate"],
                "rating": 4.5,
                "reviewCount": 64,
                "featured": false
            }
        ]
    }"#;

    pub const RECIPE_JSON: &str = r#"{
        "id": "1",
        "title": "Chicken Parmesan",
        "slug": "chicken-parmesan",
        "description": "Crispy breaded chicken with marinara",
        "category": "Dinner",
        "cuisine": "Italian",
        "difficulty": "Medium",
        "prepTime": 15,
        "cookTime": 30,
        "totalTime": 45,
        "servings": 4,
        "author": { "name": "Maria Rossi", "avatar": "/images/authors/maria.jpg" },
        "images": { "main": "/images/chicken-parmesan.jpg", "thumbnail": "/images/chicken-parmesan-thumb.jpg" },
        "ingredients": [
            { "item": "chicken breast", "amount": "2", "unit": "pieces", "section": "Chicken" },
            { "item": "breadcrumbs", "amount": "1", "unit": "cup", "section": "Chicken" },
            { "item": "crushed tomatoes", "amount": "400", "unit": "g", "section": "Sauce" },
            { "item": "mozzarella", "amount": "150", "unit": "g", "section": "Chicken" }
        ],
        "instructions": [
            { "step": 1, "text": "Bread the chicken." },
            { "step": 2, "text": "Bake with sauce and cheese." }
        ],
        "nutritionFacts": { "calories": 520, "protein": "42g", "carbs": "28g", "fat": "24g" },
        "tags": ["quick"],
        "dietaryInfo": [],
        "publishedAt": "2024-03-01",
        "updatedAt": "2024-04-12",
        "featured": true,
        "rating": 4.8,
        "reviewCount": 120
    }"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_difficulty_parse_is_exact() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("easy".parse::<Difficulty>().is_err());
        assert!("Impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_index_from_json() {
        let index = RecipeIndex::from_json(INDEX_JSON).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.recipes[0].total_time, 45);
        assert_eq!(index.recipes[0].difficulty, Difficulty::Medium);
        assert_eq!(index.recipes[1].images.thumbnail, "/images/chocolate-mousse-thumb.jpg");
    }

    #[test]
    fn test_index_rejects_unknown_difficulty() {
        let json = INDEX_JSON.replace("\"Hard\"", "\"Extreme\"");
        assert!(RecipeIndex::from_json(&json).is_err());
    }

    #[test]
    fn test_featured_and_top_categories() {
        let index = RecipeIndex::from_json(INDEX_JSON).unwrap();
        let featured: Vec<_> = index.featured().map(|r| r.slug.as_str()).collect();
        assert_eq!(featured, vec!["chicken-parmesan"]);
        assert_eq!(index.top_categories(2), ["Dinner", "Dessert"]);
        assert_eq!(index.top_categories(10).len(), 3);
    }

    #[test]
    fn test_by_slug() {
        let index = RecipeIndex::from_json(INDEX_JSON).unwrap();
        assert_eq!(index.by_slug("chocolate-mousse").unwrap().id, "2");
        assert!(index.by_slug("missing").is_none());
    }

    #[test]
    fn test_searchable_fields() {
        let index = RecipeIndex::from_json(INDEX_JSON).unwrap();
        let recipe = &index.recipes[0];
        for field in SEARCHABLE_FIELDS {
            assert!(recipe.field_values(field).is_some(), "missing {field}");
        }
        assert_eq!(recipe.field_values("tags"), Some(vec!["quick"]));
        assert!(recipe.field_values("servings").is_none());
    }

    #[test]
    fn test_recipe_summary_projection() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();
        let index = RecipeIndex::from_json(INDEX_JSON).unwrap();
        assert_eq!(recipe.summary(), index.recipes[0]);
    }

    #[test]
    fn test_ingredient_sections_keep_order() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();
        let sections = recipe.ingredient_sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, Some("Chicken"));
        assert_eq!(sections[0].ingredients.len(), 3);
        assert_eq!(sections[1].name, Some("Sauce"));
    }
}
