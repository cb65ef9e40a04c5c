//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output. Colors are only emitted when
//! the target stream supports them.

use eatthisway_core::content::{Recipe, RecipeSummary};
use owo_colors::{OwoColorize, Stream};
use std::fmt::Write;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".if_supports_color(Stream::Stdout, |s| s.green()), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |s| s.red()), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".if_supports_color(Stream::Stdout, |s| s.blue()), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |s| s.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a cooking time given in minutes
pub fn format_minutes(minutes: u32) -> String {
    let (hours, mins) = (minutes / 60, minutes % 60);
    match (hours, mins) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} hr", h),
        (h, m) => format!("{} hr {} min", h, m),
    }
}

/// Five-star rating with the numeric value, e.g. `★★★★½ 4.5`
pub fn format_rating(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let empty = 5 - full - usize::from(half);

    let mut stars = "★".repeat(full);
    if half {
        stars.push('½');
    }
    stars.push_str(&"☆".repeat(empty));
    format!("{} {:.1}", stars, rating)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// One line per recipe in a listing
pub fn recipe_line(recipe: &RecipeSummary) -> String {
    format!(
        "{}  {} · {} · {} · {}  {}  {}",
        recipe.title.if_supports_color(Stream::Stdout, |s| s.bold()),
        recipe.category,
        recipe.cuisine,
        recipe.difficulty,
        format_minutes(recipe.total_time),
        format_rating(recipe.rating).if_supports_color(Stream::Stdout, |s| s.yellow()),
        recipe.slug.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    )
}

/// Full recipe page
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", recipe.title.if_supports_color(Stream::Stdout, |s| s.bold()));
    let _ = writeln!(out, "{}", recipe.description);
    let _ = writeln!(
        out,
        "{} · {} · {} · serves {}",
        recipe.category, recipe.cuisine, recipe.difficulty, recipe.servings
    );
    let _ = writeln!(
        out,
        "Prep {} · Cook {} · Total {}",
        format_minutes(recipe.prep_time),
        format_minutes(recipe.cook_time),
        format_minutes(recipe.total_time)
    );
    let _ = writeln!(
        out,
        "{} from {} · by {}",
        format_rating(recipe.rating),
        format_count(recipe.review_count as usize, "review", "reviews"),
        recipe.author.name
    );

    section(&mut out, "Ingredients");
    for group in recipe.ingredient_sections() {
        if let Some(name) = group.name {
            let _ = writeln!(out, "  {}", name.if_supports_color(Stream::Stdout, |s| s.underline()));
        }
        for ingredient in group.ingredients {
            let amount = [ingredient.amount.as_str(), ingredient.unit.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if amount.is_empty() {
                let _ = writeln!(out, "  • {}", ingredient.item);
            } else {
                let _ = writeln!(out, "  • {} {}", amount, ingredient.item);
            }
        }
    }

    section(&mut out, "Instructions");
    for step in &recipe.instructions {
        let _ = writeln!(out, "  {}. {}", step.step, step.text);
    }

    if let Some(nutrition) = &recipe.nutrition_facts {
        section(&mut out, "Nutrition");
        let _ = writeln!(
            out,
            "  {} kcal · protein {} · carbs {} · fat {}",
            nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
        );
    }

    if let Some(notes) = recipe.notes.as_deref().filter(|n| !n.is_empty()) {
        section(&mut out, "Notes");
        for note in notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    if let Some(faqs) = recipe.faqs.as_deref().filter(|f| !f.is_empty()) {
        section(&mut out, "FAQ");
        for faq in faqs {
            let _ = writeln!(out, "  Q: {}", faq.question);
            let _ = writeln!(out, "  A: {}", faq.answer);
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}
