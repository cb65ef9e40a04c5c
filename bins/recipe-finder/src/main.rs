//! recipe-finder: search, filter and inspect recipes from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use eatthisway_cli::output::{format_count, recipe_detail, recipe_line, Status};
use eatthisway_core::config::Config;
use eatthisway_core::content::{ContentStore, Difficulty, RecipeSummary};
use eatthisway_core::error::{exit_codes, Error};
use eatthisway_core::validation::validate_index;
use eatthisway_discovery::{parse_difficulty, DiscoveryEngine, FacetOptions, FilterError, FilterState};
use eatthisway_telemetry::TelemetryConfig;

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Search, filter and inspect Eat This Way recipes")]
#[command(version)]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Content directory holding index.json and recipes/
    #[arg(long, global = true, env = "EATTHISWAY_DATA_DIR")]
    data_dir: Option<String>,

    /// Debug logging, plus a metrics summary on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by text and facets
    Search {
        /// Free-text query, typos allowed
        query: Option<String>,
        /// Exact category
        #[arg(long)]
        category: Option<String>,
        /// Exact cuisine
        #[arg(long)]
        cuisine: Option<String>,
        /// Easy, Medium or Hard
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List featured recipes
    Featured {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with cuisine and tag counts
    Categories,

    /// Show a full recipe
    Show {
        /// Recipe slug
        slug: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the recipe index for problems
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Some(dir) = &cli.data_dir {
        config.schema.content.data_dir = dir.clone();
    }

    eatthisway_telemetry::init_with_config(TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            config.schema.logging.level.clone()
        },
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    })?;

    let store = match ContentStore::open(&config.schema.content) {
        Ok(store) => store,
        Err(e) => fail(&e),
    };

    let result = match cli.command {
        Commands::Search {
            query,
            category,
            cuisine,
            difficulty,
            json,
        } => run_search(&store, &config, query, category, cuisine, difficulty, json),
        Commands::Featured { json } => run_featured(&store, &config, json),
        Commands::Categories => run_categories(&store, &config),
        Commands::Show { slug, json } => run_show(&store, &slug, json),
        Commands::Validate => run_validate(&store),
    }?;

    if cli.verbose {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&eatthisway_telemetry::metrics().export_json())?
        );
    }

    std::process::exit(result);
}

/// Report a structured error and exit with its mapped code
fn fail(error: &Error) -> ! {
    Status::error(&error.to_string());
    std::process::exit(exit_codes::for_code(error.code));
}

fn print_list(recipes: &[&RecipeSummary], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
    } else {
        for recipe in recipes {
            println!("{}", recipe_line(recipe));
        }
    }
    Ok(())
}

fn facet_error(error: &FilterError, allowed: &[String]) -> i32 {
    Status::error(&error.to_string());
    Status::info(&format!("Choose one of: {}", allowed.join(", ")));
    exit_codes::VALIDATION_ERROR
}

fn run_search(
    store: &ContentStore,
    config: &Config,
    query: Option<String>,
    category: Option<String>,
    cuisine: Option<String>,
    difficulty: Option<Difficulty>,
    json: bool,
) -> Result<i32> {
    let index = store.index();
    let options = FacetOptions::from_index(index);

    let mut filter = FilterState::new();
    filter.set_query(query.unwrap_or_default());
    if let Err(e) = filter.set_category(category.as_deref(), &options) {
        return Ok(facet_error(&e, options.categories));
    }
    if let Err(e) = filter.set_cuisine(cuisine.as_deref(), &options) {
        return Ok(facet_error(&e, options.cuisines));
    }
    filter.set_difficulty(difficulty);

    let engine = DiscoveryEngine::with_search_config(&config.schema.search);
    let results = engine.resolve(index, &filter);

    if results.matcher_fell_back() {
        Status::warning("Text search unavailable, showing recipes matching the other filters");
    }

    if json {
        print_list(results.as_slice(), true)?;
        return Ok(exit_codes::SUCCESS);
    }

    if results.is_empty() {
        Status::info("No recipes found");
        if filter.has_active_filters() {
            println!("Try a different search term or clear the filters.");
        }
        return Ok(exit_codes::SUCCESS);
    }

    Status::header(&format_count(results.len(), "recipe", "recipes"));
    print_list(results.as_slice(), false)?;
    Ok(exit_codes::SUCCESS)
}

fn run_featured(store: &ContentStore, config: &Config, json: bool) -> Result<i32> {
    let limit = config.schema.home.featured_limit.unwrap_or(usize::MAX);
    let featured: Vec<&RecipeSummary> = store.index().featured().take(limit).collect();

    if !json {
        Status::header("Featured recipes");
        if featured.is_empty() {
            Status::info("No featured recipes");
        }
    }
    print_list(&featured, json)?;
    Ok(exit_codes::SUCCESS)
}

fn run_categories(store: &ContentStore, config: &Config) -> Result<i32> {
    let index = store.index();

    Status::header("Categories");
    for category in index.top_categories(config.schema.home.category_limit) {
        let count = index.recipes.iter().filter(|r| &r.category == category).count();
        println!("  {}  {}", category, format_count(count, "recipe", "recipes"));
    }
    println!();
    println!("{}", format_count(index.cuisines.len(), "cuisine", "cuisines"));
    println!("{}", format_count(index.tags.len(), "tag", "tags"));
    Ok(exit_codes::SUCCESS)
}

fn run_show(store: &ContentStore, slug: &str, json: bool) -> Result<i32> {
    let recipe = match store.recipe(slug) {
        Ok(Some(recipe)) => recipe,
        Ok(None) => fail(&Error::recipe_not_found(slug)),
        Err(e) => fail(&e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print!("{}", recipe_detail(&recipe));
    }
    Ok(exit_codes::SUCCESS)
}

fn run_validate(store: &ContentStore) -> Result<i32> {
    let report = validate_index(store.index());

    for warning in report.warnings() {
        Status::warning(&warning.to_string());
    }
    for error in report.errors() {
        Status::error(&error.to_string());
    }

    if report.is_valid() {
        Status::success(&format!(
            "{} valid",
            format_count(store.index().len(), "recipe", "recipes")
        ));
        Ok(exit_codes::SUCCESS)
    } else {
        tracing::debug!(errors = report.errors().len(), "Index validation failed");
        Status::error(&format!(
            "{} found",
            format_count(report.errors().len(), "problem", "problems")
        ));
        Ok(exit_codes::VALIDATION_ERROR)
    }
}
