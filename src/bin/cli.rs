//! Recipe Book CLI
//!
//! Search recipes, open details and manage saved recipes and ratings.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use recipe_book::{
    app::{App, Page},
    error::{AppError, Result},
    models::{Config, KNOWN_CUISINES, KNOWN_DIETS, Messages, Rating, RecipeId, SearchFilters},
    routes::Route,
    storage::{KeyValueStore, LocalStorage},
    utils::display,
    views::{BrowseView, Notice, SavedView},
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Recipe Book - search recipes, keep favorites and ratings
#[derive(Parser, Debug)]
#[command(name = "recipe-book", version, about = "Search recipes, keep favorites and ratings")]
struct Cli {
    /// Directory holding config.toml and the saved user data
    #[arg(short, long, default_value = "storage", global = true)]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes (no query lists the default selection)
    Search {
        /// Free-text query
        query: Vec<String>,
        /// Diet filter, e.g. vegan
        #[arg(long)]
        diet: Option<String>,
        /// Cuisine filter, e.g. italian
        #[arg(long)]
        cuisine: Option<String>,
    },

    /// Show ingredients and instructions of a recipe
    Show { id: RecipeId },

    /// List saved recipes
    Saved,

    /// Save a recipe to favorites
    Save { id: RecipeId },

    /// Remove a recipe from favorites
    Unsave { id: RecipeId },

    /// Rate a recipe from 1 to 5 stars
    Rate { id: RecipeId, stars: u8 },

    /// List your ratings
    Ratings,

    /// Log in as the configured mock user
    Login,

    /// Log out
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List the suggested diet and cuisine filters
    Filters,

    /// Open a page by path: /, /recipe/<id>, /SavedRecipe
    Open { route: String },

    /// Interactive session that navigates between pages
    Shell,

    /// Validate configuration
    Validate,

    /// Show storage and session info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.data_dir.join("config.toml");
    let mut config = Config::load_or_default(&config_path);
    config.apply_env();
    log::debug!("Loaded configuration from {}", config_path.display());

    let storage = Arc::new(LocalStorage::new(&cli.data_dir));
    let messages = config.messages.clone();

    match cli.command {
        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (API at {})", config.api.base_url);
        }

        Command::Info => print_info(storage)?,

        Command::Filters => {
            println!("Diets:");
            for (value, label) in KNOWN_DIETS {
                println!("    {value:<12} {label}");
            }
            println!("Cuisines:");
            for (value, label) in KNOWN_CUISINES {
                println!("    {value:<12} {label}");
            }
        }

        command => {
            let app = App::from_config(&config, storage)?;
            run_command(&app, &messages, command).await?;
        }
    }

    Ok(())
}

async fn run_command(app: &App, messages: &Messages, command: Command) -> Result<()> {
    let store = app.store();

    match command {
        Command::Search {
            query,
            diet,
            cuisine,
        } => {
            let filters = SearchFilters::new(diet.as_deref(), cuisine.as_deref());
            let mut view = BrowseView::new(
                Arc::clone(app.source()),
                store.clone(),
                Arc::clone(app.sessions()),
            )?
            .with_query(query.join(" "), filters);
            view.mount().await;
            print!("{}", display::render_browse(&view, messages));
        }

        Command::Show { id } => print_page(&app.open(Route::Recipe(id)).await?, messages),

        Command::Saved => print_page(&app.open(Route::Saved).await?, messages),

        Command::Open { route } => print_page(&app.open(route.parse::<Route>()?).await?, messages),

        Command::Save { id } => {
            if store.get_session()?.is_none() {
                println!("{}", Notice::LoginToSave.text(messages));
                return Ok(());
            }
            let recipe = match app.source().get_detail(id).await {
                Ok(recipe) => recipe,
                Err(e) => {
                    println!("{}", Notice::DetailFailed.text(messages));
                    return Err(e);
                }
            };
            if store.add_favorite(&recipe)? {
                println!("Saved [{}] {}", recipe.id, recipe.title);
            } else {
                println!("[{}] {} is already saved", recipe.id, recipe.title);
            }
        }

        Command::Unsave { id } => {
            let mut view = SavedView::mount(store.clone())?;
            if view.remove(id) {
                log::info!("Removed recipe {}", id);
            }
            print!("{}", display::render_saved(&view, messages));
        }

        Command::Rate { id, stars } => match store.set_rating(id, stars) {
            Ok(rating) => println!("Rated [{}] {}", id, Rating::bar(Some(rating))),
            Err(AppError::Unauthenticated { .. }) => {
                println!("{}", Notice::LoginToRate.text(messages))
            }
            Err(e @ AppError::InvalidRating(_)) => println!("{e}"),
            Err(e) => return Err(e),
        },

        Command::Ratings => {
            let ratings = store.get_ratings()?;
            if ratings.is_empty() {
                println!("No ratings yet.");
            }
            for (id, rating) in ratings {
                println!("[{}] {}", id, Rating::bar(Some(rating)));
            }
        }

        Command::Login => {
            let user = app.sessions().sign_in()?;
            store.set_session(&user)?;
            println!("{}", recipe_book::views::welcome(&user, messages));
        }

        Command::Logout => {
            store.clear_session()?;
            println!("Logged out.");
        }

        Command::Whoami => match store.get_session()? {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not logged in."),
        },

        Command::Shell => run_shell(app, messages).await?,

        Command::Validate | Command::Info | Command::Filters => {}
    }

    Ok(())
}

fn print_page(page: &Page, messages: &Messages) {
    let text = match page {
        Page::Browse(view) => display::render_browse(view, messages),
        Page::Detail(view) => display::render_detail(view, messages),
        Page::Saved(view) => display::render_saved(view, messages),
    };
    print!("{text}");
}

fn print_info(storage: Arc<LocalStorage>) -> Result<()> {
    log::info!("Storage directory: {}", storage.root_dir().display());
    let store = recipe_book::services::FavoritesStore::new(storage as Arc<dyn KeyValueStore>);
    match store.get_session()? {
        Some(user) => log::info!("Session: {} <{}>", user.name, user.email),
        None => log::info!("Session: none"),
    }
    log::info!("Saved recipes: {}", store.get_favorites()?.len());
    log::info!("Ratings: {}", store.get_ratings()?.len());
    Ok(())
}

const SHELL_HELP: &str = "\
Pages:    home | saved | recipe <id> | open <path>
Search:   search [term] | diet <value|all> | cuisine <value|all> | clear
Actions:  save <id> | rate <id> <stars> | remove <id>
Session:  login | logout
Other:    show | help | quit";

/// Read commands from stdin and apply them to the mounted page.
async fn run_shell(app: &App, messages: &Messages) -> Result<()> {
    let mut page = app.open(Route::Home).await?;
    print_page(&page, messages);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", page.route());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        match (command, args) {
            ("quit" | "exit", _) => break,
            ("help", _) => {
                println!("{SHELL_HELP}");
                continue;
            }
            ("show", _) => {}
            ("home", _) => page = app.open(Route::Home).await?,
            ("saved", _) => page = app.open(Route::Saved).await?,
            ("open", [path]) => match path.parse::<Route>() {
                Ok(route) => page = app.open(route).await?,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            ("recipe", [id]) => {
                let Some(id) = parse_id(id) else { continue };
                if let Page::Detail(view) = &mut page {
                    view.load(id).await;
                } else {
                    page = app.open(Route::Recipe(id)).await?;
                }
            }
            (command, args) => {
                if !apply_page_command(&mut page, command, args).await? {
                    println!("Unknown command here. Type `help` for commands.");
                    continue;
                }
            }
        }
        print_page(&page, messages);
    }

    Ok(())
}

/// Commands that act on the current page. Returns `false` if not applicable.
async fn apply_page_command(page: &mut Page, command: &str, args: &[&str]) -> Result<bool> {
    match (page, command, args) {
        (Page::Browse(view), "search", term) => view.submit_search(term.join(" ")).await,
        (Page::Browse(view), "diet", [value]) => view.set_diet(filter_value(value)).await,
        (Page::Browse(view), "cuisine", [value]) => view.set_cuisine(filter_value(value)).await,
        (Page::Browse(view), "clear", _) => view.clear_filters().await,
        (Page::Browse(view), "save", [id]) => {
            if let Some(id) = parse_id(id) {
                view.dismiss_alert();
                view.save(id);
            }
        }
        (Page::Browse(view), "rate", [id, stars]) => {
            match (parse_id(id), stars.parse::<u8>()) {
                (Some(id), Ok(stars)) => {
                    view.dismiss_alert();
                    view.rate(id, stars);
                }
                _ => println!("usage: rate <id> <1-5>"),
            }
        }
        (Page::Browse(view), "login", _) => {
            view.login()?;
        }
        (Page::Browse(view), "logout", _) => view.logout()?,
        (Page::Saved(view), "remove", [id]) => {
            if let Some(id) = parse_id(id) {
                view.remove(id);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// `all` or empty clears a filter.
fn filter_value(value: &str) -> Option<&str> {
    (!value.eq_ignore_ascii_case("all")).then_some(value)
}

fn parse_id(value: &str) -> Option<RecipeId> {
    let id = value.parse().ok();
    if id.is_none() {
        println!("'{value}' is not a recipe id");
    }
    id
}
