mod config;
mod io;
mod meal_cmds;
mod menu;
mod plan_cmds;
mod shopping_cmd;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use pantry_core::catalog::Catalog;
use pantry_core::plan::PlanStore;
use pantry_db::pool;

use config::PantryConfig;
use io::StdinLineIo;

#[derive(Parser)]
#[command(name = "pantry", about = "Weekly meal planner with a durable catalog")]
struct Cli {
    /// Database URL (overrides PANTRY_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a pantry config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/pantry")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create the pantry database and apply migrations
    DbInit,
    /// Add a meal to the catalog (prompts for anything omitted)
    Add {
        /// Meal category: breakfast, lunch, or dinner
        #[arg(long)]
        category: Option<String>,
        /// Meal name (letters and spaces only)
        #[arg(long)]
        name: Option<String>,
        /// Comma-separated ingredients, e.g. "oats, milk, honey"
        #[arg(long)]
        ingredients: Option<String>,
    },
    /// Print the meals of one category
    Show {
        /// Category to print (prompted for when omitted)
        category: Option<String>,
    },
    /// Plan the week: one meal per day and category
    Plan,
    /// Print the stored weekly plan
    ListPlan,
    /// Write the shopping list for the stored plan to a file
    Save {
        /// Output filename (prompted for when omitted)
        filename: Option<String>,
    },
    /// Interactive session (add, show, plan, list plan, save, exit)
    Menu,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Execute the `pantry init` command: write the config file.
fn cmd_init(db_url: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_owned(),
        },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!();
    println!("Next: run `pantry db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `pantry db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = PantryConfig::resolve(cli_db_url)?;

    println!("Initializing pantry database...");

    pool::ensure_database_exists(&resolved.db_config).await?;

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;

    let counts = pool::table_counts(&db_pool).await?;
    println!("Database ready. Tables:");
    for (table, count) in &counts {
        println!("  {table}: {count} rows");
    }

    db_pool.close().await;

    println!("pantry db-init complete.");
    Ok(())
}

/// Dispatch a database-backed command.
async fn run_command(command: Commands, cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = PantryConfig::resolve(cli_db_url)?;
    let db_pool = pool::create_pool(&resolved.db_config).await?;

    let mut catalog = Catalog::load(db_pool.clone()).await?;
    let store = PlanStore::new(db_pool.clone());
    let mut io = StdinLineIo;

    let result = match command {
        Commands::Add {
            category,
            name,
            ingredients,
        } => meal_cmds::cmd_add(&mut catalog, &mut io, category, name, ingredients).await,
        Commands::Show { category } => meal_cmds::cmd_show(&catalog, &mut io, category).await,
        Commands::Plan => plan_cmds::cmd_plan(&catalog, &store, &mut io).await,
        Commands::ListPlan => plan_cmds::cmd_list_plan(&catalog, &store, &mut io).await,
        Commands::Save { filename } => {
            shopping_cmd::cmd_save(&catalog, &store, &mut io, filename).await
        }
        Commands::Menu => menu::cmd_menu(&mut catalog, &store, &mut io).await,
        // Handled in main before the pool is created.
        Commands::Init { .. } | Commands::DbInit | Commands::Completions { .. } => {
            unreachable!("command does not need a database")
        }
    };

    db_pool.close().await;
    result
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { ref db_url, force } => cmd_init(db_url, force),
        Commands::DbInit => cmd_db_init(cli.database_url.as_deref()).await,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "pantry",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        command => run_command(command, cli.database_url.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
