//! Command line front-end printing one page of leads as JSON.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use pushkind_leads::dto::leads::LeadsQuery;
use pushkind_leads::models::config::AppConfig;
use pushkind_leads::query::{DEFAULT_ITEMS_PER_PAGE, SortDirection};
use pushkind_leads::repository::open_lead_file;
use pushkind_leads::services::leads::load_leads_page;

/// Filter, sort and paginate a lead list
#[derive(Parser, Debug)]
#[command(name = "pushkind-leads")]
#[command(version)]
struct Args {
    /// Lead file (.json or .csv); defaults to `leads_path` from the config
    #[arg(long)]
    data: Option<PathBuf>,

    /// Case-insensitive search over name, email and company; literal on phone
    #[arg(short, long)]
    search: Option<String>,

    /// Only show leads from this source (repeatable)
    #[arg(long = "source")]
    sources: Vec<String>,

    /// Only show leads carrying this tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Sort column: name, score or created_at
    #[arg(long)]
    sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    direction: Option<SortDirection>,

    /// Page to show, starting at 1
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn load_config() -> Result<AppConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .set_default("items_per_page", DEFAULT_ITEMS_PER_PAGE as i64)?
        .set_default("leads_path", "data/leads.json")?
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default").required(false))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<AppConfig>()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&app_config.leads_path));
    let repo = match open_lead_file(&path) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Cannot open {}: {}", path.display(), err);
            std::process::exit(1);
        }
    };

    let query = LeadsQuery {
        search: args.search,
        sources: args.sources,
        tags: args.tags,
        sort: args.sort,
        direction: args.direction,
        page: args.page.map(|p| p as usize),
    };

    let page = match load_leads_page(&*repo, &app_config, query) {
        Ok(page) => page,
        Err(err) => {
            log::error!("Failed to load leads page: {}", err);
            std::process::exit(1);
        }
    };

    if page.page_out_of_range {
        log::warn!(
            "Page {} is past the last page ({})",
            page.leads.page,
            page.total_pages
        );
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&page)
    } else {
        serde_json::to_string(&page)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize page: {}", err);
            std::process::exit(1);
        }
    }
}
