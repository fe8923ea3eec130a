use clap::{Parser, Subcommand};

use country_explorer::core::{DEFAULT_ENDPOINT, ExplorerConfig, format, load_dataset};
use country_explorer::{Category, Country, Explorer, Intent};

#[derive(Parser)]
#[command(name = "country-explorer")]
#[command(about = "Browse country data and keep a local list of people")]
struct Cli {
    /// Country service URL, including the field projection
    #[arg(long, env = "COUNTRY_EXPLORER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the graphical explorer (default)
    #[cfg(feature = "gui")]
    Gui,

    /// Print the countries matching a search
    List {
        /// Case-insensitive part of the country name
        #[arg(default_value = "")]
        query: String,

        /// Continent to restrict to, e.g. "Europe" or "south-america"
        #[arg(short, long, default_value = "All")]
        region: Category,
    },

    /// Print the details of one country
    Show {
        /// Two-letter country code (cca2)
        code: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the startup load to completion on a fresh runtime.
fn load_explorer(config: &ExplorerConfig) -> anyhow::Result<Explorer> {
    let runtime = tokio::runtime::Runtime::new()?;
    let source = config.source();
    let mut explorer = Explorer::new();
    explorer.finish_load(runtime.block_on(load_dataset(&source)));
    Ok(explorer)
}

fn print_card(country: &Country) {
    println!("{}", country.common_name());
    println!("  Capital:   {}", format::capital(country));
    println!("  Currency:  {}", format::currency_code(country.currencies.as_ref()));
    println!("  Continent: {}", country.region);
    println!("  Languages: {}", format::languages_short(country.languages.as_ref()));
}

fn print_details(country: &Country) {
    println!("=== {} ===", country.common_name());
    println!("Official Name: {}", country.official_name());
    println!("Flag:          {}", country.flag_url());
    println!("Capital:       {}", format::capital(country));
    println!("Region:        {}", format::region_line(country));
    println!("Population:    {}", format::population(country.population));
    println!("Area:          {}", format::area(country.area));
    println!("Currencies:    {}", format::currency_detail(country.currencies.as_ref()));
    println!("Languages:     {}", format::languages_full(country.languages.as_ref()));
}

fn list(explorer: &mut Explorer, query: String, region: Category) {
    explorer.handle(Intent::SetQuery(query));
    explorer.handle(Intent::SelectCategory(region));

    let page = explorer.page();
    println!("{}\n", page.heading());
    for country in &page.shown {
        print_card(country);
    }
    if let Some(notice) = page.overflow_notice() {
        println!("\n{notice}");
    }
    if page.is_empty() {
        println!("No countries found matching your criteria.");
    }
}

fn show(explorer: &mut Explorer, code: &str) -> anyhow::Result<()> {
    explorer.handle(Intent::OpenDetails(code.to_uppercase()));
    let country = explorer
        .selected_country()
        .ok_or_else(|| anyhow::anyhow!("No country with code {code}"))?;
    print_details(country);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = ExplorerConfig::default().with_endpoint(args.endpoint);

    match args.command {
        #[cfg(feature = "gui")]
        None | Some(Command::Gui) => country_explorer::gui::run(config)
            .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))?,
        #[cfg(not(feature = "gui"))]
        None => list(&mut load_explorer(&config)?, String::new(), Category::All),
        Some(Command::List { query, region }) => {
            list(&mut load_explorer(&config)?, query, region)
        }
        Some(Command::Show { code }) => show(&mut load_explorer(&config)?, &code)?,
    }

    Ok(())
}
