use clap::{Parser, ValueEnum};
use log::debug;
use recipe_browser::{http_browser, render, Action, BrowserConfig, FilterForm, NavAction};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "recipe-browser")]
#[command(about = "Browse a recipe search API page by page", long_about = None)]
struct Cli {
    /// API host, e.g. http://localhost:8080 (overrides configuration)
    #[arg(long)]
    base_url: Option<String>,

    /// Title contains
    #[arg(long, default_value = "")]
    title: String,

    /// Cuisine equals
    #[arg(long, default_value = "")]
    cuisine: String,

    /// Minimum rating
    #[arg(long, default_value = "")]
    rating_min: String,

    /// Maximum rating
    #[arg(long, default_value = "")]
    rating_max: String,

    /// Maximum total time in minutes
    #[arg(long, default_value = "")]
    total_time_max: String,

    /// Maximum calories
    #[arg(long, default_value = "")]
    calories_max: String,

    /// Recipes per page, one of the configured page sizes
    #[arg(short, long)]
    limit: Option<u32>,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Show the full recipe for the card with this index
    #[arg(short, long)]
    detail: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn form(&self) -> FilterForm {
        FilterForm {
            title: self.title.clone(),
            cuisine: self.cuisine.clone(),
            rating_min: self.rating_min.clone(),
            rating_max: self.rating_max.clone(),
            total_time_max: self.total_time_max.clone(),
            calories_max: self.calories_max.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(limit) = cli.limit {
        config.default_page_size = limit;
    }
    debug!("{:?}", config);

    let mut browser = http_browser(config)?;

    let form = cli.form();
    if form.normalize().is_empty() {
        browser.load().await;
    } else {
        browser.perform(Action::Search(form)).await?;
    }

    if cli.page > 1 && browser.screen().error.is_none() {
        browser
            .perform(Action::Navigate(NavAction::To(cli.page)))
            .await?;
    }

    if let Some(index) = cli.detail {
        if browser.screen().results.is_some() {
            browser.open_detail(index)?;
        }
    }

    let output = match cli.format {
        OutputFormat::Text => render::text::screen(browser.screen()),
        OutputFormat::Html => render::html::screen(browser.screen()),
    };
    print!("{}", output);

    match &browser.screen().error {
        Some(message) => Err(message.clone().into()),
        None => Ok(()),
    }
}
