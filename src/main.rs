use clap::{Parser, ValueEnum};

use shakesearch::client::SearchClient;
use shakesearch::config::CONFIG;
use shakesearch::controller::FormController;
use shakesearch::form::FormData;
use shakesearch::models::fields;
use shakesearch::table::TableBody;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

/// Submit one search to the backend and print the results table.
#[derive(Debug, Parser)]
#[command(name = "shakesearch", version)]
struct Args {
    /// Text to search for
    #[arg(short, long)]
    query: String,

    /// Page number, passed through as typed
    #[arg(short, long)]
    page: Option<String>,

    /// Results per page, passed through as typed
    #[arg(short, long)]
    limit: Option<String>,

    /// Backend address, overrides SEARCH_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Column width for text output
    #[arg(long, default_value_t = 100)]
    width: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = match args.base_url {
        Some(base_url) => SearchClient::new(base_url),
        None => SearchClient::from_config(),
    };
    tracing::info!("using search backend at {}", client.base_url());

    let form = FormData::new()
        .with_field(fields::QUERY, args.query)
        .with_field(fields::PAGE, args.page.unwrap_or_else(|| CONFIG.default_page.clone()))
        .with_field(fields::LIMIT, args.limit.unwrap_or_else(|| CONFIG.default_limit.clone()));

    let mut controller = FormController::new(client, TableBody::default());
    controller.on_submit(&form).await?;

    let table = controller.into_table();
    let out = match args.format {
        Format::Html => table.to_html()?,
        Format::Text => table.to_text(args.width)?,
    };
    println!("{out}");
    Ok(())
}
