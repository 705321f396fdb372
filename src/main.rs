use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use olib::config::{find_config_file, get_config, load_config, ConfigFile};
use olib::models::{
    Author, AuthorSearchInput, CoverKeyType, CoverSize, SearchInput, SearchSort, Work,
};
use olib::modules::CoverUrlBuilder;
use olib::OpenLibrary;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// olib - Query the Open Library catalogue from the command line
#[derive(Parser, Debug)]
#[command(name = "olib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search authors and works on Open Library and build cover URLs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One line per record
    Plain,
}

/// Cover resource
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CoverTarget {
    Author,
    Book,
}

/// Cover key scheme
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KeyTypeArg {
    Id,
    Isbn,
    Oclc,
    Lccn,
    Olid,
}

impl From<KeyTypeArg> for CoverKeyType {
    fn from(arg: KeyTypeArg) -> Self {
        match arg {
            KeyTypeArg::Id => CoverKeyType::Id,
            KeyTypeArg::Isbn => CoverKeyType::Isbn,
            KeyTypeArg::Oclc => CoverKeyType::Oclc,
            KeyTypeArg::Lccn => CoverKeyType::Lccn,
            KeyTypeArg::Olid => CoverKeyType::Olid,
        }
    }
}

/// Cover image size
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SizeArg {
    #[value(name = "S", alias = "s")]
    S,
    #[value(name = "M", alias = "m")]
    M,
    #[value(name = "L", alias = "l")]
    L,
}

impl From<SizeArg> for CoverSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::S => CoverSize::S,
            SizeArg::M => CoverSize::M,
            SizeArg::L => CoverSize::L,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search or look up authors
    #[command(subcommand, alias = "a")]
    Authors(AuthorCommands),

    /// Look up works
    #[command(subcommand, alias = "w")]
    Works(WorkCommands),

    /// Search works
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Results per page (1-1000)
        #[arg(long, short)]
        limit: Option<i64>,

        /// Number of results to skip
        #[arg(long)]
        offset: Option<i64>,

        /// Sort order, e.g. "new", "rating desc", "random.hourly"
        #[arg(long)]
        sort: Option<SearchSort>,
    },

    /// Print a cover image URL
    #[command(alias = "c")]
    Covers {
        /// Whose cover
        #[arg(value_enum)]
        target: CoverTarget,

        /// Cover key (id, ISBN, OCLC, LCCN or OLID)
        key: String,

        /// Key scheme
        #[arg(long, short, value_enum, default_value_t = KeyTypeArg::Id)]
        key_type: KeyTypeArg,

        /// Image size
        #[arg(long, short, value_enum, default_value_t = SizeArg::M)]
        size: SizeArg,
    },
}

#[derive(Subcommand, Debug)]
enum AuthorCommands {
    /// Search authors by name
    Search {
        /// Author name
        query: String,

        /// Results per page (1-1000)
        #[arg(long, short)]
        limit: Option<i64>,

        /// Number of results to skip
        #[arg(long)]
        offset: Option<i64>,
    },

    /// Fetch one author by key (e.g. OL34184A)
    Get {
        /// Author key
        key: String,
    },
}

#[derive(Subcommand, Debug)]
enum WorkCommands {
    /// Fetch one work by key (e.g. OL45804W)
    Get {
        /// Work key
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => get_config().context("Failed to read configuration from environment")?,
    };

    init_tracing(&cli, &config);

    if let Some(path) = &config_path {
        tracing::debug!("Using config file: {}", path.display());
    }

    let covers_base_url = config.client.covers_base_url.clone();
    let client = OpenLibrary::with_config(config.client).context("Invalid base_url")?;

    match cli.command {
        Commands::Authors(AuthorCommands::Search {
            query,
            limit,
            offset,
        }) => {
            let input = pagination(limit, offset)?;
            let page = client.authors().search(&query, Some(input)).await?;
            match cli.output {
                OutputFormat::Json => print_json(&page)?,
                OutputFormat::Plain => {
                    println!("{} authors found", page.num_found);
                    for author in &page.docs {
                        print_author_line(author);
                    }
                }
            }
        }
        Commands::Authors(AuthorCommands::Get { key }) => {
            let author = client.authors().get(&key).await?;
            match cli.output {
                OutputFormat::Json => print_json(&author)?,
                OutputFormat::Plain => print_author(&author),
            }
        }
        Commands::Works(WorkCommands::Get { key }) => {
            let work = client.works().get(&key).await?;
            match cli.output {
                OutputFormat::Json => print_json(&work)?,
                OutputFormat::Plain => print_work(&work),
            }
        }
        Commands::Search {
            query,
            limit,
            offset,
            sort,
        } => {
            let mut input = SearchInput::from(pagination(limit, offset)?);
            if let Some(sort) = sort {
                input = input.sort(sort);
            }

            let results = client.search(&query, Some(input)).await?;
            match cli.output {
                OutputFormat::Json => print_json(&results)?,
                OutputFormat::Plain => {
                    println!("{} works found", results.num_found);
                    for doc in &results.page.docs {
                        let authors = doc.author_name.as_deref().unwrap_or_default().join(", ");
                        match doc.first_publish_year {
                            Some(year) => {
                                println!("{}\t{} ({})\t{}", doc.key, doc.title, year, authors)
                            }
                            None => println!("{}\t{}\t{}", doc.key, doc.title, authors),
                        }
                    }
                }
            }
        }
        Commands::Covers {
            target,
            key,
            key_type,
            size,
        } => {
            let resource = match target {
                CoverTarget::Author => olib::models::CoverResource::Author,
                CoverTarget::Book => olib::models::CoverResource::Book,
            };
            let url = CoverUrlBuilder::with_base_url(covers_base_url, resource, key)
                .key_type(key_type.into())
                .size(size.into())
                .build()
                .context("A cover key is required")?;

            match cli.output {
                OutputFormat::Json => print_json(&serde_json::json!({ "url": url }))?,
                OutputFormat::Plain => println!("{}", url),
            }
        }
    }

    Ok(())
}

fn init_tracing(cli: &Cli, config: &ConfigFile) {
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("olib={}", env_filter)),
    );

    let json = config.logging.format.as_deref() == Some("json");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn pagination(limit: Option<i64>, offset: Option<i64>) -> Result<AuthorSearchInput> {
    let mut input = AuthorSearchInput::default();
    if let Some(limit) = limit {
        input = input.with_limit(limit)?;
    }
    if let Some(offset) = offset {
        input = input.with_offset(offset)?;
    }
    Ok(input)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_author_line(author: &Author) {
    let lifespan = match (&author.birth_date, &author.death_date) {
        (Some(birth), Some(death)) => format!(" ({} - {})", birth, death),
        (Some(birth), None) => format!(" (b. {})", birth),
        _ => String::new(),
    };
    println!("{}\t{}{}", author.key, author.name, lifespan);
}

fn print_author(author: &Author) {
    print_author_line(author);
    if let Some(bio) = &author.bio {
        println!();
        println!("{}", bio);
    }
    if let Some(work_count) = author.work_count {
        println!("Works: {}", work_count);
    }
    if let Some(links) = &author.links {
        for link in links {
            println!("{}: {}", link.title, link.url);
        }
    }
}

fn print_work(work: &Work) {
    println!("{}\t{}", work.key, work.title);
    if let Some(subtitle) = &work.subtitle {
        println!("{}", subtitle);
    }
    let authors = work.author_keys();
    if !authors.is_empty() {
        println!("Authors: {}", authors.join(", "));
    }
    if let Some(description) = &work.description {
        println!();
        println!("{}", description);
    }
    if let Some(modified) = work.last_modified.as_ref().and_then(|d| d.to_datetime()) {
        println!("Last modified: {}", modified);
    }
}
