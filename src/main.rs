use clap::{ArgGroup, Parser, Subcommand};
use dashuka::{config, output, routes, urls};
use std::path::PathBuf;

/// Flags for the `url` command.
///
/// Exactly one target is required: a literal route-relative path, or one of
/// the typed route selectors. Typed selectors go through the same builders
/// the site's templates use, so their output is the deployed URL verbatim.
#[derive(clap::Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["path", "home", "category", "album"]),
))]
struct UrlArgs {
    /// Route-relative path to resolve (e.g. /album/paris-2024)
    path: Option<String>,

    /// Strip the base path from PATH instead of prepending it
    #[arg(long, requires = "path", conflicts_with = "full")]
    strip: bool,

    /// Resolve the home page URL
    #[arg(long)]
    home: bool,

    /// Resolve a category page URL for the given id
    #[arg(long, value_name = "ID")]
    category: Option<String>,

    /// Resolve an album page URL for the given id
    #[arg(long, value_name = "ID")]
    album: Option<String>,

    /// Prepend the site origin, producing an absolute URL
    #[arg(long)]
    full: bool,
}

#[derive(Parser)]
#[command(name = "dashuka")]
#[command(about = "Config and URL tooling for the Dashuka photo portfolio")]
#[command(long_about = "\
Config and URL tooling for the Dashuka photo portfolio

The deployed site lives under a sub-path of its host
(https://scamp34.github.io/Dashuka), so every internal link has to carry
the /Dashuka prefix and every runtime pathname has to shed it again before
it can be compared against a route. This tool loads the site's config.toml
and answers those URL questions with the exact strings the site emits.

Examples:

  dashuka check                            Validate config.toml, show effective settings
  dashuka gen-config > config.toml         Write a documented stock config
  dashuka url /about                       /Dashuka/about
  dashuka url --strip /Dashuka/about       /about
  dashuka url --album paris-2024           /Dashuka/album/paris-2024
  dashuka url --home --full                https://scamp34.github.io/Dashuka/
  dashuka route /Dashuka/category/mist/    category mist

Run 'dashuka gen-config' to see every configuration option documented.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate config.toml and print the effective settings
    Check {
        /// Print the effective config as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Resolve a URL the way the site's templates do
    Url(UrlArgs),
    /// Show which page a browser pathname lands on
    Route {
        /// Observed pathname, base path included (e.g. /Dashuka/album/42)
        observed: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { json } => {
            let config = config::load_config(&cli.dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("==> Checking {}", cli.dir.join("config.toml").display());
                output::print_check_output(&config);
                println!("==> Config is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Url(args) => {
            let config = config::load_config(&cli.dir)?;
            let resolver = config.resolver();
            let resolved = resolve_url(&args, &resolver);
            if args.full {
                println!("{}", urls::full_url(config.site_origin(), &resolved));
            } else {
                println!("{}", resolved);
            }
        }
        Command::Route { observed } => {
            let config = config::load_config(&cli.dir)?;
            let resolver = config.resolver();
            match routes::active_route(&resolver, &observed) {
                Some(routes::Route::Home) => println!("home"),
                Some(routes::Route::Category(id)) => println!("category {id}"),
                Some(routes::Route::Album(id)) => println!("album {id}"),
                None => println!("(none)"),
            }
        }
    }

    Ok(())
}

/// Resolve the `url` command's target to a site-relative URL.
fn resolve_url(args: &UrlArgs, resolver: &urls::UrlResolver) -> String {
    if args.home {
        resolver.home_url()
    } else if let Some(id) = &args.category {
        resolver.category_url(id)
    } else if let Some(id) = &args.album {
        resolver.album_url(id)
    } else {
        let path = args.path.as_deref().unwrap_or_default();
        if args.strip {
            resolver.strip_base(path).to_string()
        } else {
            resolver.with_base(path)
        }
    }
}
