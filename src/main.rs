use clap::{Parser, Subcommand};
use pages_list::navigation::Navigation;
use pages_list::types::Page;
use pages_list::{config, output, tree};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pages-list")]
#[command(about = "Nested navigation lists from flat CMS page collections")]
#[command(long_about = "\
Nested navigation lists from flat CMS page collections

Pages are read from a JSON file: an array of objects with slash-delimited
\"id\" paths (a trailing \"index\" segment collapses onto its directory),
plus \"url\", \"title\" and \"hidden\". Shared path prefixes become nested
list levels; path segments no page names become inert directory labels.

  [
    { \"id\": \"docs/index\",   \"url\": \"/docs/\",         \"title\": \"Documentation\" },
    { \"id\": \"docs/install\", \"url\": \"/docs/install/\", \"title\": \"Install\" },
    { \"id\": \"drafts/wip\",   \"url\": \"/drafts/wip/\",   \"hidden\": true }
  ]

An optional nav.toml in the config directory provides base_url (stripped
off page urls) and hide_pages (paths pruned from every render).")]
#[command(version)]
struct Cli {
    /// JSON file with the flat page collection
    #[arg(long, default_value = "pages.json", global = true)]
    pages: PathBuf,

    /// Directory containing nav.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the navigation list as HTML
    Render {
        /// Id or url of the page being served (marks is-current/is-active)
        #[arg(long)]
        current: Option<String>,

        /// Render only the subtrees under these paths
        #[arg(long, conflicts_with = "exclude")]
        only: Vec<String>,

        /// Drop the subtrees under these paths
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Print the built tree as an indented outline
    Tree {
        /// Dump the tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
    /// Report page and node counts, flag degenerate inputs
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(&cli.config_dir)?;
    let content = std::fs::read_to_string(&cli.pages)?;
    let pages: Vec<Page> = serde_json::from_str(&content)?;

    match cli.command {
        Command::Render {
            current,
            only,
            exclude,
        } => {
            let nav = Navigation::new(&pages, current.as_deref(), &config);
            let html = if only.is_empty() {
                nav.render_exclude(&exclude)
            } else {
                nav.render_only(&only)
            };
            println!("{html}");
        }
        Command::Tree { json } => {
            let nav = Navigation::new(&pages, None, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(nav.tree())?);
            } else {
                output::print_tree(nav.tree());
            }
        }
        Command::Check => {
            let built = tree::build(&pages);
            output::print_check(&pages, &built);
        }
    }

    Ok(())
}
