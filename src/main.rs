use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrina::{config, content, generate, output, style};

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(about = "Static site generator for bilingual product showcases")]
#[command(long_about = "\
Static site generator for bilingual product showcases

Two JSON files are the data source: content.json holds everything the pages
say (in every language), style.json holds the color theme. The output is
plain HTML that runs on any file server.

Source directory structure:

  content/
  ├── content.json                 # Bilingual content (required)
  ├── style.json                   # Color tokens (optional, stock colors otherwise)
  ├── config.toml                  # Site config (optional)
  ├── about.md                     # Optional markdown page → /about.html
  └── assets/                      # Images, logo, favicon → copied to output root
      ├── logo.webp
      └── images/
          └── torta-de-chocolate.webp

Generated site:

  dist/
  ├── index.html                   # Home page (Spanish, default language)
  ├── en/index.html                # Home page (English)
  ├── instagram/index.html         # Instagram embed page
  ├── about.html                   # Only when about.md exists
  └── ...                          # Copied assets

Selection state lives in the URL: ?category=<slug> filters the gallery and
?product=<slug> opens a product modal. Unknown slugs fall back silently.

Run 'vitrina gen-content', 'gen-style' and 'gen-config' for documented
starting points.")]
#[command(version)]
struct Cli {
    /// Source directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site from the source directory
    Build,
    /// Validate content without building and print a content inventory
    Check,
    /// Print a stock content.json with all keys populated
    GenContent,
    /// Print a stock style.json with all color tokens
    GenStyle,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = content::load_content(&cli.source)?;
            style::load_style(&cli.source)?;
            config::load_config(&cli.source)?;
            output::print_check_output(&content);
            println!("==> Content is valid");
        }
        Command::GenContent => {
            print!("{}", content::stock_content_json());
        }
        Command::GenStyle => {
            println!("{}", style::stock_style_json());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
