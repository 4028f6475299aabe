use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo::cli::{handle_category_command, handle_submit_command, CategoryArgs, SubmitArgs};
use kakeibo::config::{KakeiboPaths, Settings};
use kakeibo::form::Field;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Terminal entry form for a household account book",
    long_about = "kakeibo-form is a terminal entry form for a household account \
                  book. One entry at a time: date, type, category, amount and \
                  payment method are validated together, then posted url-encoded \
                  to the configured form collector."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one entry without opening the form
    Submit(SubmitArgs),

    /// List the category vocabulary
    #[command(alias = "cats")]
    Categories(CategoryArgs),

    /// Create the config directory and write the default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Submit(args)) => {
            handle_submit_command(&settings, args)?;
        }
        Some(Commands::Categories(args)) => {
            handle_category_command(args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing kakeibo-form at: {}", paths.config_dir().display());
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
            println!();
            println!("Edit that file to point at your own collector:");
            println!("  endpoint_url   where entries are POSTed");
            println!("  field_ids      the collector's name for each form field");
            println!();
            println!("Run 'kakeibo' to open the entry form.");
        }
        Some(Commands::Config) => {
            println!("kakeibo-form configuration");
            println!("==========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Endpoint URL: {}", settings.endpoint_url);
            println!("  Field ids:");
            for &field in Field::all() {
                println!("    {:<16} {}", field, settings.field_ids.id_for(field));
            }
        }
        None => {
            kakeibo::tui::run_form(&settings)?;
        }
    }

    Ok(())
}
