//! Category listing command
//!
//! The category vocabulary is fixed per entry type; this prints it so
//! submit commands can be put together without opening the form.

use clap::Args;

use crate::error::{KakeiboError, KakeiboResult};
use crate::form::{categories_for, EntryType};

/// Arguments for the categories listing
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Limit the listing to one entry type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,
}

/// Handle the categories command
pub fn handle_category_command(args: CategoryArgs) -> KakeiboResult<()> {
    match &args.entry_type {
        Some(raw) => {
            let entry_type = EntryType::parse(raw).ok_or_else(|| {
                KakeiboError::config(format!(
                    "Unknown entry type '{}' (income, expense, top-up, deposit)",
                    raw
                ))
            })?;
            print!("{}", format_category_list(entry_type));
        }
        None => {
            let mut first = true;
            for &entry_type in EntryType::all() {
                if !first {
                    println!();
                }
                print!("{}", format_category_list(entry_type));
                first = false;
            }
        }
    }

    Ok(())
}

fn format_category_list(entry_type: EntryType) -> String {
    let mut out = format!("{} categories:\n", entry_type);
    for name in categories_for(Some(entry_type)) {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}
