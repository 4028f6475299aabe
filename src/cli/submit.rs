//! Submit CLI command
//!
//! One-shot submission without opening the form: build a draft from flags,
//! run the same validation the form runs, and POST. `--dry-run` stops after
//! encoding and prints what would have been sent.

use clap::Args;

use crate::config::Settings;
use crate::error::{KakeiboError, KakeiboResult};
use crate::form::{validate, EntryDraft, EntryType, PaymentMethod};
use crate::submit::Submitter;

/// Arguments for submitting one entry from the command line
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Entry date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Entry type: income, expense, top-up or deposit
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// Category; must belong to the entry type (see 'kakeibo categories')
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-form note
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,

    /// Amount in yen, must be positive
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// Payment method: cash, credit-card, e-money, bank-transfer or other
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Mark a food expense as eating out
    #[arg(long)]
    pub eating_out: bool,

    /// Print the encoded form pairs instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

/// Build a draft from the parsed arguments.
///
/// Unknown type and payment labels fail here with the accepted spellings;
/// everything else is left for validation so all problems print together.
fn build_draft(args: &SubmitArgs) -> KakeiboResult<EntryDraft> {
    let mut draft = EntryDraft::new();

    if let Some(date) = &args.date {
        draft.date = date.clone();
    }

    if let Some(raw) = &args.entry_type {
        let entry_type = EntryType::parse(raw).ok_or_else(|| {
            KakeiboError::config(format!(
                "Unknown entry type '{}' (income, expense, top-up, deposit)",
                raw
            ))
        })?;
        draft.entry_type = Some(entry_type);
    }

    if let Some(category) = &args.category {
        draft.category = category.clone();
    }

    draft.description = args.description.clone();
    draft.amount = args.amount;

    if let Some(raw) = &args.payment {
        let method = PaymentMethod::parse(raw).ok_or_else(|| {
            KakeiboError::config(format!(
                "Unknown payment method '{}' (cash, credit-card, e-money, bank-transfer, other)",
                raw
            ))
        })?;
        draft.payment_method = Some(method);
    }

    // The flag only applies to food, same as in the form
    draft.set_eating_out(args.eating_out);

    Ok(draft)
}

/// Handle the submit command
pub fn handle_submit_command(settings: &Settings, args: SubmitArgs) -> KakeiboResult<()> {
    let draft = build_draft(&args)?;

    let errors = validate(&draft);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let submitter = Submitter::new(settings);

    if args.dry_run {
        println!("POST {}", submitter.endpoint_url());
        for (key, value) in submitter.payload(&draft) {
            println!("  {}={}", key, value);
        }
        println!("(dry run, nothing sent)");
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| KakeiboError::Io(format!("Failed to start async runtime: {}", e)))?;
    runtime.block_on(submitter.submit(&draft))?;

    println!("Entry recorded.");
    Ok(())
}
