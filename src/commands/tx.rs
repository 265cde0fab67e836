use super::now;
use crate::{
    db::{error::StoreError, transactions::Transactions},
    libs::{
        config::Config,
        ledger::{categories, format_amount, suggestions, LedgerSummary, NewTransaction, Transaction, TransactionType},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TxArgs {
    #[command(subcommand)]
    command: Option<TxCommand>,
}

#[derive(Debug, Subcommand)]
enum TxCommand {
    /// Add a transaction; missing fields are asked for
    Add {
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<TransactionType>,
        #[arg(short, long)]
        amount: Option<f64>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Use quick suggestion N (see `tx suggest`)
        #[arg(short, long, requires = "kind")]
        suggestion: Option<usize>,
    },
    /// List all transactions, newest first
    List,
    Edit {
        id: i64,
    },
    Delete {
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show quick-entry suggestions
    Suggest {
        #[arg(value_enum, default_value = "expense")]
        kind: TransactionType,
    },
}

pub fn cmd(args: TxArgs) -> Result<()> {
    let currency = Config::read().unwrap_or_default().ledger().currency_symbol;

    match args.command {
        Some(TxCommand::Add {
            kind,
            amount,
            description,
            category,
            suggestion,
        }) => handle_add(kind, amount, description, category, suggestion),
        Some(TxCommand::List) | None => handle_list(&currency),
        Some(TxCommand::Edit { id }) => handle_edit(id),
        Some(TxCommand::Delete { id, yes }) => handle_delete(id, yes),
        Some(TxCommand::Suggest { kind }) => {
            msg_print!(Message::SuggestionsHeader(kind.to_string()), true);
            View::suggestions(suggestions(kind), &currency);
            Ok(())
        }
    }
}

fn handle_add(
    kind: Option<TransactionType>,
    amount: Option<f64>,
    description: Option<String>,
    category: Option<String>,
    suggestion: Option<usize>,
) -> Result<()> {
    let kind = match kind {
        Some(kind) => kind,
        None => prompt_kind(None)?,
    };

    let new = match suggestion {
        Some(index) => {
            let picked = index
                .checked_sub(1)
                .and_then(|i| suggestions(kind).get(i))
                .ok_or_else(|| anyhow::anyhow!("no {} suggestion #{}", kind, index))?;
            NewTransaction::from_suggestion(kind, picked)
        }
        None => NewTransaction {
            kind,
            amount: match amount {
                Some(amount) => amount,
                None => prompt_amount(None)?,
            },
            description: match description {
                Some(description) => description,
                None => prompt_description(None)?,
            },
            category: match category {
                Some(category) => category,
                None => prompt_category(kind, None)?,
            },
        },
    };

    let transaction = Transactions::new()?.insert(&new, now())?;
    msg_success!(Message::TransactionAdded(transaction.id));
    Ok(())
}

fn handle_list(currency: &str) -> Result<()> {
    let transactions = Transactions::new()?.fetch_all()?;

    if transactions.is_empty() {
        msg_info!(Message::TransactionsEmpty);
        return Ok(());
    }

    let summary = LedgerSummary::compute(&transactions, now().date());
    msg_print!(Message::DailyTotal(format_amount(currency, summary.daily_total)));
    msg_print!(Message::WeeklyTotal(format_amount(currency, summary.weekly_total)));

    msg_print!(Message::TransactionsHeader, true);
    View::transactions(&transactions, currency);
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut store = Transactions::new()?;
    let Some(current) = store.fetch(id)? else {
        msg_error!(Message::TransactionNotFound(id));
        return Ok(());
    };

    let kind = prompt_kind(Some(current.kind))?;
    let category = if kind == current.kind { Some(current.category.as_str()) } else { None };
    let updated = Transaction {
        kind,
        amount: prompt_amount(Some(current.amount))?,
        description: prompt_description(Some(current.description.as_str()))?,
        category: prompt_category(kind, category)?,
        ..current.clone()
    };

    store.update(&updated)?;
    msg_success!(Message::TransactionUpdated(id));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTransaction(id).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match Transactions::new()?.delete(id) {
        Ok(()) => msg_success!(Message::TransactionDeleted(id)),
        Err(StoreError::TransactionNotFound(id)) => msg_error!(Message::TransactionNotFound(id)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn prompt_kind(current: Option<TransactionType>) -> Result<TransactionType> {
    let position = current
        .and_then(|kind| TransactionType::ALL.iter().position(|k| *k == kind))
        .unwrap_or(1);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTransactionType.to_string())
        .items(&TransactionType::ALL.iter().map(|kind| kind.label()).collect::<Vec<_>>())
        .default(position)
        .interact()?;
    Ok(TransactionType::ALL[selection])
}

fn prompt_amount(current: Option<f64>) -> Result<f64> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<f64>::with_theme(&theme).with_prompt(Message::PromptAmount.to_string());
    if let Some(amount) = current {
        input = input.default(amount);
    }
    Ok(input
        .validate_with(|amount: &f64| -> Result<(), &str> {
            if amount.is_finite() && *amount > 0.0 {
                Ok(())
            } else {
                Err("amount must be positive")
            }
        })
        .interact_text()?)
}

fn prompt_description(current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true);
    if let Some(description) = current {
        input = input.default(description.to_string());
    }
    Ok(input.interact_text()?)
}

fn prompt_category(kind: TransactionType, current: Option<&str>) -> Result<String> {
    let options = categories(kind);
    let position = current
        .and_then(|id| options.iter().position(|category| category.id == id))
        .unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategory.to_string())
        .items(&options.iter().map(|category| category.name).collect::<Vec<_>>())
        .default(position)
        .interact()?;
    Ok(options[selection].id.to_string())
}
