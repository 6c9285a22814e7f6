//! Command-line interface and the plain/JSON reports behind it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::card_tui::screens::card_detail::info_rows;
use crate::cards::{format, CardCatalog, PaymentSummary, StatementPeriod, StatementSummary};
use crate::mock_data;
use crate::models::{Card, Transaction};

#[derive(Parser)]
#[command(name = "cardhub")]
#[command(about = "Terminal card services: cards, status, PIN, limits and statements")]
#[command(version)]
pub struct Cli {
    /// Defaults to the interactive TUI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive terminal UI
    Tui,

    #[command(flatten)]
    Report(ReportCommand),
}

/// Commands that print and exit instead of taking over the terminal
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReportCommand {
    /// List all cards, credit first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one card with its derived payment figures
    Show {
        /// Card id as shown by `list`
        card_id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the mini-statement
    Statement {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl ReportCommand {
    /// Render the report against the mock card data
    pub fn render(&self) -> Result<String> {
        let catalog = CardCatalog::new(mock_data::cards()?);
        match self {
            ReportCommand::List { json } => card_list(&catalog, *json),
            ReportCommand::Show { card_id, json } => card_details(&catalog, card_id, *json)
                .with_context(|| format!("Cannot show card {}", card_id)),
            ReportCommand::Statement { json } => statement(
                mock_data::statement_period(),
                &mock_data::transactions(),
                *json,
            ),
        }
    }
}

#[derive(Serialize)]
struct CardReport<'a> {
    card: &'a Card,
    payment: PaymentSummary,
}

#[derive(Serialize)]
struct StatementReport<'a> {
    period: StatementPeriod,
    #[serde(flatten)]
    summary: StatementSummary,
    balance_due: i64,
    transactions: &'a [Transaction],
}

pub fn card_list(catalog: &CardCatalog, json: bool) -> Result<String> {
    let cards = catalog.ordered();
    if json {
        return Ok(serde_json::to_string_pretty(&cards)?);
    }

    let mut out = format!(
        "{:<4} {:<8} {:<11} {:<22} {:<8}\n",
        "ID", "Type", "Brand", "Number", "Expiry"
    );
    out.push_str(&"-".repeat(56));
    out.push('\n');
    for card in &cards {
        out.push_str(&format!(
            "{:<4} {:<8} {:<11} {:<22} {:<8}\n",
            card.id,
            card.category().as_str(),
            card.brand.as_str(),
            card.masked_number,
            card.expiry
        ));
    }
    out.push_str(&format!("\nTotal: {} cards", cards.len()));
    Ok(out)
}

pub fn card_details(catalog: &CardCatalog, card_id: &str, json: bool) -> Result<String> {
    let card = catalog.find(card_id)?;
    let payment = PaymentSummary::for_card(card);
    if json {
        return Ok(serde_json::to_string_pretty(&CardReport { card, payment })?);
    }

    let mut out = format!("{}\n\n", card.product_title());
    for (label, value) in info_rows(card, false) {
        out.push_str(&format!("{:<26} {}\n", label, value));
    }
    if card.credit_line().is_some() {
        out.push_str(&format!(
            "{:<26} {}\n",
            "Minimum Payment",
            format::amount(payment.minimum_payment)
        ));
    }
    Ok(out.trim_end().to_string())
}

pub fn statement(
    period: StatementPeriod,
    transactions: &[Transaction],
    json: bool,
) -> Result<String> {
    let summary = StatementSummary::from_transactions(transactions);
    if json {
        return Ok(serde_json::to_string_pretty(&StatementReport {
            period,
            summary,
            balance_due: summary.balance_due(),
            transactions,
        })?);
    }

    let mut out = format!(
        "Statement period: {}\nDue date: {}\n\n",
        period.display(),
        period.display_due()
    );
    for tx in transactions {
        out.push_str(&format!(
            "{:<11} {:<24} {:<10} {:>18}\n",
            tx.display_date(),
            tx.description,
            format!("{:?}", tx.state),
            format::signed_amount(tx.signed_amount())
        ));
    }
    out.push_str(&format!(
        "\nTotal spending: {}\nTotal refunds:  {}\nBalance due:    {}",
        format::amount(summary.total_debit),
        format::amount(summary.total_credit),
        format::signed_amount(summary.balance_due())
    ));
    Ok(out)
}
