//! Command-line arguments and their parsing

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "fintrack", version, about = "Keep budgets, cash flow and holdings in one place")]
pub struct Cli {
    /// TOML config file (defaults plus environment when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Print one page of records as JSON lines
    List {
        #[arg(value_enum)]
        entity: EntityKind,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Start of the date filter (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        /// End of the date filter (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
    },
    /// Create a record, or update it when an id is given
    Submit {
        #[arg(value_enum)]
        entity: EntityKind,
        /// Field values, e.g. `amount=1,234.56 categoryId=7`
        #[arg(value_parser = parse_field, required = true)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record by id
    Delete {
        #[arg(value_enum)]
        entity: EntityKind,
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Budgets,
    CashFlows,
    Holdings,
    Snapshots,
    Categories,
}

/// `NAME=VALUE`; the value may be empty or contain further `=`.
fn parse_field(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{arg}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn field_pairs() {
        assert_eq!(
            parse_field("amount=1,234.56").unwrap(),
            ("amount".to_string(), "1,234.56".to_string())
        );
        assert_eq!(
            parse_field("description=a=b").unwrap(),
            ("description".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_field("note=").unwrap(), ("note".to_string(), String::new()));
        assert!(parse_field("amount").is_err());
        assert!(parse_field("=5").is_err());
    }

    #[test]
    fn list_with_range() {
        let cli = Cli::try_parse_from([
            "fintrack", "list", "cash-flows", "--page", "2", "--from", "2024-01-01", "--to",
            "2024-01-31",
        ])
        .unwrap();
        let Cmd::List { entity, page, from, to } = cli.cmd else {
            panic!("expected list");
        };
        assert_eq!(entity, EntityKind::CashFlows);
        assert_eq!(page, 2);
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn range_needs_both_ends() {
        assert!(Cli::try_parse_from(["fintrack", "list", "budgets", "--from", "2024-01-01"]).is_err());
    }

    #[test]
    fn submit_needs_fields() {
        assert!(Cli::try_parse_from(["fintrack", "submit", "budgets"]).is_err());
        let cli = Cli::try_parse_from([
            "fintrack", "--config", "fintrack.toml", "submit", "budgets", "amount=5", "categoryId=2",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("fintrack.toml")));
        let Cmd::Submit { fields, .. } = cli.cmd else {
            panic!("expected submit");
        };
        assert_eq!(fields.len(), 2);
    }
}
