//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_account_id, validate_delimiter, DEFAULT_DELIMITER};
use crate::error::{HarvesterError, Result};
use crate::export::{save_delimited, save_xml};
use crate::harvester::ReviewHarvester;
use crate::types::{ResultCap, Review, ReviewQuery, SortDirection, SortKey};

/// Review Harvester - Collect customer reviews for an account from Trustpilot.
#[derive(Parser)]
#[command(name = "review-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the reviews of an account and print or export them.
    Fetch {
        /// Account identifier (e.g., www.example.com)
        account_id: String,

        /// Number of reviews to collect (-1 for all)
        #[arg(short = 'n', long, default_value_t = ResultCap::UNLIMITED_COUNT, allow_negative_numbers = true)]
        count: i64,

        /// Sort key: time or rating
        #[arg(long, default_value = "time")]
        order_by: SortKey,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        order: SortDirection,

        /// Append reviews to this delimited file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Field delimiter for the delimited file
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        separator: char,

        /// Write reviews to this XML file
        #[arg(long)]
        xml: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            account_id,
            count,
            order_by,
            order,
            csv,
            separator,
            xml,
        } => {
            let query = ReviewQuery::new(account_id)
                .with_cap(ResultCap::from_count(count)?)
                .with_order(order_by, order);
            fetch_command(query, csv.as_deref(), separator, xml.as_deref())
        }
    }
}

/// Check that the directory an output file goes into exists.
fn validate_output_parent(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    if !parent.is_dir() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }
    Ok(())
}

/// Execute the fetch command.
fn fetch_command(
    query: ReviewQuery,
    csv: Option<&Path>,
    separator: char,
    xml: Option<&Path>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    validate_account_id(&query.account_id)?;
    if let Some(path) = csv {
        validate_delimiter(separator)?;
        validate_output_parent(path)?;
    }
    if let Some(path) = xml {
        validate_output_parent(path)?;
    }

    let harvester = ReviewHarvester::from_query(query)?;
    let query = harvester.query();
    eprintln!(
        "{} reviews for {} ordered by {} {}",
        style("Fetching").bold(),
        style(&query.account_id).cyan(),
        style(query.sort_key).green(),
        style(query.direction).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Fetching review pages...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let reviews = match harvester.get_reviews() {
        Ok(reviews) => reviews,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();
    eprintln!("  Reviews: {}", style(reviews.len()).green());

    if let Some(path) = csv {
        save_delimited(&reviews, path, separator)?;
        eprintln!("{} {}", style("Appended to:").green().bold(), path.display());
    }
    if let Some(path) = xml {
        save_xml(&reviews, path)?;
        eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
    }
    if csv.is_none() && xml.is_none() {
        print_reviews(&reviews);
    }

    Ok(())
}

/// Print a short listing of reviews to stdout.
fn print_reviews(reviews: &[Review]) {
    for review in reviews {
        println!(
            "{} {} {}",
            style(format!("[{}]", review.rating)).yellow(),
            style(&review.time).dim(),
            style(&review.consumer).bold()
        );
        if !review.title.is_empty() {
            println!("  {}", review.title);
        }
        if !review.content.is_empty() {
            println!("  {}", review.content.replace('\n', "\n  "));
        }
    }
}
