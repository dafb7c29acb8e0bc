//! Cellsense CLI - inspect cell accessibility facts over a grid fixture

mod fixture;

use anyhow::{Context, Result};
use cellsense_core::{AppearanceReport, CellFacts, ElementId, FactOptions, MemoryProvider};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::fixture::GridFixture;

#[derive(Parser)]
#[command(name = "cellsense")]
#[command(
    author,
    version,
    about = "Derive spoken accessibility facts for spreadsheet cells"
)]
struct Cli {
    /// JSON grid fixture
    #[arg(short, long)]
    fixture: PathBuf,

    /// Extra character stripped from addresses (repeatable; double quotes always are)
    #[arg(long = "quote-char")]
    quote_chars: Vec<char>,

    /// Maximum table wrappers walked when looking for the sheet
    #[arg(long, default_value = "8")]
    max_grid_ascent: usize,

    /// Maximum characters read when checking the next cell for content
    #[arg(long)]
    text_limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cell's accessible value
    Value {
        /// Cell address as reported by the provider
        address: String,
    },

    /// Print the cell's accessible description
    Description { address: String },

    /// Print the cell's state set
    States { address: String },

    /// Print the "where am I" coordinate text
    #[command(alias = "where")]
    Coords { address: String },

    /// Print the cell appearance report
    Appearance { address: String },

    /// Print every fact for the cell
    All { address: String },
}

impl Cli {
    fn fact_options(&self) -> FactOptions {
        FactOptions {
            quote_chars: self.quote_chars.clone(),
            max_grid_ascent: self.max_grid_ascent,
            text_length_limit: self.text_limit,
        }
    }
}

impl Commands {
    fn address(&self) -> &str {
        match self {
            Commands::Value { address }
            | Commands::Description { address }
            | Commands::States { address }
            | Commands::Coords { address }
            | Commands::Appearance { address }
            | Commands::All { address } => address,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fixture = GridFixture::load(&cli.fixture)?;
    let grid = fixture
        .build()
        .with_context(|| format!("Invalid fixture '{}'", cli.fixture.display()))?;

    let options = cli.fact_options();

    let address = cli.command.address();
    let cell = grid
        .cell(address)
        .with_context(|| format!("Cell '{}' not found in fixture", address))?;
    let facts = CellFacts::with_options(&grid, options);

    match &cli.command {
        Commands::Value { .. } => println!("{}", or_none(facts.value(&cell))),
        Commands::Description { .. } => println!("{}", or_none(facts.description(&cell))),
        Commands::States { .. } => println!("{}", facts.states(&cell)),
        Commands::Coords { .. } => println!("{}", facts.coordinate_text(&cell)),
        Commands::Appearance { .. } => show_appearance(&facts, &cell),
        Commands::All { .. } => show_all(&facts, &cell),
    }

    Ok(())
}

fn or_none(text: Option<String>) -> String {
    text.unwrap_or_else(|| "(none)".to_string())
}

fn show_appearance(facts: &CellFacts<'_, MemoryProvider>, cell: &ElementId) {
    let report = facts.appearance(cell);
    if report.is_empty() {
        eprintln!("Warning: provider reports no appearance properties for this cell");
        return;
    }
    println!("{}", AppearanceReport::TITLE);
    println!("{}", report);
}

fn show_all(facts: &CellFacts<'_, MemoryProvider>, cell: &ElementId) {
    println!("Coordinates: {}", facts.coordinate_text(cell));
    println!("Value: {}", or_none(facts.value(cell)));
    println!("Description: {}", or_none(facts.description(cell)));
    println!("States: {}", facts.states(cell));
    println!();
    show_appearance(facts, cell);
}
