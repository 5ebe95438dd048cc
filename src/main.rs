//! Nibras command-line front end
//!
//! Stands in for the GUI shell: runs the full pipeline for one term and
//! optionally exports the result as HTML or shows the print preview.

use anyhow::Result;
use clap::Parser;
use nibras_lib::{
    export, preview, run_query, LexiconStore, NibrasError, PageGeometry, ResultTable, SearchMode,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nibras", about = "French/Arabic dictionary lookup")]
struct Args {
    /// Term to look up
    term: String,

    /// Word list database
    #[arg(long, default_value = "data/univlexique.db")]
    db: PathBuf,

    /// Match entries beginning with the term instead of containing it
    #[arg(long)]
    prefix: bool,

    /// Write an HTML export of the results to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Show the paginated print preview instead of the plain table
    #[arg(long)]
    preview: bool,

    /// Emit the matched rows as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    // A missing word list is reported once and treated as an empty store.
    let table = match LexiconStore::open(&args.db) {
        Ok(store) => {
            let mode = if args.prefix {
                SearchMode::Prefix
            } else {
                SearchMode::Contains
            };
            run_query(&store, &args.term, mode)?
        }
        Err(NibrasError::StoreUnavailable(msg)) => {
            eprintln!("Could not open the word list: {}", msg);
            let mut empty = ResultTable::new();
            empty.replace(Vec::new());
            empty
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(table.rows())?);
        return Ok(());
    }

    let term = args.term.trim();
    let doc = nibras_lib::render(
        &table,
        &format!("Nibras search result for the term: {}", term),
        "Page:",
        ("Français", "العربية"),
    );

    if let Some(path) = &args.export {
        export::write_html(&doc, path)?;
        println!("Exported {} result(s) to {}", table.len(), path.display());
        return Ok(());
    }

    if args.preview {
        for page in preview(&doc, &PageGeometry::default()) {
            println!("--- {} (page {}/{}) ---", page.header_text, page.number, page.total);
            println!("{}    {}", page.column_titles.0, page.column_titles.1);
            for row in &page.rows {
                println!("{}    {}", row.french, row.arabic);
            }
            println!("{}    {}", page.footer_date, page.footer_page_label);
        }
        return Ok(());
    }

    if table.is_empty() {
        println!("No entries match \"{}\"", term);
    } else {
        print!("{}", table.table_text());
    }
    Ok(())
}
