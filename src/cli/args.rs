use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lexidex",
    about = "Index text files and answer exact-word and prefix queries",
    version
)]
pub struct Args {
    /// Text files to index, in document id order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run these queries and exit instead of reading stdin
    #[arg(short, long = "query")]
    pub queries: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print index statistics after ingestion
    #[arg(long)]
    pub stats: bool,

    /// Override the configured document limit
    #[arg(long)]
    pub max_documents: Option<usize>,

    /// Read and tokenize files in parallel
    #[arg(long)]
    pub parallel: bool,
}
