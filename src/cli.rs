use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hc")]
#[command(
    author,
    version,
    about = "Explain HTTP status codes",
    long_about = "Explain HTTP status codes.\n\nWithout parameters lists all available HTTP status codes and their description."
)]
pub struct Cli {
    /// Code may contain a regular expression or use 'x' to denote any digit.
    /// Code examples: 418, 30[12], 3.*, 1xx
    pub code: Option<String>,

    /// Search for a code by name or description. Search text may contain regular expressions
    #[clap(short, long)]
    pub search: Option<String>,

    /// Disable formatting of output
    #[clap(short, long, default_value_t = false)]
    pub plain: bool,

    /// Enable verbose diagnostics on stderr
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
