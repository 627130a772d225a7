use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server exposing the analysis endpoint
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Analyze a single message and print the JSON result
    Analyze {
        message: String,

        /// Claimed sender (phone number, account name, ...)
        #[arg(short, long)]
        sender: Option<String>,
    },

    /// Show the reasoning gateway configuration
    Status,
}
