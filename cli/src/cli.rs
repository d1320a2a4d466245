use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "probe")]
#[command(
    author,
    version,
    about = "Probe a target and classify the answering status code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one probe cycle and print its outcome line
    Run {
        /// Configuration file path (defaults to probe.toml)
        #[clap(short, long, default_value = "probe.toml")]
        config: String,

        /// Override the configured base URL
        #[clap(long)]
        base_url: Option<String>,

        /// Override the configured probe path
        #[clap(long)]
        path: Option<String>,

        /// Extra query parameter as KEY=VALUE (repeatable)
        #[clap(long = "param", value_name = "KEY=VALUE")]
        param: Vec<String>,

        /// Fixed seed for the fake transport draw
        #[clap(long)]
        seed: Option<u64>,

        /// Probe over real HTTP instead of the fake transport
        #[clap(long, default_value_t = false)]
        live: bool,

        /// Emit the outcome as a JSON object instead of the plain line
        #[clap(long, default_value_t = false)]
        json: bool,

        /// Generate the configuration file if it doesn't exist
        #[clap(long, default_value_t = false)]
        init: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Classify a synthetic status code without probing anything
    Classify {
        /// Status code to classify
        #[clap(short, long)]
        status: u16,

        /// Response body to attach to the classification
        #[clap(short, long, default_value = "")]
        body: String,
    },
}
