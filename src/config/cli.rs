use crate::config::{GalleryOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEMO_API_KEY};
use crate::core::gallery::DEFAULT_SOL;
use crate::domain::model::{FailurePolicy, RoverName};
use clap::{Args, Parser, Subcommand};
use std::fmt;

#[derive(Debug, Clone, Parser)]
#[command(name = "coursework")]
#[command(about = "Small calculators and screens from the mobile coursework, on the command line")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Remove repeated words from a comma-separated list
    Dedup { input: String },

    /// Break an amount into dollars and coins
    Currency { amount: String },

    /// Convert an Earth weight to another planet
    Weight {
        weight: String,

        /// Planet number as listed by `planets` (1-6)
        #[arg(short, long, default_value_t = 1)]
        planet: usize,
    },

    /// List the planets and their gravity ratios
    Planets,

    /// Run the paper book / e-book demo
    Book,

    /// Pick something for dinner
    Dinner {
        /// Extra options to add before deciding
        #[arg(long = "add")]
        add: Vec<String>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Shuffle the color demo backgrounds
    Colors {
        #[arg(long, default_value_t = 0)]
        layout_taps: u32,

        #[arg(long, default_value_t = 0)]
        image_taps: u32,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Browse the grocery store screens
    Grocery {
        /// Bottom tab: 0 = home, 1 = cart, 2 = profile
        #[arg(long, default_value_t = 0)]
        tab: usize,

        /// Open the detail screen for a product
        #[arg(long)]
        product: Option<String>,
    },

    /// Fetch Mars rover photos
    Mars(MarsArgs),
}

#[derive(Clone, Args)]
pub struct MarsArgs {
    #[arg(long, value_enum, ignore_case = true, default_value = "curiosity")]
    pub rover: RoverName,

    #[arg(long, default_value_t = DEFAULT_SOL)]
    pub sol: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEMO_API_KEY)]
    pub api_key: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Report fetch failures instead of showing placeholder photos
    #[arg(long)]
    pub strict: bool,

    /// Open the detail view for this photo id after loading
    #[arg(long)]
    pub photo: Option<u64>,
}

impl fmt::Debug for MarsArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarsArgs")
            .field("rover", &self.rover)
            .field("sol", &self.sol)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("strict", &self.strict)
            .field("photo", &self.photo)
            .finish()
    }
}

impl MarsArgs {
    pub fn options(&self) -> GalleryOptions {
        GalleryOptions {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_seconds: self.timeout_seconds,
            failure_policy: if self.strict {
                FailurePolicy::Surface
            } else {
                FailurePolicy::Placeholder
            },
        }
    }
}
