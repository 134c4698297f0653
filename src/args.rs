//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, SizePreset, DEFAULT_BATCH_SIZE};
use crate::pipeline::RunConfig;

/// Named dataset sizes. Explicit per-entity flags override the preset.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum Preset {
    /// Small smoke-test dataset (hundreds of rows)
    Quick,
    /// Standard dataset (about a million rows total)
    #[default]
    Default,
    /// Large dataset (millions of rows)
    Xl,
    /// Stress-test dataset (tens of millions of rows)
    Xxl,
}

impl Preset {
    fn sizes(self) -> SizePreset {
        match self {
            Preset::Quick => config::PRESET_QUICK,
            Preset::Default => config::PRESET_DEFAULT,
            Preset::Xl => config::PRESET_XL,
            Preset::Xxl => config::PRESET_XXL,
        }
    }
}

/// Generate a synthetic e-commerce dataset.
#[derive(Parser, Debug)]
#[command(name = "ecommerce-datagen", version, about)]
pub struct Cli {
    /// Dataset size preset
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    pub preset: Preset,

    /// Number of customers (overrides the preset)
    #[arg(long)]
    pub customers: Option<u64>,

    /// Number of products (overrides the preset)
    #[arg(long)]
    pub products: Option<u64>,

    /// Number of orders (overrides the preset)
    #[arg(long)]
    pub orders: Option<u64>,

    /// Number of product reviews (overrides the preset)
    #[arg(long)]
    pub reviews: Option<u64>,

    /// Number of wishlist entries (overrides the preset)
    #[arg(long)]
    pub wishlists: Option<u64>,

    /// Number of coupons (overrides the preset)
    #[arg(long)]
    pub coupons: Option<u64>,

    /// Rows buffered per table before each write
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    #[command(subcommand)]
    pub output: Output,
}

/// Where generated rows are written.
#[derive(Subcommand, Clone, Debug)]
pub enum Output {
    /// Write into a PostgreSQL database, recreating each table
    Postgres {
        /// PostgreSQL connection string
        #[arg(long, env = "POSTGRES_CONNECTION_STRING")]
        connection_string: String,
    },
    /// Write CSV files, one per table
    Csv {
        /// Output directory for CSV files
        #[arg(long, short = 'o')]
        output_dir: PathBuf,
    },
}

impl Cli {
    /// Resolve the preset plus overrides into a run configuration.
    pub fn run_config(&self) -> RunConfig {
        let sizes = self.preset.sizes();
        RunConfig {
            customers: self.customers.unwrap_or(sizes.customers),
            products: self.products.unwrap_or(sizes.products),
            orders: self.orders.unwrap_or(sizes.orders),
            reviews: self.reviews.unwrap_or(sizes.reviews),
            wishlists: self.wishlists.unwrap_or(sizes.wishlists),
            coupons: self.coupons.unwrap_or(sizes.coupons),
            batch_size: self.batch_size,
            seed: self.seed,
            reference_time: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ecommerce-datagen", "csv", "-o", "/tmp/out"]);
        let config = cli.run_config();

        assert_eq!(config.customers, config::PRESET_DEFAULT.customers);
        assert_eq!(config.orders, config::PRESET_DEFAULT.orders);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.seed, 42);
        assert!(matches!(cli.output, Output::Csv { .. }));
    }

    #[test]
    fn test_overrides_beat_preset() {
        let cli = Cli::parse_from([
            "ecommerce-datagen",
            "--preset",
            "quick",
            "--orders",
            "7",
            "--seed",
            "99",
            "postgres",
            "--connection-string",
            "postgresql://localhost/test",
        ]);
        let config = cli.run_config();

        assert_eq!(config.orders, 7);
        assert_eq!(config.customers, config::PRESET_QUICK.customers);
        assert_eq!(config.seed, 99);
    }
}
