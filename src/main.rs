mod api_key;
mod error;
mod local_time;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::{api_key::KeyLookup, error::AppError, local_time::TimeLookup};

/// Get local time and date of a location
#[derive(Parser, Debug)]
struct Cli {
    /// Location to get the time and date of
    location: String,

    /// Type of data to print
    #[clap(long = "type", value_enum, default_value = "date_time")]
    data_type: DataType,

    /// API key for the IPGeolocation service, overrides every configured
    /// source
    #[clap(long = "api_key")]
    api_key: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[clap(rename_all = "snake_case")]
enum DataType {
    /// The whole response payload
    Full,
    /// Combined date and time
    DateTime,
    Time,
    Date,
    /// Unix timestamp
    Timestamp,
}

impl DataType {
    // `None` means print the whole payload instead of a single field.
    fn field_name(self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::DateTime => Some("date_time"),
            Self::Time => Some("time"),
            Self::Date => Some("date"),
            Self::Timestamp => Some("timestamp"),
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let api_key = KeyLookup::default().resolve(cli.api_key.as_deref())?;
    let lookup = TimeLookup::new(api_key, cli.location);
    let record = lookup.fetch().await?;

    let output = match cli.data_type.field_name() {
        Some(field) => record.field(field),
        None => serde_json::to_string_pretty(&record)?,
    };
    println!("{output}");

    Ok(())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the printed value stays alone on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}
