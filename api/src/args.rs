use clap::Parser;
use nutridecode_core::domain::common::{NutriDecodeConfig, ScoringConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutridecode-api", about = "NutriDecode HTTP API")]
pub struct Args {
    #[clap(flatten)]
    pub server: ServerArgs,

    #[clap(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api/v1`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "SERVER_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScoringArgs {
    /// Allowed macro deviation in percentage points before a compliance
    /// warning is emitted.
    #[arg(long, env = "SCORING_MACRO_TOLERANCE_PCT", default_value_t = 15.0)]
    pub macro_tolerance_pct: f64,
}

impl From<Args> for NutriDecodeConfig {
    fn from(args: Args) -> Self {
        NutriDecodeConfig {
            scoring: ScoringConfig {
                macro_tolerance_pct: args.scoring.macro_tolerance_pct,
                ..ScoringConfig::default()
            },
        }
    }
}
