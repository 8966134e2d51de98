use std::path::{Path, PathBuf};

use clap::Parser;

pub const MARKET_SHARE_FILE: &str = "market_share.csv";
pub const PLANS_FILE: &str = "plans.json";
pub const COMPETITORS_FILE: &str = "competitors.json";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "market-intel-dashboard", version, about)]
pub struct Cli {
    /// Directory holding market_share.csv, plans.json and competitors.json
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Market share CSV (overrides the file in --data-dir)
    #[arg(long)]
    pub market_share: Option<PathBuf>,

    /// Plan comparison JSON (overrides the file in --data-dir)
    #[arg(long)]
    pub plans: Option<PathBuf>,

    /// Competitor profile JSON (overrides the file in --data-dir)
    #[arg(long)]
    pub competitors: Option<PathBuf>,
}

impl Cli {
    pub fn data_sources(&self) -> DataSources {
        let mut sources = DataSources::from_dir(&self.data_dir);
        if let Some(p) = &self.market_share {
            sources.market_share = p.clone();
        }
        if let Some(p) = &self.plans {
            sources.plans = p.clone();
        }
        if let Some(p) = &self.competitors {
            sources.competitors = p.clone();
        }
        sources
    }
}

// ---------------------------------------------------------------------------
// DataSources – where the three datasets live
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub market_share: PathBuf,
    pub plans: PathBuf,
    pub competitors: PathBuf,
}

impl DataSources {
    /// The standard file names inside `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            market_share: dir.join(MARKET_SHARE_FILE),
            plans: dir.join(PLANS_FILE),
            competitors: dir.join(COMPETITORS_FILE),
        }
    }
}
