pub mod catalog;
pub mod check;
pub mod config;
pub mod detail;
pub mod reset;
pub mod theme;
pub mod today;

use std::path::PathBuf;

use farmday_core::view::IconItem;
use farmday_core::{Config, Dataset, Day};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Where the dataset comes from, as given on the command line.
pub struct DataSource {
    pub dir: Option<PathBuf>,
    pub day: Option<u8>,
}

/// Loaded dataset plus the day every view is computed for.
pub struct Context {
    pub dataset: Dataset,
    pub day: Day,
}

impl DataSource {
    /// Resolve the dataset: `--data`, then `data.dir` from config, then the
    /// bundled tables. Load failures leave an empty dataset.
    pub async fn context(&self) -> Context {
        let dir = self
            .dir
            .clone()
            .or_else(|| Config::load_or_default().data.dir);

        let dataset = match dir {
            Some(dir) => Dataset::load_or_empty(&dir).await,
            None => Dataset::embedded().unwrap_or_else(|e| {
                tracing::error!(error = %e, "bundled dataset is malformed");
                Dataset::default()
            }),
        };

        let day = self
            .day
            .and_then(Day::from_index)
            .unwrap_or_else(Day::today_local);

        Context { dataset, day }
    }
}

/// Print icon items one per line as `id<TAB>name`.
pub fn print_items(items: &[IconItem]) {
    for item in items {
        println!("{}\t{}", item.id, item.name);
    }
}
