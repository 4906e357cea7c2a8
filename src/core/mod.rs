pub mod config;
pub mod date_resolver;
pub mod filter;
pub mod list;
pub mod log;
pub mod normalize;
pub mod period_scraper;
pub mod periods;
pub mod row_parser;
pub mod sync;

pub use period_scraper::{PeriodScrape, PeriodScraper};
pub use row_parser::{DateState, ParsedRow};
pub use sync::{PeriodOutcome, PeriodReport, SyncEngine, SyncSummary};
