//! Collaborators around the numeric core: record source, report writer and
//! horizon prompt.

mod prompt;
mod reader;
mod report;

pub use prompt::prompt_days;
pub use reader::{parse_date, read_sales, read_sales_from, ReaderConfig, DATE_FORMATS};
pub use report::{
    round_to, save_report, write_filter_stats, write_forecast_lines, write_report,
};
