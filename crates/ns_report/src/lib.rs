pub mod composer;
pub mod format;
pub mod html;
pub mod stats;

pub use composer::ReportComposer;
pub use format::{format_report, wrap_words, LINE_WIDTH};
pub use html::{render_html, ReportStyle};
pub use stats::ReportStats;
