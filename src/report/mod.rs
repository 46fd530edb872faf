//! Výstupy pre externé komponenty: textový report, formátovanie súm
//! a snapshot do histórie.

pub mod format;
pub mod snapshot;
pub mod text_report;

pub use format::{format_currency, format_percent};
pub use snapshot::HistorySnapshot;
pub use text_report::TextReport;
