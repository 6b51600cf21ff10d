// Formatting, derived analytics and refresh signalling
pub mod format;
pub mod refresh;
pub mod stats;

pub use format::{format_inr, format_lakhs, format_price_per_area, price_per_area, usd_to_inr};
pub use refresh::{RefreshBus, RefreshEvent, RefreshListener};
pub use stats::{recent_count, trend_points, SnapshotStats};
