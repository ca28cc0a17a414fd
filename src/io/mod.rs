/// CSV export of estimate rows.
pub mod export;
