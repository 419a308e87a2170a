pub mod dto;

pub use dto::{BusinessOverview, TrendPoint, TREND_LENGTH};
