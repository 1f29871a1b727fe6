pub mod stat_card;
pub mod tooltip;

pub use stat_card::StatCard;
pub use tooltip::{InfoTooltip, Tooltip};
