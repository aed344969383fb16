pub mod money;
pub mod pii;

pub use money::format_usd;
pub use pii::Masked;
