pub mod message_style;
pub mod metric;
pub mod store_key;

pub use message_style::MessageStyle;
pub use store_key::StoreKey;
