pub mod image;
pub mod intent;
pub mod record;
pub mod result_set;

pub use image::ImageAsset;
pub use intent::{parse_date, IntentFields, QueryIntent, QueryMode, DATE_FORMAT};
pub use record::{MediaType, Record};
pub use result_set::ResultSet;
