pub mod line;
pub mod script;
pub mod fountain_metadata;
pub mod page_stats;

pub use line::{Line, LineType};
pub use script::{Script, Character, Location, NoteRecord};
pub use fountain_metadata::FountainMetadata;
pub use page_stats::PageStats;
