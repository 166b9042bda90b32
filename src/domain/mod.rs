mod lrc;
mod segment;
mod share_location;

pub use lrc::format_timestamp;
pub use segment::{Segment, Transcript};
pub use share_location::ShareLocation;
