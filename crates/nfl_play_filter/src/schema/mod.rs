pub mod penalty;
pub mod play_record;
pub mod schedule;
pub mod teams;

pub use penalty::*;
pub use play_record::*;
pub use schedule::*;
pub use teams::*;
