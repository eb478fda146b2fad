pub mod aggregate;
pub mod error;
pub mod filter;
pub mod reader;
pub mod schema;

pub use filter::{count_attempts, debug_mismatch, debug_report, explain, AttemptFilter, AttemptReport, AttemptSummary, DebugReport, Detail, Scope, ScopeMatch, ScopedPlay};
pub use reader::{read_plays, read_plays_from, read_schedule, read_schedule_from, LoadedPlays, LoadedSchedule};
pub use schema::{PlayRecord, ScheduleGame};
