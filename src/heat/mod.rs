pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod offset;
pub mod output;

pub use aggregate::{aggregate, aggregate_repository, Aggregation, CommitSource, ErrorPolicy, GitSource};
pub use exec::exec;
pub use grid::{Grid, WeekColumn};
pub use offset::{alignment_offset, day_offset, DayOffset};
pub use output::Renderer;
