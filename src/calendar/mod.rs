pub mod date;
pub mod interval;
pub mod system;

pub use date::LocalDate;
pub use interval::DateInterval;
pub use system::{CalendarOrdinal, CalendarSystem};
