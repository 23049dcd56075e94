pub mod month;
pub mod recurrence;
pub mod weekday;
pub mod window;
