mod builder;
mod entry;

pub use builder::Composer;
pub use entry::{compose, CronEntry};
