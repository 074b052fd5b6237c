// Pure queries over a loaded job list. Nothing here performs I/O.

pub mod dates;
pub mod filters;
pub mod menu;
pub mod words;
