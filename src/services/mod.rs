pub mod dedup;
pub mod pipeline;
pub mod qa;
pub mod sql;
pub mod translate;
