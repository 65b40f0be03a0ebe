pub mod describe;
pub mod format;
pub mod join;
pub mod pipeline;
pub mod qa;
pub mod reshape;

mod phrases;
