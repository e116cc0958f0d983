pub mod creation;
pub mod highlight;
pub mod query;
pub mod shaping;
