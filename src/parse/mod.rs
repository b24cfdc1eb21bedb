pub mod class;
pub mod spec;
