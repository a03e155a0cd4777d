pub mod coverage;
pub mod source_map;
