pub mod values;

pub use values::{Series, load_values, parse_values};
