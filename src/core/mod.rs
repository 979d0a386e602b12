pub mod probe;

pub use probe::{Prober, StatusRenderer};
