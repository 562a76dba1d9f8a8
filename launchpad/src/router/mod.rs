pub mod batch;
pub mod range;
pub mod util;
pub mod year;
