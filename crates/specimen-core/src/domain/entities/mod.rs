pub mod descriptor;
pub mod example;

pub use descriptor::*;
pub use example::*;
