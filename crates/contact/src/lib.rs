mod command;
mod error;
mod sink;
mod validation;
mod value_object;

pub use command::*;
pub use error::*;
pub use sink::*;
pub use validation::*;
pub use value_object::*;
