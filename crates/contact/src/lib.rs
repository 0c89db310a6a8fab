mod command;
mod email;
mod error;
mod submission;

pub use command::*;
pub use error::*;
pub use submission::*;
