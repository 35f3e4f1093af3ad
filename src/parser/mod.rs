mod batch;
mod decode;
pub mod schema;
mod structure;
mod validation;

pub use batch::parse;
pub use decode::decode_record;
pub use structure::{validate_format, FileFormat};
pub use validation::validate_record;
