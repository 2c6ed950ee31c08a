//! Few-shot selection over the clickbait prompt dataset: split the fixed
//! examples by index and write both halves as pretty JSON arrays.

pub mod dataset;
pub mod errors;
pub mod partition;
pub mod pipeline;
pub mod record;
pub mod writer;

pub use errors::SelectError;
pub use partition::{partition, Split};
pub use pipeline::{run, Outputs};
pub use record::Record;
pub use writer::{to_json_string, write_records};
