pub mod settings;

pub use settings::{JobsSettings, RelationMatch};
