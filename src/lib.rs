pub mod checker;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exceptions;
pub mod exit;
pub mod header;
pub mod index;
pub mod kinds;
pub mod phase;
pub mod reporting;
pub mod store;
pub mod types;
pub mod xpath;

pub use checker::{CollisionChecker, Entry};
pub use error::{CheckError, Result};
pub use exceptions::ExceptionRegistry;
pub use header::{PathHeader, PathHeaderService, RulePathHeader};
pub use index::{Exclusions, ValueIndex};
pub use kinds::DisplayType;
pub use phase::{Phase, Severity};
pub use store::{MemoryStore, ValueStore};
pub use types::{Diagnostic, SweepReport};
