//! Command implementations
//!
//! Each command is a module with an execute function that takes the loaded
//! configuration, its parsed arguments and an output writer.

pub mod browse;
pub mod build;
pub mod config;
pub mod search;
pub mod tree;

pub use browse::execute as browse;
pub use build::execute as build;
pub use config::execute as config;
pub use search::execute as search;
pub use tree::execute as tree;

use crate::DbcatError;
use crate::access::parse_code;
use crate::tags::Level;

type Result<T> = std::result::Result<T, DbcatError>;

/// Access level for an optional `--code` phrase
///
/// # Errors
///
/// Returns `DbcatError::InvalidInput` if a phrase is given but is not a code.
pub fn access_from_code(code: Option<&str>) -> Result<Level> {
    code.map_or(Ok(Level::NONE), |phrase| {
        parse_code(phrase).ok_or_else(|| {
            DbcatError::InvalidInput(format!("Unrecognized access code '{}'", phrase.trim()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_from_code() {
        assert_eq!(access_from_code(None).unwrap(), Level::NONE);
        assert_eq!(access_from_code(Some("Code5")).unwrap(), Level::new(5).unwrap());
        assert!(matches!(
            access_from_code(Some("code9")),
            Err(DbcatError::InvalidInput(_))
        ));
    }
}
