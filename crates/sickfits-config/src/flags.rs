//! Command-line switches.
//!
//! The server recognizes exactly one switch, `--seed-data`. It is scanned
//! once when the process starts and the result is threaded through the
//! startup sequence as a plain boolean. Every other argument is ignored.

pub const SEED_DATA_FLAG: &str = "--seed-data";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartupFlags {
    /// Insert the seed catalogue once the database connection is up.
    pub seed_data: bool,
}

impl StartupFlags {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            seed_data: args.into_iter().any(|arg| arg.as_ref() == SEED_DATA_FLAG),
        }
    }
}
