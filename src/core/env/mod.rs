mod paths;
mod vars;

pub use paths::SearchList;
pub use vars::Environment;

/// Name of the entry that drives command lookup.
pub const PATH_VAR: &str = "PATH";
