//! Municipal holiday rule sets.

/// New York City waste-collection holiday rules.
pub mod new_york;
