//! Domain operations for the roster and event signups.
//!
//! Services own the multi-row rules (main-character bookkeeping, slot allocation and
//! bench promotion). Every operation that writes more than one row opens a single
//! transaction and hands it to the repositories, so a failure rolls the whole operation
//! back and concurrent interactions are serialized by the database.

pub mod event;
pub mod roster;

#[cfg(test)]
mod test;
