//! Port definitions for the template subsystem.
//!
//! Ports define the abstract interfaces callers depend on, so the calling
//! layer can swap the validator (for example in its own tests).

pub mod validator;
