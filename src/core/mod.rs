//! Ledger operations shared by the shell and any other front end.

pub mod services;
