pub mod cipher;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod cracker;
pub mod error;
pub mod keys;
pub mod scorer;
pub mod text;
// cmd and reports stay modules of the binary crate (main.rs); everything
// a library user needs lives above.
