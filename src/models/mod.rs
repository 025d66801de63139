//! Data models for the address book entities.
//!
//! This module contains the data structures representing contacts and the
//! groups that reference them.

pub mod contact;
pub mod group;

pub use contact::Contact;
pub use group::Group;
