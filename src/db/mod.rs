//! Database layer (Firestore, with an in-memory fallback).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Collection names as constants.
pub mod collections {
    /// Profiles, keyed by user identity
    pub const USERS: &str = "users";
    /// Parent collection of the per-country event partitions
    pub const COUNTRIES: &str = "countries";
    /// Events sub-collection under `countries/{countryCode}`
    pub const EVENTS: &str = "events";
}
