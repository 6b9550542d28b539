//! # Hashing
//!
//! This crate uses `ahash` for its `HashMap` and `HashSet`. The hashed keys
//! are small `u32`-backed node indexes, where the quality of SipHash buys
//! nothing over the faster `ahash`.
//!
//! `hashbrown` is used as it supports some APIs which are still unstable on
//! `std::collections::HashMap`.

pub use ahash::RandomState;

pub type HashMap<K, V> = hashbrown::HashMap<K, V, RandomState>;
pub type HashSet<V> = hashbrown::HashSet<V, RandomState>;
