//! # Registrar Cache
//!
//! Cache-aside layer in front of the records repositories.
//!
//! Reads consult the cache first through [`CacheAside::read_through`]; on a
//! miss the caller loads from the backing store and hands the value to
//! [`CacheAside::populate`]. Writes go to the backing store first and then
//! delete every affected entry through an [`InvalidationPlan`]. The cache is
//! never written by a write path.
//!
//! Every store failure fails open: reads fall through to the backing store,
//! population and invalidation failures are logged and swallowed. Staleness is
//! bounded by the TTL table.

mod adapter;
pub mod codec;
mod error;
mod invalidation;
pub mod keys;
pub mod metrics;
mod orchestrator;
mod policy;
pub mod store;

pub use adapter::StoreAdapter;
pub use error::{CacheError, StoreResult};
pub use invalidation::InvalidationPlan;
pub use keys::{build_key, CacheKey, CacheTarget, Namespace};
pub use orchestrator::{CacheAside, CacheResult};
pub use policy::{Granularity, TtlPolicy};
pub use store::{CacheStore, MemoryCacheStore, RedisCacheStore};
