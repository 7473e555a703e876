mod cache_key;
mod cached_emissions_pipeline;
mod emissions_cache;
mod in_memory_emissions_cache;

pub use cache_key::CacheKey;
pub use cached_emissions_pipeline::CachedEmissionsPipeline;
pub use emissions_cache::EmissionsCache;
pub use in_memory_emissions_cache::InMemoryEmissionsCache;
