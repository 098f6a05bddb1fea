pub mod host;
pub mod provider;
pub mod sampler;
pub mod snapshot;
