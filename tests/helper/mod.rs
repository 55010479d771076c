pub mod registry;

pub use registry::MockRegistry;
