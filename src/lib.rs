pub mod config;
pub mod core;
pub mod variants;

pub use config::{HanfoldConfig, OversizePolicy};
pub use variants::{
    generate_content_variants, generate_variants, Transform, VariantError, VariantGenerator,
    VariantSet,
};
