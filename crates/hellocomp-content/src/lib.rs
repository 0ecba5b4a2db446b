pub mod error;
pub mod gemini;
pub mod hookmaster;
pub mod inventory;
pub mod omnichannel;
pub mod seo;

pub use error::ContentError;
pub use gemini::GeminiClient;
pub use hookmaster::HookMasterResult;
pub use inventory::{filter_gaming_pcs, load_inventory, unique_product_names, InventoryProduct};
pub use omnichannel::OmnichannelResult;
pub use seo::{build_comparison_table, generate_full_seo_content, SeoComparisonTable, SeoContent};
