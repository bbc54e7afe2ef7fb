use thiserror::Error;

pub mod enchantment;
pub mod entity_type;
mod item;
mod loader;
mod registry;

pub use item::{ItemEntry, ToolData, AIR};
pub use loader::{CreativeItemEntry, CreativeItems, ItemMappings, MappedItem, RuntimeItemState};
pub use registry::ItemRegistry;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to parse {asset}: {source}")]
    Asset {
        asset: &'static str,
        source: serde_json::Error,
    },
    #[error("Mappings refer to bedrock id {0} that is missing from the runtime item palette")]
    MissingBedrockId(i32),
    #[error("Lodestone compass not found in the runtime item palette")]
    LodestoneCompassMissing,
    #[error("Invalid base64 in a creative item tag: {0}")]
    CreativeTagBase64(#[from] base64::DecodeError),
    #[error("Invalid NBT in a creative item tag: {0}")]
    CreativeTagNbt(#[from] geode_nbt::ReadingError),
}
