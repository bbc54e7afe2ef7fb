use indexmap::IndexMap;
use serde::Deserialize;

use crate::RegistryError;

const RUNTIME_ITEM_STATES_JSON: &str = include_str!("../../assets/runtime_item_states.json");
const ITEM_MAPPINGS_JSON: &str = include_str!("../../assets/items.json");
const CREATIVE_ITEMS_JSON: &str = include_str!("../../assets/creative_items.json");

/// One entry of the Bedrock runtime item palette.
#[derive(Deserialize, Clone, Debug)]
pub struct RuntimeItemState {
    pub name: String,
    pub id: i32,
}

/// The Java→Bedrock translation data for a single item. The key of the
/// surrounding map is the Java identifier.
#[derive(Deserialize, Clone, Debug)]
pub struct MappedItem {
    pub bedrock_id: i32,
    pub bedrock_data: i16,
    pub is_block: bool,
    #[serde(default)]
    pub stack_size: Option<i32>,
    #[serde(default)]
    pub tool_type: Option<String>,
    #[serde(default)]
    pub tool_tier: Option<String>,
}

/// Declaration order of the mappings file determines java id assignment, so
/// the map type must preserve it.
pub type ItemMappings = IndexMap<String, MappedItem>;

#[derive(Deserialize, Clone, Debug)]
pub struct CreativeItems {
    pub items: Vec<CreativeItemEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreativeItemEntry {
    pub id: i32,
    #[serde(default)]
    pub damage: Option<i16>,
    #[serde(default)]
    pub count: Option<i32>,
    #[serde(default)]
    pub nbt_b64: Option<String>,
}

pub(crate) fn load_runtime_item_states() -> Result<Vec<RuntimeItemState>, RegistryError> {
    serde_json::from_str(RUNTIME_ITEM_STATES_JSON).map_err(|source| RegistryError::Asset {
        asset: "runtime_item_states.json",
        source,
    })
}

pub(crate) fn load_item_mappings() -> Result<ItemMappings, RegistryError> {
    serde_json::from_str(ITEM_MAPPINGS_JSON).map_err(|source| RegistryError::Asset {
        asset: "items.json",
        source,
    })
}

pub(crate) fn load_creative_items() -> Result<CreativeItems, RegistryError> {
    serde_json::from_str(CREATIVE_ITEMS_JSON).map_err(|source| RegistryError::Asset {
        asset: "creative_items.json",
        source,
    })
}
