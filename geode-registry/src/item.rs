use std::sync::LazyLock;

/// The empty-slot sentinel. Lookups that cannot resolve a Bedrock item fall
/// back to this entry.
pub static AIR: LazyLock<ItemEntry> = LazyLock::new(|| ItemEntry {
    java_identifier: "minecraft:air".to_string(),
    bedrock_identifier: "minecraft:air".to_string(),
    java_id: 0,
    bedrock_id: 0,
    bedrock_data: 0,
    is_block: false,
    stack_size: 64,
    tool: None,
});

/// One row of the item registry, bridging a Java item to its Bedrock
/// counterpart. `java_id` is the registry's own insertion index;
/// `(bedrock_id, bedrock_data)` is not necessarily unique (potions share a
/// bedrock id and differ by damage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub java_identifier: String,
    pub bedrock_identifier: String,
    pub java_id: usize,
    pub bedrock_id: i32,
    pub bedrock_data: i16,
    pub is_block: bool,
    pub stack_size: i32,
    pub tool: Option<ToolData>,
}

impl ItemEntry {
    pub fn is_tool(&self) -> bool {
        self.tool.is_some()
    }
}

/// Tool classification carried by tool-ish items. The tier may be empty for
/// tools without material tiers (shears, flint and steel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolData {
    pub tool_type: String,
    pub tool_tier: String,
}
