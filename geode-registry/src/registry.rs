use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use geode_nbt::{compound::NbtCompound, tag::NbtTag, Nbt};
use geode_protocol::bedrock::item::{ComponentItemData, ItemData, PaletteItemEntry};
use log::{debug, warn};
use parking_lot::RwLock;

use crate::item::{ItemEntry, ToolData, AIR};
use crate::loader::{self, CreativeItemEntry, CreativeItems, ItemMappings, RuntimeItemState};
use crate::RegistryError;

/// Identifiers that only exist on Java. Bedrock item data never resolves to
/// one of these, so creative items cannot become them unintentionally.
const JAVA_ONLY_ITEMS: [&str; 5] = [
    "minecraft:spectral_arrow",
    "minecraft:debug_stick",
    "minecraft:knowledge_book",
    "minecraft:tipped_arrow",
    "minecraft:furnace_minecart",
];

const FURNACE_MINECART_JAVA: &str = "minecraft:furnace_minecart";
const FURNACE_MINECART_BEDROCK: &str = "geysermc:furnace_minecart";
const LODESTONE_COMPASS: &str = "minecraft:lodestone_compass";

/// Registry for anything item related. Built once at startup and immutable
/// afterwards; the identifier cache is the only interior mutability.
pub struct ItemRegistry {
    entries: Vec<ItemEntry>,
    palette: Vec<PaletteItemEntry>,
    creative_items: Vec<ItemData>,
    item_names: Vec<String>,
    boats: Vec<i32>,
    buckets: Vec<i32>,
    barrier_index: usize,
    bamboo: Option<usize>,
    egg: Option<usize>,
    gold_ingot: Option<usize>,
    shield: Option<usize>,
    milk_bucket: Option<usize>,
    wheat: Option<usize>,
    writable_book: Option<usize>,
    furnace_minecart_data: Option<ComponentItemData>,
    identifier_cache: RwLock<HashMap<String, Option<usize>>>,
}

impl ItemRegistry {
    /// Loads the bundled assets and builds the registry. Any failure here is
    /// fatal to startup.
    pub fn load(add_non_bedrock_items: bool) -> Result<Self, RegistryError> {
        let palette = loader::load_runtime_item_states()?;
        let mappings = loader::load_item_mappings()?;
        let creative = loader::load_creative_items()?;
        Self::from_parts(palette, mappings, creative, add_non_bedrock_items)
    }

    pub fn from_parts(
        palette_states: Vec<RuntimeItemState>,
        mappings: ItemMappings,
        creative: CreativeItems,
        add_non_bedrock_items: bool,
    ) -> Result<Self, RegistryError> {
        let mut palette = Vec::with_capacity(palette_states.len() + 1);
        let mut bedrock_id_to_identifier = HashMap::with_capacity(palette_states.len());
        let mut lodestone_compass_id = None;

        for state in &palette_states {
            palette.push(PaletteItemEntry::new(state.name.clone(), state.id as i16));
            bedrock_id_to_identifier.insert(state.id, state.name.clone());
            if state.name == LODESTONE_COMPASS {
                lodestone_compass_id = Some(state.id);
            }
        }
        let lodestone_compass_id =
            lodestone_compass_id.ok_or(RegistryError::LodestoneCompassMissing)?;

        let mut slots: Vec<Option<ItemEntry>> = Vec::with_capacity(mappings.len() + 1);
        let mut item_names = Vec::with_capacity(mappings.len() + 2);
        let mut boats = Vec::new();
        let mut buckets = Vec::new();
        let mut barrier_index = 0;
        let mut bamboo = None;
        let mut egg = None;
        let mut gold_ingot = None;
        let mut shield = None;
        let mut milk_bucket = None;
        let mut wheat = None;
        let mut writable_book = None;
        let mut furnace_minecart_slot = None;

        for (java_identifier, mapped) in &mappings {
            let java_id = slots.len();

            if add_non_bedrock_items && java_identifier == FURNACE_MINECART_JAVA {
                // Reserved now, installed as a component item further down.
                furnace_minecart_slot = Some(java_id);
                slots.push(None);
                continue;
            }

            let bedrock_identifier = bedrock_id_to_identifier
                .get(&mapped.bedrock_id)
                .ok_or(RegistryError::MissingBedrockId(mapped.bedrock_id))?
                .clone();

            let tool = mapped.tool_type.as_ref().map(|tool_type| ToolData {
                tool_type: tool_type.clone(),
                tool_tier: mapped.tool_tier.clone().unwrap_or_default(),
            });

            slots.push(Some(ItemEntry {
                java_identifier: java_identifier.clone(),
                bedrock_identifier,
                java_id,
                bedrock_id: mapped.bedrock_id,
                bedrock_data: mapped.bedrock_data,
                is_block: mapped.is_block,
                stack_size: mapped.stack_size.unwrap_or(64),
                tool,
            }));

            match java_identifier.as_str() {
                "minecraft:barrier" => barrier_index = java_id,
                "minecraft:bamboo" => bamboo = Some(java_id),
                "minecraft:egg" => egg = Some(java_id),
                "minecraft:gold_ingot" => gold_ingot = Some(java_id),
                "minecraft:shield" => shield = Some(java_id),
                "minecraft:milk_bucket" => milk_bucket = Some(java_id),
                "minecraft:wheat" => wheat = Some(java_id),
                "minecraft:writable_book" => writable_book = Some(java_id),
                _ => {}
            }

            if java_identifier.contains("boat") {
                boats.push(mapped.bedrock_id);
            } else if java_identifier.contains("bucket") && !java_identifier.contains("milk") {
                buckets.push(mapped.bedrock_id);
            }

            item_names.push(java_identifier.clone());
        }

        // These must appear in command autocompletion even though they never
        // register as Bedrock-resolvable items.
        item_names.push(FURNACE_MINECART_JAVA.to_string());
        item_names.push("minecraft:spectral_arrow".to_string());

        // The lodestone compass doesn't exist on Java but item conversion
        // needs an entry for it.
        let lodestone_java_id = slots.len();
        slots.push(Some(ItemEntry {
            java_identifier: LODESTONE_COMPASS.to_string(),
            bedrock_identifier: LODESTONE_COMPASS.to_string(),
            java_id: lodestone_java_id,
            bedrock_id: lodestone_compass_id,
            bedrock_data: 0,
            is_block: false,
            stack_size: 1,
            tool: None,
        }));

        let mut net_id = 1;
        let mut creative_items = Vec::with_capacity(creative.items.len() + 1);
        for entry in &creative.items {
            let item = Self::bedrock_item_from_entry(entry);
            creative_items.push(ItemData::from_net(
                net_id, item.id, item.damage, item.count, item.tag,
            ));
            net_id += 1;
        }

        let mut furnace_minecart_data = None;
        if let Some(slot) = furnace_minecart_slot {
            // Registered past the palette so it cannot collide with a
            // vanilla runtime id.
            let furnace_minecart_id = palette.len() as i32 + 1;

            palette.push(PaletteItemEntry::component_based(
                FURNACE_MINECART_BEDROCK.to_string(),
                furnace_minecart_id as i16,
            ));
            slots[slot] = Some(ItemEntry {
                java_identifier: FURNACE_MINECART_JAVA.to_string(),
                bedrock_identifier: FURNACE_MINECART_BEDROCK.to_string(),
                java_id: slot,
                bedrock_id: furnace_minecart_id,
                bedrock_data: 0,
                is_block: false,
                stack_size: 64,
                tool: None,
            });
            creative_items.push(ItemData::from_net(net_id, furnace_minecart_id, 0, 1, None));
            furnace_minecart_data = Some(Self::build_furnace_minecart_data(furnace_minecart_id));
        }

        let entries = slots
            .into_iter()
            .map(|slot| slot.expect("every reserved item slot is installed during synthesis"))
            .collect();

        Ok(Self {
            entries,
            palette,
            creative_items,
            item_names,
            boats,
            buckets,
            barrier_index,
            bamboo,
            egg,
            gold_ingot,
            shield,
            milk_bucket,
            wheat,
            writable_book,
            furnace_minecart_data,
            identifier_cache: RwLock::new(HashMap::new()),
        })
    }

    /// Gets an item entry by its dense java id.
    pub fn get_by_java_id(&self, java_id: usize) -> Option<&ItemEntry> {
        self.entries.get(java_id)
    }

    /// Gets an item entry by its Java identifier, memoizing the scan.
    pub fn get_by_java_identifier(&self, java_identifier: &str) -> Option<&ItemEntry> {
        if let Some(cached) = self.identifier_cache.read().get(java_identifier) {
            return cached.map(|index| &self.entries[index]);
        }
        let found = self
            .entries
            .iter()
            .position(|entry| entry.java_identifier == java_identifier);
        self.identifier_cache
            .write()
            .entry(java_identifier.to_string())
            .or_insert(found);
        found.map(|index| &self.entries[index])
    }

    /// Resolves Bedrock item data to a registry entry. Potions and arrows
    /// carry variable damage, so they match on the bedrock id alone. Misses
    /// resolve to AIR.
    pub fn get_by_bedrock_item(&self, bedrock_id: i32, bedrock_data: i16) -> &ItemEntry {
        for entry in &self.entries {
            if entry.bedrock_id == bedrock_id
                && (entry.bedrock_data == bedrock_data
                    || entry.java_identifier.ends_with("potion")
                    || entry.java_identifier == "minecraft:arrow")
                && !JAVA_ONLY_ITEMS.contains(&entry.java_identifier.as_str())
            {
                return entry;
            }
        }

        // An empty hand queries as 0:0; stay quiet for that.
        if bedrock_id != 0 || bedrock_data != 0 {
            debug!("Missing mapping for bedrock item {bedrock_id}:{bedrock_data}");
        }
        &AIR
    }

    pub fn entries(&self) -> &[ItemEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The outbound runtime item palette, including the component-provided
    /// furnace minecart when enabled.
    pub fn palette(&self) -> &[PaletteItemEntry] {
        &self.palette
    }

    pub fn creative_items(&self) -> &[ItemData] {
        &self.creative_items
    }

    /// All Java item names, for command autocompletion.
    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }

    /// Bedrock ids of every boat item.
    pub fn boats(&self) -> &[i32] {
        &self.boats
    }

    /// Bedrock ids of every bucket item, excluding the milk bucket.
    pub fn buckets(&self) -> &[i32] {
        &self.buckets
    }

    pub fn barrier_index(&self) -> usize {
        self.barrier_index
    }

    pub fn bamboo(&self) -> Option<&ItemEntry> {
        self.bamboo.map(|index| &self.entries[index])
    }

    pub fn egg(&self) -> Option<&ItemEntry> {
        self.egg.map(|index| &self.entries[index])
    }

    pub fn gold_ingot(&self) -> Option<&ItemEntry> {
        self.gold_ingot.map(|index| &self.entries[index])
    }

    pub fn shield(&self) -> Option<&ItemEntry> {
        self.shield.map(|index| &self.entries[index])
    }

    pub fn milk_bucket(&self) -> Option<&ItemEntry> {
        self.milk_bucket.map(|index| &self.entries[index])
    }

    pub fn wheat(&self) -> Option<&ItemEntry> {
        self.wheat.map(|index| &self.entries[index])
    }

    pub fn writable_book(&self) -> Option<&ItemEntry> {
        self.writable_book.map(|index| &self.entries[index])
    }

    /// The component item descriptor for the furnace minecart, present only
    /// when non-Bedrock items are enabled.
    pub fn furnace_minecart_data(&self) -> Option<&ComponentItemData> {
        self.furnace_minecart_data.as_ref()
    }

    fn bedrock_item_from_entry(entry: &CreativeItemEntry) -> ItemData {
        let damage = entry.damage.unwrap_or(0);
        let count = entry.count.unwrap_or(1);
        let tag = entry
            .nbt_b64
            .as_deref()
            .and_then(|blob| match Self::decode_creative_tag(blob) {
                Ok(tag) => Some(tag),
                Err(err) => {
                    warn!(
                        "Failed to decode creative NBT for bedrock item {}: {err}",
                        entry.id
                    );
                    None
                }
            });
        ItemData::of(entry.id, damage, count, tag)
    }

    fn decode_creative_tag(blob: &str) -> Result<NbtCompound, RegistryError> {
        let bytes = STANDARD.decode(blob)?;
        let mut reader = bytes.as_slice();
        let nbt = Nbt::read(&mut reader)?;
        Ok(nbt.root_tag)
    }

    fn build_furnace_minecart_data(furnace_minecart_id: i32) -> ComponentItemData {
        let mut builder = NbtCompound::new();
        builder.put("name".to_string(), FURNACE_MINECART_BEDROCK);
        builder.put("id".to_string(), furnace_minecart_id);

        let mut components = NbtCompound::new();

        // As of 1.16.200 the furnace minecart has a texture and a
        // translation string already.
        let mut icon = NbtCompound::new();
        icon.put("texture".to_string(), "minecart_furnace");
        components.put("minecraft:icon".to_string(), icon);

        let mut display_name = NbtCompound::new();
        display_name.put("value".to_string(), "item.minecartFurnace.name");
        components.put("minecraft:display_name".to_string(), display_name);

        // The arm swing animation should play when aiming at rails.
        let mut rail_predicate = NbtCompound::new();
        rail_predicate.put("tags".to_string(), "q.any_tag('rail')");
        let use_on = vec![NbtTag::Compound(rail_predicate)];

        let mut entity_placer = NbtCompound::new();
        entity_placer.put("dispense_on".to_string(), use_on.clone());
        entity_placer.put("entity".to_string(), "minecraft:minecart");
        entity_placer.put("use_on".to_string(), use_on);
        components.put("minecraft:entity_placer".to_string(), entity_placer);

        let mut item_properties = NbtCompound::new();
        item_properties.put("allow_off_hand".to_string(), true);
        item_properties.put("hand_equipped".to_string(), false);
        item_properties.put("max_stack_size".to_string(), 1i32);
        item_properties.put("creative_group".to_string(), "itemGroup.name.minecart");
        item_properties.put("creative_category".to_string(), 4i32); // 4 - "Items"
        components.put("item_properties".to_string(), item_properties);

        builder.put("components".to_string(), components);

        ComponentItemData::new(FURNACE_MINECART_BEDROCK.to_string(), builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(states: &[(&str, i32)]) -> Vec<RuntimeItemState> {
        states
            .iter()
            .map(|(name, id)| RuntimeItemState {
                name: name.to_string(),
                id: *id,
            })
            .collect()
    }

    fn mappings(json: &str) -> ItemMappings {
        serde_json::from_str(json).unwrap()
    }

    fn no_creative() -> CreativeItems {
        CreativeItems { items: Vec::new() }
    }

    #[test]
    fn minimal_mapping() {
        let registry = ItemRegistry::from_parts(
            palette(&[("minecraft:stone", 1), ("minecraft:lodestone_compass", 741)]),
            mappings(r#"{"minecraft:stone": {"bedrock_id": 1, "bedrock_data": 0, "is_block": true}}"#),
            no_creative(),
            false,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let stone = registry.get_by_java_identifier("minecraft:stone").unwrap();
        assert_eq!(stone.bedrock_id, 1);
        assert_eq!(stone.java_id, 0);
        assert!(stone.is_block);

        let lodestone = registry.get_by_java_id(1).unwrap();
        assert_eq!(lodestone.java_identifier, "minecraft:lodestone_compass");
        assert_eq!(lodestone.bedrock_id, 741);
        assert_eq!(lodestone.stack_size, 1);
    }

    #[test]
    fn missing_lodestone_compass_is_fatal() {
        let result = ItemRegistry::from_parts(
            palette(&[("minecraft:stone", 1)]),
            mappings(r#"{"minecraft:stone": {"bedrock_id": 1, "bedrock_data": 0, "is_block": true}}"#),
            no_creative(),
            false,
        );
        assert!(matches!(result, Err(RegistryError::LodestoneCompassMissing)));
    }

    #[test]
    fn missing_bedrock_id_is_fatal() {
        let result = ItemRegistry::from_parts(
            palette(&[("minecraft:lodestone_compass", 741)]),
            mappings(r#"{"minecraft:stone": {"bedrock_id": 9, "bedrock_data": 0, "is_block": true}}"#),
            no_creative(),
            false,
        );
        assert!(matches!(result, Err(RegistryError::MissingBedrockId(9))));
    }

    #[test]
    fn java_ids_are_contiguous_and_lookups_roundtrip() {
        let registry = ItemRegistry::from_parts(
            palette(&[
                ("minecraft:stone", 1),
                ("minecraft:dirt", 3),
                ("minecraft:gold_ingot", 266),
                ("minecraft:wooden_pickaxe", 270),
                ("minecraft:barrier", 416),
                ("minecraft:lodestone_compass", 741),
            ]),
            mappings(
                r#"{
                    "minecraft:stone": {"bedrock_id": 1, "bedrock_data": 0, "is_block": true},
                    "minecraft:dirt": {"bedrock_id": 3, "bedrock_data": 0, "is_block": true},
                    "minecraft:barrier": {"bedrock_id": 416, "bedrock_data": 0, "is_block": true},
                    "minecraft:gold_ingot": {"bedrock_id": 266, "bedrock_data": 0, "is_block": false},
                    "minecraft:wooden_pickaxe": {"bedrock_id": 270, "bedrock_data": 0, "is_block": false, "stack_size": 1, "tool_type": "pickaxe", "tool_tier": "wooden"}
                }"#,
            ),
            no_creative(),
            false,
        )
        .unwrap();

        for (expected, entry) in registry.entries().iter().enumerate() {
            assert_eq!(entry.java_id, expected);
            assert_eq!(
                registry.get_by_java_identifier(&entry.java_identifier).unwrap(),
                entry
            );
            assert_eq!(registry.get_by_java_id(entry.java_id).unwrap(), entry);
        }

        let pickaxe = registry
            .get_by_java_identifier("minecraft:wooden_pickaxe")
            .unwrap();
        let tool = pickaxe.tool.as_ref().unwrap();
        assert_eq!(tool.tool_type, "pickaxe");
        assert_eq!(tool.tool_tier, "wooden");
        assert_eq!(pickaxe.stack_size, 1);

        assert_eq!(
            registry.barrier_index(),
            registry
                .get_by_java_identifier("minecraft:barrier")
                .unwrap()
                .java_id
        );
        assert_eq!(
            registry.gold_ingot().unwrap().java_identifier,
            "minecraft:gold_ingot"
        );
        assert!(registry.bamboo().is_none());

        assert!(registry.get_by_java_identifier("minecraft:not_an_item").is_none());
        // cached miss stays a miss
        assert!(registry.get_by_java_identifier("minecraft:not_an_item").is_none());
    }

    #[test]
    fn potion_lookup_ignores_damage() {
        let registry = ItemRegistry::from_parts(
            palette(&[("minecraft:potion", 733), ("minecraft:lodestone_compass", 741)]),
            mappings(
                r#"{"minecraft:potion": {"bedrock_id": 733, "bedrock_data": 0, "is_block": false, "stack_size": 1}}"#,
            ),
            no_creative(),
            false,
        )
        .unwrap();

        for damage in [0, 7, 42] {
            let entry = registry.get_by_bedrock_item(733, damage);
            assert_eq!(entry.java_identifier, "minecraft:potion");
        }
    }

    #[test]
    fn bedrock_lookup_never_returns_java_only_items() {
        let registry = ItemRegistry::from_parts(
            palette(&[("minecraft:arrow", 262), ("minecraft:lodestone_compass", 741)]),
            mappings(
                r#"{
                    "minecraft:arrow": {"bedrock_id": 262, "bedrock_data": 0, "is_block": false},
                    "minecraft:spectral_arrow": {"bedrock_id": 262, "bedrock_data": 0, "is_block": false},
                    "minecraft:tipped_arrow": {"bedrock_id": 262, "bedrock_data": 0, "is_block": false}
                }"#,
            ),
            no_creative(),
            false,
        )
        .unwrap();

        let entry = registry.get_by_bedrock_item(262, 0);
        assert_eq!(entry.java_identifier, "minecraft:arrow");

        let miss = registry.get_by_bedrock_item(9999, 0);
        assert_eq!(miss.java_identifier, "minecraft:air");
    }

    #[test]
    fn boats_and_buckets_are_grouped() {
        let registry = ItemRegistry::from_parts(
            palette(&[
                ("minecraft:boat", 333),
                ("minecraft:bucket", 325),
                ("minecraft:lodestone_compass", 741),
            ]),
            mappings(
                r#"{
                    "minecraft:oak_boat": {"bedrock_id": 333, "bedrock_data": 0, "is_block": false, "stack_size": 1},
                    "minecraft:birch_boat": {"bedrock_id": 333, "bedrock_data": 2, "is_block": false, "stack_size": 1},
                    "minecraft:bucket": {"bedrock_id": 325, "bedrock_data": 0, "is_block": false, "stack_size": 16},
                    "minecraft:water_bucket": {"bedrock_id": 325, "bedrock_data": 8, "is_block": false, "stack_size": 1},
                    "minecraft:milk_bucket": {"bedrock_id": 325, "bedrock_data": 1, "is_block": false, "stack_size": 1}
                }"#,
            ),
            no_creative(),
            false,
        )
        .unwrap();

        assert_eq!(registry.boats(), &[333, 333]);
        assert_eq!(registry.buckets(), &[325, 325]);
        assert!(registry.milk_bucket().is_some());
    }

    #[test]
    fn furnace_minecart_synthesis() {
        let registry = ItemRegistry::from_parts(
            palette(&[
                ("minecraft:minecart", 328),
                ("minecraft:lodestone_compass", 741),
            ]),
            mappings(
                r#"{
                    "minecraft:minecart": {"bedrock_id": 328, "bedrock_data": 0, "is_block": false, "stack_size": 1},
                    "minecraft:furnace_minecart": {"bedrock_id": 328, "bedrock_data": 0, "is_block": false, "stack_size": 1}
                }"#,
            ),
            CreativeItems {
                items: vec![CreativeItemEntry {
                    id: 328,
                    damage: None,
                    count: None,
                    nbt_b64: None,
                }],
            },
            true,
        )
        .unwrap();

        // the reserved slot got installed with the synthetic entry
        let furnace = registry
            .get_by_java_identifier("minecraft:furnace_minecart")
            .unwrap();
        assert_eq!(furnace.java_id, 1);
        assert_eq!(furnace.bedrock_identifier, "geysermc:furnace_minecart");
        // palette had 2 entries, so the new runtime id is 3
        assert_eq!(furnace.bedrock_id, 3);

        let appended = registry.palette().last().unwrap();
        assert_eq!(appended.identifier, "geysermc:furnace_minecart");
        assert!(appended.component_based);

        // creative list gained the synthetic entry with the next net id
        let last_creative = registry.creative_items().last().unwrap();
        assert_eq!(last_creative.net_id, 2);
        assert_eq!(last_creative.id, 3);
        assert_eq!(last_creative.count, 1);

        // Bedrock lookups never resolve the synthetic java-only item
        assert_eq!(
            registry.get_by_bedrock_item(3, 0).java_identifier,
            "minecraft:air"
        );

        let component = registry.furnace_minecart_data().unwrap();
        assert_eq!(component.name, "geysermc:furnace_minecart");
        assert_eq!(
            component.data.get_string("name").map(String::as_str),
            Some("geysermc:furnace_minecart")
        );
        assert_eq!(component.data.get_int("id"), Some(3));
        let components = component.data.get_compound("components").unwrap();
        let placer = components.get_compound("minecraft:entity_placer").unwrap();
        assert_eq!(
            placer.get_string("entity").map(String::as_str),
            Some("minecraft:minecart")
        );
        let properties = components.get_compound("item_properties").unwrap();
        assert_eq!(properties.get_int("max_stack_size"), Some(1));
        assert_eq!(properties.get_bool("allow_off_hand"), Some(true));

        // the synthetic entry skips name registration, leaving only the
        // unconditional append
        let names = registry.item_names();
        assert_eq!(
            names
                .iter()
                .filter(|name| *name == "minecraft:furnace_minecart")
                .count(),
            1
        );
        assert!(names.contains(&"minecraft:spectral_arrow".to_string()));
    }

    #[test]
    fn furnace_minecart_name_doubles_when_synthesis_is_off() {
        let registry = ItemRegistry::from_parts(
            palette(&[
                ("minecraft:minecart", 328),
                ("minecraft:lodestone_compass", 741),
            ]),
            mappings(
                r#"{
                    "minecraft:furnace_minecart": {"bedrock_id": 328, "bedrock_data": 0, "is_block": false, "stack_size": 1}
                }"#,
            ),
            no_creative(),
            false,
        )
        .unwrap();

        // registered once as a normal entry, appended once more regardless
        assert_eq!(
            registry
                .item_names()
                .iter()
                .filter(|name| *name == "minecraft:furnace_minecart")
                .count(),
            2
        );
        assert!(registry.furnace_minecart_data().is_none());
    }

    #[test]
    fn creative_items_get_monotonic_net_ids() {
        let registry = ItemRegistry::from_parts(
            palette(&[("minecraft:stone", 1), ("minecraft:lodestone_compass", 741)]),
            mappings(r#"{"minecraft:stone": {"bedrock_id": 1, "bedrock_data": 0, "is_block": true}}"#),
            CreativeItems {
                items: vec![
                    CreativeItemEntry {
                        id: 1,
                        damage: None,
                        count: None,
                        nbt_b64: None,
                    },
                    CreativeItemEntry {
                        id: 1,
                        damage: Some(3),
                        count: Some(16),
                        // compound {"Fireworks": {"Flight": 3b}}
                        nbt_b64: Some("CgAACgkARmlyZXdvcmtzAQYARmxpZ2h0AwAA".to_string()),
                    },
                    CreativeItemEntry {
                        id: 1,
                        damage: None,
                        count: None,
                        // not valid base64; decoding is best effort
                        nbt_b64: Some("!!!".to_string()),
                    },
                ],
            },
            false,
        )
        .unwrap();

        let creative = registry.creative_items();
        assert_eq!(creative.len(), 3);
        assert_eq!(
            creative.iter().map(|item| item.net_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(creative[1].damage, 3);
        assert_eq!(creative[1].count, 16);
        let tag = creative[1].tag.as_ref().unwrap();
        let fireworks = tag.get_compound("Fireworks").unwrap();
        assert_eq!(fireworks.get_byte("Flight"), Some(3));
        // bad blob decodes to no tag, not an error
        assert!(creative[2].tag.is_none());
    }
}
