use std::{collections::HashMap, sync::Arc};

use bytes::{Bytes, BytesMut};
use geode_config::BridgeConfiguration;
use geode_protocol::{bytebuf::ByteBufMut, ClientPacket};
use geode_registry::ItemRegistry;
use log::warn;
use tokio::sync::mpsc;

/// One connected Bedrock client. The registry is shared across sessions;
/// everything else is per connection.
pub struct Session {
    registry: Arc<ItemRegistry>,
    config: BridgeConfiguration,
    command_descriptions: HashMap<String, String>,
    block_identifiers: Vec<String>,
    outbound: mpsc::UnboundedSender<Bytes>,
}

impl Session {
    pub fn new(
        registry: Arc<ItemRegistry>,
        config: BridgeConfiguration,
        outbound: mpsc::UnboundedSender<Bytes>,
    ) -> Self {
        Self {
            registry,
            config,
            command_descriptions: HashMap::new(),
            block_identifiers: Vec::new(),
            outbound,
        }
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BridgeConfiguration {
        &self.config
    }

    pub fn set_command_description(
        &mut self,
        command: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.command_descriptions
            .insert(command.into(), description.into());
    }

    pub fn command_description(&self, command: &str) -> String {
        self.command_descriptions
            .get(command)
            .cloned()
            .unwrap_or_default()
    }

    /// Block identifiers can change while a session lives (data packs), so
    /// they are held per session and read at translation time.
    pub fn set_block_identifiers(&mut self, identifiers: Vec<String>) {
        self.block_identifiers = identifiers;
    }

    pub fn block_identifiers(&self) -> &[String] {
        &self.block_identifiers
    }

    /// Serializes a packet and enqueues it towards the Bedrock client.
    pub fn send_upstream<P: ClientPacket>(&self, packet: &P) {
        let mut bytebuf = BytesMut::new();
        bytebuf.put_var_int(&P::PACKET_ID.into());
        packet.write(&mut bytebuf);
        if self.outbound.send(bytebuf.freeze()).is_err() {
            warn!("Session closed, dropping outbound packet {:#04x}", P::PACKET_ID);
        }
    }

    /// Announces the item tables to a freshly started client: the creative
    /// inventory, and the component items when any are registered.
    pub fn send_item_payloads(&self) {
        self.send_upstream(&geode_protocol::bedrock::CCreativeContent::new(
            self.registry.creative_items().to_vec(),
        ));
        if let Some(component) = self.registry.furnace_minecart_data() {
            self.send_upstream(&geode_protocol::bedrock::CItemComponent::new(vec![
                component.clone(),
            ]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_registry::{CreativeItemEntry, CreativeItems, ItemMappings, MappedItem, RuntimeItemState};

    fn test_registry(add_non_bedrock_items: bool) -> Arc<ItemRegistry> {
        let palette = vec![
            RuntimeItemState {
                name: "minecraft:minecart".to_string(),
                id: 328,
            },
            RuntimeItemState {
                name: "minecraft:lodestone_compass".to_string(),
                id: 741,
            },
        ];
        let mut mappings = ItemMappings::new();
        mappings.insert(
            "minecraft:minecart".to_string(),
            MappedItem {
                bedrock_id: 328,
                bedrock_data: 0,
                is_block: false,
                stack_size: Some(1),
                tool_type: None,
                tool_tier: None,
            },
        );
        mappings.insert(
            "minecraft:furnace_minecart".to_string(),
            MappedItem {
                bedrock_id: 328,
                bedrock_data: 0,
                is_block: false,
                stack_size: Some(1),
                tool_type: None,
                tool_tier: None,
            },
        );
        let creative = CreativeItems {
            items: vec![CreativeItemEntry {
                id: 328,
                damage: None,
                count: None,
                nbt_b64: None,
            }],
        };
        Arc::new(ItemRegistry::from_parts(palette, mappings, creative, add_non_bedrock_items).unwrap())
    }

    #[test]
    fn item_payloads_include_component_items_when_enabled() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let session = Session::new(
            test_registry(true),
            BridgeConfiguration {
                add_non_bedrock_items: true,
                command_suggestions: true,
            },
            sender,
        );

        session.send_item_payloads();

        let creative = receiver.try_recv().unwrap();
        assert_eq!(creative[0], 0x91);
        let components = receiver.try_recv().unwrap();
        // 0xA2 is two varint bytes
        assert_eq!(&components[..2], &[0xA2, 0x01]);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn item_payloads_skip_components_when_disabled() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let session = Session::new(
            test_registry(false),
            BridgeConfiguration {
                add_non_bedrock_items: false,
                command_suggestions: true,
            },
            sender,
        );

        session.send_item_payloads();

        let _creative = receiver.try_recv().unwrap();
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn sending_on_a_closed_session_does_not_panic() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        let session = Session::new(
            test_registry(false),
            BridgeConfiguration {
                add_non_bedrock_items: false,
                command_suggestions: true,
            },
            sender,
        );
        session.send_item_payloads();
    }
}
