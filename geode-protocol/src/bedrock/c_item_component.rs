use bytes::BytesMut;

use super::item::ComponentItemData;
use crate::bytebuf::ByteBufMut;
use crate::ClientPacket;

/// Declares server-defined component items to the Bedrock client.
#[derive(Debug, Clone, Default)]
pub struct CItemComponent {
    pub items: Vec<ComponentItemData>,
}

impl CItemComponent {
    pub fn new(items: Vec<ComponentItemData>) -> Self {
        Self { items }
    }
}

impl ClientPacket for CItemComponent {
    const PACKET_ID: i32 = 0xA2;

    fn write(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_list(&self.items, |bytebuf, item| item.write_to(bytebuf));
    }
}
