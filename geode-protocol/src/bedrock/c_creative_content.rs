use bytes::BytesMut;

use super::item::ItemData;
use crate::bytebuf::ByteBufMut;
use crate::ClientPacket;

/// The creative inventory as the Bedrock client shows it.
#[derive(Debug, Clone, Default)]
pub struct CCreativeContent {
    pub items: Vec<ItemData>,
}

impl CCreativeContent {
    pub fn new(items: Vec<ItemData>) -> Self {
        Self { items }
    }
}

impl ClientPacket for CCreativeContent {
    const PACKET_ID: i32 = 0x91;

    fn write(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_list(&self.items, |bytebuf, item| item.write_to(bytebuf));
    }
}
