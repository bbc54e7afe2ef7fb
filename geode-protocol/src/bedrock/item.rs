use bytes::{BufMut, BytesMut};
use geode_nbt::{compound::NbtCompound, Nbt};

use crate::bytebuf::ByteBufMut;

/// A Bedrock item stack as it appears in the creative content payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub net_id: i32,
    pub id: i32,
    pub damage: i16,
    pub count: i32,
    pub tag: Option<NbtCompound>,
}

impl ItemData {
    pub fn of(id: i32, damage: i16, count: i32, tag: Option<NbtCompound>) -> Self {
        Self {
            net_id: 0,
            id,
            damage,
            count,
            tag,
        }
    }

    pub fn from_net(net_id: i32, id: i32, damage: i16, count: i32, tag: Option<NbtCompound>) -> Self {
        Self {
            net_id,
            id,
            damage,
            count,
            tag,
        }
    }

    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_var_int(&self.net_id.into());
        bytebuf.put_var_int(&self.id.into());
        bytebuf.put_i16_le(self.damage);
        bytebuf.put_var_int(&self.count.into());
        bytebuf.put_option(&self.tag, |bytebuf, tag| {
            bytebuf.put(Nbt::new(String::new(), tag.clone()).write());
        });
    }
}

/// One row of the runtime item palette the bridge announces at start-game
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItemEntry {
    pub identifier: String,
    pub runtime_id: i16,
    pub component_based: bool,
}

impl PaletteItemEntry {
    pub fn new(identifier: String, runtime_id: i16) -> Self {
        Self {
            identifier,
            runtime_id,
            component_based: false,
        }
    }

    pub fn component_based(identifier: String, runtime_id: i16) -> Self {
        Self {
            identifier,
            runtime_id,
            component_based: true,
        }
    }

    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_string(&self.identifier);
        bytebuf.put_i16_le(self.runtime_id);
        bytebuf.put_bool(self.component_based);
    }
}

/// A client-side-defined item: the client learns its behavior from the
/// attached NBT component bag instead of a built-in palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentItemData {
    pub name: String,
    pub data: NbtCompound,
}

impl ComponentItemData {
    pub fn new(name: String, data: NbtCompound) -> Self {
        Self { name, data }
    }

    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_string(&self.name);
        bytebuf.put(Nbt::new(String::new(), self.data.clone()).write());
    }
}
