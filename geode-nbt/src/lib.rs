use std::{
    io::{self, Cursor, Write},
    ops::Deref,
};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use compound::NbtCompound;
use tag::NbtTag;
use thiserror::Error;

pub mod compound;
pub mod tag;

pub const END_ID: u8 = 0;
pub const BYTE_ID: u8 = 1;
pub const SHORT_ID: u8 = 2;
pub const INT_ID: u8 = 3;
pub const LONG_ID: u8 = 4;
pub const FLOAT_ID: u8 = 5;
pub const DOUBLE_ID: u8 = 6;
pub const BYTE_ARRAY_ID: u8 = 7;
pub const STRING_ID: u8 = 8;
pub const LIST_ID: u8 = 9;
pub const COMPOUND_ID: u8 = 10;
pub const INT_ARRAY_ID: u8 = 11;
pub const LONG_ARRAY_ID: u8 = 12;

#[derive(Error, Debug)]
pub enum ReadingError {
    #[error("The root tag of the NBT blob is not a compound tag. Received tag id: {0}")]
    NoRootCompound(u8),
    #[error("Encountered an unknown NBT tag id {0}.")]
    UnknownTagId(u8),
    #[error("Ran out of bytes while reading {0}")]
    Incomplete(&'static str),
    #[error("NBT string is not valid UTF-8")]
    InvalidString,
}

/// Bedrock edition NBT: every multi-byte value is little-endian and strings
/// are plain UTF-8 with a `u16` length prefix.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Nbt {
    pub name: String,
    pub root_tag: NbtCompound,
}

impl Nbt {
    pub fn new(name: String, tag: NbtCompound) -> Self {
        Nbt {
            name,
            root_tag: tag,
        }
    }

    pub fn read(bytes: &mut impl Buf) -> Result<Nbt, ReadingError> {
        if !bytes.has_remaining() {
            return Err(ReadingError::Incomplete("root tag id"));
        }
        let tag_type_id = bytes.get_u8();

        if tag_type_id != COMPOUND_ID {
            return Err(ReadingError::NoRootCompound(tag_type_id));
        }

        Ok(Nbt {
            name: get_nbt_string(bytes)?,
            root_tag: NbtCompound::deserialize_content(bytes)?,
        })
    }

    pub fn read_from_cursor(cursor: &mut Cursor<&[u8]>) -> Result<Nbt, ReadingError> {
        Self::read(cursor)
    }

    pub fn write(&self) -> Bytes {
        let mut bytes = BytesMut::new();
        bytes.put_u8(COMPOUND_ID);
        bytes.put(NbtTag::String(self.name.to_string()).serialize_data());
        bytes.put(self.root_tag.serialize_content());
        bytes.freeze()
    }

    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.write())?;
        Ok(())
    }
}

impl Deref for Nbt {
    type Target = NbtCompound;

    fn deref(&self) -> &Self::Target {
        &self.root_tag
    }
}

impl From<NbtCompound> for Nbt {
    fn from(value: NbtCompound) -> Self {
        Nbt::new(String::new(), value)
    }
}

pub fn get_nbt_string(bytes: &mut impl Buf) -> Result<String, ReadingError> {
    if bytes.remaining() < 2 {
        return Err(ReadingError::Incomplete("string length"));
    }
    let len = bytes.get_u16_le() as usize;
    if bytes.remaining() < len {
        return Err(ReadingError::Incomplete("string payload"));
    }
    let string_bytes = bytes.copy_to_bytes(len);
    let string = core::str::from_utf8(&string_bytes).map_err(|_| ReadingError::InvalidString)?;
    Ok(string.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_little_endian_compound() {
        // compound "" { "Flight": byte 3, "Damage": int 5 }
        let blob: &[u8] = &[
            0x0A, 0x00, 0x00, //
            0x01, 0x06, 0x00, b'F', b'l', b'i', b'g', b'h', b't', 0x03, //
            0x03, 0x06, 0x00, b'D', b'a', b'm', b'a', b'g', b'e', 0x05, 0x00, 0x00, 0x00, //
            0x00,
        ];
        let nbt = Nbt::read(&mut Cursor::new(blob)).unwrap();
        assert_eq!(nbt.name, "");
        assert_eq!(nbt.get_byte("Flight"), Some(3));
        assert_eq!(nbt.get_int("Damage"), Some(5));
    }

    #[test]
    fn root_must_be_compound() {
        let blob: &[u8] = &[0x08, 0x00, 0x00];
        assert!(matches!(
            Nbt::read(&mut Cursor::new(blob)),
            Err(ReadingError::NoRootCompound(0x08))
        ));
    }

    #[test]
    fn write_read_roundtrip() {
        let mut compound = NbtCompound::new();
        compound.put("name".to_string(), "geode");
        compound.put("count".to_string(), 64i32);
        let nbt = Nbt::new(String::new(), compound);

        let bytes = nbt.write();
        let parsed = Nbt::read(&mut Cursor::new(&bytes[..])).unwrap();
        assert_eq!(parsed, nbt);
    }
}
