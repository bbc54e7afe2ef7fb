use std::io::Cursor;

use bytes::{Bytes, BytesMut};
use compound::NbtCompound;

use crate::*;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum NbtTag {
    End = END_ID,
    Byte(i8) = BYTE_ID,
    Short(i16) = SHORT_ID,
    Int(i32) = INT_ID,
    Long(i64) = LONG_ID,
    Float(f32) = FLOAT_ID,
    Double(f64) = DOUBLE_ID,
    ByteArray(Bytes) = BYTE_ARRAY_ID,
    String(String) = STRING_ID,
    List(Vec<NbtTag>) = LIST_ID,
    Compound(NbtCompound) = COMPOUND_ID,
    IntArray(Vec<i32>) = INT_ARRAY_ID,
    LongArray(Vec<i64>) = LONG_ARRAY_ID,
}

impl NbtTag {
    /// Returns the numeric id associated with the data type.
    pub const fn get_type_id(&self) -> u8 {
        // See https://doc.rust-lang.org/reference/items/enumerations.html#pointer-casting
        unsafe { *(self as *const Self as *const u8) }
    }

    pub fn serialize(&self) -> Bytes {
        let mut bytes = BytesMut::new();
        bytes.put_u8(self.get_type_id());
        bytes.put(self.serialize_data());
        bytes.freeze()
    }

    pub fn serialize_data(&self) -> Bytes {
        let mut bytes = BytesMut::new();
        match self {
            NbtTag::End => {}
            NbtTag::Byte(byte) => bytes.put_i8(*byte),
            NbtTag::Short(short) => bytes.put_i16_le(*short),
            NbtTag::Int(int) => bytes.put_i32_le(*int),
            NbtTag::Long(long) => bytes.put_i64_le(*long),
            NbtTag::Float(float) => bytes.put_f32_le(*float),
            NbtTag::Double(double) => bytes.put_f64_le(*double),
            NbtTag::ByteArray(byte_array) => {
                bytes.put_i32_le(byte_array.len() as i32);
                bytes.put_slice(byte_array);
            }
            NbtTag::String(string) => {
                bytes.put_u16_le(string.len() as u16);
                bytes.put_slice(string.as_bytes());
            }
            NbtTag::List(list) => {
                bytes.put_u8(list.first().unwrap_or(&NbtTag::End).get_type_id());
                bytes.put_i32_le(list.len() as i32);
                for nbt_tag in list {
                    bytes.put(nbt_tag.serialize_data())
                }
            }
            NbtTag::Compound(compound) => {
                bytes.put(compound.serialize_content());
            }
            NbtTag::IntArray(int_array) => {
                bytes.put_i32_le(int_array.len() as i32);
                for int in int_array {
                    bytes.put_i32_le(*int)
                }
            }
            NbtTag::LongArray(long_array) => {
                bytes.put_i32_le(long_array.len() as i32);
                for long in long_array {
                    bytes.put_i64_le(*long)
                }
            }
        }
        bytes.freeze()
    }

    pub fn deserialize(bytes: &mut impl Buf) -> Result<NbtTag, ReadingError> {
        if !bytes.has_remaining() {
            return Err(ReadingError::Incomplete("tag id"));
        }
        let tag_id = bytes.get_u8();
        Self::deserialize_data(bytes, tag_id)
    }

    pub fn deserialize_from_cursor(cursor: &mut Cursor<&[u8]>) -> Result<NbtTag, ReadingError> {
        Self::deserialize(cursor)
    }

    pub fn deserialize_data(bytes: &mut impl Buf, tag_id: u8) -> Result<NbtTag, ReadingError> {
        match tag_id {
            END_ID => Ok(NbtTag::End),
            BYTE_ID => {
                if bytes.remaining() < 1 {
                    return Err(ReadingError::Incomplete("byte tag"));
                }
                Ok(NbtTag::Byte(bytes.get_i8()))
            }
            SHORT_ID => {
                if bytes.remaining() < 2 {
                    return Err(ReadingError::Incomplete("short tag"));
                }
                Ok(NbtTag::Short(bytes.get_i16_le()))
            }
            INT_ID => {
                if bytes.remaining() < 4 {
                    return Err(ReadingError::Incomplete("int tag"));
                }
                Ok(NbtTag::Int(bytes.get_i32_le()))
            }
            LONG_ID => {
                if bytes.remaining() < 8 {
                    return Err(ReadingError::Incomplete("long tag"));
                }
                Ok(NbtTag::Long(bytes.get_i64_le()))
            }
            FLOAT_ID => {
                if bytes.remaining() < 4 {
                    return Err(ReadingError::Incomplete("float tag"));
                }
                Ok(NbtTag::Float(bytes.get_f32_le()))
            }
            DOUBLE_ID => {
                if bytes.remaining() < 8 {
                    return Err(ReadingError::Incomplete("double tag"));
                }
                Ok(NbtTag::Double(bytes.get_f64_le()))
            }
            BYTE_ARRAY_ID => {
                if bytes.remaining() < 4 {
                    return Err(ReadingError::Incomplete("byte array length"));
                }
                let len = bytes.get_i32_le() as usize;
                if bytes.remaining() < len {
                    return Err(ReadingError::Incomplete("byte array payload"));
                }
                Ok(NbtTag::ByteArray(bytes.copy_to_bytes(len)))
            }
            STRING_ID => Ok(NbtTag::String(get_nbt_string(bytes)?)),
            LIST_ID => {
                if bytes.remaining() < 5 {
                    return Err(ReadingError::Incomplete("list header"));
                }
                let tag_type_id = bytes.get_u8();
                let len = bytes.get_i32_le();
                let mut list = Vec::with_capacity(len.max(0) as usize);
                for _ in 0..len {
                    let tag = NbtTag::deserialize_data(bytes, tag_type_id)?;
                    list.push(tag);
                }
                Ok(NbtTag::List(list))
            }
            COMPOUND_ID => Ok(NbtTag::Compound(NbtCompound::deserialize_content(bytes)?)),
            INT_ARRAY_ID => {
                if bytes.remaining() < 4 {
                    return Err(ReadingError::Incomplete("int array length"));
                }
                let len = bytes.get_i32_le() as usize;
                if bytes.remaining() < len * 4 {
                    return Err(ReadingError::Incomplete("int array payload"));
                }
                let mut int_array = Vec::with_capacity(len);
                for _ in 0..len {
                    int_array.push(bytes.get_i32_le());
                }
                Ok(NbtTag::IntArray(int_array))
            }
            LONG_ARRAY_ID => {
                if bytes.remaining() < 4 {
                    return Err(ReadingError::Incomplete("long array length"));
                }
                let len = bytes.get_i32_le() as usize;
                if bytes.remaining() < len * 8 {
                    return Err(ReadingError::Incomplete("long array payload"));
                }
                let mut long_array = Vec::with_capacity(len);
                for _ in 0..len {
                    long_array.push(bytes.get_i64_le());
                }
                Ok(NbtTag::LongArray(long_array))
            }
            _ => Err(ReadingError::UnknownTagId(tag_id)),
        }
    }

    pub fn extract_byte(&self) -> Option<i8> {
        match self {
            NbtTag::Byte(byte) => Some(*byte),
            _ => None,
        }
    }

    pub fn extract_short(&self) -> Option<i16> {
        match self {
            NbtTag::Short(short) => Some(*short),
            _ => None,
        }
    }

    pub fn extract_int(&self) -> Option<i32> {
        match self {
            NbtTag::Int(int) => Some(*int),
            _ => None,
        }
    }

    pub fn extract_long(&self) -> Option<i64> {
        match self {
            NbtTag::Long(long) => Some(*long),
            _ => None,
        }
    }

    pub fn extract_float(&self) -> Option<f32> {
        match self {
            NbtTag::Float(float) => Some(*float),
            _ => None,
        }
    }

    pub fn extract_double(&self) -> Option<f64> {
        match self {
            NbtTag::Double(double) => Some(*double),
            _ => None,
        }
    }

    pub fn extract_bool(&self) -> Option<bool> {
        match self {
            NbtTag::Byte(byte) => Some(*byte != 0),
            _ => None,
        }
    }

    pub fn extract_string(&self) -> Option<&String> {
        match self {
            NbtTag::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn extract_list(&self) -> Option<&Vec<NbtTag>> {
        match self {
            NbtTag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn extract_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtTag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

impl From<&str> for NbtTag {
    fn from(value: &str) -> Self {
        NbtTag::String(value.to_string())
    }
}

impl From<String> for NbtTag {
    fn from(value: String) -> Self {
        NbtTag::String(value)
    }
}

impl From<bool> for NbtTag {
    fn from(value: bool) -> Self {
        NbtTag::Byte(value as i8)
    }
}

impl From<i8> for NbtTag {
    fn from(value: i8) -> Self {
        NbtTag::Byte(value)
    }
}

impl From<i16> for NbtTag {
    fn from(value: i16) -> Self {
        NbtTag::Short(value)
    }
}

impl From<i32> for NbtTag {
    fn from(value: i32) -> Self {
        NbtTag::Int(value)
    }
}

impl From<i64> for NbtTag {
    fn from(value: i64) -> Self {
        NbtTag::Long(value)
    }
}

impl From<NbtCompound> for NbtTag {
    fn from(value: NbtCompound) -> Self {
        NbtTag::Compound(value)
    }
}

impl From<Vec<NbtTag>> for NbtTag {
    fn from(value: Vec<NbtTag>) -> Self {
        NbtTag::List(value)
    }
}
