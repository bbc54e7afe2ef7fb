use core::str;

use crate::VarInt;
use bytes::{Buf, BufMut};
use thiserror::Error;

use std::mem::size_of;

#[derive(Debug, Error)]
pub enum ReadingError {
    /// End-of-File
    #[error("EOF, Tried to read {0} but No bytes left to consume")]
    EOF(String),
    #[error("{0} is Incomplete")]
    Incomplete(String),
    #[error("{0} is too Large")]
    TooLarge(String),
    #[error("{0}")]
    Message(String),
}

impl From<bytes::TryGetError> for ReadingError {
    fn from(e: bytes::TryGetError) -> Self {
        ReadingError::EOF(format!(
            "requested {} but only {} available",
            e.requested, e.available
        ))
    }
}

pub trait ByteBuf: Buf {
    fn try_get_bool(&mut self) -> Result<bool, ReadingError>;

    fn try_get_u8(&mut self) -> Result<u8, ReadingError>;

    fn try_get_i8(&mut self) -> Result<i8, ReadingError>;

    fn try_get_u16(&mut self) -> Result<u16, ReadingError>;

    fn try_get_i16(&mut self) -> Result<i16, ReadingError>;

    fn try_get_i32(&mut self) -> Result<i32, ReadingError>;

    fn try_get_i64(&mut self) -> Result<i64, ReadingError>;

    fn try_get_f32(&mut self) -> Result<f32, ReadingError>;

    fn try_get_f64(&mut self) -> Result<f64, ReadingError>;

    fn try_copy_to_bytes(&mut self, len: usize) -> Result<bytes::Bytes, ReadingError>;

    fn try_get_var_int(&mut self) -> Result<VarInt, ReadingError>;

    fn try_get_string(&mut self) -> Result<String, ReadingError>;

    fn try_get_string_len(&mut self, max_size: u32) -> Result<String, ReadingError>;

    /// Reads a boolean. If true, the closure is called, and the returned value is
    /// wrapped in Some. Otherwise, this returns None.
    fn try_get_option<G>(
        &mut self,
        val: impl FnOnce(&mut Self) -> Result<G, ReadingError>,
    ) -> Result<Option<G>, ReadingError>;

    /// Reads a VarInt length, then calls the closure that many times.
    fn get_list<G>(
        &mut self,
        val: impl Fn(&mut Self) -> Result<G, ReadingError>,
    ) -> Result<Vec<G>, ReadingError>;
}

impl<T: Buf> ByteBuf for T {
    fn try_get_bool(&mut self) -> Result<bool, ReadingError> {
        Ok(self.try_get_u8()? != 0)
    }

    fn try_get_u8(&mut self) -> Result<u8, ReadingError> {
        if size_of::<u8>() <= self.remaining() {
            Ok(self.get_u8())
        } else {
            Err(ReadingError::EOF("u8".to_string()))
        }
    }

    fn try_get_i8(&mut self) -> Result<i8, ReadingError> {
        if size_of::<i8>() <= self.remaining() {
            Ok(self.get_i8())
        } else {
            Err(ReadingError::EOF("i8".to_string()))
        }
    }

    fn try_get_u16(&mut self) -> Result<u16, ReadingError> {
        if size_of::<u16>() <= self.remaining() {
            Ok(self.get_u16())
        } else {
            Err(ReadingError::EOF("u16".to_string()))
        }
    }

    fn try_get_i16(&mut self) -> Result<i16, ReadingError> {
        if size_of::<i16>() <= self.remaining() {
            Ok(self.get_i16())
        } else {
            Err(ReadingError::EOF("i16".to_string()))
        }
    }

    fn try_get_i32(&mut self) -> Result<i32, ReadingError> {
        if size_of::<i32>() <= self.remaining() {
            Ok(self.get_i32())
        } else {
            Err(ReadingError::EOF("i32".to_string()))
        }
    }

    fn try_get_i64(&mut self) -> Result<i64, ReadingError> {
        if size_of::<i64>() <= self.remaining() {
            Ok(self.get_i64())
        } else {
            Err(ReadingError::EOF("i64".to_string()))
        }
    }

    fn try_get_f32(&mut self) -> Result<f32, ReadingError> {
        if size_of::<f32>() <= self.remaining() {
            Ok(self.get_f32())
        } else {
            Err(ReadingError::EOF("f32".to_string()))
        }
    }

    fn try_get_f64(&mut self) -> Result<f64, ReadingError> {
        if size_of::<f64>() <= self.remaining() {
            Ok(self.get_f64())
        } else {
            Err(ReadingError::EOF("f64".to_string()))
        }
    }

    fn try_copy_to_bytes(&mut self, len: usize) -> Result<bytes::Bytes, ReadingError> {
        if self.remaining() >= len {
            Ok(self.copy_to_bytes(len))
        } else {
            Err(ReadingError::EOF("bytes".to_string()))
        }
    }

    fn try_get_var_int(&mut self) -> Result<VarInt, ReadingError> {
        let mut val = 0;
        for i in 0..VarInt::MAX_SIZE {
            let byte = self.try_get_u8().map_err(|_| {
                ReadingError::Incomplete("VarInt".to_string())
            })?;
            val |= (i32::from(byte) & 0b01111111) << (i * 7);
            if byte & 0b10000000 == 0 {
                return Ok(VarInt(val));
            }
        }
        Err(ReadingError::TooLarge("VarInt".to_string()))
    }

    fn try_get_string(&mut self) -> Result<String, ReadingError> {
        self.try_get_string_len(i16::MAX as u32)
    }

    fn try_get_string_len(&mut self, max_size: u32) -> Result<String, ReadingError> {
        let size = self.try_get_var_int()?.0;
        if size < 0 {
            return Err(ReadingError::Message("String length is negative".to_string()));
        }
        if size as u32 > max_size {
            return Err(ReadingError::TooLarge("String".to_string()));
        }
        let data = self.try_copy_to_bytes(size as usize)?;
        str::from_utf8(&data)
            .map(|s| s.to_string())
            .map_err(|e| ReadingError::Message(e.to_string()))
    }

    fn try_get_option<G>(
        &mut self,
        val: impl FnOnce(&mut Self) -> Result<G, ReadingError>,
    ) -> Result<Option<G>, ReadingError> {
        if self.try_get_bool()? {
            Ok(Some(val(self)?))
        } else {
            Ok(None)
        }
    }

    fn get_list<G>(
        &mut self,
        val: impl Fn(&mut Self) -> Result<G, ReadingError>,
    ) -> Result<Vec<G>, ReadingError> {
        let len = self.try_get_var_int()?.0;
        if len < 0 {
            return Err(ReadingError::Message("List length is negative".to_string()));
        }
        let mut list = Vec::new();
        for _ in 0..len {
            list.push(val(self)?);
        }
        Ok(list)
    }
}

pub trait ByteBufMut {
    fn put_bool(&mut self, v: bool);

    fn put_var_int(&mut self, value: &VarInt);

    fn put_string(&mut self, val: &str);

    fn put_option<G>(&mut self, val: &Option<G>, write: impl FnOnce(&mut Self, &G));

    fn put_list<G>(&mut self, list: &[G], write: impl Fn(&mut Self, &G));
}

impl<T: BufMut> ByteBufMut for T {
    fn put_bool(&mut self, v: bool) {
        if v {
            self.put_u8(1);
        } else {
            self.put_u8(0);
        }
    }

    fn put_var_int(&mut self, value: &VarInt) {
        let mut x = value.0 as u32;
        loop {
            let byte = (x & 0x7F) as u8;
            x >>= 7;
            if x == 0 {
                self.put_u8(byte);
                break;
            }
            self.put_u8(byte | 0x80);
        }
    }

    fn put_string(&mut self, val: &str) {
        self.put_var_int(&val.len().into());
        self.put_slice(val.as_bytes());
    }

    fn put_option<G>(&mut self, val: &Option<G>, write: impl FnOnce(&mut Self, &G)) {
        self.put_bool(val.is_some());
        if let Some(v) = val {
            write(self, v)
        }
    }

    fn put_list<G>(&mut self, list: &[G], write: impl Fn(&mut Self, &G)) {
        self.put_var_int(&list.len().into());
        for v in list {
            write(self, v);
        }
    }
}
