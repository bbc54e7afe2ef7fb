use bytes::{BufMut, BytesMut};

use crate::bytebuf::ByteBufMut;

/// The Bedrock parameter types this bridge emits. The numeric values are the
/// ids the Bedrock client expects inside a command parameter symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CommandParamType {
    Int = 1,
    Float = 3,
    Target = 7,
    String = 32,
    BlockPosition = 38,
    Position = 39,
    Message = 44,
    Json = 52,
    Operator = 57,
    FilePath = 77,
}

impl CommandParamType {
    pub const fn id(&self) -> i32 {
        *self as i32
    }
}

/// A closed set of literal values a parameter may take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandEnumData {
    pub name: String,
    pub values: Vec<String>,
    pub is_soft: bool,
}

impl CommandEnumData {
    pub fn new(name: String, values: Vec<String>, is_soft: bool) -> Self {
        Self {
            name,
            values,
            is_soft,
        }
    }

    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_string(&self.name);
        bytebuf.put_list(&self.values, |bytebuf, value| bytebuf.put_string(value));
        bytebuf.put_bool(self.is_soft);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandParamOption {
    SuppressEnumAutocompletion,
    HasSemanticConstraint,
    EnumAsChainedCommand,
}

/// One parameter slot of a command overload. Exactly one of `enum_data` and
/// `param_type` is set: literal slots carry an enum, typed arguments carry a
/// parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandParamData {
    pub name: String,
    pub optional: bool,
    pub enum_data: Option<CommandEnumData>,
    pub param_type: Option<CommandParamType>,
    pub postfix: Option<String>,
    pub options: Vec<CommandParamOption>,
}

impl CommandParamData {
    pub fn from_enum(name: String, enum_data: CommandEnumData) -> Self {
        Self {
            name,
            optional: false,
            enum_data: Some(enum_data),
            param_type: None,
            postfix: None,
            options: Vec::new(),
        }
    }

    pub fn from_type(name: String, param_type: CommandParamType) -> Self {
        Self {
            name,
            optional: false,
            enum_data: None,
            param_type: Some(param_type),
            postfix: None,
            options: Vec::new(),
        }
    }

    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_string(&self.name);
        bytebuf.put_bool(self.optional);
        bytebuf.put_option(&self.enum_data, |bytebuf, enum_data| {
            enum_data.write_to(bytebuf)
        });
        bytebuf.put_option(&self.param_type, |bytebuf, param_type| {
            bytebuf.put_var_int(&param_type.id().into())
        });
        bytebuf.put_option(&self.postfix, |bytebuf, postfix| bytebuf.put_string(postfix));
        bytebuf.put_var_int(&self.options.len().into());
        for option in &self.options {
            let id = match option {
                CommandParamOption::SuppressEnumAutocompletion => 0u8,
                CommandParamOption::HasSemanticConstraint => 1,
                CommandParamOption::EnumAsChainedCommand => 2,
            };
            bytebuf.put_u8(id);
        }
    }
}

/// A complete Bedrock command descriptor: name, aliases and the overload
/// matrix (each row is one permissible parameter signature). `flags` is the
/// raw flag byte; translated commands always carry 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandData {
    pub name: String,
    pub description: String,
    pub flags: u8,
    pub permission: u8,
    pub aliases: CommandEnumData,
    pub overloads: Vec<Vec<CommandParamData>>,
}

impl CommandData {
    pub fn write_to(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_string(&self.name);
        bytebuf.put_string(&self.description);
        bytebuf.put_u8(self.flags);
        bytebuf.put_u8(self.permission);
        self.aliases.write_to(bytebuf);
        bytebuf.put_list(&self.overloads, |bytebuf, overload| {
            bytebuf.put_list(overload, |bytebuf, param| param.write_to(bytebuf));
        });
    }
}
