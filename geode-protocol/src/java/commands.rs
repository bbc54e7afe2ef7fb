use bytes::Buf;

use crate::bytebuf::{ByteBuf, ReadingError};

/// The Java edition declare-commands packet: the server's full command graph
/// as a flat node array plus the index of the root node.
#[derive(Debug, Clone)]
pub struct JDeclareCommands {
    pub nodes: Vec<CommandNode>,
    pub root_index: usize,
}

impl JDeclareCommands {
    pub fn read(bytebuf: &mut impl Buf) -> Result<Self, ReadingError> {
        let nodes = bytebuf.get_list(|bytebuf| CommandNode::read(bytebuf))?;
        let root_index = bytebuf.try_get_var_int()?.0 as usize;
        if root_index >= nodes.len() {
            return Err(ReadingError::Message(format!(
                "Root node index {} is out of bounds ({} nodes)",
                root_index,
                nodes.len()
            )));
        }
        // Downstream translation indexes the node array freely, so every
        // cross reference must be in bounds.
        for node in &nodes {
            for index in node.children.iter().chain(node.redirect.iter()) {
                if *index >= nodes.len() {
                    return Err(ReadingError::Message(format!(
                        "Command node index {} is out of bounds ({} nodes)",
                        index,
                        nodes.len()
                    )));
                }
            }
        }
        Ok(Self { nodes, root_index })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Literal,
    Argument,
}

/// One node of the Java command graph. `children` and `redirect` are indices
/// into the packet's node array.
#[derive(Debug, Clone)]
pub struct CommandNode {
    pub kind: NodeKind,
    pub name: String,
    pub parser: Option<CommandParser>,
    pub children: Vec<usize>,
    pub redirect: Option<usize>,
}

impl CommandNode {
    const FLAG_HAS_REDIRECT: u8 = 0x08;
    const FLAG_HAS_SUGGESTIONS: u8 = 0x10;

    pub fn root(children: Vec<usize>) -> Self {
        Self {
            kind: NodeKind::Root,
            name: String::new(),
            parser: None,
            children,
            redirect: None,
        }
    }

    pub fn literal(name: impl Into<String>, children: Vec<usize>) -> Self {
        Self {
            kind: NodeKind::Literal,
            name: name.into(),
            parser: None,
            children,
            redirect: None,
        }
    }

    pub fn redirect(name: impl Into<String>, target: usize) -> Self {
        Self {
            kind: NodeKind::Literal,
            name: name.into(),
            parser: None,
            children: Vec::new(),
            redirect: Some(target),
        }
    }

    pub fn argument(name: impl Into<String>, parser: CommandParser, children: Vec<usize>) -> Self {
        Self {
            kind: NodeKind::Argument,
            name: name.into(),
            parser: Some(parser),
            children,
            redirect: None,
        }
    }

    pub fn read(bytebuf: &mut impl Buf) -> Result<Self, ReadingError> {
        let flags = bytebuf.try_get_u8()?;
        let children = bytebuf.get_list(|bytebuf| Ok(bytebuf.try_get_var_int()?.0 as usize))?;
        let redirect = if flags & Self::FLAG_HAS_REDIRECT != 0 {
            Some(bytebuf.try_get_var_int()?.0 as usize)
        } else {
            None
        };

        let kind = match flags & 0x03 {
            0 => NodeKind::Root,
            1 => NodeKind::Literal,
            2 => NodeKind::Argument,
            other => {
                return Err(ReadingError::Message(format!(
                    "Unknown command node type {other}"
                )))
            }
        };

        let name = if kind == NodeKind::Root {
            String::new()
        } else {
            bytebuf.try_get_string()?
        };

        let parser = if kind == NodeKind::Argument {
            let identifier = bytebuf.try_get_string()?;
            Some(CommandParser::read(&identifier, bytebuf)?)
        } else {
            None
        };

        if flags & Self::FLAG_HAS_SUGGESTIONS != 0 {
            // suggestion provider identifier, unused by the bridge
            let _ = bytebuf.try_get_string()?;
        }

        Ok(Self {
            kind,
            name,
            parser,
            children,
            redirect,
        })
    }
}

/// The Java argument parser kinds the bridge understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandParser {
    Bool,
    Float,
    Double,
    Integer,
    String,
    Entity,
    GameProfile,
    BlockPos,
    ColumnPos,
    Vec3,
    Vec2,
    BlockState,
    BlockPredicate,
    ItemStack,
    ItemPredicate,
    Color,
    Component,
    Message,
    Nbt,
    NbtCompoundTag,
    NbtTag,
    NbtPath,
    Objective,
    ObjectiveCriteria,
    Operation,
    Particle,
    Rotation,
    ScoreboardSlot,
    ScoreHolder,
    Swizzle,
    Team,
    ItemSlot,
    ResourceLocation,
    MobEffect,
    Function,
    EntityAnchor,
    Range,
    FloatRange,
    ItemEnchantment,
    EntitySummon,
    Dimension,
    Time,
}

impl CommandParser {
    /// Decodes a parser identifier plus its trailing properties. Identifiers
    /// this bridge has no mapping for decode as the plain string parser,
    /// which downstream translation renders as a STRING parameter.
    pub fn read(identifier: &str, bytebuf: &mut impl Buf) -> Result<Self, ReadingError> {
        let parser = match identifier {
            "brigadier:bool" => Self::Bool,
            "brigadier:float" => {
                let flags = bytebuf.try_get_u8()?;
                if flags & 0x01 != 0 {
                    let _min = bytebuf.try_get_f32()?;
                }
                if flags & 0x02 != 0 {
                    let _max = bytebuf.try_get_f32()?;
                }
                Self::Float
            }
            "brigadier:double" => {
                let flags = bytebuf.try_get_u8()?;
                if flags & 0x01 != 0 {
                    let _min = bytebuf.try_get_f64()?;
                }
                if flags & 0x02 != 0 {
                    let _max = bytebuf.try_get_f64()?;
                }
                Self::Double
            }
            "brigadier:integer" => {
                let flags = bytebuf.try_get_u8()?;
                if flags & 0x01 != 0 {
                    let _min = bytebuf.try_get_i32()?;
                }
                if flags & 0x02 != 0 {
                    let _max = bytebuf.try_get_i32()?;
                }
                Self::Integer
            }
            "brigadier:string" => {
                let _behavior = bytebuf.try_get_var_int()?;
                Self::String
            }
            "minecraft:entity" => {
                let _flags = bytebuf.try_get_u8()?;
                Self::Entity
            }
            "minecraft:game_profile" => Self::GameProfile,
            "minecraft:block_pos" => Self::BlockPos,
            "minecraft:column_pos" => Self::ColumnPos,
            "minecraft:vec3" => Self::Vec3,
            "minecraft:vec2" => Self::Vec2,
            "minecraft:block_state" => Self::BlockState,
            "minecraft:block_predicate" => Self::BlockPredicate,
            "minecraft:item_stack" => Self::ItemStack,
            "minecraft:item_predicate" => Self::ItemPredicate,
            "minecraft:color" => Self::Color,
            "minecraft:component" => Self::Component,
            "minecraft:message" => Self::Message,
            "minecraft:nbt" => Self::Nbt,
            "minecraft:nbt_compound_tag" => Self::NbtCompoundTag,
            "minecraft:nbt_tag" => Self::NbtTag,
            "minecraft:nbt_path" => Self::NbtPath,
            "minecraft:objective" => Self::Objective,
            "minecraft:objective_criteria" => Self::ObjectiveCriteria,
            "minecraft:operation" => Self::Operation,
            "minecraft:particle" => Self::Particle,
            "minecraft:rotation" => Self::Rotation,
            "minecraft:scoreboard_slot" => Self::ScoreboardSlot,
            "minecraft:score_holder" => {
                let _flags = bytebuf.try_get_u8()?;
                Self::ScoreHolder
            }
            "minecraft:swizzle" => Self::Swizzle,
            "minecraft:team" => Self::Team,
            "minecraft:item_slot" => Self::ItemSlot,
            "minecraft:resource_location" => Self::ResourceLocation,
            "minecraft:mob_effect" => Self::MobEffect,
            "minecraft:function" => Self::Function,
            "minecraft:entity_anchor" => Self::EntityAnchor,
            "minecraft:range" => {
                let _decimals = bytebuf.try_get_bool()?;
                Self::Range
            }
            "minecraft:float_range" => Self::FloatRange,
            "minecraft:item_enchantment" => Self::ItemEnchantment,
            "minecraft:entity_summon" => Self::EntitySummon,
            "minecraft:dimension" => Self::Dimension,
            "minecraft:time" => Self::Time,
            _ => Self::String,
        };
        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytebuf::ByteBufMut;
    use bytes::{BufMut, BytesMut};

    fn put_node(
        buf: &mut BytesMut,
        flags: u8,
        children: &[i32],
        name: Option<&str>,
        parser: Option<&str>,
    ) {
        buf.put_u8(flags);
        buf.put_list(children, |buf, child| buf.put_var_int(&(*child).into()));
        if let Some(name) = name {
            buf.put_string(name);
        }
        if let Some(parser) = parser {
            buf.put_string(parser);
        }
    }

    #[test]
    fn read_declare_commands() {
        let mut buf = BytesMut::new();
        buf.put_var_int(&3.into()); // node count
        put_node(&mut buf, 0, &[1], None, None); // root
        put_node(&mut buf, 1, &[2], Some("gamerule"), None); // literal
        put_node(&mut buf, 2, &[], Some("value"), Some("brigadier:bool")); // argument
        buf.put_var_int(&0.into()); // root index

        let packet = JDeclareCommands::read(&mut &buf[..]).unwrap();
        assert_eq!(packet.root_index, 0);
        assert_eq!(packet.nodes.len(), 3);
        assert_eq!(packet.nodes[0].kind, NodeKind::Root);
        assert_eq!(packet.nodes[1].name, "gamerule");
        assert_eq!(packet.nodes[1].children, vec![2]);
        assert_eq!(packet.nodes[2].parser, Some(CommandParser::Bool));
    }

    #[test]
    fn read_integer_properties() {
        let mut buf = BytesMut::new();
        buf.put_u8(0x02); // argument node
        buf.put_var_int(&0.into()); // no children
        buf.put_string("value");
        buf.put_string("brigadier:integer");
        buf.put_u8(0x03); // min and max present
        buf.put_i32(0);
        buf.put_i32(10);

        let node = CommandNode::read(&mut &buf[..]).unwrap();
        assert_eq!(node.parser, Some(CommandParser::Integer));
    }

    #[test]
    fn unknown_parser_falls_back_to_string() {
        let mut buf = BytesMut::new();
        assert_eq!(
            CommandParser::read("minecraft:does_not_exist", &mut &buf[..]).unwrap(),
            CommandParser::String
        );
    }

    #[test]
    fn root_index_out_of_bounds() {
        let mut buf = BytesMut::new();
        buf.put_var_int(&1.into());
        put_node(&mut buf, 0, &[], None, None);
        buf.put_var_int(&7.into());
        assert!(JDeclareCommands::read(&mut &buf[..]).is_err());
    }
}
