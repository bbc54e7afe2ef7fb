use log::debug;

use geode_protocol::bedrock::command::{CommandEnumData, CommandParamData, CommandParamType};
use geode_protocol::java::{CommandNode, CommandParser};
use geode_protocol::text::NamedColor;
use geode_registry::{enchantment, entity_type};

use crate::Session;

const ENUM_BOOLEAN: [&str; 2] = ["true", "false"];

/// One node of the parameter tree under construction. `children` is a list
/// of sibling slots; each slot holds every node merged into it as an enum
/// value.
struct ParamInfo {
    node: usize,
    data: CommandParamData,
    children: Vec<Vec<ParamInfo>>,
}

impl ParamInfo {
    fn literal(node_index: usize, node: &CommandNode) -> Self {
        let enum_data = CommandEnumData::new(node.name.clone(), vec![node.name.clone()], false);
        Self {
            node: node_index,
            data: CommandParamData::from_enum(node.name.clone(), enum_data),
            children: Vec::new(),
        }
    }

    fn argument(node_index: usize, node: &CommandNode, session: &Session) -> Self {
        let data = match map_parser(node.parser.as_ref(), session) {
            MappedType::Type(param_type) => CommandParamData::from_type(node.name.clone(), param_type),
            MappedType::Enum(values) => CommandParamData::from_enum(
                node.name.clone(),
                CommandEnumData::new(node.name.clone(), values, false),
            ),
        };
        Self {
            node: node_index,
            data,
            children: Vec::new(),
        }
    }

    /// Extends this slot's enum with another literal. The enum name stays
    /// the first merged literal's name.
    fn extend_enum(&mut self, value: &str) {
        if let Some(enum_data) = self.data.enum_data.as_mut() {
            enum_data.values.push(value.to_string());
        }
    }
}

/// Builds the overload matrix for one root-level command node, following its
/// redirect first. A command without children has no overloads.
pub(crate) fn build_overloads(
    node_index: usize,
    nodes: &[CommandNode],
    session: &Session,
) -> Vec<Vec<CommandParamData>> {
    let mut index = node_index;
    if let Some(target) = nodes[index].redirect {
        debug!(
            "Redirecting command {} to {}",
            nodes[index].name, nodes[target].name
        );
        index = target;
    }

    if nodes[index].children.is_empty() {
        return Vec::new();
    }

    let slots = build_children(index, nodes, session);
    collect_tree(&slots)
}

/// Builds the sibling slots for one parent node. Literals merge into an
/// existing slot when their subtrees are compatible; arguments always open a
/// slot of their own.
fn build_children(parent: usize, nodes: &[CommandNode], session: &Session) -> Vec<Vec<ParamInfo>> {
    let mut slots: Vec<Vec<ParamInfo>> = Vec::new();
    let mut literal_seen = false;

    for &child_index in &nodes[parent].children {
        let child = &nodes[child_index];

        if child.parser.is_none() {
            if !literal_seen {
                literal_seen = true;
                slots.push(vec![ParamInfo::literal(child_index, child)]);
            } else {
                let mut merged = false;
                'slots: for slot in slots.iter_mut() {
                    for info in slot.iter_mut() {
                        // All descending nodes must be compatible, otherwise
                        // this literal needs an overload of its own
                        if compatible(nodes, info.node, child_index) {
                            info.extend_enum(&child.name);
                            merged = true;
                            break 'slots;
                        }
                    }
                }
                if !merged {
                    slots.push(vec![ParamInfo::literal(child_index, child)]);
                }
            }
        } else {
            slots.push(vec![ParamInfo::argument(child_index, child, session)]);
        }
    }

    for slot in slots.iter_mut() {
        for info in slot.iter_mut() {
            info.children = build_children(info.node, nodes, session);
        }
    }

    slots
}

/// Whether two sibling nodes can share one overload: same parser kind, same
/// child count, and every child of `a` has some compatible child of `b`,
/// order independent.
///
/// Take `gamerule`: `doDaylightCycle` and `announceAdvancements` both parse
/// a boolean below them and merge into a single enum-valued parameter, while
/// `randomTickSpeed` parses an int and needs a separate overload.
fn compatible(nodes: &[CommandNode], a: usize, b: usize) -> bool {
    if a == b {
        return true;
    }
    let (node_a, node_b) = (&nodes[a], &nodes[b]);
    if node_a.parser != node_b.parser {
        return false;
    }
    if node_a.children.len() != node_b.children.len() {
        return false;
    }

    node_a.children.iter().all(|&child_a| {
        node_b
            .children
            .iter()
            .any(|&child_b| compatible(nodes, child_a, child_b))
    })
}

/// Flattens the slot tree into the overload matrix, depth first. Every path
/// from a first-level slot to a leaf becomes one overload row.
fn collect_tree(slots: &[Vec<ParamInfo>]) -> Vec<Vec<CommandParamData>> {
    let mut rows = Vec::new();

    for slot in slots {
        for info in slot {
            let child_rows = collect_tree(&info.children);

            if child_rows.is_empty() {
                rows.push(vec![info.data.clone()]);
            } else {
                for child_row in child_rows {
                    let mut row = Vec::with_capacity(child_row.len() + 1);
                    row.push(info.data.clone());
                    row.extend(child_row);
                    rows.push(row);
                }
            }
        }
    }

    rows
}

enum MappedType {
    Type(CommandParamType),
    Enum(Vec<String>),
}

/// Converts a Java parser kind to its Bedrock representation: either a
/// parameter type tag or a closed enum of values. Anything unmapped falls
/// through to a plain string.
fn map_parser(parser: Option<&CommandParser>, session: &Session) -> MappedType {
    let Some(parser) = parser else {
        return MappedType::Type(CommandParamType::String);
    };

    match parser {
        CommandParser::Float | CommandParser::Double | CommandParser::Rotation => {
            MappedType::Type(CommandParamType::Float)
        }
        CommandParser::Integer => MappedType::Type(CommandParamType::Int),
        CommandParser::Entity | CommandParser::GameProfile => {
            MappedType::Type(CommandParamType::Target)
        }
        CommandParser::BlockPos => MappedType::Type(CommandParamType::BlockPosition),
        CommandParser::ColumnPos | CommandParser::Vec3 => {
            MappedType::Type(CommandParamType::Position)
        }
        CommandParser::Message => MappedType::Type(CommandParamType::Message),
        CommandParser::Nbt
        | CommandParser::NbtCompoundTag
        | CommandParser::NbtTag
        | CommandParser::NbtPath => MappedType::Type(CommandParamType::Json),
        CommandParser::ResourceLocation | CommandParser::Function => {
            MappedType::Type(CommandParamType::FilePath)
        }
        CommandParser::Bool => {
            MappedType::Enum(ENUM_BOOLEAN.iter().map(|value| value.to_string()).collect())
        }
        CommandParser::Operation => MappedType::Type(CommandParamType::Operator),
        CommandParser::BlockState => MappedType::Enum(session.block_identifiers().to_vec()),
        CommandParser::ItemStack => MappedType::Enum(session.registry().item_names().to_vec()),
        CommandParser::ItemEnchantment => MappedType::Enum(
            enchantment::ALL_JAVA_IDENTIFIERS
                .iter()
                .map(|identifier| identifier.to_string())
                .collect(),
        ),
        CommandParser::EntitySummon => MappedType::Enum(
            entity_type::ALL_JAVA_IDENTIFIERS
                .iter()
                .map(|identifier| identifier.to_string())
                .collect(),
        ),
        CommandParser::Color => MappedType::Enum(NamedColor::names()),
        _ => MappedType::Type(CommandParamType::String),
    }
}
