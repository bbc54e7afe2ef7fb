use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};

use geode_protocol::bedrock::command::{CommandData, CommandEnumData, CommandParamData};
use geode_protocol::bedrock::CAvailableCommands;
use geode_protocol::java::{CommandNode, JDeclareCommands};

use crate::Session;

mod param;

/// Translates a Java declare-commands packet into the Bedrock command list
/// and sends it upstream.
pub fn translate_commands(session: &Session, packet: &JDeclareCommands) {
    translate_command_nodes(session, &packet.nodes, packet.root_index);
}

pub fn translate_command_nodes(session: &Session, nodes: &[CommandNode], root_index: usize) {
    if !session.config().command_suggestions {
        debug!("Not sending translated command suggestions as they are disabled.");
        // An empty packet stops the Bedrock client from falling back to its
        // own built-in /help.
        session.send_upstream(&CAvailableCommands::default());
        return;
    }

    let commands = build_command_data(session, nodes, root_index);

    debug!("Sending command packet of {} commands", commands.len());
    session.send_upstream(&CAvailableCommands::new(commands));
}

/// Builds one command descriptor per distinct overload matrix. Commands that
/// share a matrix collapse into a single descriptor carrying every name as
/// an alias.
pub fn build_command_data(
    session: &Session,
    nodes: &[CommandNode],
    root_index: usize,
) -> Vec<CommandData> {
    let Some(root) = nodes.get(root_index) else {
        warn!("Declare commands root index {root_index} is out of bounds");
        return Vec::new();
    };

    let mut seen_nodes: HashSet<usize> = HashSet::new();
    let mut known_aliases: HashSet<String> = HashSet::new();
    // Keyed by the full overload matrix: grouping relies on structural deep
    // equality and hashing, and insertion order keeps the output stable.
    let mut command_groups: IndexMap<Vec<Vec<CommandParamData>>, Vec<String>> = IndexMap::new();

    for &node_index in &root.children {
        let Some(node) = nodes.get(node_index) else {
            continue;
        };

        // More than one root node produces duplicated commands
        if !seen_nodes.insert(node_index) {
            continue;
        }
        let alias = node.name.to_lowercase();
        if !known_aliases.insert(alias.clone()) {
            continue;
        }

        let overloads = param::build_overloads(node_index, nodes, session);
        command_groups.entry(overloads).or_default().push(alias);
    }

    let mut commands = Vec::with_capacity(command_groups.len());
    for (overloads, aliases) in command_groups {
        let name = aliases[0].clone();
        let aliases_enum =
            CommandEnumData::new(format!("{name}Aliases"), aliases, false);

        commands.push(CommandData {
            name: name.clone(),
            description: session.command_description(&name),
            flags: 0,
            permission: 0,
            aliases: aliases_enum,
            overloads,
        });
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use bytes::Bytes;
    use geode_config::BridgeConfiguration;
    use geode_protocol::bedrock::command::CommandParamType;
    use geode_protocol::java::CommandParser;
    use geode_registry::{CreativeItems, ItemRegistry};
    use tokio::sync::mpsc;

    fn test_registry() -> Arc<ItemRegistry> {
        let palette = vec![
            geode_registry::RuntimeItemState {
                name: "minecraft:stone".to_string(),
                id: 1,
            },
            geode_registry::RuntimeItemState {
                name: "minecraft:lodestone_compass".to_string(),
                id: 741,
            },
        ];
        let mut mappings = geode_registry::ItemMappings::new();
        mappings.insert(
            "minecraft:stone".to_string(),
            geode_registry::MappedItem {
                bedrock_id: 1,
                bedrock_data: 0,
                is_block: true,
                stack_size: None,
                tool_type: None,
                tool_tier: None,
            },
        );
        Arc::new(
            ItemRegistry::from_parts(palette, mappings, CreativeItems { items: Vec::new() }, false)
                .unwrap(),
        )
    }

    fn test_session(command_suggestions: bool) -> (Session, mpsc::UnboundedReceiver<Bytes>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let config = BridgeConfiguration {
            add_non_bedrock_items: false,
            command_suggestions,
        };
        (Session::new(test_registry(), config, sender), receiver)
    }

    /// The gamerule shape: two boolean rules and one integer rule.
    fn gamerule_nodes() -> Vec<CommandNode> {
        vec![
            CommandNode::root(vec![1]),
            CommandNode::literal("gamerule", vec![2, 3, 4]),
            CommandNode::literal("doDaylightCycle", vec![5]),
            CommandNode::literal("announceAdvancements", vec![6]),
            CommandNode::literal("randomTickSpeed", vec![7]),
            CommandNode::argument("value", CommandParser::Bool, vec![]),
            CommandNode::argument("value", CommandParser::Bool, vec![]),
            CommandNode::argument("value", CommandParser::Integer, vec![]),
        ]
    }

    #[test]
    fn gamerule_coalesces_compatible_literals() {
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &gamerule_nodes(), 0);

        assert_eq!(commands.len(), 1);
        let command = &commands[0];
        assert_eq!(command.name, "gamerule");
        assert_eq!(command.overloads.len(), 2);

        let bool_row = &command.overloads[0];
        assert_eq!(bool_row.len(), 2);
        let rule = bool_row[0].enum_data.as_ref().unwrap();
        // the enum keeps the first merged literal's name
        assert_eq!(rule.name, "doDaylightCycle");
        assert_eq!(rule.values, vec!["doDaylightCycle", "announceAdvancements"]);
        let value = bool_row[1].enum_data.as_ref().unwrap();
        assert_eq!(value.values, vec!["true", "false"]);
        assert!(bool_row[1].param_type.is_none());

        let int_row = &command.overloads[1];
        assert_eq!(int_row.len(), 2);
        let rule = int_row[0].enum_data.as_ref().unwrap();
        assert_eq!(rule.values, vec!["randomTickSpeed"]);
        assert_eq!(int_row[1].param_type, Some(CommandParamType::Int));
        assert!(int_row[1].enum_data.is_none());
    }

    #[test]
    fn redirects_group_as_aliases() {
        let nodes = vec![
            CommandNode::root(vec![1, 2]),
            CommandNode::literal("teleport", vec![3]),
            CommandNode::redirect("tp", 1),
            CommandNode::argument("destination", CommandParser::Entity, vec![]),
        ];
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &nodes, 0);

        assert_eq!(commands.len(), 1);
        let command = &commands[0];
        assert_eq!(command.name, "teleport");
        assert_eq!(command.aliases.name, "teleportAliases");
        assert_eq!(command.aliases.values, vec!["teleport", "tp"]);
        assert_eq!(command.overloads.len(), 1);
        assert_eq!(
            command.overloads[0][0].param_type,
            Some(CommandParamType::Target)
        );
    }

    #[test]
    fn duplicate_roots_and_names_deduplicate() {
        let nodes = vec![
            CommandNode::root(vec![1, 1, 2]),
            CommandNode::literal("stop", vec![]),
            CommandNode::literal("STOP", vec![]),
        ];
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &nodes, 0);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "stop");
        assert_eq!(commands[0].aliases.values, vec!["stop"]);
        assert!(commands[0].overloads.is_empty());
    }

    #[test]
    fn item_stack_arguments_use_registry_names() {
        let nodes = vec![
            CommandNode::root(vec![1]),
            CommandNode::literal("give", vec![2]),
            CommandNode::argument("item", CommandParser::ItemStack, vec![]),
        ];
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &nodes, 0);

        let item = commands[0].overloads[0][1].enum_data.as_ref().unwrap();
        assert_eq!(item.name, "item");
        assert_eq!(
            item.values,
            vec![
                "minecraft:stone",
                "minecraft:furnace_minecart",
                "minecraft:spectral_arrow"
            ]
        );
    }

    #[test]
    fn incompatible_depths_stay_separate_overloads() {
        // Two literals whose subtrees agree in shape but not parser kind.
        let nodes = vec![
            CommandNode::root(vec![1]),
            CommandNode::literal("scoreboard", vec![2, 3]),
            CommandNode::literal("players", vec![4]),
            CommandNode::literal("objectives", vec![5]),
            CommandNode::argument("target", CommandParser::Entity, vec![]),
            CommandNode::argument("name", CommandParser::String, vec![]),
        ];
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &nodes, 0);

        assert_eq!(commands[0].overloads.len(), 2);
    }

    #[test]
    fn structurally_identical_commands_group_no_matter_the_order() {
        let nodes = vec![
            CommandNode::root(vec![1, 2]),
            CommandNode::literal("msg", vec![3]),
            CommandNode::literal("w", vec![4]),
            CommandNode::argument("message", CommandParser::Message, vec![]),
            CommandNode::argument("message", CommandParser::Message, vec![]),
        ];
        let (session, _receiver) = test_session(true);
        let commands = build_command_data(&session, &nodes, 0);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].aliases.values, vec!["msg", "w"]);
    }

    #[test]
    fn emission_is_deterministic() {
        let (session, mut receiver) = test_session(true);
        let nodes = gamerule_nodes();
        translate_command_nodes(&session, &nodes, 0);
        translate_command_nodes(&session, &nodes, 0);

        let first = receiver.try_recv().unwrap();
        let second = receiver.try_recv().unwrap();
        assert_eq!(first, second);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn disabled_suggestions_send_an_empty_packet() {
        let (session, mut receiver) = test_session(false);
        translate_command_nodes(&session, &gamerule_nodes(), 0);

        let bytes = receiver.try_recv().unwrap();
        // packet id 0x4C plus a zero-length command list
        assert_eq!(&bytes[..], &[0x4C, 0x00]);
    }
}
