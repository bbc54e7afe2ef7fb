pub mod commands;

pub use commands::{CommandNode, CommandParser, JDeclareCommands, NodeKind};
