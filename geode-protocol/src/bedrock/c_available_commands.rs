use bytes::BytesMut;

use super::command::CommandData;
use crate::bytebuf::ByteBufMut;
use crate::ClientPacket;

/// The outbound command list. Sending an empty packet is meaningful: it
/// stops the Bedrock client from falling back to its own built-in /help.
#[derive(Debug, Clone, Default)]
pub struct CAvailableCommands {
    pub commands: Vec<CommandData>,
}

impl CAvailableCommands {
    pub fn new(commands: Vec<CommandData>) -> Self {
        Self { commands }
    }
}

impl ClientPacket for CAvailableCommands {
    const PACKET_ID: i32 = 0x4C;

    fn write(&self, bytebuf: &mut BytesMut) {
        bytebuf.put_list(&self.commands, |bytebuf, command| command.write_to(bytebuf));
    }
}
