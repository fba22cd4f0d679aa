use std::sync::atomic::{AtomicU8, Ordering};

use crate::game::Command;

/// Single-slot, last-write-wins command channel
///
/// Stands in for the direction variable the button interrupt used to write.
/// Stores overwrite unconditionally; loads do not consume — the slot keeps
/// reporting the latest command until a newer one lands. Rapid presses
/// between two ticks collapse to the last one.
pub struct CommandMailbox {
    slot: AtomicU8,
}

impl CommandMailbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(encode(Command::None)),
        }
    }

    pub fn store(&self, command: Command) {
        // A single word with no data trailing behind it; no ordering needed.
        self.slot.store(encode(command), Ordering::Relaxed);
    }

    pub fn load(&self) -> Command {
        decode(self.slot.load(Ordering::Relaxed))
    }
}

impl Default for CommandMailbox {
    fn default() -> Self {
        Self::new()
    }
}

const fn encode(command: Command) -> u8 {
    match command {
        Command::None => 0,
        Command::Up => 1,
        Command::Down => 2,
        Command::Left => 3,
        Command::Right => 4,
    }
}

fn decode(raw: u8) -> Command {
    match raw {
        1 => Command::Up,
        2 => Command::Down,
        3 => Command::Left,
        4 => Command::Right,
        _ => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_idle() {
        let mailbox = CommandMailbox::new();
        assert_eq!(mailbox.load(), Command::None);
    }

    #[test]
    fn test_load_does_not_consume() {
        let mailbox = CommandMailbox::new();
        mailbox.store(Command::Up);

        assert_eq!(mailbox.load(), Command::Up);
        assert_eq!(mailbox.load(), Command::Up);
    }

    #[test]
    fn test_last_write_wins() {
        let mailbox = CommandMailbox::new();
        mailbox.store(Command::Up);
        mailbox.store(Command::Left);
        mailbox.store(Command::Down);

        assert_eq!(mailbox.load(), Command::Down);
    }

    #[test]
    fn test_roundtrips_every_command() {
        let mailbox = CommandMailbox::new();
        for command in [
            Command::None,
            Command::Up,
            Command::Down,
            Command::Left,
            Command::Right,
        ] {
            mailbox.store(command);
            assert_eq!(mailbox.load(), command);
        }
    }

    #[test]
    fn test_store_from_another_thread() {
        let mailbox = Arc::new(CommandMailbox::new());
        let producer = Arc::clone(&mailbox);

        std::thread::spawn(move || producer.store(Command::Right))
            .join()
            .unwrap();

        assert_eq!(mailbox.load(), Command::Right);
    }
}
