use super::state::GridPoint;

/// Directional command read from the input channel once per tick
///
/// `None` is the channel's idle value, seen until the first press; after that
/// the channel always reports the latest direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    /// The unit displacement this command asks for. `None` maps to the zero
    /// vector.
    pub fn delta(self) -> GridPoint {
        match self {
            Command::None => GridPoint::ZERO,
            Command::Up => GridPoint::new(0, -1),
            Command::Down => GridPoint::new(0, 1),
            Command::Left => GridPoint::new(-1, 0),
            Command::Right => GridPoint::new(1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_deltas() {
        assert_eq!(Command::None.delta(), GridPoint::ZERO);
        assert_eq!(Command::Up.delta(), GridPoint::new(0, -1));
        assert_eq!(Command::Down.delta(), GridPoint::new(0, 1));
        assert_eq!(Command::Left.delta(), GridPoint::new(-1, 0));
        assert_eq!(Command::Right.delta(), GridPoint::new(1, 0));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Command::default(), Command::None);
    }
}
