//! Input commands and keyboard repeat.

/// One of the four pan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative y
    Up,
    /// Towards positive y
    Down,
    /// Towards negative x
    Left,
    /// Towards positive x
    Right,
}

impl Direction {
    /// All directions, in the order keys are checked.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit pixel delta; screen y grows downwards.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The only input the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pan the camera one step.
    Move(Direction),
    /// Leave the frame loop.
    Quit,
}

/// Non-blocking source of commands. Backends drop every event that is not a
/// move or quit.
pub trait InputSource {
    /// Appends everything queued since the last poll to `out`.
    fn poll(&mut self, out: &mut Vec<Command>);
}

/// Shortest accepted repeat interval, in seconds.
pub const MIN_REPEAT_INTERVAL: f64 = 0.001;

/// Most presses a single update reports; a longer stall resynchronizes.
pub const MAX_REPEAT_BURST: u32 = 16;

/// Turns a held key into discrete presses: one on key-down, then one after
/// `delay` seconds and every `interval` seconds after that.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    delay: f64,
    interval: f64,
    next_fire: Option<f64>,
}

impl KeyRepeat {
    /// Creates a repeater. Times are in seconds.
    pub fn new(delay: f64, interval: f64) -> Self {
        KeyRepeat {
            delay,
            interval: interval.max(MIN_REPEAT_INTERVAL),
            next_fire: None,
        }
    }

    /// Number of presses produced at time `now` given whether the key is held.
    pub fn update(&mut self, held: bool, now: f64) -> u32 {
        if !held {
            self.next_fire = None;
            return 0;
        }
        match self.next_fire {
            None => {
                self.next_fire = Some(now + self.delay);
                1
            }
            Some(at) if now >= at => {
                let due = ((now - at) / self.interval).floor() + 1.0;
                if due > MAX_REPEAT_BURST as f64 {
                    self.next_fire = Some(now + self.interval);
                    return MAX_REPEAT_BURST;
                }
                let fired = due as u32;
                self.next_fire = Some(at + fired as f64 * self.interval);
                fired
            }
            Some(_) => 0,
        }
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        KeyRepeat::new(0.100, 0.050)
    }
}
