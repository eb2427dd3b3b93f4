use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// map of keyboard characters to the hex pad the chip8 expects, using the
/// left-hand side of a qwerty keyboard
const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00), // x
    ('1', 0x01), // 1
    ('2', 0x02), // 2
    ('3', 0x03), // 3
    ('q', 0x04), // q
    ('w', 0x05), // w
    ('e', 0x06), // e
    ('a', 0x07), // a
    ('s', 0x08), // s
    ('d', 0x09), // d
    ('z', 0x0a), // z
    ('c', 0x0b), // c
    ('4', 0x0c), // 4
    ('r', 0x0d), // r
    ('f', 0x0e), // f
    ('v', 0x0f), // v
];

/// how long a key event counts as "still held". terminals report presses,
/// not releases, so the hardware notion of a held key has to be faked with
/// a decay window that outlasts the keyboard's autorepeat delay
const KEY_HOLD: Duration = Duration::from_millis(200);

fn into_io(e: crossterm::ErrorKind) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

/// reports the state of the hex pad
pub trait Input {
    /// the key currently held down, if any. "no key" and "key 0x0-0xf" are
    /// the only observable states
    fn current_key(&mut self) -> Result<Option<u8>, io::Error>;
}

/// simple implementation of Input over crossterm key events
pub struct CrosstermInput {
    keymap: HashMap<char, u8>,
    last: Option<(u8, Instant)>,
}

impl CrosstermInput {
    pub fn new() -> Self {
        terminal::enable_raw_mode().unwrap();
        CrosstermInput {
            keymap: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
            last: None,
        }
    }

    fn drain_events(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0)).map_err(into_io)? {
            match read().map_err(into_io)? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(mapped_key) => self.last = Some((*mapped_key, Instant::now())),
                        None => {
                            eprintln!("Warning: can't map {:?} to a COSMAC key", key);
                        }
                    },
                    // the one way out of the machine
                    KeyCode::Esc => {
                        return Err(io::Error::new(io::ErrorKind::Interrupted, "quit requested"));
                    }
                    _ => {
                        eprintln!("Warning: unknown key event received");
                    }
                },
                _ => {
                    eprintln!("Warning: unknown event received");
                }
            }
        }
        Ok(())
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

impl Input for CrosstermInput {
    fn current_key(&mut self) -> Result<Option<u8>, io::Error> {
        self.drain_events()?;
        Ok(match self.last {
            Some((key, seen)) if seen.elapsed() < KEY_HOLD => Some(key),
            _ => None,
        })
    }
}

/// dummy Input implementation for testing: plays back a scripted sequence of
/// pad states, holding the final one forever
pub struct DummyInput {
    states: VecDeque<Option<u8>>,
}

impl DummyInput {
    pub fn new(states: &[Option<u8>]) -> Self {
        DummyInput {
            states: VecDeque::from(Vec::from(states)),
        }
    }
}

impl Input for DummyInput {
    fn current_key(&mut self) -> Result<Option<u8>, io::Error> {
        Ok(match self.states.len() {
            0 => None,
            1 => self.states[0],
            _ => self.states.pop_front().unwrap(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_plays_back_states() {
        let mut input = DummyInput::new(&[None, Some(0x4), Some(0x5)]);
        assert_eq!(input.current_key().unwrap(), None);
        assert_eq!(input.current_key().unwrap(), Some(0x4));
        assert_eq!(input.current_key().unwrap(), Some(0x5));
    }

    #[test]
    fn test_dummy_holds_final_state() {
        let mut input = DummyInput::new(&[Some(0xe)]);
        assert_eq!(input.current_key().unwrap(), Some(0xe));
        assert_eq!(input.current_key().unwrap(), Some(0xe));
    }

    #[test]
    fn test_dummy_empty_reports_no_key() {
        let mut input = DummyInput::new(&[]);
        assert_eq!(input.current_key().unwrap(), None);
    }

    #[test]
    fn test_keymap_covers_the_pad() {
        let keymap: HashMap<char, u8> = HashMap::from(CHIP8_CONVENTIONAL_KEYMAP);
        let mut pad: Vec<u8> = keymap.values().copied().collect();
        pad.sort_unstable();
        assert_eq!(pad, (0x0..=0xf).collect::<Vec<u8>>());
    }
}
