use beep::beep;
use std::io;

/// two-state audio gate driven by the sound timer
pub trait Tone {
    fn set_active(&mut self, active: bool) -> Result<(), io::Error>;
}

const BUZZER_PITCH: u16 = 2093; // C

/// PC speaker buzzer
pub struct BuzzerTone {
    is_beeping: bool,
}

impl BuzzerTone {
    pub fn new() -> Self {
        BuzzerTone { is_beeping: false }
    }
}

impl Default for BuzzerTone {
    fn default() -> Self {
        Self::new()
    }
}

impl Tone for BuzzerTone {
    fn set_active(&mut self, active: bool) -> Result<(), io::Error> {
        // the gate is redriven every timer tick; only touch the speaker on a
        // transition
        if active != self.is_beeping {
            let pitch = if active { BUZZER_PITCH } else { 0 };
            beep(pitch).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            self.is_beeping = active;
        }
        Ok(())
    }
}

pub struct Mute {}
impl Mute {
    pub fn new() -> Self {
        Mute {}
    }
}
impl Tone for Mute {
    fn set_active(&mut self, _active: bool) -> Result<(), io::Error> {
        Ok(())
    }
}
