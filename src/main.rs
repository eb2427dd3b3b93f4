use clap::{arg, command, value_parser, ArgAction};
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use okto::display::MonoTermDisplay;
use okto::input::CrosstermInput;
use okto::interpreter::Chip8Interpreter;
use okto::memory::Chip8AddressSpace;
use okto::sound::{BuzzerTone, Mute, Tone};

fn main() -> Result<(), Box<dyn Error>> {
    let rom_arg = arg!([rom] "Path of the CHIP-8 program image to run")
        .required(true)
        .value_parser(value_parser!(PathBuf));

    let rate_arg = arg!(-r --rate <STEPS> "Instructions to execute per second")
        .value_parser(value_parser!(u32).range(1..))
        .default_value("700");

    let mute_arg = arg!(-m --mute "Run without the buzzer").action(ArgAction::SetTrue);

    let matches = command!()
        .arg(rom_arg)
        .arg(rate_arg)
        .arg(mute_arg)
        .get_matches();

    let rom = matches.get_one::<PathBuf>("rom").unwrap();
    let rate = *matches.get_one::<u32>("rate").unwrap();
    let mute = *matches.get_one::<bool>("mute").unwrap();

    // a bad ROM is reported here, before the machine exists
    let mut memory = Chip8AddressSpace::new();
    let mut f = File::open(rom)?;
    memory.load_program(&mut f)?;

    let mut display = MonoTermDisplay::new(64, 32)?;
    let mut input = CrosstermInput::new();
    let mut tone: Box<dyn Tone> = if mute {
        Box::new(Mute::new())
    } else {
        Box::new(BuzzerTone::new())
    };

    let mut interpreter =
        Chip8Interpreter::new(&mut memory, &mut display, &mut input, tone.as_mut());
    match interpreter.run(rate) {
        // Esc in the input driver is the quit signal, not a failure
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
        other => other?,
    }

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..12 {
        println!();
    }
    Ok(())
}
