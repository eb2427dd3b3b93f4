///
/// ## Design
///
/// * one interpreter, four injected collaborators, nothing global
/// * registers, pc, stack pointer, index and timers live in the
///   interpreter; pixels live in the display; bytes live in the address
///   space -- collision detection only ever consults the logical grid
/// * opcodes decode once into a tagged value with named operand fields,
///   then a single dispatch executes them; reserved patterns are no-ops,
///   never errors
/// * timers tick on a 20ms wall-clock deadline sampled cooperatively from
///   step() and from inside the key-wait loop; there is no timer thread
/// * the stack is a region of the address space itself, as on the
///   original machine, so deep call chains can scribble over the large
///   font and nobody will stop them
/// * the terminal drivers (tui canvas, crossterm events, pc-speaker beep)
///   are one implementation each of the collaborator traits; the dummy
///   drivers substitute for them in tests
///
/// Model
///
/// main
///  |-- memory(fonts) <- load_program(rom file)
///  |-- display, input, tone
///  |-- interpreter(memory, display, input, tone)
///  `-- interpreter.run(rate)
///       |-- step(): fetch, decode, execute, cadence check
///       `-- sleep(1/rate)
pub mod display;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod sound;
