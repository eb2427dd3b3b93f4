use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// Display is used by the interpreter to draw things on the screen. It owns
/// the logical pixel grid; collision detection happens against `get`, never
/// against whatever the physical output looks like. `present` flushes the
/// grid to the output, so a driver may buffer set/clear calls freely.
pub trait Display {
    /// state of one pixel
    fn get(&self, x: usize, y: usize) -> bool;

    /// turn one pixel on or off
    fn set(&mut self, x: usize, y: usize, on: bool);

    /// every pixel off
    fn clear(&mut self);

    /// flush the grid to the physical output
    fn present(&mut self) -> Result<(), io::Error>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}

/// the logical monochrome grid, one bool per pixel, row-major
struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PixelGrid {
    fn new(width: usize, height: usize) -> Self {
        PixelGrid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        self.cells[y * self.width + x] = on;
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.width - 1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.height - 1) as f64, 0.0]
    }

    /// expand the grid into x, y float coords suitable for a TUI canvas,
    /// picking only the pixels in the given state
    fn points(&self, lit: bool) -> impl std::iter::Iterator<Item = (f64, f64)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == lit)
            .map(move |(i, _)| ((i % w) as f64, -1.0 * ((i / w) as f64)))
    }
}

/// monochrome display in a terminal, rendered with TUI over crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    grid: PixelGrid,
}

impl MonoTermDisplay {
    pub fn new(x: usize, y: usize) -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(MonoTermDisplay {
            terminal,
            grid: PixelGrid::new(x, y),
        })
    }
}

impl Display for MonoTermDisplay {
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        self.grid.set(x, y, on);
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn present(&mut self) -> Result<(), io::Error> {
        let grid = &self.grid;
        // for now this assumes a 1:1 ratio between terminal, chip8 and the
        // internal TUI canvas
        self.terminal.draw(|f| {
            let size = Rect::new(0, 0, 2 + grid.width as u16, 2 + grid.height as u16);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds(grid.x_bounds())
                .y_bounds(grid.y_bounds())
                .marker(Marker::Block) //Braille
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &grid.points(false).collect::<Vec<_>>(),
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &grid.points(true).collect::<Vec<_>>(),
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }

    fn width(&self) -> usize {
        self.grid.width
    }

    fn height(&self) -> usize {
        self.grid.height
    }
}

/// useful for testing non-display routines; tracks the grid and counts
/// presents without touching a terminal
pub struct DummyDisplay {
    grid: PixelGrid,
    pub presents: u32,
}

impl DummyDisplay {
    pub fn new(x: usize, y: usize) -> Self {
        DummyDisplay {
            grid: PixelGrid::new(x, y),
            presents: 0,
        }
    }
}

impl Display for DummyDisplay {
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        self.grid.set(x, y, on);
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn present(&mut self) -> Result<(), io::Error> {
        self.presents += 1;
        Ok(())
    }

    fn width(&self) -> usize {
        self.grid.width
    }

    fn height(&self) -> usize {
        self.grid.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PixelGrid tests
    #[test]
    fn test_grid_starts_dark() {
        let g = PixelGrid::new(64, 32);
        assert!(g.points(true).next().is_none());
        assert_eq!(g.points(false).count(), 2048);
    }

    #[test]
    fn test_grid_set_get() {
        let mut g = PixelGrid::new(64, 32);
        g.set(63, 31, true);
        assert!(g.get(63, 31));
        g.set(63, 31, false);
        assert!(!g.get(63, 31));
    }

    #[test]
    fn test_grid_clear() {
        let mut g = PixelGrid::new(64, 32);
        g.set(3, 4, true);
        g.clear();
        assert!(!g.get(3, 4));
    }

    #[test]
    fn test_x_bounds() {
        let g = PixelGrid::new(64, 32);
        assert_eq!(g.x_bounds(), [0.0, 63.0]);
    }

    #[test]
    fn test_y_bounds() {
        let g = PixelGrid::new(64, 32);
        assert_eq!(g.y_bounds(), [-31.0, 0.0]);
    }

    #[test]
    fn test_point_expansion() {
        let mut g = PixelGrid::new(64, 32);
        g.set(2, 1, true);
        let lit: Vec<_> = g.points(true).collect();
        assert_eq!(lit, vec![(2.0, -1.0)]);
    }

    // DummyDisplay tests
    #[test]
    fn test_dummy_dimensions() {
        let d = DummyDisplay::new(64, 32);
        assert_eq!(d.width(), 64);
        assert_eq!(d.height(), 32);
    }

    #[test]
    fn test_dummy_counts_presents() {
        let mut d = DummyDisplay::new(64, 32);
        d.present().unwrap();
        d.present().unwrap();
        assert_eq!(d.presents, 2);
    }
}
