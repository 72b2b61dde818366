//! Crossterm front end for the pipeline animation.
//!
//! This module owns the terminal for the lifetime of a run. It provides:
//! 1. **Setup:** Raw mode plus the alternate screen behind an RAII guard.
//! 2. **Painting:** Tab bar, cycle ruler, stage band, and instruction blocks.
//! 3. **Input:** Tab switching on number keys, quit on `q`/`Esc`/`Ctrl-C`.
//!
//! Each visible tick paints the moved blocks and wipes them again after a
//! short hold. The blank gap between ticks is what makes consecutive cycle
//! steps readable instead of a smear.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use pipevis_core::config::Config;
use pipevis_core::controller::{CycleController, RunPhase};
use pipevis_core::grid;
use pipevis_core::predictor::PredictorKind;
use pipevis_core::simulator::Simulator;

/// Terminal row of the tab bar.
const TAB_ROW: u16 = 0;
/// Terminal row of the cycle ruler.
const RULER_ROW: u16 = 2;
/// Terminal row of grid row 0; grid row `r` paints at `GRID_TOP + r`.
const GRID_TOP: u16 = 3;
/// Terminal row of the key-help footer.
const FOOTER_ROW: u16 = GRID_TOP + grid::TOTAL_ROWS as u16 + 1;
/// Width of one cycle column.
const CELL_WIDTH: u16 = 4;
/// Width of the left gutter carrying the row labels, five cells wide.
const GUTTER_WIDTH: u16 = 5 * CELL_WIDTH;
/// Poll timeout while no timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Grid row of the waiting-area label.
const WAITING_LABEL_ROW: usize = 2;
/// Grid row of the completed-area label.
const COMPLETED_LABEL_ROW: usize = 9;

/// Block color of the conditional jump.
const JUMP_COLOR: Color = Color::Rgb { r: 15, g: 244, b: 244 };
/// Block color of the first straight-line instruction.
const NORMAL1_COLOR: Color = Color::Rgb { r: 242, g: 236, b: 20 };
/// Block color of the second straight-line instruction.
const NORMAL2_COLOR: Color = Color::Rgb { r: 255, g: 69, b: 69 };
/// Background band marking the pipeline stage rows.
const STAGE_BAND: Color = Color::DarkGrey;

/// Puts the terminal into raw alternate-screen mode and restores it on drop.
///
/// The guard is what keeps an error in the event loop from stranding the
/// user's shell in raw mode: unwinding runs the restore either way.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the interactive animation until the viewer quits.
///
/// Arms the controller on entry, then alternates between waiting for input
/// and firing due ticks. Every visible tick is painted and held, then wiped
/// until the next one lands.
///
/// # Errors
///
/// Returns any terminal I/O failure. The terminal itself is restored by the
/// guard before the error propagates.
pub fn run(controller: &mut CycleController, config: &Config) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    controller.start(Instant::now());

    let hold = config.hold();
    // Blocks start visible so the initial layout is on show during the
    // first-tick delay; after that they only show during a tick's hold.
    let mut blocks_visible = true;
    draw(&mut guard.out, controller, blocks_visible)?;

    loop {
        let now = Instant::now();
        let timeout = controller
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let before = controller.active();
                    if should_quit(key, controller) {
                        return Ok(());
                    }
                    if controller.active() != before {
                        // Fresh tab: show its initial layout like a new run.
                        blocks_visible = true;
                    }
                    draw(&mut guard.out, controller, blocks_visible)?;
                }
                Event::Resize(..) => draw(&mut guard.out, controller, blocks_visible)?,
                _ => {}
            }
            continue;
        }

        if controller.poll(Instant::now()) {
            draw(&mut guard.out, controller, true)?;
            hold_frame(hold);
            blocks_visible = false;
            draw(&mut guard.out, controller, blocks_visible)?;
        }
    }
}

/// Applies one key press. Returns whether the viewer asked to quit.
fn should_quit(key: KeyEvent, controller: &mut CycleController) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(c @ '1'..='9') => {
            // select() ignores indices beyond the real tab count.
            let index = (c as usize) - ('1' as usize);
            controller.select(index, Instant::now());
            false
        }
        _ => false,
    }
}

/// Keeps the painted frame up for `hold`.
///
/// Returns early when input arrives so the main loop can act on it; the
/// event stays queued. A failed wait is logged and written off as an
/// elapsed hold rather than ending the animation.
fn hold_frame(hold: Duration) {
    if let Err(err) = event::poll(hold) {
        tracing::warn!(%err, "input wait interrupted");
    }
}

/// Paints one full frame of the active tab.
///
/// `show_blocks` selects the on-phase of the blink; chrome (tabs, ruler,
/// labels, stage band, footer) is painted either way.
fn draw(out: &mut Stdout, controller: &CycleController, show_blocks: bool) -> io::Result<()> {
    let sim = controller.active_simulator();
    let columns = sim.state().total_columns();

    let (width, height) = terminal::size()?;
    if width < required_width(columns) || height <= FOOTER_ROW {
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print("terminal too small for the animation")
        )?;
        return out.flush();
    }

    queue!(out, Clear(ClearType::All))?;
    draw_tabs(out, controller)?;
    draw_ruler(out, columns)?;
    draw_gutter(out)?;
    draw_stage_band(out, columns)?;
    if show_blocks {
        draw_blocks(out, sim)?;
    }
    draw_footer(out, controller)?;
    out.flush()
}

/// Tab bar with the active strategy inverted.
fn draw_tabs(out: &mut Stdout, controller: &CycleController) -> io::Result<()> {
    queue!(out, MoveTo(0, TAB_ROW))?;
    for (index, kind) in PredictorKind::ALL.iter().enumerate() {
        let label = format!(" {} {} ", index + 1, kind.label());
        if index == controller.active() {
            queue!(
                out,
                SetBackgroundColor(Color::White),
                SetForegroundColor(Color::Black),
                Print(label),
                ResetColor
            )?;
        } else {
            queue!(out, Print(label))?;
        }
        queue!(out, Print(" "))?;
    }
    Ok(())
}

/// Cycle numbers across the top, one per column the active variant can use.
fn draw_ruler(out: &mut Stdout, columns: usize) -> io::Result<()> {
    queue!(
        out,
        MoveTo(GUTTER_WIDTH, RULER_ROW),
        SetForegroundColor(Color::DarkGrey)
    )?;
    for cycle in 0..=columns {
        queue!(out, Print(format!("{cycle:<width$}", width = CELL_WIDTH as usize)))?;
    }
    queue!(out, ResetColor)?;
    Ok(())
}

/// Row labels in the left gutter.
fn draw_gutter(out: &mut Stdout) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, grid_row(WAITING_LABEL_ROW)),
        Print("Waiting")
    )?;
    for (offset, name) in grid::STAGE_NAMES.iter().enumerate() {
        queue!(
            out,
            MoveTo(0, grid_row(grid::PIPELINE_ROW + offset)),
            Print(format!("Stage {}: {name}", offset + 1))
        )?;
    }
    queue!(
        out,
        MoveTo(0, grid_row(COMPLETED_LABEL_ROW)),
        Print("Completed")
    )?;
    Ok(())
}

/// Shaded band across the pipeline stage rows.
fn draw_stage_band(out: &mut Stdout, columns: usize) -> io::Result<()> {
    let width = (columns + 1) * CELL_WIDTH as usize;
    queue!(out, SetBackgroundColor(STAGE_BAND))?;
    for offset in 0..grid::STAGE_COUNT {
        queue!(
            out,
            MoveTo(GUTTER_WIDTH, grid_row(grid::PIPELINE_ROW + offset)),
            Print(" ".repeat(width))
        )?;
    }
    queue!(out, ResetColor)?;
    Ok(())
}

/// The three instruction blocks at their current rows and column.
///
/// Paint order matters at the bottom row, where finished instructions share
/// a cell: later paints win.
fn draw_blocks(out: &mut Stdout, sim: &Simulator) -> io::Result<()> {
    let state = sim.state();
    let column = state.column();
    draw_block(out, column, state.jump_row, JUMP_COLOR)?;
    draw_block(out, column, state.normal1_row, NORMAL1_COLOR)?;
    draw_block(out, column, state.normal2_row, NORMAL2_COLOR)
}

fn draw_block(out: &mut Stdout, column: usize, row: usize, color: Color) -> io::Result<()> {
    let x = GUTTER_WIDTH + (column as u16) * CELL_WIDTH;
    queue!(
        out,
        MoveTo(x, grid_row(row)),
        SetBackgroundColor(color),
        Print("   "),
        ResetColor
    )
}

/// Key help, run phase, and color legend.
fn draw_footer(out: &mut Stdout, controller: &CycleController) -> io::Result<()> {
    let phase = match controller.phase(controller.active()) {
        RunPhase::Idle => "idle",
        RunPhase::Running => "running",
        RunPhase::Terminal => "done",
    };
    queue!(
        out,
        MoveTo(0, FOOTER_ROW),
        Print(format!("[1-3] switch strategy   [q] quit   run: {phase}   "))
    )?;
    for (color, name) in [
        (JUMP_COLOR, "jump"),
        (NORMAL1_COLOR, "insn 1"),
        (NORMAL2_COLOR, "insn 2"),
    ] {
        queue!(
            out,
            SetBackgroundColor(color),
            Print("  "),
            ResetColor,
            Print(format!(" {name}  "))
        )?;
    }
    Ok(())
}

/// Terminal row a grid row paints on.
const fn grid_row(row: usize) -> u16 {
    GRID_TOP + row as u16
}

/// Terminal width a frame of `columns` cycles needs.
const fn required_width(columns: usize) -> u16 {
    GUTTER_WIDTH + (columns as u16 + 1) * CELL_WIDTH
}
