//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → [`UIViewModel`](crate::ui::UIViewModel)
//! 2. **Component Rendering**: view model → ANSI frame string
//!
//! [`render_to_string`] is pure and used by tests; [`render`] writes the frame
//! to stdout after clearing the screen.

use crate::app::AppState;
use crate::domain::Result;
use crate::ui::components;
use crate::ui::helpers::CLEAR_SCREEN;
use crate::ui::viewmodel::compute_viewmodel;
use std::io::Write;

/// Narrowest layout the components are laid out for.
const MIN_COLS: usize = 40;

/// Renders the current state into an ANSI-styled frame.
#[must_use]
pub fn render_to_string(state: &AppState, cols: usize) -> String {
    let viewmodel = compute_viewmodel(state);
    let mut frame = String::new();
    components::render_frame(&mut frame, &viewmodel, &state.theme, cols.max(MIN_COLS));
    frame
}

/// Clears the terminal and draws the current state.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn render(state: &AppState, cols: usize) -> Result<()> {
    let frame = render_to_string(state, cols);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    stdout.write_all(frame.as_bytes())?;
    stdout.write_all(b"> ")?;
    stdout.flush()?;
    Ok(())
}
