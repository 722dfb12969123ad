//! Text rendering of a grid for terminal output.
//!
//! ```text
//! Generation: 3
//! +-----+
//! |     |
//! |  *  |
//! +-----+
//! ```

use std::io::{self, Write};

use crate::compute::GridEngine;

const ALIVE: char = '*';
const DEAD: char = ' ';

/// Write the generation header and a bordered ASCII picture of the grid.
pub fn render<S, W>(engine: &GridEngine<S>, out: &mut W) -> io::Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    W: Write,
{
    let border = format!("+{}+", "-".repeat(engine.width()));

    writeln!(out, "Generation: {}", engine.generation())?;
    writeln!(out, "{border}")?;
    for row in engine.cells().chunks(engine.width()) {
        let line: String = row
            .iter()
            .map(|&c| if c != 0 { ALIVE } else { DEAD })
            .collect();
        writeln!(out, "|{line}|")?;
    }
    writeln!(out, "{border}")?;
    Ok(())
}

/// Render into an owned string.
pub fn render_to_string<S>(engine: &GridEngine<S>) -> String
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = render(engine, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
