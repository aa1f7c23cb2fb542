use crate::utils::error::Result;
use std::fmt::Display;
use std::io::Write;

/// A record that knows how to put itself on a text stream as one line.
pub trait Render: Display {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}
