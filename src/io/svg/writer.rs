use std::io::Write;

use anyhow::{Ok, Result};

/// Thin XML-emitting wrapper around any byte sink.
pub(crate) struct SvgWriter<W: Write> {
    writer: W,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl<W: Write> Write for SvgWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl<W: Write> SvgWriter<W> {
    /// Create a new SVG writer over a sink.
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the SVG header, including the XML declaration and opening <svg> tag.
    /// The lon/lat window and projection parameters ride along as data attributes.
    pub(crate) fn write_header(&mut self, width: f64, height: f64, margin: f64, scale: f64, window: &geo::Rect) -> Result<()> {
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg"
            width="{width}" height="{height}"
            viewBox="0 0 {width} {height}"
            data-lon-min="{lon_min}" data-lon-max="{lon_max}"
            data-lat-min="{lat_min}" data-lat-max="{lat_max}"
            data-margin="{margin}" data-scale="{scale}">"##,
            lon_min = window.min().x,
            lon_max = window.max().x,
            lat_min = window.min().y,
            lat_max = window.max().y,
        )?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    /// Write SVG styles for county features. Suppressed counties keep their
    /// outline path but drop to fill-opacity 0, like the interactive viewer.
    pub(crate) fn write_styles(&mut self) -> Result<()> {
        writeln!(self, r##"<defs>
<style>
    .county {{ stroke: #ffffff; stroke-width: 0.5; fill-opacity: 0.7; }}
    .county.hidden {{ fill-opacity: 0; }}
</style>
</defs>"##)?;
        Ok(())
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        Ok(())
    }
}
