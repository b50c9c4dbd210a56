//! Line-oriented surface for pipes, logs and terminals without full-screen support.

use crate::display::face::ClockFace;
use crate::display::surface::DisplaySurface;
use crate::display::time::DisplayField;
use crate::error::Result;
use std::io::Write;

/// Writes one `HH:MM:SS AM  Weekday, Month D, YYYY` line per presented frame.
pub struct PlainSurface<W: Write> {
    out: W,
    face: ClockFace,
    show_date: bool,
}

impl<W: Write> PlainSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            face: ClockFace::new(),
            show_date: true,
        }
    }

    pub fn show_date(mut self, show: bool) -> Self {
        self.show_date = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for PlainSurface<W> {
    fn write_field(&mut self, field: DisplayField, text: &str) -> Result<()> {
        self.face.set(field, text);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.face.is_blank() {
            return Ok(());
        }
        if self.show_date {
            writeln!(self.out, "{}  {}", self.face.time_line(), self.face.date)?;
        } else {
            writeln!(self.out, "{}", self.face.time_line())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::time::DisplayTime;
    use chrono::NaiveDate;

    fn write_instant<W: Write>(surface: &mut PlainSurface<W>, h: u32, m: u32, s: u32) {
        let instant = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        for (field, text) in DisplayTime::from_datetime(&instant).fields() {
            surface.write_field(field, &text).unwrap();
        }
        surface.present().unwrap();
    }

    #[test]
    fn test_one_line_per_frame() {
        let mut surface = PlainSurface::new(Vec::new());
        write_instant(&mut surface, 0, 5, 9);
        write_instant(&mut surface, 0, 5, 10);

        let output = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(
            output,
            "12:05:09 AM  Sunday, October 18, 2026\n12:05:10 AM  Sunday, October 18, 2026\n"
        );
    }

    #[test]
    fn test_date_can_be_hidden() {
        let mut surface = PlainSurface::new(Vec::new()).show_date(false);
        write_instant(&mut surface, 23, 59, 59);
        let output = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(output, "11:59:59 PM\n");
    }

    #[test]
    fn test_blank_face_writes_nothing() {
        let mut surface = PlainSurface::new(Vec::new());
        surface.present().unwrap();
        assert!(surface.into_inner().is_empty());
    }
}
