use super::grid::{Grid, DAYS_IN_WEEK};
use crate::model::{HORIZON, WEEKS_TO_COUNT};
use chrono::{Datelike, Duration, NaiveDate};
use console::Style;
use std::io::{self, Write};

const HEADER_INDENT: &str = "         ";
const BLANK_LABEL: &str = "     ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Empty,
    Low,
    Mid,
    High,
    Today,
}

impl Intensity {
    pub fn of(value: u32, today: bool) -> Self {
        if today {
            return Intensity::Today;
        }
        match value {
            0 => Intensity::Empty,
            1..=4 => Intensity::Low,
            5..=9 => Intensity::Mid,
            _ => Intensity::High,
        }
    }

    fn style(self) -> Style {
        match self {
            Intensity::Empty => Style::new().black(),
            Intensity::Low => Style::new().bold().black().on_white(),
            Intensity::Mid => Style::new().bold().black().on_yellow(),
            Intensity::High => Style::new().bold().black().on_green(),
            Intensity::Today => Style::new().bold().white().on_magenta(),
        }
    }
}

/// Cell text without color: a dash for no commits, otherwise the count
/// right-aligned in three columns.
pub fn cell_text(value: u32) -> String {
    if value == 0 {
        "  - ".to_string()
    } else {
        format!("{value:>3} ")
    }
}

/// Label printed in front of a weekday row.
pub fn day_label(weekday: usize) -> &'static str {
    match weekday {
        5 => " Mon ",
        3 => " Wed ",
        1 => " Fri ",
        _ => BLANK_LABEL,
    }
}

/// Month abbreviations for the weeks since `today - HORIZON`.
///
/// One four character slot per week; a slot names the month only when it
/// differs from the slot before it.
pub fn month_header(today: NaiveDate) -> String {
    let mut header = String::from(HEADER_INDENT);
    let mut week = today - Duration::days(HORIZON as i64);
    let mut month = week.month();

    loop {
        if week.month() != month {
            header.push_str(&format!("{} ", week.format("%b")));
            month = week.month();
        } else {
            header.push_str("    ");
        }

        week += Duration::days(DAYS_IN_WEEK as i64);
        if week > today {
            break;
        }
    }
    header
}

/// Prints the heatmap as fixed width terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Colors follow `console`'s terminal detection for stdout.
    pub fn for_stdout() -> Self {
        Self::new(console::colors_enabled())
    }

    pub fn cell(&self, value: u32, today: bool) -> String {
        let text = cell_text(value);
        if self.colors {
            Intensity::of(value, today)
                .style()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text
        }
    }

    /// Write the month header and seven weekday rows.
    ///
    /// Rows go from weekday index 6 (Sunday) down to 0 (Saturday); columns
    /// from the oldest week on the left to the current week on the right.
    pub fn render<W: Write>(&self, grid: &Grid, alignment: u32, today: NaiveDate, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", month_header(today))?;

        let today_weekday = alignment.saturating_sub(1) as usize;
        for weekday in (0..DAYS_IN_WEEK).rev() {
            write!(out, "{}", day_label(weekday))?;
            for week in (0..=WEEKS_TO_COUNT + 1).rev() {
                let is_today = week == 0 && weekday == today_weekday;
                let cell = match grid.cell(week, weekday) {
                    Some(value) => self.cell(value, is_today),
                    None => self.cell(0, false),
                };
                write!(out, "{cell}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn render_to_string(&self, grid: &Grid, alignment: u32, today: NaiveDate) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(grid, alignment, today, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
