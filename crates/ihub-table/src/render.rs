use crate::format::Trend;
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A single table cell, before padding and colouring.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub align: Align,
    pub trend: Option<Trend>,
}

impl Cell {
    pub fn left(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            align: Align::Left,
            trend: None,
        }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            align: Align::Right,
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// Paint a move green when up, red when down.
pub fn paint(text: &str, trend: Trend) -> ColoredString {
    match trend {
        Trend::Up => text.truecolor(0x00, 0xA8, 0x3F),
        Trend::Down => text.truecolor(0xFF, 0x3A, 0x33),
    }
}

/// Lay out a header row and body rows as a fixed-width text grid.
///
/// An empty body still prints the header and its rule.
pub fn grid(header: &[Cell], body: &[Vec<Cell>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|c| c.text.chars().count()).collect();
    for row in body {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.text.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    out.push_str(&line(header, &widths, true));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in body {
        out.push_str(&line(row, &widths, false));
        out.push('\n');
    }
    out
}

fn line(cells: &[Cell], widths: &[usize], bold: bool) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            // pad before colouring; escape codes would throw the width off
            let padded = match cell.align {
                Align::Left => format!("{:<width$}", cell.text),
                Align::Right => format!("{:>width$}", cell.text),
            };
            let painted = match cell.trend {
                Some(trend) => paint(&padded, trend),
                None => padded.normal(),
            };
            if bold {
                painted.bold().to_string()
            } else {
                painted.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        colored::control::set_override(false);
        let header = [Cell::left("Name"), Cell::right("Price")];
        let body = vec![
            vec![Cell::left("Bitcoin"), Cell::right("$97,000")],
            vec![Cell::left("XRP"), Cell::right("$2.4")],
        ];
        let text = grid(&header, &body);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name       Price");
        assert_eq!(lines[1], "----------------");
        assert_eq!(lines[2], "Bitcoin  $97,000");
        assert_eq!(lines[3], "XRP         $2.4");
    }

    #[test]
    fn empty_body_prints_header_only() {
        colored::control::set_override(false);
        let text = grid(&[Cell::left("#"), Cell::left("Name")], &[]);
        assert_eq!(text.lines().count(), 2);
    }
}
