//! Named grid template areas.
//!
//! A template is written the CSS way, one quoted string per row:
//! `"nav nav" "aside main"`. Each name must cover a single filled rectangle
//! of cells; a cell made only of dots is left empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taffy::style::GridTemplateComponent;
use taffy::style_helpers::{auto, fr, length, line};

use crate::error::{Result, ShellError};

/// The size of one grid track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackSize {
    Auto,
    Fr(f32),
    Px(f32),
}

impl TrackSize {
    pub(crate) fn to_taffy(self) -> GridTemplateComponent<String> {
        match self {
            TrackSize::Auto => auto(),
            TrackSize::Fr(flex) => fr(flex),
            TrackSize::Px(px) => length(px),
        }
    }
}

/// The lines an area spans. Lines are 1-based and the end line is exclusive,
/// matching CSS grid placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AreaPlacement {
    pub row_start: u16,
    pub row_end: u16,
    pub column_start: u16,
    pub column_end: u16,
}

impl AreaPlacement {
    pub fn row_span(&self) -> u16 {
        self.row_end - self.row_start
    }

    pub fn column_span(&self) -> u16 {
        self.column_end - self.column_start
    }

    pub(crate) fn apply_to(&self, style: &mut taffy::style::Style) {
        style.grid_row = taffy::geometry::Line {
            start: line(self.row_start as i16),
            end: line(self.row_end as i16),
        };
        style.grid_column = taffy::geometry::Line {
            start: line(self.column_start as i16),
            end: line(self.column_end as i16),
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridTemplate {
    areas: Vec<Vec<String>>,
    columns: Option<Vec<TrackSize>>,
    rows: Option<Vec<TrackSize>>,
}

fn is_null_cell(cell: &str) -> bool {
    cell.chars().all(|c| c == '.')
}

impl GridTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |reason: &str| ShellError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let mut areas = Vec::new();
        let mut rest = template.trim();
        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('"') else {
                return Err(invalid("expected a quoted row"));
            };
            let Some(end) = body.find('"') else {
                return Err(invalid("unterminated row"));
            };
            let row: Vec<String> = body[..end].split_whitespace().map(str::to_owned).collect();
            if row.is_empty() {
                return Err(invalid("empty row"));
            }
            areas.push(row);
            rest = body[end + 1..].trim_start();
        }

        let template = Self {
            areas,
            columns: None,
            rows: None,
        };
        template.validate().map_err(|reason| invalid(&reason))?;
        Ok(template)
    }

    /// Rows that are already known to form a valid template.
    pub(crate) fn from_valid_rows(rows: &[&[&str]]) -> Self {
        Self {
            areas: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
            columns: None,
            rows: None,
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let Some(first) = self.areas.first() else {
            return Err("no rows".to_string());
        };
        let columns = first.len();
        if self.areas.iter().any(|row| row.len() != columns) {
            return Err("rows have different column counts".to_string());
        }
        for name in self.area_names() {
            let placement = self.bounding_box(name);
            let filled = (placement.row_start - 1..placement.row_end - 1).all(|row| {
                (placement.column_start - 1..placement.column_end - 1)
                    .all(|col| self.areas[row as usize][col as usize] == name)
            });
            if !filled {
                return Err(format!("area `{name}` is not a rectangle"));
            }
        }
        Ok(())
    }

    /// Explicit column tracks, one per template column.
    pub fn with_columns(mut self, columns: Vec<TrackSize>) -> Result<Self> {
        if columns.len() != self.column_count() {
            return Err(ShellError::InvalidTemplate {
                template: self.to_string(),
                reason: format!(
                    "{} column tracks for {} columns",
                    columns.len(),
                    self.column_count()
                ),
            });
        }
        self.columns = Some(columns);
        Ok(self)
    }

    /// Explicit row tracks, one per template row.
    pub fn with_rows(mut self, rows: Vec<TrackSize>) -> Result<Self> {
        if rows.len() != self.row_count() {
            return Err(ShellError::InvalidTemplate {
                template: self.to_string(),
                reason: format!("{} row tracks for {} rows", rows.len(), self.row_count()),
            });
        }
        self.rows = Some(rows);
        Ok(self)
    }

    pub fn row_count(&self) -> usize {
        self.areas.len()
    }

    pub fn column_count(&self) -> usize {
        self.areas.first().map_or(0, Vec::len)
    }

    /// Area names in order of first appearance, reading rows left to right.
    pub fn area_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for cell in self.areas.iter().flatten() {
            if !is_null_cell(cell) && !names.contains(&cell.as_str()) {
                names.push(cell);
            }
        }
        names
    }

    pub fn contains_area(&self, area: &str) -> bool {
        !is_null_cell(area) && self.areas.iter().flatten().any(|cell| cell == area)
    }

    pub fn placement(&self, area: &str) -> Result<AreaPlacement> {
        if !self.contains_area(area) {
            return Err(ShellError::UnknownArea(area.to_string()));
        }
        Ok(self.bounding_box(area))
    }

    fn bounding_box(&self, area: &str) -> AreaPlacement {
        let mut placement = AreaPlacement {
            row_start: u16::MAX,
            row_end: 0,
            column_start: u16::MAX,
            column_end: 0,
        };
        for (row, cells) in self.areas.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell == area {
                    let (row, col) = (row as u16 + 1, col as u16 + 1);
                    placement.row_start = placement.row_start.min(row);
                    placement.row_end = placement.row_end.max(row + 1);
                    placement.column_start = placement.column_start.min(col);
                    placement.column_end = placement.column_end.max(col + 1);
                }
            }
        }
        placement
    }

    /// Column tracks, defaulting to equal fractions.
    pub fn column_tracks(&self) -> Vec<TrackSize> {
        self.columns
            .clone()
            .unwrap_or_else(|| vec![TrackSize::Fr(1.0); self.column_count()])
    }

    /// Row tracks, defaulting to content-sized rows with the last row taking
    /// the remaining height.
    pub fn row_tracks(&self) -> Vec<TrackSize> {
        self.rows.clone().unwrap_or_else(|| {
            let mut rows = vec![TrackSize::Auto; self.row_count()];
            if let Some(last) = rows.last_mut() {
                *last = TrackSize::Fr(1.0);
            }
            rows
        })
    }

    pub(crate) fn apply_to(&self, style: &mut taffy::style::Style) {
        style.display = taffy::style::Display::Grid;
        style.grid_template_rows = self
            .row_tracks()
            .into_iter()
            .map(TrackSize::to_taffy)
            .collect();
        style.grid_template_columns = self
            .column_tracks()
            .into_iter()
            .map(TrackSize::to_taffy)
            .collect();
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.areas.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "\"{}\"", row.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for GridTemplate {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
