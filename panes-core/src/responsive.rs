//! Width based breakpoints for responsive layouts.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// A layout variant that applies from `min_width` upwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: f32,
    pub columns: usize,
    #[serde(default = "default_gutter")]
    pub gutter: f32,
    #[serde(default = "default_margin")]
    pub margin: f32,
}

fn default_gutter() -> f32 {
    16.0
}

fn default_margin() -> f32 {
    24.0
}

impl Breakpoint {
    pub fn new(name: &str, min_width: f32, columns: usize) -> Self {
        Self {
            name: name.to_string(),
            min_width,
            columns,
            gutter: default_gutter(),
            margin: default_margin(),
        }
    }
}

/// A table of breakpoints, kept sorted by `min_width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Breakpoints {
    pub fn new(mut entries: Vec<Breakpoint>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("breakpoint table is empty".to_string());
        }
        if let Some(bad) = entries.iter().find(|b| b.columns == 0) {
            return Err(format!("breakpoint '{}' has zero columns", bad.name));
        }
        if let Some(bad) = entries.iter().find(|b| !b.min_width.is_finite()) {
            return Err(format!("breakpoint '{}' has an invalid min_width", bad.name));
        }
        entries.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// The widest breakpoint that applies at `width`, or the narrowest one below all of them.
    pub fn resolve(&self, width: f32) -> &Breakpoint {
        self.entries
            .iter()
            .rev()
            .find(|b| b.min_width <= width)
            .unwrap_or(&self.entries[0])
    }

    /// Lays out `count` cells of `item_height` in rows of the resolved column count.
    pub fn grid(&self, width: f32, count: usize, item_height: f32) -> Vec<Rect> {
        let bp = self.resolve(width);
        let columns = bp.columns as f32;
        let inner = (width - bp.margin * 2.0 - bp.gutter * (columns - 1.0)).max(0.0);
        let cell_width = inner / columns;

        (0..count)
            .map(|i| {
                let column = (i % bp.columns) as f32;
                let row = (i / bp.columns) as f32;
                Rect::from_xywh(
                    bp.margin + column * (cell_width + bp.gutter),
                    bp.margin + row * (item_height + bp.gutter),
                    cell_width,
                    item_height,
                )
            })
            .collect()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            entries: vec![
                Breakpoint::new("xs", 0.0, 1),
                Breakpoint::new("sm", 600.0, 2),
                Breakpoint::new("md", 900.0, 3),
                Breakpoint::new("lg", 1200.0, 4),
            ],
        }
    }
}

impl TryFrom<Vec<Breakpoint>> for Breakpoints {
    type Error = String;

    fn try_from(entries: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Breakpoints> for Vec<Breakpoint> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_picks_widest_applicable() {
        let breakpoints = Breakpoints::default();
        assert_eq!(breakpoints.resolve(0.0).name, "xs");
        assert_eq!(breakpoints.resolve(599.9).name, "xs");
        assert_eq!(breakpoints.resolve(600.0).name, "sm");
        assert_eq!(breakpoints.resolve(1000.0).name, "md");
        assert_eq!(breakpoints.resolve(5000.0).name, "lg");
    }

    #[test]
    fn test_resolve_below_all_uses_smallest() {
        let breakpoints =
            Breakpoints::new(vec![Breakpoint::new("big", 800.0, 3), Breakpoint::new("mid", 400.0, 2)])
                .unwrap();
        assert_eq!(breakpoints.resolve(100.0).name, "mid");
    }

    #[test]
    fn test_grid_wraps_rows() {
        let mut sm = Breakpoint::new("sm", 0.0, 2);
        sm.gutter = 10.0;
        sm.margin = 20.0;
        let breakpoints = Breakpoints::new(vec![sm]).unwrap();

        let cells = breakpoints.grid(250.0, 3, 50.0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], Rect::from_xywh(20.0, 20.0, 100.0, 50.0));
        assert_eq!(cells[1], Rect::from_xywh(130.0, 20.0, 100.0, 50.0));
        assert_eq!(cells[2], Rect::from_xywh(20.0, 80.0, 100.0, 50.0));
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        assert!(Breakpoints::new(Vec::new()).is_err());
        assert!(Breakpoints::new(vec![Breakpoint::new("none", 0.0, 0)]).is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"[
            {"name": "wide", "min_width": 700, "columns": 3},
            {"name": "narrow", "min_width": 0, "columns": 1, "gutter": 4, "margin": 8}
        ]"#;
        let breakpoints: Breakpoints = serde_json::from_str(json).unwrap();
        assert_eq!(breakpoints.entries()[0].name, "narrow");
        assert_eq!(breakpoints.resolve(800.0).gutter, 16.0);

        let bad = r#"[{"name": "zero", "min_width": 0, "columns": 0}]"#;
        assert!(serde_json::from_str::<Breakpoints>(bad).is_err());
    }
}
