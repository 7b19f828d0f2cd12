//! HTML pages rendered with handlebars
//!
//! The grid is emitted as `<table id="robot-grid">` with one `<tr>` per row
//! and one `<td>` per cell; only the robot's cell holds an `<img>`.

use handlebars::{Handlebars, RenderError, TemplateError};
use robogrid_core::{Cell, Snapshot};
use serde::Serialize;

const ROOT_TEMPLATE: &str = include_str!("../templates/root.hbs");
const PLAY_TEMPLATE: &str = include_str!("../templates/play.hbs");
const CODE_TEMPLATE: &str = include_str!("../templates/code.hbs");
const GRID_PARTIAL: &str = include_str!("../templates/grid.hbs");

#[derive(Debug, Serialize)]
struct CellView {
    x: usize,
    y: usize,
    occupied: bool,
}

#[derive(Debug, Serialize)]
struct PageView<'a> {
    x: u32,
    y: u32,
    rows: u32,
    cols: u32,
    grid: Vec<Vec<CellView>>,
    program: &'a str,
}

impl<'a> PageView<'a> {
    fn new(snapshot: &Snapshot, program: &'a str) -> Self {
        let grid = snapshot
            .render()
            .iter_rows()
            .enumerate()
            .map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .map(|(y, cell)| CellView {
                        x,
                        y,
                        occupied: *cell == Cell::Occupied,
                    })
                    .collect()
            })
            .collect();

        Self {
            x: snapshot.position.x,
            y: snapshot.position.y,
            rows: snapshot.dimensions.rows(),
            cols: snapshot.dimensions.cols(),
            grid,
            program,
        }
    }
}

/// Registered page templates
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Register the built-in templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_partial("grid", GRID_PARTIAL)?;
        registry.register_template_string("root", ROOT_TEMPLATE)?;
        registry.register_template_string("play", PLAY_TEMPLATE)?;
        registry.register_template_string("code", CODE_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Landing page
    pub fn root(&self) -> Result<String, RenderError> {
        self.registry.render("root", &serde_json::json!({}))
    }

    /// Play-mode page for a session
    pub fn play(&self, snapshot: &Snapshot) -> Result<String, RenderError> {
        self.registry.render("play", &PageView::new(snapshot, ""))
    }

    /// Code-mode page, with the last submitted program echoed back
    pub fn code(&self, snapshot: &Snapshot, program: &str) -> Result<String, RenderError> {
        self.registry.render("code", &PageView::new(snapshot, program))
    }
}
