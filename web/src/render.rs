use mazerun_core::{Coord, Coord2, PlayEngine};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::theme::Palette;

/// Side of a maze cell on the canvas, in pixels.
pub(crate) const CELL_SIZE: f64 = 40.;
const WALL_WIDTH: f64 = 1.;
const PLAYER_INSET: f64 = 5.;

pub(crate) fn canvas_side(size: Coord) -> u32 {
    u32::from(size) * CELL_SIZE as u32
}

/// Top-left pixel of the cell at `(row, col)`.
fn origin((row, col): Coord2) -> (f64, f64) {
    (f64::from(col) * CELL_SIZE, f64::from(row) * CELL_SIZE)
}

/// Rectangles `(x, y, w, h)` for every wall still standing around `coords`.
pub(crate) fn wall_rects(engine: &PlayEngine, coords: Coord2) -> impl Iterator<Item = [f64; 4]> {
    let cell = engine.maze().cell_at(coords);
    let (x, y) = origin(coords);
    let far = CELL_SIZE - WALL_WIDTH;
    [
        (cell.top(), [x, y, CELL_SIZE, WALL_WIDTH]),
        (cell.right(), [x + far, y, WALL_WIDTH, CELL_SIZE]),
        (cell.bottom(), [x, y + far, CELL_SIZE, WALL_WIDTH]),
        (cell.left(), [x, y, WALL_WIDTH, CELL_SIZE]),
    ]
    .into_iter()
    .filter_map(|(closed, rect)| closed.then_some(rect))
}

fn fill_cell(ctx: &CanvasRenderingContext2d, coords: Coord2, inset: f64, color: &str) {
    let (x, y) = origin(coords);
    ctx.set_fill_style_str(color);
    ctx.fill_rect(
        x + inset,
        y + inset,
        CELL_SIZE - 2. * inset,
        CELL_SIZE - 2. * inset,
    );
}

/// Paints the whole board: passages, walls, the exit and the player token.
pub(crate) fn draw(canvas: &HtmlCanvasElement, engine: &PlayEngine, palette: Palette) {
    let side = canvas_side(engine.size());
    if canvas.width() != side || canvas.height() != side {
        canvas.set_width(side);
        canvas.set_height(side);
    }

    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::error!("unexpected 2d context: {:?}", err);
                return;
            }
        },
        Ok(None) => {
            log::error!("canvas has no 2d context");
            return;
        }
        Err(err) => {
            log::error!("failed to get 2d context: {:?}", err);
            return;
        }
    };

    ctx.set_fill_style_str(palette.wall);
    ctx.fill_rect(0., 0., f64::from(side), f64::from(side));

    let maze = engine.maze();
    for coords in maze.iter_coords() {
        if maze.cell_at(coords).is_visited() {
            fill_cell(&ctx, coords, 0., palette.path);
        }
    }

    ctx.set_fill_style_str(palette.wall);
    for coords in maze.iter_coords() {
        for [x, y, w, h] in wall_rects(engine, coords) {
            ctx.fill_rect(x, y, w, h);
        }
    }

    fill_cell(&ctx, engine.exit(), WALL_WIDTH, palette.exit);
    fill_cell(&ctx, engine.player(), PLAYER_INSET, palette.player);
}
