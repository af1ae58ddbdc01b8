use std::cmp::Reverse;
use std::sync::Arc;

use boxjoint::entities::{Globals, Part, PlacedPart, SheetSlot};
use boxjoint::geometry::primitives::Rect;
use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;

use crate::config::PackConfig;

/// Free rectangles thinner than this are discarded
const DEGENERATE_EPS: f64 = 1e-6;

/// A scored potential placement of a single part, only meaningful to the [`SheetPacker`] it came from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Best short side fit: the smaller of both leftover dimensions, lower is tighter
    pub score: f64,
    pub rotated: bool,
    pub x: f64,
    pub y: f64,
    /// Padded width, the footprint of the part plus the gap
    pub width: f64,
    /// Padded height
    pub height: f64,
    pub free_index: usize,
}

/// Maximal free rectangles of a single sheet, in coordinates relative to its usable area.
#[derive(Clone, Debug)]
pub struct SheetPacker {
    bounds: Rect,
    gap: f64,
    allow_rotation: bool,
    fit_tolerance: f64,
    free: Vec<Rect>,
}

impl SheetPacker {
    pub fn new(width: f64, height: f64, gap: f64, allow_rotation: bool, fit_tolerance: f64) -> Self {
        let bounds = Rect::from_origin(0.0, 0.0, width, height);
        Self {
            bounds,
            gap,
            allow_rotation,
            fit_tolerance,
            free: vec![bounds],
        }
    }

    pub fn for_sheet(globals: &Globals, config: &PackConfig) -> Self {
        Self::new(
            globals.usable_width(),
            globals.usable_height(),
            globals.part_gap,
            globals.allow_rotation,
            config.fit_tolerance,
        )
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// Lowest scoring fit of a `width` x `height` part over all free rectangles.
    /// Unrotated fits are evaluated before rotated ones, ties keep the first fit found.
    pub fn find_candidate(&self, width: f64, height: f64) -> Option<Candidate> {
        let orientations = match self.allow_rotation {
            true => vec![(false, width, height), (true, height, width)],
            false => vec![(false, width, height)],
        };

        let mut best: Option<Candidate> = None;
        for (rotated, w, h) in orientations {
            let (pw, ph) = (w + self.gap, h + self.gap);
            for (free_index, free) in self.free.iter().enumerate() {
                let fits = pw <= free.width() + self.fit_tolerance
                    && ph <= free.height() + self.fit_tolerance;
                if !fits {
                    continue;
                }
                let score = f64::min(free.width() - pw, free.height() - ph);
                if best.is_none_or(|b| score < b.score) {
                    best = Some(Candidate {
                        score,
                        rotated,
                        x: free.x_min,
                        y: free.y_min,
                        width: pw,
                        height: ph,
                        free_index,
                    });
                }
            }
        }
        best
    }

    /// Claims the padded footprint of `candidate`, splitting every free rectangle it overlaps.
    pub fn place(&mut self, candidate: &Candidate) {
        let used = Rect::from_origin(candidate.x, candidate.y, candidate.width, candidate.height);
        let mut next = Vec::with_capacity(self.free.len() + 4);
        for free in &self.free {
            match free.overlaps(&used, 0.0) {
                false => next.push(*free),
                true => next.extend(
                    split(free, &used)
                        .into_iter()
                        .filter_map(|r| Rect::intersection(r, self.bounds))
                        .filter(|r| r.width() > DEGENERATE_EPS && r.height() > DEGENERATE_EPS),
                ),
            }
        }
        let n_before = next.len();
        self.free = prune_contained(next);
        trace!(
            "[PACK] {} free rectangles after placement ({} pruned)",
            self.free.len(),
            n_before - self.free.len()
        );
    }
}

/// The parts of `free` to the left, right, top and bottom of `used`
fn split(free: &Rect, used: &Rect) -> Vec<Rect> {
    let mut residuals = Vec::with_capacity(4);
    if used.x_min > free.x_min {
        residuals.push(Rect { x_max: used.x_min, ..*free });
    }
    if used.x_max < free.x_max {
        residuals.push(Rect { x_min: used.x_max, ..*free });
    }
    if used.y_min > free.y_min {
        residuals.push(Rect { y_max: used.y_min, ..*free });
    }
    if used.y_max < free.y_max {
        residuals.push(Rect { y_min: used.y_max, ..*free });
    }
    residuals
}

/// Drops every rectangle contained in another one. Of identical rectangles the first is kept.
fn prune_contained(rects: Vec<Rect>) -> Vec<Rect> {
    let redundant = |i: usize| {
        rects.iter().enumerate().any(|(j, other)| {
            j != i
                && other.contains_rect(&rects[i], 0.0)
                && (j < i || !rects[i].contains_rect(other, 0.0))
        })
    };
    (0..rects.len())
        .filter(|&i| !redundant(i))
        .map(|i| rects[i])
        .collect()
}

/// Result of packing a single sheet
#[derive(Clone, Debug)]
pub struct SheetPacking {
    pub placed: Vec<PlacedPart>,
    /// Parts that did not fit, in packing order
    pub remaining: Vec<Arc<Part>>,
}

/// Places as many `parts` as possible on sheet `sheet_index`, largest first.
pub fn pack_sheet(
    parts: &[Arc<Part>],
    sheet_index: usize,
    globals: &Globals,
    config: &PackConfig,
) -> SheetPacking {
    let mut packer = SheetPacker::for_sheet(globals, config);
    let mut placed = vec![];
    let mut remaining = vec![];

    let order = parts
        .iter()
        .sorted_by_key(|p| Reverse(OrderedFloat(f64::max(p.width, p.height))));

    for part in order {
        match packer.find_candidate(part.width, part.height) {
            Some(c) => {
                packer.place(&c);
                let (x, y) = (globals.margin + c.x, globals.margin + c.y);
                debug!(
                    "[PACK] placed {} ({:.3} x {:.3}) on sheet {} at ({:.3}, {:.3}){}",
                    part.name,
                    part.width,
                    part.height,
                    sheet_index,
                    x,
                    y,
                    if c.rotated { ", rotated" } else { "" }
                );
                placed.push(PlacedPart::new(
                    part.clone(),
                    SheetSlot::Sheet(sheet_index),
                    x,
                    y,
                    c.rotated,
                ));
            }
            None => remaining.push(part.clone()),
        }
    }

    SheetPacking { placed, remaining }
}

/// Packs `parts` sheet after sheet, starting at `first_sheet`.
/// When a sheet stays empty the parts left over are returned as [`SheetSlot::Unplaced`].
pub fn pack_sheets(
    parts: Vec<Arc<Part>>,
    first_sheet: usize,
    globals: &Globals,
    config: &PackConfig,
) -> Vec<PlacedPart> {
    let mut result = Vec::with_capacity(parts.len());
    let mut pending = parts;
    let mut sheet_index = first_sheet;

    while !pending.is_empty() {
        let SheetPacking { placed, remaining } = pack_sheet(&pending, sheet_index, globals, config);
        if placed.is_empty() {
            debug!(
                "[PACK] {} parts do not fit on an empty sheet",
                remaining.len()
            );
            result.extend(remaining.into_iter().map(PlacedPart::unplaced));
            break;
        }
        debug!(
            "[PACK] sheet {}: {} placed, {} remaining",
            sheet_index,
            placed.len(),
            remaining.len()
        );
        result.extend(placed);
        pending = remaining;
        sheet_index += 1;
    }
    result
}
