use std::collections::BTreeMap;

use boxjoint::entities::{Globals, PlacedPart};
use serde::{Deserialize, Serialize};

/// Occupation of a single sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetStats {
    pub sheet: usize,
    pub n_parts: usize,
    /// Sum of the bounding box areas of the parts on the sheet
    pub used_area: f64,
    /// `used_area` as a fraction of the usable area
    pub density: f64,
}

/// Statistics of every sheet in use, ordered by sheet index.
pub fn sheet_stats(placed: &[PlacedPart], globals: &Globals) -> Vec<SheetStats> {
    let usable_area = globals.usable_area().area();
    let mut per_sheet: BTreeMap<usize, (usize, f64)> = BTreeMap::new();
    for p in placed {
        if let Some(sheet) = p.sheet.index() {
            let entry = per_sheet.entry(sheet).or_default();
            entry.0 += 1;
            entry.1 += p.part.area();
        }
    }
    per_sheet
        .into_iter()
        .map(|(sheet, (n_parts, used_area))| SheetStats {
            sheet,
            n_parts,
            used_area,
            density: used_area / usable_area,
        })
        .collect()
}

/// Used area over the usable area of all sheets in use
pub fn overall_density(stats: &[SheetStats], globals: &Globals) -> f64 {
    match stats.is_empty() {
        true => 0.0,
        false => {
            let used: f64 = stats.iter().map(|s| s.used_area).sum();
            used / (stats.len() as f64 * globals.usable_area().area())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::maxrects::tests::square_part;
    use boxjoint::entities::SheetSlot;
    use float_cmp::approx_eq;

    #[test]
    fn stats_per_sheet() {
        let globals = Globals {
            sheet_width: 12.0,
            sheet_height: 12.0,
            margin: 1.0,
            part_gap: 0.0,
            allow_rotation: true,
            kerf: 0.0,
            thickness: 0.125,
        };
        let placed = vec![
            PlacedPart::new(square_part(0, 5.0, 5.0), SheetSlot::Sheet(1), 1.0, 1.0, false),
            PlacedPart::new(square_part(1, 5.0, 4.0), SheetSlot::Sheet(0), 1.0, 1.0, false),
            PlacedPart::new(square_part(2, 5.0, 5.0), SheetSlot::Sheet(1), 6.0, 1.0, false),
            PlacedPart::unplaced(square_part(3, 50.0, 5.0)),
        ];
        let stats = sheet_stats(&placed, &globals);
        assert_eq!(stats.len(), 2);
        assert_eq!((stats[0].sheet, stats[0].n_parts), (0, 1));
        assert_eq!((stats[1].sheet, stats[1].n_parts), (1, 2));
        assert!(approx_eq!(f64, stats[1].density, 0.5, ulps = 2));
        assert!(approx_eq!(f64, overall_density(&stats, &globals), 0.35, ulps = 4));
    }
}
