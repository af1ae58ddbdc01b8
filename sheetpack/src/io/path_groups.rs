use std::collections::BTreeMap;

use boxjoint::entities::PlacedPart;
use boxjoint::io::path_data;
use svg::node::element::path::Data;

/// Operation a path is cut with
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CutLayer {
    OuterCut,
    InnerCut,
    Score,
}

/// Paths sharing a key are drawn together, in the color of their job
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathGroupKey {
    pub layer: CutLayer,
    pub job_index: usize,
}

/// Sheet-space paths of every part on `sheet`, grouped by layer and job.
/// Within a group paths keep the order of `placed`.
pub fn group_paths(placed: &[PlacedPart], sheet: usize) -> BTreeMap<PathGroupKey, Vec<Data>> {
    let mut groups: BTreeMap<PathGroupKey, Vec<Data>> = BTreeMap::new();
    for p in placed.iter().filter(|p| p.sheet.index() == Some(sheet)) {
        let transform = p.transform();
        let key = |layer| PathGroupKey {
            layer,
            job_index: p.book_index,
        };

        groups
            .entry(key(CutLayer::OuterCut))
            .or_default()
            .push(path_data::polygon_data(&p.part.contour, &transform));

        if !p.part.holes.is_empty() {
            groups.entry(key(CutLayer::InnerCut)).or_default().extend(
                p.part
                    .holes
                    .iter()
                    .map(|h| path_data::circle_data(&h.circle, &transform)),
            );
        }
        if !p.part.score_lines.is_empty() {
            groups.entry(key(CutLayer::Score)).or_default().extend(
                p.part
                    .score_lines
                    .iter()
                    .map(|&(a, b)| path_data::segment_data(a, b, &transform)),
            );
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::maxrects::tests::square_part;
    use boxjoint::entities::{Hole, HoleKind, Part, SheetSlot};
    use boxjoint::geometry::primitives::{Circle, Point};
    use boxjoint::io::path_data::data_to_string;
    use std::sync::Arc;

    fn part_with_features(id: usize, job_id: usize) -> Arc<Part> {
        let base = square_part(id, 4.0, 2.0);
        Arc::new(Part {
            job_id,
            holes: vec![
                Hole {
                    circle: Circle::new(Point(1.0, 1.0), 0.2),
                    kind: HoleKind::Magnet,
                },
                Hole {
                    circle: Circle::new(Point(3.0, 1.0), 0.2),
                    kind: HoleKind::Magnet,
                },
            ],
            score_lines: vec![(Point(0.0, 0.5), Point(4.0, 0.5))],
            ..(*base).clone()
        })
    }

    #[test]
    fn paths_are_grouped_by_layer_and_job() {
        let placed = vec![
            PlacedPart::new(part_with_features(0, 0), SheetSlot::Sheet(0), 0.5, 0.5, false),
            PlacedPart::new(part_with_features(1, 1), SheetSlot::Sheet(0), 5.0, 0.5, true),
            PlacedPart::new(square_part(2, 1.0, 1.0), SheetSlot::Sheet(0), 0.5, 3.0, false),
            PlacedPart::new(part_with_features(3, 1), SheetSlot::Sheet(1), 0.5, 0.5, false),
        ];
        let groups = group_paths(&placed, 0);

        let outer_0 = PathGroupKey {
            layer: CutLayer::OuterCut,
            job_index: 0,
        };
        let inner_1 = PathGroupKey {
            layer: CutLayer::InnerCut,
            job_index: 1,
        };
        assert_eq!(groups[&outer_0].len(), 2);
        assert_eq!(groups[&inner_1].len(), 2);
        assert_eq!(groups.len(), 6);

        let layers = groups.keys().map(|k| k.layer).collect::<Vec<_>>();
        assert!(layers.is_sorted());
    }

    #[test]
    fn rotated_paths_are_in_sheet_space() {
        let placed = vec![PlacedPart::new(
            square_part(0, 4.0, 2.0),
            SheetSlot::Sheet(0),
            1.0,
            1.0,
            true,
        )];
        let groups = group_paths(&placed, 0);
        let outer = groups
            .values()
            .next()
            .map(|paths| data_to_string(paths[0].clone()))
            .unwrap();
        // the local origin lands on the top right corner of the rotated footprint
        assert!(outer.starts_with("M3,1"));
    }
}
