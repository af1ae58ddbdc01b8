use crate::entities::PlacedPart;
use crate::io::ext_repr::{ExtHole, ExtPlacedPart};
use crate::io::path_data::data_to_string;

pub fn export_placed_part(placed: &PlacedPart) -> ExtPlacedPart {
    let part = &placed.part;
    ExtPlacedPart {
        id: part.id,
        job_id: part.job_id,
        book_index: placed.book_index,
        name: part.name.clone(),
        kind: part.kind,
        sheet: placed.sheet.as_signed(),
        x: placed.x,
        y: placed.y,
        rotated: placed.rotated,
        color: placed.color,
        width: part.width,
        height: part.height,
        outer_cut: data_to_string(part.outer_cut()),
        contour: part.contour.iter().map(|&p| p.into()).collect(),
        inner_cuts: part.inner_cuts().into_iter().map(data_to_string).collect(),
        score_paths: part.score_paths().into_iter().map(data_to_string).collect(),
        holes: part
            .holes
            .iter()
            .map(|h| ExtHole {
                kind: h.kind,
                cx: h.circle.center.0,
                cy: h.circle.center.1,
                radius: h.circle.radius,
            })
            .collect(),
        label_anchor: part.label_anchor.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::case_spec_tests::{sample_case, sample_globals};
    use crate::entities::SheetSlot;
    use crate::joinery::case_parts;
    use std::sync::Arc;

    #[test]
    fn contour_is_exported_at_full_precision() {
        let part = case_parts(0, &sample_case(), &sample_globals()).swap_remove(0);
        let placed = PlacedPart::new(Arc::new(part), SheetSlot::Sheet(0), 12.25, 3.5, true);
        let ext = export_placed_part(&placed);
        assert_eq!(ext.contour.len(), placed.part.contour.len());
        for (exported, original) in ext.contour.iter().zip(placed.part.contour.iter()) {
            assert_eq!(*exported, (original.0, original.1));
        }
        assert!(!ext.outer_cut.is_empty());
    }
}
