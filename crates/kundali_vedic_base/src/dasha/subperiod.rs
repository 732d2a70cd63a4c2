//! Proportional sub-period generation.
//!
//! child duration = (child full years / cycle years) × parent duration.

use super::types::DashaPeriod;
use crate::graha::Graha;

/// Force the last child to end exactly where the parent ends.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Split `parent` among `sequence` in proportion to each lord's full years.
///
/// Returns nothing for a parent without a child level.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_years: f64,
) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(lord, full_years)) in sequence.iter().enumerate() {
        let end = cursor + full_years / total_years * parent_duration;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: order_0 as u16 + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DashaLevel;

    fn parent() -> DashaPeriod {
        DashaPeriod {
            lord: Graha::Ketu,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + 400.0,
            level: DashaLevel::Mahadasha,
            order: 1,
        }
    }

    #[test]
    fn children_tile_parent() {
        let seq = [(Graha::Ketu, 100.0), (Graha::Venus, 200.0), (Graha::Sun, 100.0)];
        let children = proportional_children(&parent(), &seq, 400.0);
        assert_eq!(children.len(), 3);
        assert!((children[0].start_jd - 2_451_545.0).abs() < 1e-10);
        assert_eq!(children[2].end_jd, parent().end_jd);
        assert!((children[0].end_jd - children[1].start_jd).abs() < 1e-10);
        assert!((children[1].duration_days() - 200.0).abs() < 1e-9);
        assert!(children.iter().all(|c| c.level == DashaLevel::Antardasha));
        assert_eq!(children[2].order, 3);
    }

    #[test]
    fn leaf_level_has_no_children() {
        let mut p = parent();
        p.level = DashaLevel::Antardasha;
        assert!(proportional_children(&p, &[(Graha::Sun, 6.0)], 120.0).is_empty());
    }
}
