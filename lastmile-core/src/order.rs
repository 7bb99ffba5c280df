//! Deterministic ordering and labelling of delivery points.
//!
//! Ranked points sort ascending by rank; unranked points follow in their
//! original relative order. Labels echo the rank when one exists, otherwise
//! the 1-based display position.

use crate::DeliveryPoint;

/// A delivery point paired with its display label.
///
/// Borrows the underlying point; the ordering pass never clones or mutates
/// the caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedStop<'a> {
    /// The underlying delivery point, in display order.
    pub point: &'a DeliveryPoint,
    /// Marker label: the rank's decimal string, or the display position.
    pub label: String,
}

/// Order delivery points for display and assign marker labels.
///
/// When at least one point carries a rank, points are stable-sorted by rank
/// ascending and unranked points are placed after every ranked one, keeping
/// their original relative order. When no point is ranked the input order is
/// preserved unchanged. The output always has the same length as the input.
///
/// Ties and gaps in ranks are permitted: ties keep input order, and labels
/// echo the stored rank rather than the position, so a gapped sequence keeps
/// its gapped labels.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::{DeliveryPoint, sequence};
///
/// let points = vec![
///     DeliveryPoint::with_order("A", "1 First St", Coord { x: -73.02, y: -36.80 }, 2),
///     DeliveryPoint::with_order("B", "2 Second St", Coord { x: -73.03, y: -36.81 }, 1),
/// ];
/// let stops = sequence(&points);
/// let labels: Vec<&str> = stops.iter().map(|s| s.label.as_str()).collect();
/// assert_eq!(labels, ["1", "2"]);
/// assert_eq!(stops[0].point.name, "B");
/// ```
#[must_use]
pub fn sequence(points: &[DeliveryPoint]) -> Vec<SequencedStop<'_>> {
    let any_ranked = points.iter().any(|point| point.rank().is_some());

    let mut ordered: Vec<&DeliveryPoint> = points.iter().collect();
    if any_ranked {
        // Stable sort: unranked points share the sentinel key and therefore
        // keep their original relative order behind every ranked point.
        ordered.sort_by_key(|point| point.rank().map_or(u64::MAX, u64::from));
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, point)| SequencedStop {
            point,
            label: point
                .rank()
                .map_or_else(|| (index + 1).to_string(), |rank| rank.to_string()),
        })
        .collect()
}
