//! Bounding-region accumulation for map viewports.
//!
//! A [`Bounds`] starts empty and grows to the smallest axis-aligned lon/lat
//! rectangle containing every pushed position. The empty sentinel tells the
//! renderer there is nothing to fit a view to.

use geo::{Coord, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Extent {
    min: Coord<f64>,
    max: Coord<f64>,
}

/// Accumulator for the displayed positions' bounding region.
///
/// Accumulation is commutative: the resulting rectangle is independent of
/// insertion order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::Bounds;
///
/// let mut bounds = Bounds::default();
/// assert!(bounds.is_empty());
///
/// bounds.extend(Coord { x: -73.0, y: -36.8 });
/// bounds.extend(Coord { x: -73.1, y: -36.9 });
///
/// let rect = bounds.rect().expect("two positions were pushed");
/// assert_eq!(rect.min(), Coord { x: -73.1, y: -36.9 });
/// assert_eq!(rect.max(), Coord { x: -73.0, y: -36.8 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    extent: Option<Extent>,
}

impl Bounds {
    /// Accumulate bounds over a sequence of positions.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use lastmile_core::Bounds;
    ///
    /// let bounds = Bounds::from_positions([Coord { x: 1.0, y: 2.0 }]);
    /// assert!(!bounds.is_empty());
    /// ```
    #[must_use]
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        let mut bounds = Self::default();
        for position in positions {
            bounds.extend(position);
        }
        bounds
    }

    /// Grow the region to include `position`.
    pub fn extend(&mut self, position: Coord<f64>) {
        self.extent = Some(match self.extent {
            None => Extent {
                min: position,
                max: position,
            },
            Some(extent) => Extent {
                min: Coord {
                    x: extent.min.x.min(position.x),
                    y: extent.min.y.min(position.y),
                },
                max: Coord {
                    x: extent.max.x.max(position.x),
                    y: extent.max.y.max(position.y),
                },
            },
        });
    }

    /// Whether no position has been accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// The smallest rectangle covering every accumulated position.
    ///
    /// Returns `None` for the empty sentinel; renderers must not attempt to
    /// fit a viewport to it.
    #[must_use]
    pub fn rect(&self) -> Option<Rect<f64>> {
        self.extent.map(|extent| Rect::new(extent.min, extent.max))
    }
}
