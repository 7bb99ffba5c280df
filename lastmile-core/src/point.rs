use geo::Coord;

/// A delivery stop supplied by the dispatch backend.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// `optimal_order` rank, when present, was computed by an external planner;
/// this crate consumes it but never produces it. Delivery points are
/// borrowed by the pipeline and never mutated.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::DeliveryPoint;
///
/// let point = DeliveryPoint::new("Bakery", "12 Harbour St", Coord { x: -73.03, y: -36.81 });
/// assert!(point.rank().is_none());
/// assert_eq!(point.tooltip(), "Bakery - 12 Harbour St");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPoint {
    /// Recipient or business name.
    pub name: String,
    /// Street address shown in the marker tooltip.
    pub address: String,
    /// Geospatial position of the stop.
    pub location: Coord<f64>,
    /// Externally computed visit rank; `None` when not yet planned.
    ///
    /// Ranks are 1-based. A stored `0` is not a valid rank and is treated as
    /// absent by [`DeliveryPoint::rank`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub optimal_order: Option<u32>,
}

impl DeliveryPoint {
    /// Construct an unranked delivery point.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use lastmile_core::DeliveryPoint;
    ///
    /// let point = DeliveryPoint::new("Kiosk", "4 Mill Lane", Coord { x: 0.0, y: 0.0 });
    /// assert_eq!(point.optimal_order, None);
    /// ```
    pub fn new(name: impl Into<String>, address: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            location,
            optimal_order: None,
        }
    }

    /// Construct a delivery point carrying a planner-assigned rank.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use lastmile_core::DeliveryPoint;
    ///
    /// let point = DeliveryPoint::with_order("Kiosk", "4 Mill Lane", Coord { x: 0.0, y: 0.0 }, 2);
    /// assert_eq!(point.rank(), Some(2));
    /// ```
    pub fn with_order(
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coord<f64>,
        optimal_order: u32,
    ) -> Self {
        Self {
            optimal_order: Some(optimal_order),
            ..Self::new(name, address, location)
        }
    }

    /// The usable visit rank, filtering out the invalid `0`.
    #[must_use]
    pub fn rank(&self) -> Option<u32> {
        self.optimal_order.filter(|&order| order > 0)
    }

    /// Tooltip text for the stop's marker: `"{name} - {address}"`.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{} - {}", self.name, self.address)
    }
}
