//! The display refresh cycle.
//!
//! [`MapController`] orchestrates one render: order and label the delivery
//! points, assemble the route, build the marker set, and replace the
//! currently displayed state wholesale. The external map widget consumes the
//! emitted [`RenderFrame`]; the one outstanding directions request per cycle
//! completes through [`MapController::complete_route`], which discards
//! results from superseded cycles.

use geo::Coord;

use crate::{
    Bounds, DeliveryPoint, DirectionsError, DirectionsService, RouteGeometry, RoutingRequest,
    assemble, sequence,
};

/// Map centre used when neither an origin nor any delivery point exists.
pub const DEFAULT_CENTER: Coord<f64> = Coord {
    x: -73.050,
    y: -36.827,
};

/// Label glyph for the origin marker.
const ORIGIN_LABEL: &str = "O";
/// Label glyph for the destination marker.
const FINISH_LABEL: &str = "F";

/// A labelled map marker with tooltip text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Marker position.
    pub location: Coord<f64>,
    /// Short label rendered on the marker glyph.
    pub label: String,
    /// Tooltip text shown on hover.
    pub title: String,
}

impl Marker {
    fn origin(location: Coord<f64>) -> Self {
        Self {
            location,
            label: ORIGIN_LABEL.to_owned(),
            title: "Route origin".to_owned(),
        }
    }

    fn finish(location: Coord<f64>) -> Self {
        Self {
            location,
            label: FINISH_LABEL.to_owned(),
            title: "Route finish".to_owned(),
        }
    }

    fn delivery(point: &DeliveryPoint, label: String) -> Self {
        Self {
            location: point.location,
            label,
            title: point.tooltip(),
        }
    }
}

/// Everything the map widget needs for one refresh cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderFrame {
    /// Origin, delivery, and destination markers, in display order.
    pub markers: Vec<Marker>,
    /// Bounding region to fit the viewport to, when non-empty.
    pub bounds: Bounds,
    /// Directions request to submit; `None` when no route can be drawn.
    pub request: Option<RoutingRequest>,
    /// Cycle identifier to echo back into [`MapController::complete_route`].
    pub generation: u64,
}

/// The currently displayed marker set, bounds, and drawn path.
///
/// Replaced wholesale on every render; the previous cycle's markers and path
/// are never merged with fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Markers currently on the map.
    pub markers: Vec<Marker>,
    /// Bounding region of the displayed markers.
    pub bounds: Bounds,
    /// Drawn route geometry, once a directions request completed for this
    /// cycle.
    pub path: Option<RouteGeometry>,
}

/// How a directions completion was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteCompletion {
    /// The geometry was attached to the current display state.
    Drawn,
    /// The provider failed; markers and bounds stay displayed without a path.
    Skipped,
    /// The outcome belonged to a superseded cycle and was discarded.
    Stale,
}

/// Owns the refresh cycle: the generation counter and the displayed state.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::{DeliveryPoint, MapController};
///
/// let points = vec![
///     DeliveryPoint::with_order("A", "1 First St", Coord { x: -73.02, y: -36.80 }, 2),
///     DeliveryPoint::with_order("B", "2 Second St", Coord { x: -73.03, y: -36.81 }, 1),
/// ];
/// let mut controller = MapController::new();
/// let frame = controller.render(None, &points, None);
///
/// let labels: Vec<&str> = frame.markers.iter().map(|m| m.label.as_str()).collect();
/// assert_eq!(labels, ["1", "2"]);
/// ```
#[derive(Debug, Default)]
pub struct MapController {
    generation: u64,
    displayed: Option<DisplayState>,
}

impl MapController {
    /// Construct a controller with nothing displayed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one refresh cycle and return the frame for the map widget.
    ///
    /// The previous display state is dropped and rebuilt in one step, so an
    /// observer never sees stale and fresh markers mixed. The emitted frame
    /// carries the new generation; a directions outcome for any earlier
    /// generation will be discarded by [`Self::complete_route`].
    pub fn render(
        &mut self,
        origin: Option<Coord<f64>>,
        points: &[DeliveryPoint],
        destination: Option<Coord<f64>>,
    ) -> RenderFrame {
        self.generation += 1;

        let stops = sequence(points);
        let mut markers = Vec::with_capacity(stops.len() + 2);
        if let Some(position) = origin {
            markers.push(Marker::origin(position));
        }
        for stop in &stops {
            markers.push(Marker::delivery(stop.point, stop.label.clone()));
        }
        if let Some(position) = destination {
            markers.push(Marker::finish(position));
        }

        let ordered: Vec<Coord<f64>> = stops.iter().map(|stop| stop.point.location).collect();
        let plan = assemble(origin, &ordered, destination);

        self.displayed = Some(DisplayState {
            markers: markers.clone(),
            bounds: plan.bounds,
            path: None,
        });

        RenderFrame {
            markers,
            bounds: plan.bounds,
            request: plan.request,
            generation: self.generation,
        }
    }

    /// Apply the outcome of the cycle's directions request.
    ///
    /// Outcomes whose `generation` is not the current one are discarded: a
    /// newer render has already replaced the display they were meant for.
    /// Failures are logged and leave the markers and bounds displayed.
    pub fn complete_route(
        &mut self,
        generation: u64,
        outcome: Result<RouteGeometry, DirectionsError>,
    ) -> RouteCompletion {
        if generation != self.generation {
            log::debug!(
                "discarding directions outcome for superseded cycle {generation} (current {})",
                self.generation
            );
            return RouteCompletion::Stale;
        }
        match outcome {
            Ok(path) => {
                if let Some(state) = self.displayed.as_mut() {
                    state.path = Some(path);
                }
                RouteCompletion::Drawn
            }
            Err(err) => {
                log::warn!("directions request failed, drawing markers only: {err}");
                RouteCompletion::Skipped
            }
        }
    }

    /// Render, submit to `service` when a route exists, and apply the outcome.
    ///
    /// This is the synchronous convenience driver: one outstanding request
    /// per cycle, no retry. The completion is `None` when the frame carried
    /// no request.
    pub fn refresh<S>(
        &mut self,
        service: &S,
        origin: Option<Coord<f64>>,
        points: &[DeliveryPoint],
        destination: Option<Coord<f64>>,
    ) -> (RenderFrame, Option<RouteCompletion>)
    where
        S: DirectionsService + ?Sized,
    {
        let frame = self.render(origin, points, destination);
        let completion = frame.request.as_ref().map(|request| {
            let outcome = service.fetch_route(request);
            self.complete_route(frame.generation, outcome)
        });
        (frame, completion)
    }

    /// The currently displayed state, if any render has happened.
    #[must_use]
    pub fn displayed(&self) -> Option<&DisplayState> {
        self.displayed.as_ref()
    }
}

/// Initial map centre: the origin, else the first delivery point, else
/// [`DEFAULT_CENTER`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::{DEFAULT_CENTER, center};
///
/// assert_eq!(center(None, &[]), DEFAULT_CENTER);
/// ```
#[must_use]
pub fn center(origin: Option<Coord<f64>>, points: &[DeliveryPoint]) -> Coord<f64> {
    origin
        .or_else(|| points.first().map(|point| point.location))
        .unwrap_or(DEFAULT_CENTER)
}
