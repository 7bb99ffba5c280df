//! Render command implementation for the Lastmile CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use lastmile_core::{
    Bounds, DeliveryPoint, DirectionsService, FuelParams, MapController, Marker, RouteGeometry,
    RoutingRequest, TripEstimate, center, estimate_trip,
};
use lastmile_directions::HttpDirectionsService;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_RENDER_KM_PER_LITRE, ARG_RENDER_OSRM_BASE_URL, ARG_RENDER_PLAN,
    ARG_RENDER_PRICE_PER_LITRE, CliError, ENV_RENDER_PLAN,
};

/// CLI arguments for the `render` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Render a delivery plan into the frame a map widget would \
                 consume: labelled markers, a bounding region, the routing \
                 request, and a fuel estimate. The plan is a JSON document \
                 with optional origin and destination coordinates and a \
                 list of delivery points. Passing an OSRM base URL also \
                 fetches the drawable path.",
    about = "Render a delivery plan"
)]
#[ortho_config(prefix = "LASTMILE")]
pub(crate) struct RenderArgs {
    /// Path to a JSON render plan.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) plan_path: Option<Utf8PathBuf>,
    /// Base URL of an OSRM server to fetch the drawable path from.
    #[arg(long = ARG_RENDER_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Vehicle efficiency in kilometres per litre.
    #[arg(long = ARG_RENDER_KM_PER_LITRE, value_name = "km")]
    #[serde(default)]
    pub(crate) km_per_litre: Option<f64>,
    /// Fuel price per litre.
    #[arg(long = ARG_RENDER_PRICE_PER_LITRE, value_name = "price")]
    #[serde(default)]
    pub(crate) price_per_litre: Option<f64>,
}

impl RenderArgs {
    pub(crate) fn into_config(self) -> Result<RenderConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RenderConfig::try_from(merged)
    }
}

/// Resolved `render` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RenderConfig {
    /// Path to the JSON render plan.
    pub(crate) plan_path: Utf8PathBuf,
    /// OSRM base URL; `None` skips path fetching.
    pub(crate) osrm_base_url: Option<String>,
    /// Validated fuel parameters for the trip estimate.
    pub(crate) fuel: FuelParams,
}

impl RenderConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if self.plan_path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_RENDER_PLAN,
                path: self.plan_path.clone(),
            })
        }
    }
}

impl TryFrom<RenderArgs> for RenderConfig {
    type Error = CliError;

    fn try_from(args: RenderArgs) -> Result<Self, Self::Error> {
        let plan_path = args.plan_path.ok_or(CliError::MissingArgument {
            field: ARG_RENDER_PLAN,
            env: ENV_RENDER_PLAN,
        })?;

        let defaults = FuelParams::default();
        let fuel = FuelParams::new(
            args.km_per_litre.unwrap_or_else(|| defaults.km_per_litre()),
            args.price_per_litre
                .unwrap_or_else(|| defaults.price_per_litre()),
        )?;

        Ok(Self {
            plan_path,
            osrm_base_url: args.osrm_base_url,
            fuel,
        })
    }
}

/// A JSON render plan: the inputs of one refresh cycle.
///
/// Coordinates are `{ "x": lon, "y": lat }` objects.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RenderPlan {
    /// Optional route origin.
    #[serde(default)]
    pub(crate) origin: Option<Coord<f64>>,
    /// Optional route destination.
    #[serde(default)]
    pub(crate) destination: Option<Coord<f64>>,
    /// Delivery points, ranked or not.
    #[serde(default)]
    pub(crate) points: Vec<DeliveryPoint>,
}

/// Everything the render command prints.
#[derive(Debug, Serialize)]
pub(crate) struct RenderReport {
    /// Markers in display order.
    pub(crate) markers: Vec<Marker>,
    /// Bounding region of the markers.
    pub(crate) bounds: Bounds,
    /// Routing request, when one exists.
    pub(crate) request: Option<RoutingRequest>,
    /// Initial map centre.
    pub(crate) center: Coord<f64>,
    /// Fuel estimate over the marker path.
    pub(crate) estimate: TripEstimate,
    /// Drawable geometry when an OSRM fetch succeeded.
    pub(crate) path: Option<RouteGeometry>,
}

/// Builds the optional directions service for the current invocation.
pub(super) trait RenderDirectionsBuilder {
    fn build(&self, config: &RenderConfig)
    -> Result<Option<Box<dyn DirectionsService>>, CliError>;
}

pub(super) struct DefaultRenderDirectionsBuilder;

impl RenderDirectionsBuilder for DefaultRenderDirectionsBuilder {
    fn build(
        &self,
        config: &RenderConfig,
    ) -> Result<Option<Box<dyn DirectionsService>>, CliError> {
        config
            .osrm_base_url
            .as_ref()
            .map(|base_url| {
                HttpDirectionsService::new(base_url.clone())
                    .map(|service| Box::new(service) as Box<dyn DirectionsService>)
                    .map_err(|source| CliError::BuildDirectionsService {
                        base_url: base_url.clone(),
                        source,
                    })
            })
            .transpose()
    }
}

pub(super) fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRenderDirectionsBuilder;
    run_render_with(args, &builder, &mut stdout)
}

pub(super) fn run_render_with(
    args: RenderArgs,
    builder: &dyn RenderDirectionsBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_render_config(args)?;
    let report = render_report(&config, builder)?;
    write_report(writer, &report)
}

fn resolve_render_config(args: RenderArgs) -> Result<RenderConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Run one refresh cycle over the plan and collect the printable report.
pub(crate) fn render_report(
    config: &RenderConfig,
    builder: &dyn RenderDirectionsBuilder,
) -> Result<RenderReport, CliError> {
    let plan = load_plan(&config.plan_path)?;
    let service = builder.build(config)?;

    let mut controller = MapController::new();
    let frame = controller.render(plan.origin, &plan.points, plan.destination);

    if let (Some(service), Some(request)) = (&service, &frame.request) {
        let outcome = service.fetch_route(request);
        controller.complete_route(frame.generation, outcome);
    }
    let path = controller
        .displayed()
        .and_then(|state| state.path.clone());

    let marker_path: Vec<Coord<f64>> = frame.markers.iter().map(|m| m.location).collect();
    let estimate = estimate_trip(&marker_path, &config.fuel);

    Ok(RenderReport {
        center: center(plan.origin, &plan.points),
        markers: frame.markers,
        bounds: frame.bounds,
        request: frame.request,
        estimate,
        path,
    })
}

/// Loads a JSON-encoded [`RenderPlan`] from disk.
pub(crate) fn load_plan(path: &Utf8Path) -> Result<RenderPlan, CliError> {
    let file = std::fs::File::open(path).map_err(|source| CliError::OpenPlan {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlan {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &RenderReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
