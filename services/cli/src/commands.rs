use crate::render::{render_fields, render_report, ResultsResponse};
use clap::Args;
use jobcompare::comparison::{compare_state, ComparisonReport, RadarGeometry};
use jobcompare::error::AppError;
use jobcompare::sharing::{share_link, ComparisonSession, KeyValueStore};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub(crate) const DEFAULT_EXPORT_FILE: &str = "jobcompare_export.json";
const NO_DATA: &str = "No data found";

#[derive(Args, Debug)]
pub(crate) struct ResultsArgs {
    /// Share link, query string or bare token to open instead of the saved comparison
    #[arg(long)]
    pub(crate) link: Option<String>,
    /// Emit the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Include radar chart vertices in the text output
    #[arg(long)]
    pub(crate) radar: bool,
    /// Radar chart radius used for the projected points
    #[arg(long, default_value_t = 100.0)]
    pub(crate) radius: f64,
}

impl Default for ResultsArgs {
    fn default() -> Self {
        Self {
            link: None,
            json: false,
            radar: false,
            radius: 100.0,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct SetArgs {
    /// Field key, e.g. `a_salary`, `b_remote` or `w_growth`
    pub(crate) key: String,
    /// Raw value as it would be typed into the form
    pub(crate) value: String,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// JSON document produced by `export`
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Destination file; `-` writes to stdout
    #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
    pub(crate) output: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ShareArgs {
    /// Override the configured results page the link points at
    #[arg(long)]
    pub(crate) base_url: Option<String>,
}

pub(crate) fn run_results<S>(
    session: &ComparisonSession<S>,
    args: ResultsArgs,
) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    let ResultsArgs {
        link,
        json,
        radar,
        radius,
    } = args;

    let Some(resolved) = session.resolve(link.as_deref())? else {
        return Ok(NO_DATA.to_string());
    };

    let comparison = compare_state(&resolved.state);
    let report = ComparisonReport::build(&resolved.state, &comparison, RadarGeometry::new(radius));
    info!(
        source = ?resolved.source,
        winner = comparison.result.winner.letter(),
        "rendered comparison"
    );

    if json {
        let response = ResultsResponse {
            source: resolved.source,
            link_rejected: resolved.link_rejected,
            comparison: &comparison,
            report: &report,
        };
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    Ok(render_report(&resolved, &report, radar))
}

pub(crate) fn run_demo<S>(session: &ComparisonSession<S>) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    session.load_demo()?;
    info!("loaded demo comparison");
    Ok("Demo loaded".to_string())
}

pub(crate) fn run_set<S>(session: &ComparisonSession<S>, args: SetArgs) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    let (field, _) = session.set_field(&args.key, &args.value)?;
    info!(%field, "saved field");
    Ok(format!("Saved {field}"))
}

pub(crate) fn run_fields<S>(session: &ComparisonSession<S>) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    Ok(render_fields(&session.current()?))
}

pub(crate) fn run_import<S>(
    session: &ComparisonSession<S>,
    args: ImportArgs,
) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    let raw = fs::read_to_string(&args.path)?;
    session.import_json(&raw)?;
    info!(path = %args.path.display(), "imported comparison");
    Ok("Imported".to_string())
}

pub(crate) fn run_export<S>(
    session: &ComparisonSession<S>,
    args: ExportArgs,
) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    let document = session.export_json()?;
    if args.output.as_os_str() == "-" {
        return Ok(document);
    }

    fs::write(&args.output, document)?;
    info!(path = %args.output.display(), "exported comparison");
    Ok(format!("Exported to {}", args.output.display()))
}

pub(crate) fn run_reset<S>(session: &ComparisonSession<S>) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    session.reset()?;
    Ok("Reset".to_string())
}

/// Mirrors the save page: a link is always produced, from defaults when nothing is saved.
pub(crate) fn run_share<S>(
    session: &ComparisonSession<S>,
    args: ShareArgs,
) -> Result<String, AppError>
where
    S: KeyValueStore,
{
    let state = session.current()?;
    let link = match args.base_url {
        Some(base) => share_link(base.trim(), &state),
        None => session.share_link_for(&state),
    };
    Ok(link)
}
