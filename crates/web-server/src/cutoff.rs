use anyhow::anyhow;
use chrono::NaiveDate;
use configuration::{CutoffSource, ObservationSettings, DATE_FORMAT};
use database::DbRepository;

/// Works out the start of the "last 12 months" window, once, at startup.
///
/// With `CutoffSource::Fixed` this is the configured last observed date
/// minus the window and never touches the store. With `CutoffSource::Latest`
/// the last observed date is `MAX(date)` from the store; an empty table, an
/// unparsable date, or a window reaching past the calendar start falls back
/// to the fixed value.
pub async fn resolve_cutoff(
    settings: &ObservationSettings,
    repo: &DbRepository,
) -> anyhow::Result<String> {
    let fixed = settings.fixed_cutoff().ok_or_else(|| {
        anyhow!(
            "window of {} days before {} is out of range",
            settings.window_days,
            settings.last_observed_date
        )
    })?;

    let cutoff = match settings.cutoff_source {
        CutoffSource::Fixed => fixed,
        CutoffSource::Latest => {
            let latest = repo.latest_observation_date().await?;
            latest_cutoff(settings, latest.as_deref()).unwrap_or(fixed)
        }
    };

    tracing::info!(
        cutoff = %cutoff,
        source = ?settings.cutoff_source,
        "Observation window resolved."
    );
    Ok(cutoff)
}

fn latest_cutoff(settings: &ObservationSettings, latest: Option<&str>) -> Option<String> {
    let Some(latest) = latest else {
        tracing::warn!("Measurement table is empty; using the fixed cutoff.");
        return None;
    };
    let date = match NaiveDate::parse_from_str(latest, DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(
                latest = %latest,
                error = %e,
                "Latest measurement date is not ISO; using the fixed cutoff."
            );
            return None;
        }
    };
    let cutoff = settings.cutoff_from(date);
    if cutoff.is_none() {
        tracing::warn!(latest = %latest, "Window is out of range; using the fixed cutoff.");
    }
    cutoff
}
