use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use kundali_chart::{PanchangRequest, PersonRequest, global};
use kundali_config::{ConfigSource, KundaliConfig};
use kundali_time::UtcTime;
use kundali_vedic_base::{
    ALL_VARGAS, amsha_position, check_longitude, nakshatra_from_longitude, rashi_from_longitude,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::logging::init_logging;

/// Unix epoch as a Julian date.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Input file of the `match` subcommand.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchInput {
    pub bride: PersonRequest,
    pub groom: PersonRequest,
}

fn now_jd() -> f64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();
    UNIX_EPOCH_JD + secs / 86_400.0
}

/// Julian date of a UTC timestamp argument, or now.
fn instant_jd(at: Option<&str>) -> Result<f64, CliError> {
    match at {
        Some(text) => Ok(text.parse::<UtcTime>()?.to_jd()),
        None => Ok(now_jd()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn read_match_input(path: &Path) -> Result<MatchInput, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Run one subcommand against the global oracle and render JSON.
pub fn execute(command: &Commands, config: &KundaliConfig) -> Result<String, CliError> {
    let default_system = config.defaults.ayanamsha;
    match command {
        Commands::Chart { birth } => {
            to_json(&kundali_chart::chart(&birth.to_request(default_system)?)?)
        }
        Commands::Divisional { birth, charts } => to_json(&kundali_chart::divisional(
            &birth.to_request(default_system)?,
            charts,
        )?),
        Commands::Dasha { birth, horizon, at } => {
            let horizon = horizon.unwrap_or(config.dasha.horizon_years);
            to_json(&kundali_chart::dasha(
                &birth.to_request(default_system)?,
                horizon,
                instant_jd(at.as_deref())?,
            )?)
        }
        Commands::Yogas { birth } => {
            to_json(&kundali_chart::yogas(&birth.to_request(default_system)?)?)
        }
        Commands::Match { input } => {
            let MatchInput { bride, groom } = read_match_input(input)?;
            to_json(&kundali_chart::compatibility(&bride, &groom)?)
        }
        Commands::Transits { birth, at } => to_json(&kundali_chart::transits(
            &birth.to_request(default_system)?,
            instant_jd(at.as_deref())?,
            &config.transits.orbs,
        )?),
        Commands::Panchang {
            date,
            lat,
            lon,
            tz,
            ayanamsha,
        } => {
            let day: UtcTime = date.parse()?;
            let request = PanchangRequest {
                year: day.year,
                month: day.month,
                day: day.day,
                latitude: *lat,
                longitude: *lon,
                timezone: *tz,
                ayanamsha: ayanamsha.unwrap_or(default_system),
            };
            to_json(&kundali_chart::panchang(&request)?)
        }
        Commands::Horoscope {
            sign,
            date,
            ayanamsha,
        } => {
            let day = match date {
                Some(text) => text.parse::<UtcTime>()?,
                None => UtcTime::from_jd(now_jd())?,
            };
            to_json(&kundali_chart::horoscope(
                *sign,
                day.year,
                day.month,
                day.day,
                ayanamsha.unwrap_or(default_system),
            )?)
        }
        Commands::Rashi { lon } => to_json(&rashi_from_longitude(check_longitude(*lon)?)),
        Commands::Nakshatra { lon } => {
            to_json(&nakshatra_from_longitude(check_longitude(*lon)?))
        }
        Commands::Amsha { lon, chart } => {
            let vargas = chart.map_or(ALL_VARGAS.to_vec(), |v| vec![v]);
            let positions = vargas
                .into_iter()
                .map(|v| amsha_position(*lon, v))
                .collect::<Result<Vec<_>, _>>()?;
            to_json(&positions)
        }
    }
}

/// Load config, start logging, install the oracle, run the command.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let (config, source) = KundaliConfig::resolve(cli.config.as_deref())?;
    init_logging(&config.logging.filter);
    match &source {
        ConfigSource::Explicit(path) | ConfigSource::Environment(path) => {
            info!(path = %path.display(), "using config file")
        }
        ConfigSource::Defaults => debug!("using built-in config"),
    }
    global::init(config.ephemeris.clone())?;
    execute(&cli.command, &config)
}
