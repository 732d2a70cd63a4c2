use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kundali_chart::ChartRequest;
use kundali_time::UtcTime;
use kundali_vedic_base::{AyanamshaSystem, Rashi, Varga};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "kundali", about = "Vedic chart calculations", version)]
pub struct Cli {
    /// TOML config file; overrides KUNDALI_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Local birth time and place.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct BirthArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Local time (HH:MM or HH:MM:SS)
    #[arg(long)]
    pub time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Timezone offset in hours east of UTC
    #[arg(long, allow_negative_numbers = true)]
    pub tz: f64,
    /// Ayanamsha: lahiri, krishnamurti (kp), raman, thirukanitham
    #[arg(long)]
    pub ayanamsha: Option<AyanamshaSystem>,
}

impl BirthArgs {
    /// Build a request; `default_system` fills a missing `--ayanamsha`.
    pub fn to_request(&self, default_system: AyanamshaSystem) -> Result<ChartRequest, CliError> {
        let wall: UtcTime = format!("{}T{}", self.date.trim(), self.time.trim()).parse()?;
        Ok(ChartRequest {
            year: wall.year,
            month: wall.month,
            day: wall.day,
            hour: wall.hour,
            minute: wall.minute,
            second: wall.second.floor() as u32,
            latitude: self.lat,
            longitude: self.lon,
            timezone: self.tz,
            ayanamsha: self.ayanamsha.unwrap_or(default_system),
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Birth chart: ascendant, nine grahas, twelve houses
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Divisional charts (D1, D2, D3, D7, D9, D10, D12)
    Divisional {
        #[command(flatten)]
        birth: BirthArgs,
        /// Charts to build, comma separated; all when omitted
        #[arg(long = "chart", value_delimiter = ',')]
        charts: Vec<Varga>,
    },
    /// Vimshottari mahadasha and antardasha timeline
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Years to cover; defaults to the configured horizon
        #[arg(long)]
        horizon: Option<f64>,
        /// UTC instant for the current period (YYYY-MM-DD[THH:MM[:SS]]); now when omitted
        #[arg(long)]
        at: Option<String>,
    },
    /// Yogas present in the birth chart
    Yogas {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Ashtakoot compatibility from a JSON file with "bride" and "groom" records
    Match {
        /// Path to the JSON input
        input: PathBuf,
    },
    /// Transit aspects against the birth chart
    Transits {
        #[command(flatten)]
        birth: BirthArgs,
        /// UTC instant of the transit sky; now when omitted
        #[arg(long)]
        at: Option<String>,
    },
    /// Tithi, nakshatra, yoga, karana and vara for a date
    Panchang {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        tz: f64,
        #[arg(long)]
        ayanamsha: Option<AyanamshaSystem>,
    },
    /// Daily sign ratings from whole-sign transits
    Horoscope {
        /// One sign (e.g. aries); all twelve when omitted
        #[arg(long)]
        sign: Option<Rashi>,
        /// UTC date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        ayanamsha: Option<AyanamshaSystem>,
    },
    /// Rashi of a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Divisional sign of a sidereal longitude
    Amsha {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// One chart; all seven when omitted
        #[arg(long)]
        chart: Option<Varga>,
    },
}
