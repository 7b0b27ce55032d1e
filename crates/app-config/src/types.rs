use crate::error::{Error, Result};
use serde::Deserialize;

/// Top-level application settings, assembled by `load_settings`.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Where the price history comes from.
    pub data: DataSettings,
    /// Candidate ranges for the grid sweep.
    pub sweep: SweepSettings,
    /// Settings for the forecast pipeline.
    pub forecast: ForecastSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("sweep.short", &self.sweep.short),
            ("sweep.long", &self.sweep.long),
        ] {
            if range.step == 0 {
                return Err(Error::InvalidSweepStep { range: name });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in.
    pub environment: String,
    /// Log-level filter for the tracing subscriber (e.g. "info").
    pub log_level: String,
    /// Worker threads for the grid sweep; 0 lets rayon decide.
    #[serde(default)]
    pub optimizer_cores: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataSettings {
    /// Path to the local price file (`date,close` or `date close` rows).
    pub prices_path: String,
}

/// Candidate window ranges for the (short, long) sweep.
#[derive(Deserialize, Debug, Clone)]
pub struct SweepSettings {
    pub short: SweepRange,
    pub long: SweepRange,
}

/// An inclusive integer range expanded into candidate window lengths.
#[derive(Deserialize, Debug, Clone)]
pub struct SweepRange {
    pub start: u32,
    pub end: u32,
    #[serde(default = "default_step")]
    pub step: u32,
}

fn default_step() -> u32 {
    1
}

impl SweepRange {
    /// Expands the range into explicit candidates: start, start + step, ...
    /// up to and including end. Empty when start exceeds end.
    ///
    /// Callers get the step validated by `Settings::validate`; a zero step
    /// here would never terminate.
    pub fn values(&self) -> Vec<u32> {
        (self.start..=self.end)
            .step_by(self.step as usize)
            .collect()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForecastSettings {
    /// Input window length handed to the sequence predictor.
    pub sequence_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_an_inclusive_stepped_range() {
        let range = SweepRange {
            start: 5,
            end: 20,
            step: 5,
        };
        assert_eq!(range.values(), vec![5, 10, 15, 20]);
    }

    #[test]
    fn start_past_end_expands_to_nothing() {
        let range = SweepRange {
            start: 10,
            end: 5,
            step: 1,
        };
        assert!(range.values().is_empty());
    }

    #[test]
    fn zero_step_fails_validation() {
        let settings = Settings {
            app: AppSettings {
                environment: "test".into(),
                log_level: "info".into(),
                optimizer_cores: 0,
            },
            data: DataSettings {
                prices_path: "data/prices.csv".into(),
            },
            sweep: SweepSettings {
                short: SweepRange {
                    start: 5,
                    end: 50,
                    step: 0,
                },
                long: SweepRange {
                    start: 20,
                    end: 200,
                    step: 20,
                },
            },
            forecast: ForecastSettings {
                sequence_length: 60,
            },
        };

        assert!(matches!(
            settings.validate().unwrap_err(),
            Error::InvalidSweepStep {
                range: "sweep.short"
            }
        ));
    }
}
