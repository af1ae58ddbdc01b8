use boxjoint::util::Color;
use serde::{Deserialize, Serialize};

/// Configuration of the sheet layout
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Slack allowed when checking whether a padded part fits in a free rectangle
    pub fit_tolerance: f64,
    /// Slack allowed when checking the exact extent of a placed part against the usable area of its sheet
    pub verify_tolerance: f64,
    /// Colors assigned to the cases of a job, cycled if there are more cases than colors.
    /// An empty palette leaves every part black.
    pub palette: Vec<Color>,
    /// Generate the panels of different cases in parallel. Packing is always sequential.
    pub parallel_generation: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            fit_tolerance: 1e-6,
            verify_tolerance: 1e-6,
            palette: Color::DEFAULT_PALETTE.to_vec(),
            parallel_generation: true,
        }
    }
}

impl PackConfig {
    /// Color of every part of case `job_id`
    pub fn color_of(&self, job_id: usize) -> Color {
        match self.palette.is_empty() {
            true => Color::default(),
            false => self.palette[job_id % self.palette.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_over_jobs() {
        let config = PackConfig::default();
        let n = config.palette.len();
        assert_eq!(config.color_of(1), config.color_of(n + 1));
        assert_ne!(config.color_of(0), config.color_of(1));
    }

    #[test]
    fn partial_config_file_uses_defaults() {
        let config: PackConfig =
            serde_json::from_str(r##"{"verify_tolerance": 1e-4, "palette": ["#000000"]}"##).unwrap();
        assert_eq!(config.verify_tolerance, 1e-4);
        assert_eq!(config.fit_tolerance, 1e-6);
        assert_eq!(config.color_of(5), Color(0, 0, 0));
        assert!(config.parallel_generation);
    }
}
