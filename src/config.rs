use clap::Parser;
use std::path::PathBuf;

use crate::analysis::Alternative;

/// Goals-per-match analysis of a football results file
#[derive(Parser, Debug, Clone)]
#[command(name = "goal-stats", version, about)]
pub struct Config {
    /// Semicolon-delimited input file, one row per team per match
    #[arg(long, env = "GOALS_INPUT", default_value = "worldcup matches 2022.csv")]
    pub input: PathBuf,

    /// Field delimiter of the input file (single ASCII character)
    #[arg(long, env = "GOALS_DELIMITER", default_value = ";")]
    pub delimiter: String,

    /// Column holding the team name
    #[arg(long, env = "GOALS_TEAM_COLUMN", default_value = "Team")]
    pub team_column: String,

    /// Column holding the goals scored by that team
    #[arg(long, env = "GOALS_GOAL_COLUMN", default_value = "Goal")]
    pub goal_column: String,

    /// Column holding a match identifier. When set, home/away rows are joined
    /// on this key instead of by alternating row position.
    #[arg(long, env = "GOALS_MATCH_COLUMN")]
    pub match_column: Option<String>,

    /// Mean goals per match under the null hypothesis
    #[arg(long, env = "GOALS_NULL_MEAN", default_value = "2.0")]
    pub null_mean: f64,

    /// Direction of the alternative hypothesis
    #[arg(long, env = "GOALS_ALTERNATIVE", value_enum, default_value = "greater")]
    pub alternative: Alternative,

    /// Significance level (0.0–1.0, exclusive)
    #[arg(long, env = "GOALS_ALPHA", default_value = "0.05")]
    pub alpha: f64,

    /// Directory the plots are written to
    #[arg(long, env = "GOALS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Boxplot file name
    #[arg(long, default_value = "boxplot.png")]
    pub boxplot_file: String,

    /// Histogram file name
    #[arg(long, default_value = "histogram.png")]
    pub histogram_file: String,

    /// Critical-region plot file name
    #[arg(long, default_value = "test_critical_value.png")]
    pub critical_file: String,

    /// Also write the test results as JSON to this path
    #[arg(long, env = "GOALS_SUMMARY_JSON")]
    pub summary_json: Option<PathBuf>,

    /// Number of input rows to preview before the analysis
    #[arg(long, default_value = "5")]
    pub head_rows: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            anyhow::bail!("alpha must be strictly between 0.0 and 1.0");
        }
        if !self.null_mean.is_finite() {
            anyhow::bail!("null_mean must be a finite number");
        }
        if self.delimiter_byte().is_none() {
            anyhow::bail!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            );
        }
        if self.team_column.trim().is_empty() || self.goal_column.trim().is_empty() {
            anyhow::bail!("team and goal column names must not be empty");
        }
        if let Some(col) = &self.match_column {
            if col.trim().is_empty() {
                anyhow::bail!("match column name must not be empty");
            }
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Some(*b),
            _ => None,
        }
    }

    pub fn boxplot_path(&self) -> PathBuf {
        self.output_path(&self.boxplot_file)
    }

    pub fn histogram_path(&self) -> PathBuf {
        self.output_path(&self.histogram_file)
    }

    pub fn critical_path(&self) -> PathBuf {
        self.output_path(&self.critical_file)
    }

    fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["goal-stats"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).expect("args should parse")
    }

    #[test]
    fn defaults_reproduce_worldcup_run() {
        let cfg = parse(&[]);
        assert_eq!(cfg.input, PathBuf::from("worldcup matches 2022.csv"));
        assert_eq!(cfg.delimiter_byte(), Some(b';'));
        assert_eq!(cfg.null_mean, 2.0);
        assert_eq!(cfg.alpha, 0.05);
        assert_eq!(cfg.alternative, Alternative::Greater);
        assert_eq!(cfg.boxplot_path(), PathBuf::from("./boxplot.png"));
        assert_eq!(cfg.critical_path(), PathBuf::from("./test_critical_value.png"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn output_dir_prefixes_file_names() {
        let cfg = parse(&["--output-dir", "out", "--histogram-file", "h.png"]);
        assert_eq!(cfg.histogram_path(), PathBuf::from("out/h.png"));
    }

    #[test]
    fn rejects_alpha_out_of_range() {
        assert!(parse(&["--alpha", "0"]).validate().is_err());
        assert!(parse(&["--alpha", "1.5"]).validate().is_err());
        assert!(parse(&["--alpha", "0.01"]).validate().is_ok());
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        assert!(parse(&["--delimiter", ";;"]).validate().is_err());
        assert!(parse(&["--delimiter", ","]).validate().is_ok());
    }

    #[test]
    fn parses_alternative_names() {
        assert_eq!(
            parse(&["--alternative", "two-sided"]).alternative,
            Alternative::TwoSided
        );
        assert_eq!(parse(&["--alternative", "less"]).alternative, Alternative::Less);
    }
}
