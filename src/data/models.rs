use crate::error::{AnalysisError, Result};

/// Upper bound for one team's goals in one match. Keeps match totals and the
/// per-integer histogram bins small.
pub const MAX_TEAM_GOALS: u32 = 999;

/// A delimited file as read from disk: header names plus rows in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One team's goal count within one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGoal {
    pub team: String,
    pub goals: u32,
    /// Match identifier, only present when a match column is configured
    pub match_id: Option<String>,
}

/// A single match with home and away goals merged into one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub home_team: String,
    pub home_goals: u32,
    pub away_team: String,
    pub away_goals: u32,
    /// Always `home_goals + away_goals`
    pub total_goals: u32,
}

impl MatchRow {
    pub fn new(home: TeamGoal, away: TeamGoal) -> Result<Self> {
        let total_goals =
            home.goals
                .checked_add(away.goals)
                .ok_or_else(|| AnalysisError::GoalOverflow {
                    home_team: home.team.clone(),
                    away_team: away.team.clone(),
                })?;
        Ok(Self {
            total_goals,
            home_team: home.team,
            home_goals: home.goals,
            away_team: away.team,
            away_goals: away.goals,
        })
    }
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// First `n` rows, or all of them if the table is shorter.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Convert rows into typed team records.
    ///
    /// Goal cells must parse as non-negative integers; anything else is
    /// rejected with the offending row number (0-based, header excluded).
    pub fn team_goals(
        &self,
        team_column: &str,
        goal_column: &str,
        match_column: Option<&str>,
    ) -> Result<Vec<TeamGoal>> {
        let team_idx = self.require_column(team_column)?;
        let goal_idx = self.require_column(goal_column)?;
        let match_idx = match match_column {
            Some(name) => Some(self.require_column(name)?),
            None => None,
        };

        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");

                let raw_goal = cell(goal_idx);
                let goals = raw_goal
                    .parse::<u32>()
                    .map_err(|_| AnalysisError::InvalidGoal {
                        row,
                        value: raw_goal.to_string(),
                    })?;
                if goals > MAX_TEAM_GOALS {
                    return Err(AnalysisError::GoalOutOfRange {
                        row,
                        goals,
                        max: MAX_TEAM_GOALS,
                    });
                }

                let match_id = match match_idx {
                    Some(idx) => {
                        let id = cell(idx);
                        if id.is_empty() {
                            return Err(AnalysisError::EmptyMatchId { row });
                        }
                        Some(id.to_string())
                    }
                    None => None,
                };

                Ok(TeamGoal {
                    team: cell(team_idx).to_string(),
                    goals,
                    match_id,
                })
            })
            .collect()
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))
    }
}
