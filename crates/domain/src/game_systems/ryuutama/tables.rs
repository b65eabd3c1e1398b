//! Fixed progression tables.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Experience needed to reach levels 1 through 10. A character's level is
/// the index of the first entry strictly greater than their experience.
pub const CHARACTER_EXP_LEVELS: [i32; 10] =
    [0, 100, 600, 1200, 2000, 3000, 4200, 5800, 7500, 10000];

/// Die sizes in ascending order.
pub const DICE: [i32; 5] = [4, 6, 8, 10, 12];

/// Lookup tables the calculator steps through.
///
/// The embedding application may supply its own (house rules, translated
/// rulebooks); [`Default`] gives the published values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTables", rename_all = "camelCase")]
pub struct ProgressionTables {
    exp_levels: Vec<i32>,
    dice: Vec<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTables {
    exp_levels: Vec<i32>,
    dice: Vec<i32>,
}

impl TryFrom<RawTables> for ProgressionTables {
    type Error = DomainError;

    fn try_from(raw: RawTables) -> Result<Self, Self::Error> {
        Self::new(raw.exp_levels, raw.dice)
    }
}

impl Default for ProgressionTables {
    fn default() -> Self {
        Self {
            exp_levels: CHARACTER_EXP_LEVELS.to_vec(),
            dice: DICE.to_vec(),
        }
    }
}

impl ProgressionTables {
    /// Build tables from custom sequences.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either table is empty or not
    /// strictly ascending.
    pub fn new(exp_levels: Vec<i32>, dice: Vec<i32>) -> Result<Self, DomainError> {
        ensure_ascending("Experience level", &exp_levels)?;
        ensure_ascending("Die step", &dice)?;
        Ok(Self { exp_levels, dice })
    }

    pub fn exp_levels(&self) -> &[i32] {
        &self.exp_levels
    }

    pub fn dice(&self) -> &[i32] {
        &self.dice
    }

    /// Highest reachable level.
    pub fn max_level(&self) -> i32 {
        i32::try_from(self.exp_levels.len()).unwrap_or(i32::MAX)
    }

    /// Index of the first threshold strictly greater than `exp`.
    ///
    /// Experience at or past the last threshold yields [`Self::max_level`].
    pub fn level_for(&self, exp: i32) -> i32 {
        self.exp_levels
            .iter()
            .position(|threshold| *threshold > exp)
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or_else(|| self.max_level())
    }

    /// The die one step above `die`.
    ///
    /// The largest die stays where it is. Returns `None` when `die` is not
    /// in the table at all.
    pub fn step_up(&self, die: i32) -> Option<i32> {
        let index = self.dice.iter().position(|d| *d == die)?;
        self.dice
            .get(index + 1)
            .or_else(|| self.dice.last())
            .copied()
    }
}

fn ensure_ascending(label: &str, table: &[i32]) -> Result<(), DomainError> {
    if table.is_empty() {
        return Err(DomainError::validation(format!("{} table cannot be empty", label)));
    }
    if table.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(DomainError::validation(format!(
            "{} table must be strictly ascending",
            label
        )));
    }
    Ok(())
}
