//! Cascading drill-down over the station address table.
//!
//! Selection proceeds city → district → neighborhood → station. The choices
//! offered at a level are computed from the rows that match every selection
//! above it, so choosing a value at some level always discards the selections
//! below it.

use crate::address::{AddressTable, StationAddress};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Top,
    Sub,
    Neighborhood,
    Station,
}

impl Level {
    pub const ALL: [Self; 4] = [Self::Top, Self::Sub, Self::Neighborhood, Self::Station];

    /// Number of levels that must be selected before this one.
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Sub => 1,
            Self::Neighborhood => 2,
            Self::Station => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "City",
            Self::Sub => "District",
            Self::Neighborhood => "Neighborhood",
            Self::Station => "Station",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A shallower level has no selection yet.
    LevelNotReached(Level),
    /// The value is not among the choices currently offered at the level.
    UnknownChoice { level: Level, value: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelNotReached(level) => {
                write!(f, "Cannot select a {level} before the levels above it")
            }
            Self::UnknownChoice { level, value } => {
                write!(f, "'{value}' is not an available {level} choice")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// One option of a selector: the submitted value and what is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn plain(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            label: value.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoneSelected,
    TopSelected {
        top: String,
    },
    SubSelected {
        top: String,
        sub: String,
    },
    NeighborhoodSelected {
        top: String,
        sub: String,
        neighborhood: String,
    },
    StationSelected {
        top: String,
        sub: String,
        neighborhood: String,
        station_id: String,
    },
}

impl Selection {
    /// Number of selected levels.
    pub const fn depth(&self) -> usize {
        match self {
            Self::NoneSelected => 0,
            Self::TopSelected { .. } => 1,
            Self::SubSelected { .. } => 2,
            Self::NeighborhoodSelected { .. } => 3,
            Self::StationSelected { .. } => 4,
        }
    }

    pub fn top(&self) -> Option<&str> {
        match self {
            Self::NoneSelected => None,
            Self::TopSelected { top }
            | Self::SubSelected { top, .. }
            | Self::NeighborhoodSelected { top, .. }
            | Self::StationSelected { top, .. } => Some(top),
        }
    }

    pub fn sub(&self) -> Option<&str> {
        match self {
            Self::SubSelected { sub, .. }
            | Self::NeighborhoodSelected { sub, .. }
            | Self::StationSelected { sub, .. } => Some(sub),
            _ => None,
        }
    }

    pub fn neighborhood(&self) -> Option<&str> {
        match self {
            Self::NeighborhoodSelected { neighborhood, .. }
            | Self::StationSelected { neighborhood, .. } => Some(neighborhood),
            _ => None,
        }
    }

    pub fn station_id(&self) -> Option<&str> {
        match self {
            Self::StationSelected { station_id, .. } => Some(station_id),
            _ => None,
        }
    }

    pub fn value(&self, level: Level) -> Option<&str> {
        match level {
            Level::Top => self.top(),
            Level::Sub => self.sub(),
            Level::Neighborhood => self.neighborhood(),
            Level::Station => self.station_id(),
        }
    }

    /// Keeps the selections strictly above `level`.
    pub fn truncate(&self, level: Level) -> Self {
        let mut kept = Self::NoneSelected;
        for above in Level::ALL.into_iter().take(level.index()) {
            match self.value(above) {
                Some(value) => kept = kept.push(value.to_owned()),
                None => break,
            }
        }
        kept
    }

    /// Selects `value` at `level`, resetting every deeper level.
    pub fn select(
        &self,
        table: &AddressTable,
        level: Level,
        value: &str,
    ) -> Result<Self, FilterError> {
        let prefix = self.truncate(level);
        if prefix.depth() != level.index() {
            return Err(FilterError::LevelNotReached(level));
        }
        if !prefix.choices(table, level).iter().any(|c| c.value == value) {
            return Err(FilterError::UnknownChoice {
                level,
                value: value.to_owned(),
            });
        }
        Ok(prefix.push(value.to_owned()))
    }

    /// Whether a row agrees with every selected level.
    pub fn matches(&self, row: &StationAddress) -> bool {
        let parts = &row.parts;
        self.top().is_none_or(|v| parts.top() == Some(v))
            && self.sub().is_none_or(|v| parts.sub() == Some(v))
            && self
                .neighborhood()
                .is_none_or(|v| parts.neighborhood() == Some(v))
            && self.station_id().is_none_or(|v| row.station_id == v)
    }

    pub fn candidates<'a>(
        &'a self,
        table: &'a AddressTable,
    ) -> impl Iterator<Item = &'a StationAddress> + 'a {
        table.rows().iter().filter(move |row| self.matches(row))
    }

    /// Options offered at `level`, given the selections above it. Empty until
    /// every level above is selected.
    pub fn choices(&self, table: &AddressTable, level: Level) -> Vec<Choice> {
        let prefix = self.truncate(level);
        if prefix.depth() != level.index() {
            return Vec::new();
        }
        let rows = prefix.candidates(table);

        match level {
            Level::Top => table
                .distinct_top_regions()
                .iter()
                .map(|v| Choice::plain(v.as_str()))
                .collect(),
            Level::Sub => distinct(rows.filter_map(|r| r.parts.sub())),
            Level::Neighborhood => distinct(rows.filter_map(|r| r.parts.neighborhood())),
            Level::Station => {
                let mut stations: Vec<&StationAddress> = rows.collect();
                stations.sort_by(|a, b| {
                    a.name
                        .cmp(&b.name)
                        .then_with(|| a.station_id.cmp(&b.station_id))
                });
                stations
                    .into_iter()
                    .map(|s| Choice {
                        value: s.station_id.clone(),
                        label: s.name.clone(),
                    })
                    .collect()
            }
        }
    }

    fn push(self, value: String) -> Self {
        match self {
            Self::NoneSelected => Self::TopSelected { top: value },
            Self::TopSelected { top } => Self::SubSelected { top, sub: value },
            Self::SubSelected { top, sub } => Self::NeighborhoodSelected {
                top,
                sub,
                neighborhood: value,
            },
            Self::NeighborhoodSelected {
                top,
                sub,
                neighborhood,
            }
            | Self::StationSelected {
                top,
                sub,
                neighborhood,
                ..
            } => Self::StationSelected {
                top,
                sub,
                neighborhood,
                station_id: value,
            },
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Choice> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(Choice::plain)
        .collect()
}
