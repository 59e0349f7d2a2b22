// Analyzed entities and their analysis periods.
//
// An entity is either one company or an industry grouping of companies.
// The explicit tagged enum replaces runtime-type dispatch: every consumer
// matches on the variant instead of sniffing a type name.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::reputation::aggregate::Observation;
use crate::reputation::months::month_range;

/// A company or an industry grouping of companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    Company {
        name: String,
        /// The industry the company belongs to, when the catalog knows it.
        industry: Option<String>,
    },
    Industry {
        name: String,
        companies: Vec<String>,
    },
}

impl EntityKind {
    pub fn company(name: &str) -> Self {
        EntityKind::Company {
            name: name.to_string(),
            industry: None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityKind::Company { name, .. } => name,
            EntityKind::Industry { name, .. } => name,
        }
    }

    /// Whether an observation counts toward this entity: companies match
    /// on the company column, industries on the industry column.
    pub fn matches(&self, obs: &Observation) -> bool {
        self.matches_names(&obs.company, &obs.industry)
    }

    /// Column-level form of [`matches`](Self::matches), for records that
    /// aren't observations yet.
    pub fn matches_names(&self, company: &str, industry: &str) -> bool {
        match self {
            EntityKind::Company { name, .. } => company == name,
            EntityKind::Industry { name, .. } => industry == name,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Company { name, .. } => write!(f, "company {name}"),
            EntityKind::Industry { name, .. } => write!(f, "industry {name}"),
        }
    }
}

/// An entity plus the inclusive date range its scores cover.
///
/// Day-of-month is carried for the scraper's benefit but ignored for
/// bucketing — the score matrix is month-granular.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPeriod {
    pub entity: EntityKind,
    start: NaiveDate,
    end: NaiveDate,
}

impl EntityPeriod {
    pub fn new(entity: EntityKind, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            anyhow::bail!("period end {end} precedes start {start}");
        }
        Ok(Self { entity, start, end })
    }

    /// Parse "YYYY-MM-DD" bounds.
    pub fn parse(entity: EntityKind, start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid start date {start:?}: {e}"))?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid end date {end:?}: {e}"))?;
        Self::new(entity, start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The "YYYY-MM" keys this period spans, both endpoint months included.
    pub fn month_keys(&self) -> Result<Vec<String>> {
        month_range(
            self.start.year(),
            self.start.month(),
            self.end.year(),
            self.end.month(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::label::Polarity;

    fn observation(company: &str, industry: &str) -> Observation {
        Observation {
            company: company.to_string(),
            industry: industry.to_string(),
            month: "2021-01".to_string(),
            polarity: Polarity::Neutral,
            weight: 1.0,
        }
    }

    #[test]
    fn company_matches_on_company_column() {
        let entity = EntityKind::company("alpha");
        assert!(entity.matches(&observation("alpha", "banking")));
        assert!(!entity.matches(&observation("beta", "banking")));
    }

    #[test]
    fn industry_matches_on_industry_column() {
        let entity = EntityKind::Industry {
            name: "banking".to_string(),
            companies: vec!["alpha".to_string()],
        };
        assert!(entity.matches(&observation("beta", "banking")));
        assert!(!entity.matches(&observation("alpha", "retail")));
    }

    #[test]
    fn reversed_period_is_rejected() {
        let result = EntityPeriod::parse(EntityKind::company("alpha"), "2021-06-01", "2021-01-01");
        assert!(result.is_err());
    }

    #[test]
    fn month_keys_ignore_day_of_month() {
        let period =
            EntityPeriod::parse(EntityKind::company("alpha"), "2021-01-25", "2021-03-02").unwrap();
        assert_eq!(period.month_keys().unwrap(), vec!["2021-01", "2021-02", "2021-03"]);
    }
}
