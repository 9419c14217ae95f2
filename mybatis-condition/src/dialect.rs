use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target database; only changes how LIKE wildcards are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Mysql,
    Postgresql,
    Oracle,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Mysql, Dialect::Postgresql, Dialect::Oracle];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Oracle => "oracle",
        }
    }

    /// `column LIKE <expr>` right-hand side wrapping `param` in `%` wildcards.
    pub fn like_pattern(self, param: &str) -> String {
        match self {
            // Oracle's CONCAT only takes two arguments
            Dialect::Oracle => format!("CONCAT(CONCAT('%',#{{{}}}),'%')", param),
            Dialect::Mysql | Dialect::Postgresql => format!("CONCAT('%', #{{{}}}, '%')", param),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::Mysql),
            "postgresql" | "postgres" => Ok(Dialect::Postgresql),
            "oracle" => Ok(Dialect::Oracle),
            _ => Err(ConditionError::UnknownDialect {
                value: s.to_string(),
            }),
        }
    }
}
