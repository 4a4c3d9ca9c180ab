use serde::Serialize;

/// A push-protection ruleset as consumed by the hosting platform's
/// rule-import mechanism. Field declaration order is the emitted key order.
#[derive(Debug, Clone, Serialize)]
pub struct Ruleset {
    pub name: String,
    pub target: Target,
    pub enforcement: Enforcement,
    pub conditions: Conditions,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    Active,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conditions {
    pub file_paths: FilePaths,
    pub branches: Branches,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilePaths {
    pub included: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Branches {
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    FilePathRestriction,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameters {
    pub restricted_file_patterns: Vec<String>,
}

impl Ruleset {
    /// Builds the fixed-shape ruleset blocking pushes of the given file
    /// patterns on all branches.
    ///
    /// The pattern list lands in two places, `conditions.file_paths.included`
    /// and the restriction rule's `restricted_file_patterns`. They are the
    /// same derived value and must stay identical.
    pub fn block_file_patterns(patterns: Vec<String>) -> Self {
        Self {
            name: "Block Forbidden File Types".to_string(),
            target: Target::Push,
            enforcement: Enforcement::Active,
            conditions: Conditions {
                file_paths: FilePaths {
                    included: patterns.clone(),
                },
                branches: Branches {
                    includes: vec!["*".to_string()],
                },
            },
            rules: vec![Rule {
                kind: RuleKind::FilePathRestriction,
                parameters: Parameters {
                    restricted_file_patterns: patterns,
                },
            }],
        }
    }
}
