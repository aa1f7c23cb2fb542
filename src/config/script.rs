use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub script: ScriptInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
}

/// One instruction of a render sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Person { name: String, age: i32 },
    Employee { name: String, role: String },
    Counter { value: i32 },
}

impl Script {
    /// The sequence rendered when no script file is given.
    pub fn builtin() -> Self {
        Self {
            script: ScriptInfo {
                name: "builtin".to_string(),
                description: Some("Person, employee and two counters".to_string()),
            },
            steps: vec![
                Step::Person {
                    name: "Pratik Das".to_string(),
                    age: 25,
                },
                Step::Employee {
                    name: "Pratik Das".to_string(),
                    role: "Quantum Comm. Team Lead".to_string(),
                },
                Step::Counter { value: 2 },
                Step::Counter { value: 3 },
            ],
        }
    }

    /// Loads a script from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded {} bytes from {}", content.len(), path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let script: Script = toml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }
}

impl Validate for Script {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("script.name", &self.script.name)?;
        validate_non_empty_list("steps", &self.steps)?;
        Ok(())
    }
}

impl std::str::FromStr for Script {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}
