//! Roster — the fixed set of students available for team allocation.
//!
//! Loaded once at startup (built-in or from `ROSTER_PATH`) and shared read-only
//! as `Arc<Roster>` for the lifetime of the process.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A single student. `visa` is the system of record for the visa category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub visa: String,
    pub skills: Vec<String>,
}

impl Candidate {
    fn new(name: &str, visa: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            visa: visa.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Display form used in team results: `"<name> (<visa>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.visa)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Validates and wraps a candidate list. Names must be non-blank and unique.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self> {
        if candidates.is_empty() {
            bail!("Roster must contain at least one candidate");
        }

        let mut seen = HashSet::new();
        for candidate in &candidates {
            if candidate.name.trim().is_empty() {
                bail!("Roster contains a candidate with a blank name");
            }
            if !seen.insert(candidate.name.as_str()) {
                bail!("Roster contains duplicate candidate '{}'", candidate.name);
            }
        }

        Ok(Self { candidates })
    }

    pub fn builtin() -> Self {
        Self {
            candidates: vec![
                Candidate::new("Ananya", "OPT", &["React", "Node.js", "MongoDB"]),
                Candidate::new("Rahul", "STEM OPT", &["Python", "AWS", "Redshift"]),
                Candidate::new("Priya", "OPT", &["Flutter", "Firebase"]),
                Candidate::new("Vikram", "STEM OPT", &["React", "AWS"]),
            ],
        }
    }

    /// Loads a JSON array of candidates from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file '{}'", path.display()))?;
        let candidates: Vec<Candidate> = serde_json::from_str(&raw)
            .with_context(|| format!("Roster file '{}' is not a valid candidate list", path.display()))?;
        Self::new(candidates)
    }

    /// Exact, case-sensitive name lookup.
    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Pretty-printed JSON array embedded in the allocator prompt.
    pub fn to_prompt_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.candidates).context("Failed to serialize roster")
    }
}
