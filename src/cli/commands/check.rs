//! Check command implementation
//!
//! Runs the entire front-end pipeline without invoking the engine: separator
//! resolution, attribute lists, hierarchies, datatypes, research subset and
//! criteria are parsed, cross-checked and bound, and the resolved run plan
//! is reported either human-readable or as JSON.

use crate::adapters::engine::{bind_criteria, load_hierarchies, DataSubset};
use crate::config::load_config;
use crate::core::criteria::parse_criteria;
use crate::core::resolvers::{
    parse_attribute_list, parse_datatypes, parse_hierarchy_specs, parse_subset_spec,
};
use crate::core::separator::parse_separator_option;
use crate::core::SEPARATOR_OPTION;
use crate::domain::{CloakError, Metric, Result};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input data file (required when the separator is DETECT)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output file for the anonymized data
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field separator: a single character or DETECT
    #[arg(long)]
    pub separator: Option<String>,

    /// Anonymization criteria, delimited by ','.
    /// Syntax: [x-ANONYMITY,(x,y)-PRESENCE,attr=DISTINCT|ENTROPY|RECURSIVE-(x|x,y)-DIVERSITY,attr=HIERARCHICAL|EQUALDISTANCE-(x)-CLOSENESS]
    #[arg(short, long)]
    pub criteria: Option<String>,

    /// Hierarchies for the attributes, delimited by ','.
    /// Syntax: attr1=filename1,attr2=filename2
    #[arg(long)]
    pub hierarchies: Option<String>,

    /// Datatypes of the attributes, delimited by ','.
    /// Syntax: attr1=STRING|INTEGER|DECIMAL(format)|DATE(format)
    #[arg(long)]
    pub datatype: Option<String>,

    /// Research subset. Syntax: FILE=filename or QUERY=querystring
    #[arg(long)]
    pub research_subset: Option<String>,

    /// Names of the quasi-identifying attributes, delimited by ','
    #[arg(long)]
    pub quasi_identifying: Option<String>,

    /// Names of the sensitive attributes, delimited by ','
    #[arg(long)]
    pub sensitive: Option<String>,

    /// Names of the insensitive attributes, delimited by ','
    #[arg(long)]
    pub insensitive: Option<String>,

    /// Names of the identifying attributes, delimited by ','
    #[arg(long)]
    pub identifying: Option<String>,

    /// Information-loss metric
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Allowed fraction of suppressed records, in [0, 1]
    #[arg(short, long)]
    pub suppression: Option<f64>,

    /// Assume practical monotonicity
    #[arg(long)]
    pub practical_monotonicity: bool,

    /// Print the resolved run plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resolved run plan, the validated output of the front-end pipeline
#[derive(Debug, Serialize)]
struct RunPlan {
    input: Option<String>,
    output: Option<String>,
    separator: String,
    metric: Metric,
    suppression: f64,
    practical_monotonicity: bool,
    quasi_identifying: Vec<String>,
    sensitive: Vec<String>,
    insensitive: Vec<String>,
    identifying: Vec<String>,
    hierarchies: Vec<HierarchySummary>,
    datatypes: BTreeMap<String, String>,
    subset: Option<String>,
    criteria: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HierarchySummary {
    attribute: String,
    rows: usize,
    levels: usize,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "checking anonymization options");

        match self.resolve(config_path) {
            Ok(plan) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&plan)?);
                } else {
                    plan.print();
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Option validation failed");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    /// Runs the whole parsing pipeline and assembles the plan
    fn resolve(&self, config_path: &str) -> Result<RunPlan> {
        let config = load_config(config_path)?;

        let separator_option = self
            .separator
            .clone()
            .unwrap_or(config.defaults.separator.clone());
        let separator = parse_separator_option(&separator_option, self.file.as_deref())?;

        let attribute_list = |option: &Option<String>| {
            option
                .as_deref()
                .map(|s| parse_attribute_list(s, SEPARATOR_OPTION))
                .unwrap_or_default()
        };
        let quasi_identifying = attribute_list(&self.quasi_identifying);
        let sensitive = attribute_list(&self.sensitive);
        let insensitive = attribute_list(&self.insensitive);
        let identifying = attribute_list(&self.identifying);

        let hierarchy_specs =
            parse_hierarchy_specs(self.hierarchies.as_deref().unwrap_or(""), SEPARATOR_OPTION)?;
        let hierarchies = load_hierarchies(&hierarchy_specs, separator)?;

        // Quasi-identifying attributes are generalized, so each needs a
        // hierarchy bound up front.
        for attribute in &quasi_identifying {
            if !hierarchies.contains_key(attribute) {
                return Err(CloakError::Configuration(format!(
                    "quasi-identifying attributes must have a hierarchy specified: {attribute}"
                )));
            }
        }

        let datatypes =
            parse_datatypes(self.datatype.as_deref().unwrap_or(""), SEPARATOR_OPTION)?;

        let subset_spec = self
            .research_subset
            .as_deref()
            .map(parse_subset_spec)
            .transpose()?;
        let subset = subset_spec
            .as_ref()
            .map(|spec| DataSubset::from_spec(spec, separator))
            .transpose()?;

        let criteria =
            parse_criteria(self.criteria.as_deref().unwrap_or(""), SEPARATOR_OPTION)?;
        if criteria.is_empty() {
            tracing::warn!("no anonymization criteria specified");
        }

        let bound = bind_criteria(&criteria, &hierarchies, subset.as_ref())?;
        tracing::debug!(count = bound.len(), "criteria bound to engine representation");

        let metric: Metric = self
            .metric
            .as_deref()
            .unwrap_or(&config.defaults.metric)
            .parse()?;
        let suppression = self.suppression.unwrap_or(config.defaults.suppression);
        if !(0.0..=1.0).contains(&suppression) {
            return Err(CloakError::Configuration(format!(
                "suppression must be within [0, 1], got: {suppression}"
            )));
        }

        let mut hierarchy_summaries: Vec<HierarchySummary> = hierarchies
            .iter()
            .map(|(attribute, hierarchy)| HierarchySummary {
                attribute: attribute.clone(),
                rows: hierarchy.rows().len(),
                levels: hierarchy.levels(),
            })
            .collect();
        hierarchy_summaries.sort_by(|a, b| a.attribute.cmp(&b.attribute));

        Ok(RunPlan {
            input: self.file.as_ref().map(|p| p.display().to_string()),
            output: self.output.as_ref().map(|p| p.display().to_string()),
            separator: separator.escape_debug().to_string(),
            metric,
            suppression,
            practical_monotonicity: self.practical_monotonicity,
            quasi_identifying,
            sensitive,
            insensitive,
            identifying,
            hierarchies: hierarchy_summaries,
            datatypes: datatypes
                .into_iter()
                .map(|(attribute, datatype)| (attribute, datatype.to_string()))
                .collect(),
            subset: subset.as_ref().map(DataSubset::describe),
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
        })
    }
}

impl RunPlan {
    fn print(&self) {
        println!("✅ All options are valid");
        println!();
        println!("Run Plan:");
        println!("  Input: {}", self.input.as_deref().unwrap_or("<stdin>"));
        println!("  Output: {}", self.output.as_deref().unwrap_or("<stdout>"));
        println!("  Separator: {}", self.separator);
        println!("  Metric: {}", self.metric);
        println!("  Suppression: {}", self.suppression);
        println!(
            "  Practical monotonicity: {}",
            self.practical_monotonicity
        );
        println!("  Quasi-identifying: {:?}", self.quasi_identifying);
        println!("  Sensitive: {:?}", self.sensitive);
        println!("  Insensitive: {:?}", self.insensitive);
        println!("  Identifying: {:?}", self.identifying);
        for hierarchy in &self.hierarchies {
            println!(
                "  Hierarchy: {} ({} rows, {} levels)",
                hierarchy.attribute, hierarchy.rows, hierarchy.levels
            );
        }
        for (attribute, datatype) in &self.datatypes {
            println!("  Datatype: {attribute}={datatype}");
        }
        if let Some(subset) = &self.subset {
            println!("  Research subset: {subset}");
        }
        println!("  Criteria:");
        for criterion in &self.criteria {
            println!("    - {criterion}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args() -> CheckArgs {
        CheckArgs {
            file: None,
            output: None,
            separator: None,
            criteria: None,
            hierarchies: None,
            datatype: None,
            research_subset: None,
            quasi_identifying: None,
            sensitive: None,
            insensitive: None,
            identifying: None,
            metric: None,
            suppression: None,
            practical_monotonicity: false,
            json: false,
        }
    }

    #[test]
    fn test_resolve_minimal() {
        let mut check = args();
        check.criteria = Some("5-ANONYMITY".to_string());
        let plan = check.resolve("/nonexistent/cloak.toml").unwrap();
        assert_eq!(plan.criteria, vec!["5-ANONYMITY"]);
        assert_eq!(plan.separator, ";");
        assert_eq!(plan.metric, Metric::Entropy);
    }

    #[test]
    fn test_resolve_qi_without_hierarchy_fails() {
        let mut check = args();
        check.quasi_identifying = Some("age".to_string());
        let err = check.resolve("/nonexistent/cloak.toml").unwrap_err();
        assert!(err.to_string().contains("quasi-identifying"));
    }

    #[test]
    fn test_resolve_full_pipeline() {
        let mut hierarchy = NamedTempFile::new().unwrap();
        write!(hierarchy, "81667;8166*;81***\n81668;8166*;81***\n").unwrap();
        let mut subset = NamedTempFile::new().unwrap();
        write!(subset, "zip\n81667\n").unwrap();

        let mut check = args();
        check.criteria = Some(
            "2-ANONYMITY,(0.0\\,0.5)-PRESENCE,zip=HIERARCHICAL-(0.5)-CLOSENESS".to_string(),
        );
        check.hierarchies = Some(format!("zip={}", hierarchy.path().display()));
        check.quasi_identifying = Some("zip".to_string());
        check.research_subset = Some(format!("FILE={}", subset.path().display()));
        check.metric = Some("aecs".to_string());
        check.suppression = Some(0.1);

        let plan = check.resolve("/nonexistent/cloak.toml").unwrap();
        assert_eq!(plan.criteria.len(), 3);
        assert_eq!(plan.metric, Metric::Aecs);
        assert_eq!(plan.hierarchies.len(), 1);
        assert_eq!(plan.hierarchies[0].attribute, "zip");
        assert!(plan.subset.is_some());
    }

    #[test]
    fn test_resolve_missing_subset_fails() {
        let mut check = args();
        check.criteria = Some("INCLUSION".to_string());
        assert!(check.resolve("/nonexistent/cloak.toml").is_err());
    }

    #[test]
    fn test_resolve_suppression_out_of_range() {
        let mut check = args();
        check.suppression = Some(2.0);
        let err = check.resolve("/nonexistent/cloak.toml").unwrap_err();
        assert!(err.to_string().contains("suppression"));
    }

    #[test]
    fn test_execute_returns_error_code_on_bad_input() {
        let mut check = args();
        check.criteria = Some("garbage".to_string());
        let code = check.execute("/nonexistent/cloak.toml").unwrap();
        assert_eq!(code, 2);
    }
}
