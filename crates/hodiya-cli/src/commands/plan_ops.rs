use hodiya_core::mapping::MappingTable;
use hodiya_core::pipeline::{plan, ExternalError, ExternalTranslator, Language, TranslationPlan};

use super::{die, init_mapping};

/// Stands in for a network translator; every external step fails.
pub struct OfflineTranslator;

impl ExternalTranslator for OfflineTranslator {
    fn translate(&self, _text: &str, from: &Language, to: &Language) -> Result<String, ExternalError> {
        Err(ExternalError {
            from: from.code().to_string(),
            to: to.code().to_string(),
            message: "external translation is not available offline".to_string(),
        })
    }
}

pub fn plan_cmd(from: &str, to: &str, text: Option<&str>, mapping: Option<&str>) {
    let p = plan(&Language::from_code(from), &Language::from_code(to));
    print!("{}", format_plan(&p));

    if let Some(text) = text {
        let table = die!(init_mapping(mapping), "Error loading mapping: {}");
        let out = die!(run_plan(&p, table, text), "Error: {}");
        println!("{out}");
    }
}

pub fn run_plan(
    p: &TranslationPlan,
    table: &MappingTable,
    text: &str,
) -> Result<String, hodiya_core::pipeline::PlanError> {
    p.execute(table, text, &OfflineTranslator)
}

pub fn format_plan(p: &TranslationPlan) -> String {
    if p.steps.is_empty() {
        return "(no steps: source and target are the same)\n".to_string();
    }
    let mut out = String::new();
    for (i, step) in p.steps.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }
    out
}
