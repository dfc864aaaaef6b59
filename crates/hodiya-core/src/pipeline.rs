//! Language-pair routing.
//!
//! Only the Sinhala ⇄ Singlish pair is handled locally. Any pair involving
//! another language needs an external translator, which the caller supplies
//! through [`ExternalTranslator`]; Singlish is bridged through Sinhala on the
//! way in or out.

use std::fmt;

use tracing::debug_span;

use crate::mapping::MappingTable;
use crate::translit::Direction;

const SINHALA_CODE: &str = "si-LK";
const SINGLISH_CODE: &str = "si-LK-roman";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Sinhala,
    Singlish,
    /// Any other language, by its code (e.g. `en-GB`).
    Other(String),
}

impl Language {
    /// `si`, `si-LK` → Sinhala; `singlish`, `si-LK-roman`, `si-Latn` →
    /// Singlish (case-insensitive). Everything else is kept verbatim.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "si" | "si-lk" => Language::Sinhala,
            "singlish" | "si-lk-roman" | "si-latn" => Language::Singlish,
            _ => Language::Other(code.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Language::Sinhala => SINHALA_CODE,
            Language::Singlish => SINGLISH_CODE,
            Language::Other(code) => code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Transliterate(Direction),
    External { from: Language, to: Language },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Transliterate(d) => write!(f, "transliterate {d}"),
            Step::External { from, to } => write!(f, "external {from} -> {to}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("external translation {from} -> {to} failed: {message}")]
pub struct ExternalError {
    pub from: String,
    pub to: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("step {index} ({step}): {source}")]
    External {
        index: usize,
        step: Step,
        #[source]
        source: ExternalError,
    },
}

/// A translation service outside this crate (typically an HTTP API).
pub trait ExternalTranslator {
    fn translate(&self, text: &str, from: &Language, to: &Language)
        -> Result<String, ExternalError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationPlan {
    pub steps: Vec<Step>,
}

impl TranslationPlan {
    pub fn is_local(&self) -> bool {
        self.steps
            .iter()
            .all(|s| matches!(s, Step::Transliterate(_)))
    }

    /// Run every step in order, feeding each output into the next step.
    pub fn execute(
        &self,
        table: &MappingTable,
        text: &str,
        translator: &dyn ExternalTranslator,
    ) -> Result<String, PlanError> {
        let _span = debug_span!("execute_plan", steps = self.steps.len()).entered();
        let mut current = text.to_string();
        for (index, step) in self.steps.iter().enumerate() {
            current = match step {
                Step::Transliterate(direction) => direction.apply(table, &current),
                Step::External { from, to } => translator
                    .translate(&current, from, to)
                    .map_err(|source| PlanError::External {
                        index,
                        step: step.clone(),
                        source,
                    })?,
            };
        }
        Ok(current)
    }
}

/// Route `from → to` into local and external steps.
pub fn plan(from: &Language, to: &Language) -> TranslationPlan {
    use Language::{Other, Sinhala, Singlish};

    let steps = match (from, to) {
        _ if from == to => Vec::new(),
        (Sinhala, Singlish) => vec![Step::Transliterate(Direction::ToRoman)],
        (Singlish, Sinhala) => vec![Step::Transliterate(Direction::ToScript)],
        (Other(_), Singlish) => vec![
            Step::External {
                from: from.clone(),
                to: Sinhala,
            },
            Step::Transliterate(Direction::ToRoman),
        ],
        (Singlish, Other(_)) => vec![
            Step::Transliterate(Direction::ToScript),
            Step::External {
                from: Sinhala,
                to: to.clone(),
            },
        ],
        _ => vec![Step::External {
            from: from.clone(),
            to: to.clone(),
        }],
    };
    TranslationPlan { steps }
}
