//! Inscription payloads and the form values they are built from.
//!
//! Two shapes exist on disk: the structured one (name, years, epitaph) and
//! the later single free-text block. Both decode into [`Inscription`]; the
//! untagged representation tells them apart by which fields are present.

use crate::constants::UNKNOWN_YEAR;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inscription {
    // FreeText first: a legacy record never carries `text`
    FreeText(FreeTextInscription),
    Legacy(LegacyInscription),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyInscription {
    pub name: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub death_year: String,
    #[serde(default)]
    pub epitaph: String,
    #[serde(default)]
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreeTextInscription {
    pub text: String,
    #[serde(default)]
    pub timestamp: f64,
}

impl Inscription {
    /// Text carved on the stone.
    pub fn display_text(&self) -> String {
        match self {
            Inscription::Legacy(l) => {
                format!("{}\n{}-{}\n{}", l.name, l.birth_year, l.death_year, l.epitaph)
            }
            Inscription::FreeText(f) => f.text.clone(),
        }
    }

    /// Capture time in milliseconds since the epoch.
    pub fn timestamp(&self) -> f64 {
        match self {
            Inscription::Legacy(l) => l.timestamp,
            Inscription::FreeText(f) => f.timestamp,
        }
    }
}

/// Which inscription form a profile shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InscriptionKind {
    Structured,
    FreeText,
}

/// Raw values read from the inscription form; unused fields stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InscriptionForm {
    pub name: String,
    pub birth_year: String,
    pub death_year: String,
    pub epitaph: String,
    pub text: String,
}

impl InscriptionForm {
    /// Build the payload for `kind`, stamped with `now_ms`.
    ///
    /// Empty years become `????`. Free text that is blank after trimming
    /// yields `None` and the submit is skipped.
    pub fn into_inscription(self, kind: InscriptionKind, now_ms: f64) -> Option<Inscription> {
        match kind {
            InscriptionKind::Structured => {
                let year = |y: String| {
                    if y.trim().is_empty() {
                        UNKNOWN_YEAR.to_string()
                    } else {
                        y
                    }
                };
                Some(Inscription::Legacy(LegacyInscription {
                    name: self.name,
                    birth_year: year(self.birth_year),
                    death_year: year(self.death_year),
                    epitaph: self.epitaph,
                    timestamp: now_ms,
                }))
            }
            InscriptionKind::FreeText => {
                let text = self.text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(Inscription::FreeText(FreeTextInscription {
                    text: text.to_string(),
                    timestamp: now_ms,
                }))
            }
        }
    }
}
