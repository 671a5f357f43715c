//! Card content rendering.
//!
//! The back of a vocabulary card is an HTML fragment styled by the
//! flashcard stylesheet: a minor category tag, the (possibly numbered)
//! meanings, and irregular forms or per-stem meanings depending on the
//! word's category. Latin text is escaped before Hebrew runs are wrapped.

use limud_core::conjugation::{label_pronouns, label_tense, translate_pronouns};
use limud_core::entities::{ConjugatedVerb, VerbStems, WordEntry, WordKind};
use limud_core::enums::Binyan;
use limud_core::fields::capitalize;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::FlashcardError;

const MINOR: &str = "font-size: 400; color: var(--flashcard-text-minor);";
const MAJOR: &str = "font-size: 600; color: var(--flashcard-text);";
const STEM_LABEL: &str = "font-size: 600; color: var(--flashcard-text-minor); font-style: italic;";
const HEBREW_CLASS: &str = "flashcard-back-hebrew";

/// `<number>. <text>` segments of a description with numbered meanings.
static NUMBERED_MEANING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<number>(?:0|[1-9][0-9]*)\.)\s+(?P<text>[^.0-9]+)")
        .expect("numbered meaning regex is valid")
});

/// Runs of Hebrew letters, points, and presentation forms.
static HEBREW_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0590}-\x{05FF}\x{FB1D}-\x{FB4F}]+").expect("hebrew run regex is valid")
});

/// A rendered HTML fragment, safe to inject as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One meaning of a description. `label` is `"1."`, `"2."`, ... for
/// numbered descriptions and `None` for a single unnumbered meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    pub label: Option<String>,
    pub text: String,
}

/// Split a description into its numbered meanings.
///
/// A description without numbering is a single meaning.
#[must_use]
pub fn split_meanings(description: &str) -> Vec<Meaning> {
    let numbered: Vec<Meaning> = NUMBERED_MEANING
        .captures_iter(description)
        .map(|caps| Meaning {
            label: Some(caps["number"].to_string()),
            text: caps["text"].trim().trim_end_matches(';').trim_end().to_string(),
        })
        .collect();

    if numbered.is_empty() {
        return vec![Meaning {
            label: None,
            text: description.trim().to_string(),
        }];
    }
    numbered
}

/// Escape text for inclusion in HTML.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and wrap every run of Hebrew in the Hebrew styling span.
#[must_use]
pub fn highlight_hebrew(text: &str) -> Markup {
    let escaped = escape(text);
    let wrapped = HEBREW_RUN.replace_all(&escaped, |caps: &Captures<'_>| {
        format!(r#"<span class="{HEBREW_CLASS}">{}</span>"#, &caps[0])
    });
    Markup(wrapped.into_owned())
}

/// Render a description: numbered meanings get a minor label and a major
/// capitalized body each; anything else is one major block.
#[must_use]
pub fn format_description(description: &str) -> Markup {
    let html = split_meanings(description)
        .into_iter()
        .map(|meaning| {
            let body = highlight_hebrew(&capitalize(&meaning.text));
            match meaning.label {
                Some(label) => format!(
                    r#"<span style="{MINOR}">{label}&nbsp;</span><span style="{MAJOR}">{body}</span>"#
                ),
                None => format!(r#"<span style="{MAJOR}">{body}</span>"#),
            }
        })
        .collect::<Vec<_>>()
        .join("&nbsp;&nbsp;");
    Markup(html)
}

/// Labeled Hebrew forms in a minor parenthetical, empty when none are set.
fn format_forms(forms: &[(&str, Option<&str>)]) -> String {
    let snippets: Vec<String> = forms
        .iter()
        .filter_map(|(label, form)| {
            let form = form.filter(|f| !f.trim().is_empty())?;
            Some(format!(
                r#"{label}<span class="{HEBREW_CLASS}">{}</span>"#,
                escape(form)
            ))
        })
        .collect();

    if snippets.is_empty() {
        return String::new();
    }
    format!(r#"<span style="{MINOR}">({})</span>"#, snippets.join(", "))
}

/// One block per stem with a meaning, in stem order, qal first.
fn format_stems(qal: &str, stems: &VerbStems) -> String {
    let separator = format!(r#"<span style="{MINOR}">&nbsp;&semi;&nbsp;</span>"#);
    Binyan::ALL
        .into_iter()
        .filter_map(|binyan| {
            let text = match binyan {
                Binyan::Qal => Some(qal),
                _ => stems.get(binyan),
            }
            .filter(|text| !text.trim().is_empty())?;
            Some(format!(
                r#"<span style="{STEM_LABEL}">{binyan}:&nbsp;&nbsp;</span>{}"#,
                format_description(text)
            ))
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Render the back face of a vocabulary card.
#[must_use]
pub fn format_back(entry: &WordEntry) -> Markup {
    let mut gender = String::new();
    let mut endings = String::new();
    let mut description = format_description(&entry.description).into_string();

    match &entry.kind {
        WordKind::Noun(forms) => {
            gender = format!(", {}.", forms.gender.initial());
            endings = format_forms(&[
                ("cst.&nbsp;", forms.singular_construct.as_deref()),
                ("pl.&nbsp;", forms.plural_absolute.as_deref()),
                ("pl.&nbsp;cst.&nbsp;", forms.plural_construct.as_deref()),
            ]);
        }
        WordKind::Adjective(forms) => {
            endings = format_forms(&[
                ("pl.&nbsp;", forms.plural.as_deref()),
                ("fem.&nbsp;", forms.feminine.as_deref()),
            ]);
        }
        WordKind::Verb(stems) => description = format_stems(&entry.description, stems),
        WordKind::Adverb | WordKind::Particle => {}
    }

    let html = format!(
        r#"<div style="white-space-collapse: discard;"><span style="{MINOR}">({}{gender})</span>{description}{endings}</div>"#,
        entry.category()
    );
    tracing::debug!(category = %entry.category(), "formatted card back");
    Markup(html)
}

/// Language of the pronoun on a conjugation prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronounLanguage {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "he")]
    Hebrew,
}

impl PronounLanguage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hebrew => "he",
        }
    }
}

impl fmt::Display for PronounLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PronounLanguage {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "he" => Ok(Self::Hebrew),
            other => Err(FlashcardError::MalformedInput(format!(
                "unknown pronoun language '{other}'"
            ))),
        }
    }
}

/// The query face of a conjugation card: `"<Binyan>, <tense>[, <pronoun>]?"`.
///
/// # Errors
///
/// `Core(UnlabeledPronoun)` or `Core(InvalidField)` when a non-infinitive
/// form carries no valid pronoun.
pub fn conjugation_prompt(
    verb: &ConjugatedVerb,
    language: PronounLanguage,
) -> Result<Markup, FlashcardError> {
    let slot = &verb.slot;
    let mut parts = vec![
        slot.binyan.title().to_string(),
        label_tense(slot.tense).to_string(),
    ];

    if !slot.tense.is_infinitive() {
        let key = slot.form_key()?;
        let pronoun = match language {
            PronounLanguage::English => label_pronouns(key.person, key.gender, key.number)?,
            PronounLanguage::Hebrew => translate_pronouns(key.person, key.gender, key.number)?,
        };
        parts.push(highlight_hebrew(pronoun).into_string());
    }

    Ok(Markup(format!("{}?", parts.join(", "))))
}
