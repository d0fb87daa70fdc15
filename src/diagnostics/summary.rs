//! One-line, human-readable summary of categorized warnings.

use super::{CategorizedDiagnostics, DiagnosticCategory};
use serde::{Deserialize, Serialize};

/// Language of user-facing texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLanguage {
    /// Russian (default)
    #[default]
    Russian,
    /// English
    English,
}

impl SummaryLanguage {
    /// Value for the HTML `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            SummaryLanguage::Russian => "ru",
            SummaryLanguage::English => "en",
        }
    }

    /// Summary when every category is empty.
    pub fn all_handled(&self) -> &'static str {
        match self {
            SummaryLanguage::Russian => "Все стили обработаны успешно",
            SummaryLanguage::English => "All styles processed successfully",
        }
    }

    /// Message accompanying a successful conversion.
    pub fn converted(&self) -> &'static str {
        match self {
            SummaryLanguage::Russian => "Файл успешно конвертирован",
            SummaryLanguage::English => "File converted successfully",
        }
    }

    fn counted_label(&self, category: DiagnosticCategory) -> Option<&'static str> {
        let label = match (self, category) {
            (SummaryLanguage::Russian, DiagnosticCategory::UndefinedStyleReference) => {
                "Неопределенные стили"
            }
            (SummaryLanguage::Russian, DiagnosticCategory::UnrecognizedParagraphStyle) => {
                "Нераспознанные стили"
            }
            (SummaryLanguage::Russian, DiagnosticCategory::MissingElementIgnored) => {
                "Пропущенные элементы"
            }
            (SummaryLanguage::English, DiagnosticCategory::UndefinedStyleReference) => {
                "Undefined styles"
            }
            (SummaryLanguage::English, DiagnosticCategory::UnrecognizedParagraphStyle) => {
                "Unrecognized styles"
            }
            (SummaryLanguage::English, DiagnosticCategory::MissingElementIgnored) => {
                "Missing elements"
            }
            _ => return None,
        };
        Some(label)
    }

    fn table_formatting_note(&self) -> &'static str {
        match self {
            SummaryLanguage::Russian => "Форматирование таблиц проигнорировано (ожидаемо)",
            SummaryLanguage::English => "Table formatting ignored (expected)",
        }
    }
}

/// Clause order in the summary. Uncategorized warnings are not summarized.
const SUMMARY_ORDER: [DiagnosticCategory; 4] = [
    DiagnosticCategory::UndefinedStyleReference,
    DiagnosticCategory::UnrecognizedParagraphStyle,
    DiagnosticCategory::TableFormattingIgnored,
    DiagnosticCategory::MissingElementIgnored,
];

/// Summarize categorized warnings as `clause; clause; ...`.
///
/// Table-formatting warnings are expected, so they get a fixed note without
/// a count.
pub fn summarize(categorized: &CategorizedDiagnostics, language: SummaryLanguage) -> String {
    let parts: Vec<String> = SUMMARY_ORDER
        .iter()
        .filter(|category| categorized.count(**category) > 0)
        .map(|category| match language.counted_label(*category) {
            Some(label) => format!("{}: {}", label, categorized.count(*category)),
            None => language.table_formatting_note().to_string(),
        })
        .collect();

    if parts.is_empty() {
        return language.all_handled().to_string();
    }

    parts.join("; ")
}
