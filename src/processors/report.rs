//! Rendering translation records as text lines

use crate::core::models::TranslationRecord;

/// Field separator of a rendered record
pub const FIELD_SEPARATOR: &str = " | ";

/// `object | t1 | t2 | ... | tn`, empty fields kept in place
pub fn format_record(record: &TranslationRecord) -> String {
    std::iter::once(record.object.as_str())
        .chain(record.translations.iter().map(|t| t.text.as_str()))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// All records, each line followed by a blank separator line
pub fn render_records(records: &[TranslationRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n\n", format_record(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{TargetLanguage, Translation};

    fn record(object: &str, texts: [&str; 3]) -> TranslationRecord {
        let translations = [TargetLanguage::Zh, TargetLanguage::Ja, TargetLanguage::Ko]
            .into_iter()
            .zip(texts)
            .map(|(language, text)| Translation {
                language,
                text: text.to_string(),
            })
            .collect();
        TranslationRecord::new(object, translations)
    }

    #[test]
    fn test_format_record() {
        let line = format_record(&record("apple", ["蘋果", "林檎 (りんご)", "사과"]));
        assert_eq!(line, "apple | 蘋果 | 林檎 (りんご) | 사과");
    }

    #[test]
    fn test_empty_field_is_kept() {
        let line = format_record(&record("apple", ["", "林檎 (りんご)", "사과"]));
        assert_eq!(line, "apple |  | 林檎 (りんご) | 사과");
        assert_eq!(line.split(FIELD_SEPARATOR).count(), 4);
    }

    #[test]
    fn test_render_preserves_order_and_separates() {
        let records = vec![
            record("cat", ["貓", "猫 (ねこ)", "고양이"]),
            record("apple", ["", "", ""]),
        ];
        let rendered = render_records(&records);
        assert_eq!(
            rendered,
            "cat | 貓 | 猫 (ねこ) | 고양이\n\napple |  |  | \n\n"
        );
        assert_eq!(render_records(&[]), "");
    }
}
