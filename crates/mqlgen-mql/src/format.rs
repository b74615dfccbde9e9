//! Key and leaf-value spelling.

use mqlgen_expr::literal::is_valid_language_tag;
use mqlgen_expr::Literal;

use crate::dialect::MqlDialect;
use crate::document::MqlValue;
use crate::error::CompileError;

/// Rewrite a relation name to its document key.
///
/// `freebase:film.film.directed_by` → `/film/film/directed_by`, the type
/// predicate → `type`; anything else is kept verbatim.
pub fn format_relation(dialect: &MqlDialect, relation: &str) -> String {
    if let Some(path) = relation
        .strip_prefix(dialect.namespace.as_str())
        .and_then(|rest| rest.strip_prefix(':'))
    {
        return format!("/{}", path.replace('.', "/"));
    }
    if relation == dialect.type_predicate {
        return dialect.type_key.clone();
    }
    relation.to_string()
}

/// Key for an incoming edge: the reversal marker followed by the forward key.
pub fn format_reverse_relation(dialect: &MqlDialect, relation: &str) -> String {
    let mut key = String::new();
    key.push(dialect.reverse_marker);
    key.push_str(&format_relation(dialect, relation));
    key
}

/// Encode a literal leaf.
///
/// Tagged literals become `{value, lang}` with a namespaced language id.
/// Untagged literals go through `format_relation`, so identifiers in the
/// dialect's namespace (`freebase:film.film`) are spelled as MQL ids.
pub fn format_literal(dialect: &MqlDialect, literal: &Literal) -> Result<MqlValue, CompileError> {
    match &literal.language {
        Some(lang) => {
            if !is_valid_language_tag(lang) {
                return Err(CompileError::MalformedLiteral {
                    literal: literal.encoded(),
                    reason: format!("invalid language tag `{lang}`"),
                });
            }
            Ok(MqlValue::LangText {
                value: literal.lexical.clone(),
                lang: format!("{}{}", dialect.lang_namespace, lang),
            })
        }
        None => Ok(MqlValue::Text(format_relation(dialect, &literal.lexical))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_relation_becomes_path() {
        let d = MqlDialect::default();
        assert_eq!(
            format_relation(&d, "freebase:film.film.directed_by"),
            "/film/film/directed_by"
        );
        assert_eq!(format_relation(&d, "rdf:type"), "type");
        assert_eq!(format_relation(&d, "dbpedia:Film"), "dbpedia:Film");
        // Prefix must be followed by the colon.
        assert_eq!(format_relation(&d, "freebasex:a.b"), "freebasex:a.b");
    }

    #[test]
    fn reverse_key_is_prefixed_once() {
        let d = MqlDialect::default();
        assert_eq!(
            format_reverse_relation(&d, "freebase:type.object.name"),
            "!/type/object/name"
        );
    }

    #[test]
    fn tagged_literal_is_value_lang_pair() {
        let d = MqlDialect::default();
        let v = format_literal(&d, &Literal::tagged("Paris", "en")).expect("format");
        assert_eq!(
            v,
            MqlValue::LangText {
                value: "Paris".to_string(),
                lang: "/lang/en".to_string()
            }
        );
    }

    #[test]
    fn untagged_literal_is_plain_text() {
        let d = MqlDialect::default();
        assert_eq!(
            format_literal(&d, &Literal::plain("42")).expect("format"),
            MqlValue::Text("42".to_string())
        );
        assert_eq!(
            format_literal(&d, &Literal::plain("freebase:film.film")).expect("format"),
            MqlValue::Text("/film/film".to_string())
        );
    }

    #[test]
    fn bad_language_tag_fails_fast() {
        let d = MqlDialect::default();
        let err = format_literal(&d, &Literal::tagged("Paris", "e@n")).expect_err("should error");
        assert!(matches!(err, CompileError::MalformedLiteral { .. }), "err={err}");
    }
}
