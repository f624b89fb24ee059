use std::collections::HashMap;

use super::boundary::tokenize;
use super::default::builtin_override;

/// Canonical snake_case form of an API identifier using the built-in
/// override table only.
///
/// ```
/// assert_eq!(lexnorm::naming::underscore("AWSAccountID"), "aws_account_id");
/// assert_eq!(lexnorm::naming::underscore("ETag"), "etag");
/// ```
pub fn underscore(identifier: &str) -> String {
    match builtin_override(identifier) {
        Some(canon) => canon.to_string(),
        None => tokenize(identifier),
    }
}

/// Converter carrying extra overrides on top of the built-in table.
///
/// Built-in entries always win; extra entries can only name identifiers the
/// built-in table does not already cover.
#[derive(Debug, Clone, Default)]
pub struct CaseConverter {
    extra: HashMap<String, String>,
}

impl CaseConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a converter from loaded overrides, dropping any that collide with
    /// the built-in table.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let mut extra = HashMap::with_capacity(overrides.len());
        for (raw, canon) in overrides {
            if let Some(builtin) = builtin_override(&raw) {
                tracing::debug!(
                    "ignoring override for '{}' (built-in maps it to '{}')",
                    raw,
                    builtin
                );
                continue;
            }
            extra.insert(raw, canon);
        }
        Self { extra }
    }

    /// Number of extra overrides in effect.
    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }

    pub fn convert(&self, identifier: &str) -> String {
        if let Some(canon) = builtin_override(identifier) {
            return canon.to_string();
        }
        if let Some(canon) = self.extra.get(identifier) {
            return canon.clone();
        }
        tokenize(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::builtin_overrides;

    #[test]
    fn worked_examples() {
        for (raw, expected) in [
            ("Foo", "foo"),
            ("FooBarYuck", "foo_bar_yuck"),
            ("AWS", "aws"),
            ("AWSAccount", "aws_account"),
            ("SimpleDB", "simple_db"),
            ("MySUPERWord", "my_super_word"),
            ("AWSAccountID", "aws_account_id"),
            ("MD5OfBody", "md5_of_body"),
            ("S3Bucket", "s3_bucket"),
            ("EC2Instance", "ec2_instance"),
            ("SentLast24Hours", "sent_last_24_hours"),
            ("24MIN", "24_min"),
            ("s3Key", "s3_key"),
            ("s3Bucket", "s3_bucket"),
        ] {
            assert_eq!(underscore(raw), expected, "converting {raw}");
        }
    }

    #[test]
    fn every_builtin_override_is_returned_verbatim() {
        for (raw, canon) in builtin_overrides() {
            assert_eq!(underscore(raw), *canon);
            assert_eq!(CaseConverter::new().convert(raw), *canon);
        }
    }

    #[test]
    fn overrides_bypass_rules() {
        // The rules alone would split the acronym run.
        assert_eq!(tokenize("ETag"), "e_tag");
        assert_eq!(underscore("ETag"), "etag");
        assert_eq!(tokenize("CachediSCSIVolume"), "cachedi_scsi_volume");
        assert_eq!(underscore("CachediSCSIVolume"), "cached_iscsi_volume");
    }

    #[test]
    fn extra_overrides_apply_after_builtin() {
        let conv = CaseConverter::with_overrides(HashMap::from([
            ("CNAMEPrefix".to_string(), "cname_prefix".to_string()),
            ("ETag".to_string(), "e_tag".to_string()),
        ]));
        assert_eq!(conv.extra_len(), 1);
        assert_eq!(conv.convert("CNAMEPrefix"), "cname_prefix");
        assert_eq!(conv.convert("ETag"), "etag");
        assert_eq!(conv.convert("FooBar"), "foo_bar");
    }

    #[test]
    fn default_converter_matches_underscore() {
        let conv = CaseConverter::default();
        for raw in ["", "x", "HTTPRequest", "Max24HourSend", "KMSKeyId"] {
            assert_eq!(conv.convert(raw), underscore(raw));
        }
    }
}
