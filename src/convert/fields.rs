//! Section field filtering and login field scans

use crate::OTP_URI_PREFIX;
use crate::model::{LoginField, Section, SectionField};

/// Render section fields as `"title: value"` lines.
///
/// Fields with an empty value and one-time-password provisioning URIs are
/// dropped; the rest keep their relative order.
pub fn filter_fields(fields: &[SectionField<'_>]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| {
            let value = field.tagged_value()?;
            if value.is_empty_like() {
                return None;
            }
            if value
                .as_str()
                .is_some_and(|s| s.starts_with(OTP_URI_PREFIX))
            {
                return None;
            }
            Some(format!("{}: {}", field.title(), value.display_string()))
        })
        .collect()
}

/// Last one-time-password value across all sections, empty when none carries
/// a `totp` tag. Later matches overwrite earlier ones; fields without the tag
/// leave the accumulator untouched.
pub fn scan_totp(sections: &[Section<'_>]) -> String {
    sections
        .iter()
        .flat_map(|section| section.fields())
        .fold(String::new(), |totp, field| match field.totp() {
            Some(value) => value.display_string(),
            None => totp,
        })
}

/// Outcome of scanning `loginFields` for designated values
#[derive(Debug, Default, PartialEq)]
pub struct LoginScan {
    pub username: String,
    pub password: String,
    /// Designations that were present and non-empty but not recognized
    pub unknown_designations: Vec<String>,
}

/// Route login field values by designation; last match wins per column.
/// Fields without a designation are skipped silently.
pub fn scan_login_fields(fields: &[LoginField<'_>]) -> LoginScan {
    fields.iter().fold(LoginScan::default(), |mut scan, field| {
        match field.designation() {
            Some("username") => scan.username = field.value(),
            Some("password") => scan.password = field.value(),
            Some(other) if !other.is_empty() => {
                scan.unknown_designations.push(other.to_string());
            }
            _ => {}
        }
        scan
    })
}
