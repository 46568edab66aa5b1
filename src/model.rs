//! Read-only views over a parsed 1PUX document
//!
//! The export schema is loose: nearly every key is optional and some exports
//! nest items one level deeper than others. These wrappers borrow the parsed
//! tree for the duration of one conversion run and resolve absent keys to
//! documented defaults instead of failing.

use crate::json::Value;

/// Root of a parsed export document
#[derive(Debug, Clone, Copy)]
pub struct Export<'a> {
    value: &'a Value,
}

impl<'a> Export<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Accounts in document order
    pub fn accounts(&self) -> Vec<Account<'a>> {
        self.value
            .get_array("accounts")
            .iter()
            .map(|value| Account { value })
            .collect()
    }
}

/// One account within the export
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    value: &'a Value,
}

impl<'a> Account<'a> {
    /// Display name, empty when absent
    pub fn name(&self) -> &'a str {
        self.value
            .get("attrs")
            .map(|attrs| attrs.get_str("name"))
            .unwrap_or("")
    }

    /// Vaults in account order (also the sheet order)
    pub fn vaults(&self) -> Vec<Vault<'a>> {
        self.value
            .get_array("vaults")
            .iter()
            .map(|value| Vault { value })
            .collect()
    }
}

/// A named grouping of credential items, mapped 1:1 to an output sheet
#[derive(Debug, Clone, Copy)]
pub struct Vault<'a> {
    value: &'a Value,
}

impl<'a> Vault<'a> {
    /// Display name, if the vault carries a non-empty one
    pub fn name(&self) -> Option<&'a str> {
        let name = self
            .value
            .get("attrs")
            .map(|attrs| attrs.get_str("name"))
            .unwrap_or("");
        if name.is_empty() { None } else { Some(name) }
    }

    /// Items in vault order.
    ///
    /// Some exports wrap the real items inside a single synthetic object,
    /// marked by a nested `"item"` key on the first list element; in that
    /// shape the wrapper's values are the item sequence.
    pub fn items(&self) -> Vec<Item<'a>> {
        let raw = self.value.get_array("items");

        if let Some(wrapper) = raw.first().and_then(Value::as_object) {
            if wrapper.contains_key("item") {
                return wrapper.values().map(|value| Item { value }).collect();
            }
        }

        raw.iter().map(|value| Item { value }).collect()
    }
}

/// One credential entry
#[derive(Debug, Clone, Copy)]
pub struct Item<'a> {
    value: &'a Value,
}

impl<'a> Item<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Overview block; an item without one is invalid and gets skipped
    pub fn overview(&self) -> Option<Overview<'a>> {
        self.value.get("overview").map(|value| Overview { value })
    }

    /// Free-text notes, empty when absent
    pub fn notes_plain(&self) -> &'a str {
        self.value
            .get("details")
            .map(|details| details.get_str("notesPlain"))
            .unwrap_or("")
    }

    /// Designated login fields (username/password/...)
    pub fn login_fields(&self) -> Vec<LoginField<'a>> {
        self.value
            .get("details")
            .map(|details| details.get_array("loginFields"))
            .unwrap_or(&[])
            .iter()
            .map(|value| LoginField { value })
            .collect()
    }

    /// Detail sections in document order
    pub fn sections(&self) -> Vec<Section<'a>> {
        self.value
            .get("details")
            .map(|details| details.get_array("sections"))
            .unwrap_or(&[])
            .iter()
            .map(|value| Section { value })
            .collect()
    }

    /// Creation time as epoch seconds, zero when absent
    pub fn created_at(&self) -> i64 {
        self.value.get_i64("createdAt")
    }

    /// Last-update time as epoch seconds, zero when absent
    pub fn updated_at(&self) -> i64 {
        self.value.get_i64("updatedAt")
    }

    /// Favorite flag; reserved, not part of the output row
    pub fn fav_index(&self) -> i64 {
        self.value.get_i64("favIndex")
    }
}

/// Title/URL block of an item
#[derive(Debug, Clone, Copy)]
pub struct Overview<'a> {
    value: &'a Value,
}

impl<'a> Overview<'a> {
    pub fn title(&self) -> &'a str {
        self.value.get_str("title")
    }

    pub fn url(&self) -> &'a str {
        self.value.get_str("url")
    }
}

/// A sub-grouping of item detail fields
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    value: &'a Value,
}

impl<'a> Section<'a> {
    pub fn fields(&self) -> Vec<SectionField<'a>> {
        self.value
            .get_array("fields")
            .iter()
            .map(|value| SectionField { value })
            .collect()
    }
}

/// A labeled field whose value is a one-entry mapping keyed by a type tag
#[derive(Debug, Clone, Copy)]
pub struct SectionField<'a> {
    value: &'a Value,
}

impl<'a> SectionField<'a> {
    pub fn title(&self) -> &'a str {
        self.value.get_str("title")
    }

    /// The sole value under the field's tagged value mapping, whatever the
    /// tag is called
    pub fn tagged_value(&self) -> Option<&'a Value> {
        self.value
            .get("value")
            .and_then(Value::as_object)
            .and_then(|map| map.first())
            .map(|(_, value)| value)
    }

    /// The value under the `"totp"` tag, when the mapping carries one
    pub fn totp(&self) -> Option<&'a Value> {
        self.value.get("value").and_then(|value| value.get("totp"))
    }
}

/// A login field routed into a specific output column by its designation
#[derive(Debug, Clone, Copy)]
pub struct LoginField<'a> {
    value: &'a Value,
}

impl<'a> LoginField<'a> {
    /// Role tag, absent for undesignated fields
    pub fn designation(&self) -> Option<&'a str> {
        self.value.get("designation").and_then(Value::as_str)
    }

    pub fn value(&self) -> String {
        self.value
            .get("value")
            .map(Value::display_string)
            .unwrap_or_default()
    }
}
