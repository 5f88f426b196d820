use std::collections::BTreeMap;
use std::str::FromStr;

use super::lookups::Lookup;
use crate::shared::error::ApiError;

/// Where a select gets its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectSource {
    Static(&'static [(&'static str, &'static str)]),
    Lookup(Lookup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    /// Money amount, must be a finite number > 0
    Price,
    Number,
    Date,
    Time,
    Password,
    Checkbox,
    Select(SelectSource),
}

impl FieldKind {
    /// HTML `type` of the rendered `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Price | FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Password => "password",
            _ => "text",
        }
    }

    /// HTML `step` of number inputs, empty for everything else.
    pub fn step(&self) -> &'static str {
        match self {
            FieldKind::Price => "0.01",
            FieldKind::Number => "1",
            _ => "",
        }
    }
}

/// One input of a modal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown but disabled while editing an existing record
    pub locked_on_edit: bool,
    /// Only rendered and validated when creating
    pub create_only: bool,
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            locked_on_edit: false,
            create_only: false,
            default: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn locked_on_edit(mut self) -> Self {
        self.locked_on_edit = true;
        self
    }

    pub const fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }

    /// Whether the field takes part in a form that is (or is not) editing.
    pub fn is_active(&self, editing: bool) -> bool {
        !(editing && self.create_only)
    }
}

/// Values currently entered in a modal form, keyed by field name.
///
/// `id` is the hidden identifier: empty while creating, the server id
/// while editing. Checkboxes are stored as `"true"` / `"false"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub id: String,
    values: BTreeMap<String, String>,
}

impl FormState {
    /// Blank form with every field at its default.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name.to_string(), f.default.to_string()))
            .collect();
        Self {
            id: String::new(),
            values,
        }
    }

    pub fn for_id(id: i64) -> Self {
        Self {
            id: id.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Builder form of [`FormState::set`].
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder for optional values; `None` becomes the empty placeholder.
    pub fn with_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        let text = value.map(|v| v.to_string()).unwrap_or_default();
        self.with(name, text)
    }

    pub fn with_flag(mut self, name: &str, checked: bool) -> Self {
        self.set_flag(name, checked);
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.trim().is_empty()
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == "true"
    }

    pub fn set_flag(&mut self, name: &str, checked: bool) {
        self.set(name, if checked { "true" } else { "false" });
    }

    /// Trimmed text.
    pub fn text(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    /// Trimmed text, `None` when empty.
    pub fn opt_text(&self, name: &str) -> Option<String> {
        let text = self.text(name);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Parsed value, `None` when empty.
    pub fn parse_opt<T: FromStr>(&self, name: &str, label: &str) -> Result<Option<T>, ApiError> {
        let text = self.text(name);
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<T>()
            .map(Some)
            .map_err(|_| ApiError::Validation(format!("Please enter a valid {}", label.to_lowercase())))
    }

    /// Parsed required value.
    pub fn parse<T: FromStr>(&self, name: &str, label: &str) -> Result<T, ApiError> {
        self.parse_opt(name, label)?.ok_or_else(|| {
            ApiError::Validation(format!("Please enter a valid {}", label.to_lowercase()))
        })
    }

    /// Amount that already passed [`validate`].
    pub fn amount(&self, name: &str) -> f64 {
        parse_positive(self.get(name)).unwrap_or(0.0)
    }
}

/// Finite number strictly greater than zero.
pub fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Client-side checks run before any request; the first failure wins.
///
/// Only amounts and required selects are checked here; everything else is
/// left to the server.
pub fn validate(fields: &[FieldSpec], form: &FormState) -> Result<(), ApiError> {
    let editing = !form.is_new();
    for field in fields.iter().filter(|f| f.is_active(editing)) {
        match field.kind {
            FieldKind::Price => {
                if parse_positive(form.get(field.name)).is_none() {
                    return Err(ApiError::Validation(format!(
                        "Please enter a valid positive {}",
                        field.label.to_lowercase()
                    )));
                }
            }
            FieldKind::Select(_) if field.required => {
                if form.get(field.name).trim().is_empty() {
                    return Err(ApiError::Validation(format!(
                        "Please select a {}",
                        field.label.to_lowercase()
                    )));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHODS: &[(&str, &str)] = &[("cash", "Cash"), ("credit_card", "Credit Card")];

    fn payment_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("amount", "Amount", FieldKind::Price).required(),
            FieldSpec::new("method", "Payment method", FieldKind::Select(SelectSource::Static(METHODS)))
                .required(),
            FieldSpec::new("reference", "Reference", FieldKind::Text),
        ]
    }

    #[test]
    fn test_blank_uses_defaults() {
        let fields = vec![
            FieldSpec::new("status", "Status", FieldKind::Text).default_value("available"),
            FieldSpec::new("notes", "Notes", FieldKind::TextArea),
        ];
        let form = FormState::blank(&fields);
        assert!(form.is_new());
        assert_eq!(form.get("status"), "available");
        assert_eq!(form.get("notes"), "");
        assert_eq!(form.get("missing"), "");
    }

    #[test]
    fn test_price_must_be_positive() {
        let fields = vec![FieldSpec::new("price", "Price", FieldKind::Price).required()];
        for bad in ["-5", "0", "", "abc", "NaN", "inf"] {
            let form = FormState::blank(&fields).with("price", bad);
            assert_eq!(
                validate(&fields, &form),
                Err(ApiError::Validation("Please enter a valid positive price".to_string())),
                "input {:?}",
                bad
            );
        }
        let ok = FormState::blank(&fields).with("price", " 12.50 ");
        assert_eq!(validate(&fields, &ok), Ok(()));
        assert_eq!(ok.amount("price"), 12.5);
    }

    #[test]
    fn test_required_select() {
        let fields = payment_fields();
        let form = FormState::blank(&fields).with("amount", "10");
        assert_eq!(
            validate(&fields, &form),
            Err(ApiError::Validation("Please select a payment method".to_string()))
        );
        let form = form.with("method", "cash");
        assert_eq!(validate(&fields, &form), Ok(()));
    }

    #[test]
    fn test_amount_checked_before_select() {
        let fields = payment_fields();
        let form = FormState::blank(&fields);
        assert_eq!(
            validate(&fields, &form).unwrap_err().user_message(""),
            "Please enter a valid positive amount"
        );
    }

    #[test]
    fn test_create_only_fields_skipped_when_editing() {
        let fields = vec![FieldSpec::new("deposit", "Deposit", FieldKind::Price).create_only()];
        let creating = FormState::blank(&fields);
        assert!(validate(&fields, &creating).is_err());
        let mut editing = FormState::blank(&fields);
        editing.id = "4".to_string();
        assert_eq!(validate(&fields, &editing), Ok(()));
    }

    #[test]
    fn test_flags_and_optional_values() {
        let form = FormState::for_id(3)
            .with_flag("is_active", true)
            .with_opt("floor", Some(2))
            .with_opt::<i32>("capacity", None);
        assert!(!form.is_new());
        assert!(form.flag("is_active"));
        assert!(!form.flag("other"));
        assert_eq!(form.parse_opt::<i32>("floor", "Floor"), Ok(Some(2)));
        assert_eq!(form.parse_opt::<u32>("capacity", "Capacity"), Ok(None));
        assert_eq!(form.opt_text("capacity"), None);
        assert!(form.with("floor", "x").parse::<i32>("floor", "Floor").is_err());
    }
}
