use contracts::settings::NotificationSettings;

use super::api::NOTIFICATIONS_PATH;
use super::form::SettingsDoc;
use crate::shared::crud::{FieldKind, FieldSpec, FormState};
use crate::shared::error::ApiError;

const SWITCHES: [(&str, &str); 5] = [
    ("booking_confirmation", "Send booking confirmations"),
    ("payment_receipt", "Send payment receipts"),
    ("check_in_reminder", "Send check-in reminders"),
    ("check_out_reminder", "Send check-out reminders"),
    ("maintenance_alerts", "Alert staff about maintenance"),
];

impl SettingsDoc for NotificationSettings {
    const PATH: &'static str = NOTIFICATIONS_PATH;
    const TITLE: &'static str = "Notification Settings";

    fn fields() -> Vec<FieldSpec> {
        let mut fields = vec![FieldSpec::new("sender_email", "Sender email", FieldKind::Email)];
        fields.extend(
            SWITCHES
                .iter()
                .map(|&(name, label)| FieldSpec::new(name, label, FieldKind::Checkbox)),
        );
        fields
    }

    fn to_form(&self) -> FormState {
        FormState::default()
            .with("sender_email", self.sender_email.clone())
            .with_flag("booking_confirmation", self.booking_confirmation)
            .with_flag("payment_receipt", self.payment_receipt)
            .with_flag("check_in_reminder", self.check_in_reminder)
            .with_flag("check_out_reminder", self.check_out_reminder)
            .with_flag("maintenance_alerts", self.maintenance_alerts)
    }

    fn from_form(form: &FormState) -> Result<Self, ApiError> {
        Ok(NotificationSettings {
            sender_email: form.text("sender_email"),
            booking_confirmation: form.flag("booking_confirmation"),
            payment_receipt: form.flag("payment_receipt"),
            check_in_reminder: form.flag("check_in_reminder"),
            check_out_reminder: form.flag("check_out_reminder"),
            maintenance_alerts: form.flag("maintenance_alerts"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_round_trip_through_form() {
        let settings = NotificationSettings {
            sender_email: "desk@example.com".to_string(),
            check_out_reminder: true,
            ..NotificationSettings::default()
        };
        let form = settings.to_form();
        assert!(form.flag("booking_confirmation"));
        assert!(!form.flag("maintenance_alerts"));
        assert_eq!(NotificationSettings::from_form(&form).unwrap(), settings);
    }

    #[test]
    fn test_one_checkbox_per_switch() {
        let checkboxes = NotificationSettings::fields()
            .into_iter()
            .filter(|f| f.kind == FieldKind::Checkbox)
            .count();
        assert_eq!(checkboxes, SWITCHES.len());
    }
}
