//! In-memory form state.
//!
//! The six threshold bounds and the notification preferences live in
//! explicit records so the sync controller can operate on them without any
//! rendering surface involved.

use super::threshold::{Parameter, Threshold};

/// Number of editable threshold fields (min/max for three parameters).
pub const THRESHOLD_FIELD_COUNT: usize = 6;

/// Editable threshold bounds, kept as text until save time.
///
/// Fields are parsed as f64 only when validating; anything unparseable is a
/// validation failure rather than a silent NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdForm {
    pub ph_min: String,
    pub ph_max: String,
    pub temp_min: String,
    pub temp_max: String,
    pub tds_min: String,
    pub tds_max: String,
}

impl ThresholdForm {
    /// Overwrite the bounds for one parameter with formatted values.
    pub fn set(&mut self, parameter: Parameter, min: f64, max: f64) {
        let (min_field, max_field) = self.fields_for(parameter);
        *min_field = format_value(min);
        *max_field = format_value(max);
    }

    /// Reset all six fields to the factory defaults. Purely local; nothing is
    /// submitted until the user saves.
    pub fn reset(&mut self) {
        for parameter in Parameter::ALL {
            let (min, max) = parameter.default_range();
            self.set(parameter, min, max);
        }
    }

    /// The (min, max) field pair for a parameter.
    pub fn fields_for(&mut self, parameter: Parameter) -> (&mut String, &mut String) {
        match parameter {
            Parameter::Ph => (&mut self.ph_min, &mut self.ph_max),
            Parameter::Temperature => (&mut self.temp_min, &mut self.temp_max),
            Parameter::Tds => (&mut self.tds_min, &mut self.tds_max),
        }
    }

    /// Field access by index for focus handling (0..6, min before max,
    /// parameters in save order).
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.ph_min,
            1 => &self.ph_max,
            2 => &self.temp_min,
            3 => &self.temp_max,
            4 => &self.tds_min,
            _ => &self.tds_max,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.ph_min,
            1 => &mut self.ph_max,
            2 => &mut self.temp_min,
            3 => &mut self.temp_max,
            4 => &mut self.tds_min,
            _ => &mut self.tds_max,
        }
    }

    /// Validate all six fields and build the three submission records.
    ///
    /// Checks run in the fixed order pH, temperature, TDS and short-circuit on
    /// the first failure; a failure here means zero requests go out.
    pub fn validate(&self) -> Result<[Threshold; 3], String> {
        let mut thresholds = Vec::with_capacity(3);

        for parameter in Parameter::ALL {
            let (min_text, max_text) = match parameter {
                Parameter::Ph => (&self.ph_min, &self.ph_max),
                Parameter::Temperature => (&self.temp_min, &self.temp_max),
                Parameter::Tds => (&self.tds_min, &self.tds_max),
            };

            let min = parse_bound(min_text, parameter, "minimum")?;
            let max = parse_bound(max_text, parameter, "maximum")?;

            if min >= max {
                return Err(format!(
                    "{} minimum must be smaller than maximum",
                    parameter.label()
                ));
            }

            thresholds.push(Threshold::new(parameter, min, max));
        }

        // Length is exactly 3 by construction
        Ok([
            thresholds[0].clone(),
            thresholds[1].clone(),
            thresholds[2].clone(),
        ])
    }
}

fn parse_bound(text: &str, parameter: Parameter, which: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} {} is not a number", parameter.label(), which))
}

/// Format a bound for display, dropping a trailing ".0" for whole numbers.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Notification channel preferences, persisted to the local store.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationForm {
    pub email_enabled: bool,
    pub email_address: String,
    pub whatsapp_enabled: bool,
    pub whatsapp_number: String,
}

impl Default for NotificationForm {
    fn default() -> Self {
        // Email notifications are on by default, WhatsApp opt-in.
        Self {
            email_enabled: true,
            email_address: String::new(),
            whatsapp_enabled: false,
            whatsapp_number: String::new(),
        }
    }
}

impl NotificationForm {
    /// Validate before saving: an enabled email channel needs an address, and
    /// any address given must look like an email. WhatsApp fields are free-form.
    pub fn validate(&self) -> Result<(), String> {
        if self.email_enabled && self.email_address.is_empty() {
            return Err("Please enter a recipient email".to_string());
        }
        if !self.email_address.is_empty() && !is_valid_email(&self.email_address) {
            return Err("Invalid email format".to_string());
        }
        Ok(())
    }
}

/// Permissive email shape check: nonempty local part, exactly one '@', no
/// whitespace, and a dot strictly inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot must sit strictly inside the domain
    let mut inner = domain.chars();
    inner.next();
    inner.next_back();
    inner.as_str().contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ThresholdForm {
        ThresholdForm {
            ph_min: "6.5".to_string(),
            ph_max: "8.5".to_string(),
            temp_min: "5".to_string(),
            temp_max: "28".to_string(),
            tds_min: "100".to_string(),
            tds_max: "1500".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        let thresholds = valid_form().validate().unwrap();
        assert_eq!(thresholds[0].parameter, Parameter::Ph);
        assert_eq!(thresholds[0].min_value, 6.5);
        assert_eq!(thresholds[0].max_value, 8.5);
        assert_eq!(thresholds[1].parameter, Parameter::Temperature);
        assert_eq!(thresholds[1].min_value, 5.0);
        assert_eq!(thresholds[2].parameter, Parameter::Tds);
        assert_eq!(thresholds[2].max_value, 1500.0);
    }

    #[test]
    fn test_validate_rejects_ph_min_not_below_max() {
        let mut form = valid_form();
        form.ph_min = "8.5".to_string();
        form.ph_max = "8.5".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, "pH minimum must be smaller than maximum");
    }

    #[test]
    fn test_validate_rejects_temperature_inversion() {
        let mut form = valid_form();
        form.temp_min = "30".to_string();
        form.temp_max = "10".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, "Temperature minimum must be smaller than maximum");
    }

    #[test]
    fn test_validate_rejects_tds_inversion() {
        let mut form = valid_form();
        form.tds_min = "2000".to_string();
        form.tds_max = "2000".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, "TDS minimum must be smaller than maximum");
    }

    #[test]
    fn test_validate_checks_ph_before_temperature() {
        // Both pH and temperature are bad; pH is reported first.
        let mut form = valid_form();
        form.ph_min = "9".to_string();
        form.temp_min = "99".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.starts_with("pH"));
    }

    #[test]
    fn test_validate_rejects_unparseable_field() {
        let mut form = valid_form();
        form.tds_max = "lots".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, "TDS maximum is not a number");
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let mut form = valid_form();
        form.ph_min = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_reset_sets_factory_defaults() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form.ph_min.parse::<f64>().unwrap(), 6.0);
        assert_eq!(form.ph_max.parse::<f64>().unwrap(), 9.0);
        assert_eq!(form.temp_min.parse::<f64>().unwrap(), 0.0);
        assert_eq!(form.temp_max.parse::<f64>().unwrap(), 30.0);
        assert_eq!(form.tds_min.parse::<f64>().unwrap(), 0.0);
        assert_eq!(form.tds_max.parse::<f64>().unwrap(), 2000.0);
    }

    #[test]
    fn test_format_value_trims_whole_numbers() {
        assert_eq!(format_value(6.0), "6");
        assert_eq!(format_value(6.5), "6.5");
        assert_eq!(format_value(2000.0), "2000");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));

        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_notification_form_requires_address_when_enabled() {
        let form = NotificationForm::default();
        assert!(form.email_enabled);
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter a recipient email"
        );
    }

    #[test]
    fn test_notification_form_rejects_bad_address() {
        let form = NotificationForm {
            email_address: "not-an-email".to_string(),
            ..NotificationForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Invalid email format");
    }

    #[test]
    fn test_notification_form_validates_address_even_when_disabled() {
        let form = NotificationForm {
            email_enabled: false,
            email_address: "broken@".to_string(),
            ..NotificationForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_notification_form_accepts_disabled_empty() {
        let form = NotificationForm {
            email_enabled: false,
            ..NotificationForm::default()
        };
        assert!(form.validate().is_ok());
    }
}
