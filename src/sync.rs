//! Threshold synchronization.
//!
//! The controller operates purely on a [`ThresholdForm`] record and a
//! [`MonitorApi`] backend; it knows nothing about rendering. Three
//! operations exist: load the current configuration into the form, validate
//! and save the form back, and reset the form to factory defaults.
//!
//! Saving is deliberately not transactional: the backend accepts one
//! parameter per request, so the three submissions go out sequentially in a
//! fixed order (pH, temperature, TDS) and a failure stops the remainder. A
//! failure partway through can leave some parameters updated and others not;
//! the follow-up reload after a successful save exists so the form reflects
//! whatever the server actually stored.

use std::time::Duration;

use crate::api::{ApiError, MonitorApi};
use crate::data::{Parameter, ThresholdForm};

/// How long to wait after a successful save before reloading, so the form
/// picks up any server-side rounding or adjustment.
pub const RELOAD_DELAY: Duration = Duration::from_secs(1);

/// Why a save did not complete.
#[derive(Debug)]
pub enum SaveError {
    /// Client-side validation failed; no requests were made.
    Validation(String),
    /// A submission failed; later submissions were not attempted.
    Remote(ApiError),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Validation(msg) => write!(f, "{}", msg),
            SaveError::Remote(err) => write!(f, "{}", err),
        }
    }
}

/// Fetch the current thresholds and populate the form.
///
/// Records whose parameter this client doesn't recognize are skipped without
/// error; fields for parameters absent from the response are left untouched.
pub async fn load(form: &mut ThresholdForm, api: &dyn MonitorApi) -> Result<(), ApiError> {
    let records = api.fetch_thresholds().await?;

    for record in records {
        if let Some(parameter) = Parameter::parse(&record.parameter) {
            form.set(parameter, record.min_value, record.max_value);
        }
    }

    Ok(())
}

/// Validate the form and submit all three thresholds sequentially.
pub async fn save(form: &ThresholdForm, api: &dyn MonitorApi) -> Result<(), SaveError> {
    let thresholds = form.validate().map_err(SaveError::Validation)?;

    for threshold in &thresholds {
        api.save_threshold(threshold)
            .await
            .map_err(SaveError::Remote)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DeviceStatus, Threshold, ThresholdRecord};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend double that records every call and can be told to fail a
    /// specific parameter's submission.
    #[derive(Default)]
    struct RecordingApi {
        thresholds: Vec<ThresholdRecord>,
        saved: Mutex<Vec<Threshold>>,
        fail_on: Option<Parameter>,
    }

    impl RecordingApi {
        fn with_thresholds(thresholds: Vec<ThresholdRecord>) -> Self {
            Self {
                thresholds,
                ..Self::default()
            }
        }

        fn failing_on(parameter: Parameter) -> Self {
            Self {
                fail_on: Some(parameter),
                ..Self::default()
            }
        }

        fn saved(&self) -> Vec<Threshold> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MonitorApi for RecordingApi {
        async fn fetch_thresholds(&self) -> Result<Vec<ThresholdRecord>, ApiError> {
            Ok(self.thresholds.clone())
        }

        async fn save_threshold(&self, threshold: &Threshold) -> Result<(), ApiError> {
            if self.fail_on == Some(threshold.parameter) {
                return Err(ApiError::Http("API returned status 500".to_string()));
            }
            self.saved.lock().unwrap().push(threshold.clone());
            Ok(())
        }

        async fn fetch_device_status(&self) -> Result<DeviceStatus, ApiError> {
            Err(ApiError::Http("not used".to_string()))
        }
    }

    fn record(parameter: &str, min: f64, max: f64) -> ThresholdRecord {
        ThresholdRecord {
            parameter: parameter.to_string(),
            min_value: min,
            max_value: max,
            unit: String::new(),
        }
    }

    fn valid_form() -> ThresholdForm {
        ThresholdForm {
            ph_min: "6.5".to_string(),
            ph_max: "8.5".to_string(),
            temp_min: "2".to_string(),
            temp_max: "28".to_string(),
            tds_min: "50".to_string(),
            tds_max: "1800".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_submits_three_in_fixed_order() {
        let api = RecordingApi::default();
        save(&valid_form(), &api).await.unwrap();

        let saved = api.saved();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].parameter, Parameter::Ph);
        assert_eq!(saved[1].parameter, Parameter::Temperature);
        assert_eq!(saved[2].parameter, Parameter::Tds);

        assert_eq!(saved[0].min_value, 6.5);
        assert_eq!(saved[0].max_value, 8.5);
        assert_eq!(saved[0].unit, "pH");
        assert_eq!(saved[1].min_value, 2.0);
        assert_eq!(saved[1].max_value, 28.0);
        assert_eq!(saved[1].unit, "°C");
        assert_eq!(saved[2].min_value, 50.0);
        assert_eq!(saved[2].max_value, 1800.0);
        assert_eq!(saved[2].unit, "ppm");
    }

    #[tokio::test]
    async fn test_save_validation_failure_makes_no_requests() {
        let mut form = valid_form();
        form.ph_min = "9".to_string();
        form.ph_max = "6".to_string();

        let api = RecordingApi::default();
        let err = save(&form, &api).await.unwrap_err();

        assert!(matches!(err, SaveError::Validation(_)));
        assert!(api.saved().is_empty());
    }

    #[tokio::test]
    async fn test_save_each_parameter_validated_independently() {
        for bad_index in [0, 2, 4] {
            let mut form = valid_form();
            // Invert one parameter's bounds, leave the others valid
            let max = form.field(bad_index + 1).to_string();
            let min = form.field(bad_index).to_string();
            *form.field_mut(bad_index) = max;
            *form.field_mut(bad_index + 1) = min;

            let api = RecordingApi::default();
            let err = save(&form, &api).await.unwrap_err();
            assert!(matches!(err, SaveError::Validation(_)));
            assert!(api.saved().is_empty());
        }
    }

    #[tokio::test]
    async fn test_save_aborts_after_temperature_failure() {
        let api = RecordingApi::failing_on(Parameter::Temperature);
        let err = save(&valid_form(), &api).await.unwrap_err();

        assert!(matches!(err, SaveError::Remote(_)));
        // pH went out, temperature failed, TDS was never attempted
        let saved = api.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].parameter, Parameter::Ph);
    }

    #[tokio::test]
    async fn test_save_aborts_immediately_on_first_failure() {
        let api = RecordingApi::failing_on(Parameter::Ph);
        let err = save(&valid_form(), &api).await.unwrap_err();

        assert!(matches!(err, SaveError::Remote(_)));
        assert!(api.saved().is_empty());
    }

    #[tokio::test]
    async fn test_load_populates_all_known_parameters() {
        let api = RecordingApi::with_thresholds(vec![
            record("ph", 6.0, 9.0),
            record("temperature", 0.0, 30.0),
            record("tds", 0.0, 2000.0),
        ]);

        let mut form = ThresholdForm::default();
        load(&mut form, &api).await.unwrap();

        assert_eq!(form.ph_min, "6");
        assert_eq!(form.ph_max, "9");
        assert_eq!(form.temp_min, "0");
        assert_eq!(form.temp_max, "30");
        assert_eq!(form.tds_min, "0");
        assert_eq!(form.tds_max, "2000");
    }

    #[tokio::test]
    async fn test_load_partial_response_touches_only_named_fields() {
        let api = RecordingApi::with_thresholds(vec![record("tds", 10.0, 500.0)]);

        let mut form = valid_form();
        load(&mut form, &api).await.unwrap();

        assert_eq!(form.tds_min, "10");
        assert_eq!(form.tds_max, "500");
        // Other fields keep their previous values
        assert_eq!(form.ph_min, "6.5");
        assert_eq!(form.ph_max, "8.5");
        assert_eq!(form.temp_min, "2");
        assert_eq!(form.temp_max, "28");
    }

    #[tokio::test]
    async fn test_load_ignores_unknown_parameters() {
        let api = RecordingApi::with_thresholds(vec![
            record("turbidity", 0.0, 50.0),
            record("ph", 6.0, 9.0),
        ]);

        let mut form = ThresholdForm::default();
        load(&mut form, &api).await.unwrap();

        assert_eq!(form.ph_min, "6");
        // Unknown "turbidity" record is skipped, no error, nothing else set
        assert_eq!(form.temp_min, "");
    }
}
