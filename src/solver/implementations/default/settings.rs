use crate::solver::core::traits::Settings;
use crate::{algebra::*, solver::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard-form solver type implementing the [`Settings`](crate::solver::core::traits::Settings) trait

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "1000")]
    pub max_iter: u32,

    ///maximum run time (seconds)
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///fraction of the maximal step to the boundary, in (0,1]
    #[builder(default = "(0.99995).as_T()")]
    pub max_step_fraction: T,

    ///cap on the centering parameter, in (0,1]
    #[builder(default = "(0.1).as_T()")]
    pub centering_cap: T,

    ///convergence, infeasibility and solution cleanup tolerance
    #[builder(default = "(1e-8).as_T()")]
    pub tol: T,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettings {
            max_iter: 1000,
            time_limit: f64::INFINITY,
            verbose: false,
            max_step_fraction: (0.99995).as_T(),
            centering_cap: (0.1).as_T(),
            tol: (1e-8).as_T(),
        }
    }
}

impl<T> Settings<T> for DefaultSettings<T>
where
    T: FloatT,
{
    //NB: CoreSettings is typedef'd to DefaultSettings
    fn core(&self) -> &DefaultSettings<T> {
        self
    }
    fn core_mut(&mut self) -> &mut DefaultSettings<T> {
        self
    }

    /// Checks that the settings are valid.
    fn validate(&self) -> Result<(), SettingsError> {
        validate_unit_interval("max_step_fraction", self.max_step_fraction)?;
        validate_unit_interval("centering_cap", self.centering_cap)?;
        validate_tol(self.tol)?;
        validate_time_limit(self.time_limit)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that any explicitly specified values are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(v) = self.max_step_fraction {
            validate_unit_interval("max_step_fraction", v)?;
        }
        if let Some(v) = self.centering_cap {
            validate_unit_interval("centering_cap", v)?;
        }
        if let Some(v) = self.tol {
            validate_tol(v)?;
        }
        if let Some(v) = self.time_limit {
            validate_time_limit(v)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

// values in (0,1]
fn validate_unit_interval<T: FloatT>(field: &'static str, v: T) -> Result<(), SettingsError> {
    if v > T::zero() && v <= T::one() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

fn validate_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol > T::zero() && tol.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("tol"))
    }
}

fn validate_time_limit(time_limit: f64) -> Result<(), SettingsError> {
    if time_limit >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("time_limit"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = DefaultSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, DefaultSettings::default());
    assert_eq!(settings.max_iter, 1000);
    assert_eq!(settings.max_step_fraction, 0.99995);
    assert!(!settings.verbose);

    // fail on bad step fraction or centering cap
    assert!(DefaultSettingsBuilder::<f64>::default()
        .max_step_fraction(1.5)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .centering_cap(0.0)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol(-1e-8)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .time_limit(f64::NAN)
        .build()
        .is_err());

    // boundary values are allowed
    assert!(DefaultSettingsBuilder::<f64>::default()
        .max_step_fraction(1.0)
        .centering_cap(1.0)
        .time_limit(0.0)
        .build()
        .is_ok());

    // directly construct a bad DefaultSettings and manually check
    let settings = DefaultSettings::<f64> {
        tol: 0.0,
        ..DefaultSettings::default()
    };
    assert_eq!(settings.validate(), Err(SettingsError::BadFieldValue("tol")));
}
