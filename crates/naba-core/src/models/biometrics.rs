// ABOUTME: Biometric input model consumed by every stage of the scoring pipeline
// ABOUTME: Defines Inputs, Sex, and the closed set of condition flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use crate::constants::input_ranges;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Biological sex used by the Mifflin-St Jeor equation
///
/// Only two values exist. Parsing a code never fails: exactly `"M"` or `"m"`
/// maps to `Male`, everything else (including `"male"` and padded codes)
/// maps to `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Parse a sex code, falling back to `Female` for anything unrecognized
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("M") {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Single-letter code as stored by record collaborators
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl From<&str> for Sex {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<String> for Sex {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.code().to_owned()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A recognized pre-existing condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionFlag {
    /// Diagnosed diabetes
    Diabetes,
    /// Diagnosed hypertension
    Hypertension,
    /// Dyslipidemia
    Dyslipidemia,
    /// Obesity
    Obesity,
    /// Elevated cortisol
    CortisolHigh,
    /// On insulin therapy
    Insulin,
}

impl ConditionFlag {
    /// Every flag, in canonical order
    pub const ALL: [Self; 6] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Dyslipidemia,
        Self::Obesity,
        Self::CortisolHigh,
        Self::Insulin,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::Dyslipidemia => "dyslipidemia",
            Self::Obesity => "obesity",
            Self::CortisolHigh => "cortisol_high",
            Self::Insulin => "insulin",
        }
    }
}

impl fmt::Display for ConditionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence of each recognized condition
///
/// Missing keys deserialize as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionFlags {
    /// Diagnosed diabetes
    pub diabetes: bool,
    /// Diagnosed hypertension
    pub hypertension: bool,
    /// Dyslipidemia
    pub dyslipidemia: bool,
    /// Obesity
    pub obesity: bool,
    /// Elevated cortisol
    pub cortisol_high: bool,
    /// On insulin therapy
    pub insulin: bool,
}

impl ConditionFlags {
    /// No conditions present
    #[must_use]
    pub const fn none() -> Self {
        Self {
            diabetes: false,
            hypertension: false,
            dyslipidemia: false,
            obesity: false,
            cortisol_high: false,
            insulin: false,
        }
    }

    /// Every condition present
    #[must_use]
    pub const fn all() -> Self {
        Self {
            diabetes: true,
            hypertension: true,
            dyslipidemia: true,
            obesity: true,
            cortisol_high: true,
            insulin: true,
        }
    }

    /// Whether the given condition is present
    #[must_use]
    pub const fn is_set(&self, flag: ConditionFlag) -> bool {
        match flag {
            ConditionFlag::Diabetes => self.diabetes,
            ConditionFlag::Hypertension => self.hypertension,
            ConditionFlag::Dyslipidemia => self.dyslipidemia,
            ConditionFlag::Obesity => self.obesity,
            ConditionFlag::CortisolHigh => self.cortisol_high,
            ConditionFlag::Insulin => self.insulin,
        }
    }

    /// Mark a condition present or absent
    pub fn set(&mut self, flag: ConditionFlag, present: bool) {
        let slot = match flag {
            ConditionFlag::Diabetes => &mut self.diabetes,
            ConditionFlag::Hypertension => &mut self.hypertension,
            ConditionFlag::Dyslipidemia => &mut self.dyslipidemia,
            ConditionFlag::Obesity => &mut self.obesity,
            ConditionFlag::CortisolHigh => &mut self.cortisol_high,
            ConditionFlag::Insulin => &mut self.insulin,
        };
        *slot = present;
    }

    /// Builder-style variant of [`set`](Self::set) marking a condition present
    #[must_use]
    pub fn with(mut self, flag: ConditionFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Present conditions, in canonical order
    pub fn active(&self) -> impl Iterator<Item = ConditionFlag> + '_ {
        ConditionFlag::ALL
            .into_iter()
            .filter(move |flag| self.is_set(*flag))
    }
}

impl FromIterator<ConditionFlag> for ConditionFlags {
    fn from_iter<I: IntoIterator<Item = ConditionFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// One evaluation's worth of biometric and lifestyle inputs
///
/// All fields are required; the engine supplies no defaults. Values outside
/// the documented ranges are still scored, see [`Inputs::validate`] for an
/// opt-in range check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Age in years (14-100)
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Daily step count
    pub steps: u32,
    /// Nightly sleep in hours
    pub sleep_hours: f64,
    /// Daily energy intake in kcal
    pub calories_intake: f64,
    /// Skeletal muscle percentage (0-100)
    pub muscle_percent: f64,
    /// Systolic blood pressure in mmHg
    pub bp_systolic: f64,
    /// Fasting plasma glucose in mg/dL
    pub fasting_glucose: f64,
    /// Daily sodium intake in mg
    pub sodium_mg: f64,
    /// Pre-existing conditions
    pub flags: ConditionFlags,
}

impl Inputs {
    /// Check every field against the accepted input ranges
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if a real-valued field is NaN or
    /// infinite, and `ErrorCode::ValueOutOfRange` for the first field found
    /// outside its range.
    pub fn validate(&self) -> AppResult<()> {
        check_integer("age", self.age, input_ranges::AGE_YEARS)?;
        check_real("height_cm", self.height_cm, input_ranges::HEIGHT_CM)?;
        check_real("weight_kg", self.weight_kg, input_ranges::WEIGHT_KG)?;
        check_integer("steps", self.steps, input_ranges::STEPS)?;
        check_real("sleep_hours", self.sleep_hours, input_ranges::SLEEP_HOURS)?;
        check_real(
            "calories_intake",
            self.calories_intake,
            input_ranges::CALORIES_INTAKE,
        )?;
        check_real(
            "muscle_percent",
            self.muscle_percent,
            input_ranges::MUSCLE_PERCENT,
        )?;
        check_real("bp_systolic", self.bp_systolic, input_ranges::BP_SYSTOLIC)?;
        check_real(
            "fasting_glucose",
            self.fasting_glucose,
            input_ranges::FASTING_GLUCOSE,
        )?;
        check_real("sodium_mg", self.sodium_mg, input_ranges::SODIUM_MG)
    }
}

fn check_integer(field: &str, value: u32, (min, max): (u32, u32)) -> AppResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    debug!(field, value, min, max, "Input rejected: out of range");
    Err(AppError::value_out_of_range(
        field,
        f64::from(value),
        f64::from(min),
        f64::from(max),
    ))
}

fn check_real(field: &str, value: f64, (min, max): (f64, f64)) -> AppResult<()> {
    if !value.is_finite() {
        debug!(field, value, "Input rejected: not finite");
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if (min..=max).contains(&value) {
        return Ok(());
    }
    debug!(field, value, min, max, "Input rejected: out of range");
    Err(AppError::value_out_of_range(field, value, min, max))
}
