//! Input validation functions
//!
//! Checks for values typed into the settings form and the daily log. The
//! calculation and award code accepts anything; these run before input is
//! stored.

use chrono::NaiveDate;
use std::fmt;

use crate::errors::TrackerError;
use crate::models::{Entry, Settings};

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: u32) -> Result<(), String> {
    if height_cm < 100 {
        return Err("Height must be at least 100 cm".to_string());
    }
    if height_cm > 250 {
        return Err("Height must be at most 250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 30.0 {
        return Err("Weight must be at least 30 kg".to_string());
    }
    if weight_kg > 300.0 {
        return Err("Weight must be at most 300 kg".to_string());
    }
    Ok(())
}

/// Validate stride length (in cm)
pub fn validate_stride_length(stride_cm: u32) -> Result<(), String> {
    if stride_cm < 30 {
        return Err("Stride length must be at least 30 cm".to_string());
    }
    if stride_cm > 150 {
        return Err("Stride length must be at most 150 cm".to_string());
    }
    Ok(())
}

/// Validate the daily step goal
pub fn validate_step_goal(goal: u32) -> Result<(), String> {
    if goal < 1000 {
        return Err("Daily goal must be at least 1,000 steps".to_string());
    }
    if goal > 100_000 {
        return Err("Daily goal must be at most 100,000 steps".to_string());
    }
    Ok(())
}

/// Validate a per-step calorie override; absent means "use the method"
pub fn validate_calories_per_step(value: Option<f64>) -> Result<(), String> {
    match value {
        None => Ok(()),
        Some(v) if v.is_nan() || v.is_infinite() => Err("Calories per step must be a valid number".to_string()),
        Some(v) if v < 0.0 => Err("Calories per step cannot be negative".to_string()),
        Some(v) if v > 1.0 => Err("Calories per step unreasonably high".to_string()),
        Some(_) => Ok(()),
    }
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a logged distance (in km)
pub fn validate_distance_km(distance_km: f64) -> Result<(), String> {
    if distance_km.is_nan() || distance_km.is_infinite() {
        return Err("Distance must be a valid number".to_string());
    }
    if distance_km < 0.0 {
        return Err("Distance cannot be negative".to_string());
    }
    Ok(())
}

/// Validate an entry date against the user's current day
pub fn validate_entry_date(date: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if date > today {
        return Err("Date cannot be in the future".to_string());
    }
    Ok(())
}

// ============================================================================
// Record Validation
// ============================================================================

fn collect(checks: &[(&str, Result<(), String>)]) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = checks
        .iter()
        .filter_map(|(field, result)| result.as_ref().err().map(|msg| ValidationError::new(field, msg)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate every field of a settings record
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    collect(&[
        ("height_cm", validate_height_cm(settings.height_cm)),
        ("weight_kg", validate_weight(settings.weight_kg)),
        ("stride_length_cm", validate_stride_length(settings.stride_length_cm)),
        ("daily_step_goal", validate_step_goal(settings.daily_step_goal)),
        (
            "calories_per_step_override",
            validate_calories_per_step(settings.calories_per_step_override),
        ),
    ])
}

/// Validate a logged entry
pub fn validate_entry(entry: &Entry, today: NaiveDate) -> Result<(), Vec<ValidationError>> {
    collect(&[
        ("date", validate_entry_date(entry.date, today)),
        ("time_minutes", validate_duration_minutes(entry.time_minutes)),
        ("distance_km", validate_distance_km(entry.distance_km)),
    ])
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "stride_length_cm" => "Stride Length",
        "daily_step_goal" => "Daily Step Goal",
        "calories_per_step_override" => "Calories per Step",
        "units" => "Units",
        "include_weekends" => "Include Weekends",
        "date" => "Date",
        "steps" => "Steps",
        "time_minutes" => "Active Time",
        "distance_km" => "Distance",
        "calories" => "Calories",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl From<Vec<ValidationError>> for TrackerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let messages: Vec<String> = errors.iter().map(ValidationError::user_message).collect();
        TrackerError::Validation(messages.join("; "))
    }
}
