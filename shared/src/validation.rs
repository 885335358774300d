//! Validation utilities for the Smart Soil Dashboard
//!
//! Form rules applied before anything is forwarded to the soil platform API.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ============================================================================
// Field Validations
// ============================================================================

/// Validate farmer phone number: digits only, 9-15 characters
pub fn validate_phone_number(phone: &str) -> Result<(), &'static str> {
    let phone = phone.trim();
    if phone.len() < 9 || phone.len() > 15 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number must be digits only (9-15 characters).");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate the shared admin registration code (6 digits)
pub fn validate_registration_code(code: &str) -> Result<(), &'static str> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Registration code must be a 6-digit number");
    }
    Ok(())
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("required", "This field is required."));
    }
    Ok(())
}

fn phone_field(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    validate_phone_number(value).map_err(|msg| validation_error("phone", msg))
}

fn device_field(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error(
            "required_device",
            "Device ID and SIM number are required.",
        ));
    }
    Ok(())
}

fn email_field(value: &str) -> Result<(), ValidationError> {
    validate_email(value.trim()).map_err(|msg| validation_error("email", msg))
}

fn password_field(value: &str) -> Result<(), ValidationError> {
    validate_password(value).map_err(|msg| validation_error("password", msg))
}

fn registration_code_field(value: &str) -> Result<(), ValidationError> {
    validate_registration_code(value.trim()).map_err(|msg| validation_error("registration_code", msg))
}

// ============================================================================
// Form Inputs
// ============================================================================

/// New farmer form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Default)]
#[serde(default)]
pub struct CreateFarmerInput {
    #[validate(custom = "required")]
    pub name: String,
    #[validate(custom = "phone_field")]
    pub phone_number: String,
    #[validate(custom = "required")]
    pub region: String,
    #[validate(custom = "required")]
    pub district: String,
}

impl CreateFarmerInput {
    /// Copy with surrounding whitespace removed, as sent upstream
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            region: self.region.trim().to_string(),
            district: self.district.trim().to_string(),
        }
    }
}

/// Device registration form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Default)]
#[serde(default)]
pub struct RegisterDeviceInput {
    #[validate(custom = "required")]
    pub farmer_id: String,
    #[validate(custom = "device_field")]
    pub device_id: String,
    #[validate(custom = "device_field")]
    pub sim_number: String,
}

impl RegisterDeviceInput {
    pub fn trimmed(&self) -> Self {
        Self {
            farmer_id: self.farmer_id.trim().to_string(),
            device_id: self.device_id.trim().to_string(),
            sim_number: self.sim_number.trim().to_string(),
        }
    }
}

/// Staff sign-up form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AdminRegisterInput {
    #[validate(custom = "email_field")]
    pub email: String,
    #[validate(custom = "password_field")]
    pub password: String,
    #[validate(custom = "registration_code_field")]
    pub registration_code: String,
}

/// Staff sign-in form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AdminLoginInput {
    #[validate(custom = "email_field")]
    pub email: String,
    #[validate(custom = "required")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer_input(name: &str, phone: &str, region: &str, district: &str) -> CreateFarmerInput {
        CreateFarmerInput {
            name: name.to_string(),
            phone_number: phone.to_string(),
            region: region.to_string(),
            district: district.to_string(),
        }
    }

    // ========================================================================
    // Field Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_phone_number_valid() {
        assert!(validate_phone_number("254711000111").is_ok());
        assert!(validate_phone_number("071100011").is_ok());
        assert!(validate_phone_number("123456789012345").is_ok());
    }

    #[test]
    fn test_validate_phone_number_invalid() {
        assert!(validate_phone_number("12345678").is_err()); // Too short
        assert!(validate_phone_number("1234567890123456").is_err()); // Too long
        assert!(validate_phone_number("+254711000111").is_err()); // Plus sign
        assert!(validate_phone_number("0711-000-111").is_err()); // Dashes
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("staff@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_registration_code() {
        assert!(validate_registration_code("123456").is_ok());
        assert!(validate_registration_code("12345").is_err());
        assert!(validate_registration_code("12345a").is_err());
        assert!(validate_registration_code("1234567").is_err());
    }

    // ========================================================================
    // Form Tests
    // ========================================================================

    #[test]
    fn test_create_farmer_valid() {
        let input = farmer_input(" Ana Silva ", "0711000111", "North", "Kitale");
        assert!(input.validate().is_ok());
        assert_eq!(input.trimmed().name, "Ana Silva");
    }

    #[test]
    fn test_create_farmer_blank_fields() {
        let input = farmer_input("  ", "0711000111", "", "Kitale");
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("region"));
        assert!(!fields.contains_key("district"));
    }

    #[test]
    fn test_create_farmer_bad_phone() {
        let input = farmer_input("Ana", "07-11", "North", "Kitale");
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_register_device_requires_ids() {
        let input = RegisterDeviceInput {
            farmer_id: "f-1".to_string(),
            device_id: " ".to_string(),
            sim_number: "".to_string(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields["sim_number"][0].message.as_deref(),
            Some("Device ID and SIM number are required.")
        );
    }

    #[test]
    fn test_admin_register_input() {
        let valid = AdminRegisterInput {
            email: "staff@example.com".to_string(),
            password: "longenough".to_string(),
            registration_code: "654321".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = AdminRegisterInput {
            email: "staff".to_string(),
            password: "short".to_string(),
            registration_code: "abc".to_string(),
        };
        assert_eq!(invalid.validate().unwrap_err().field_errors().len(), 3);
    }

    #[test]
    fn test_admin_login_input() {
        let input = AdminLoginInput {
            email: "staff@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(input.validate().unwrap_err().field_errors().contains_key("password"));
    }
}
