use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_BLANK: &str = "This field may not be blank.";

/// 字段级校验错误：字段名 -> 错误信息列表
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// 必填文本：不能为空白，且不超过 `max_len` 个字符
pub fn check_text(errors: &mut FieldErrors, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.add(field, MSG_BLANK);
    } else if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Ensure this field has no more than {max_len} characters."),
        );
    }
}

/// 可选文本：提供时按必填文本规则校验
pub fn check_opt_text(errors: &mut FieldErrors, field: &str, value: Option<&str>, max_len: usize) {
    if let Some(value) = value {
        check_text(errors, field, value, max_len);
    }
}

pub fn check_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, MSG_BLANK);
    } else if validate_email(value).is_err() {
        errors.add(field, "Enter a valid email address.");
    }
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.trim().is_empty() {
        return Err(MSG_BLANK);
    }
    if phone.chars().count() > 15 {
        return Err("Ensure this field has no more than 15 characters.");
    }
    Ok(())
}

pub fn check_phone(errors: &mut FieldErrors, field: &str, value: &str) {
    if let Err(msg) = validate_phone(value) {
        errors.add(field, msg);
    }
}

/// 定点小数校验：总位数不超过 `max_digits`，小数位不超过 `places`
pub fn validate_decimal(value: f64, max_digits: u32, places: u32) -> Result<(), String> {
    if !value.is_finite() {
        return Err("A valid number is required.".to_string());
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value.abs() * scale;
    if (scaled - scaled.round()).abs() > 1e-6 {
        return Err(format!(
            "Ensure that there are no more than {places} decimal places."
        ));
    }
    let whole_digits = max_digits - places;
    if value.abs().trunc() >= 10f64.powi(whole_digits as i32) {
        return Err(format!(
            "Ensure that there are no more than {whole_digits} digits before the decimal point."
        ));
    }
    Ok(())
}

/// 按小数位四舍五入
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        errors.add("email", "Enter a valid email address.");
        errors.add("email", "student with this email already exists.");
        errors.add("phone", MSG_BLANK);
        assert_eq!(errors.get("email").map(|m| m.len()), Some(2));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["phone"][0], MSG_BLANK);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_check_text() {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "name", "   ", 10);
        check_text(&mut errors, "code", "ABCDEFGHIJK", 10);
        check_text(&mut errors, "title", "Physics", 10);
        assert!(errors.has("name"));
        assert!(errors.has("code"));
        assert!(!errors.has("title"));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+923001234567").is_ok());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_decimal() {
        assert!(validate_decimal(3.5, 3, 1).is_ok());
        assert!(validate_decimal(99.9, 3, 1).is_ok());
        assert!(validate_decimal(3.25, 3, 1).is_err());
        assert!(validate_decimal(100.0, 3, 1).is_err());
        assert!(validate_decimal(1500.75, 10, 2).is_ok());
        assert!(validate_decimal(f64::NAN, 10, 2).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.346, 2), 12.35);
        assert_eq!(round_to(3.04, 1), 3.0);
    }
}
