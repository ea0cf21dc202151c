//! Turns raw request fields into typed, validated catalog parameters.

use crate::error::AppError;
use crate::forms::{CreateDrinkForm, DrinkFilterQuery, PriceForm, UpdateDrinkForm};
use crate::model::{DrinkChanges, DrinkFilter, NewDrink, NAME_MAX_LEN};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create request. All of name, price and duration must be present and non-empty.
    pub fn new_drink(form: CreateDrinkForm) -> Result<NewDrink, AppError> {
        let (Some(name), Some(price), Some(duration)) = (
            non_empty(form.name),
            non_empty(form.price),
            non_empty(form.duration),
        ) else {
            return Err(AppError::Validation("Missing required fields".into()));
        };
        let invalid = || AppError::Validation("Invalid data types for price or duration".into());
        let price = parse_price(&price).ok_or_else(invalid)?;
        let duration = parse_duration(&duration).ok_or_else(invalid)?;

        Ok(NewDrink {
            name: check_name(name)?,
            description: form.description.map(check_description).transpose()?,
            price: non_negative_price(price)?,
            duration: non_negative_duration(duration)?,
        })
    }

    /// Validate every field present in an update request before anything is written.
    pub fn changes(form: UpdateDrinkForm) -> Result<DrinkChanges, AppError> {
        let name = form.name.map(check_name).transpose()?;
        let price = form
            .price
            .map(|raw| {
                parse_price(&raw)
                    .ok_or_else(|| AppError::Validation("Invalid data type for price".into()))
                    .and_then(non_negative_price)
            })
            .transpose()?;
        let duration = form
            .duration
            .map(|raw| {
                parse_duration(&raw)
                    .ok_or_else(|| AppError::Validation("Invalid data type for duration".into()))
                    .and_then(non_negative_duration)
            })
            .transpose()?;
        Ok(DrinkChanges {
            name,
            description: form.description.map(check_description).transpose()?,
            price,
            duration,
        })
    }

    /// Validate the single price field of a price update.
    pub fn price(form: PriceForm) -> Result<f64, AppError> {
        let raw = non_blank(form.price)
            .ok_or_else(|| AppError::Validation("Missing required field: price".into()))?;
        let price = parse_price(&raw)
            .ok_or_else(|| AppError::Validation("Invalid data type for price".into()))?;
        non_negative_price(price)
    }

    /// Validate list filters. Empty values count as absent; malformed numbers are rejected.
    pub fn filter(query: DrinkFilterQuery) -> Result<DrinkFilter, AppError> {
        Ok(DrinkFilter {
            name: non_empty(query.name),
            min_price: filter_value("min_price", query.min_price, parse_price)?,
            max_price: filter_value("max_price", query.max_price, parse_price)?,
            min_duration: filter_value("min_duration", query.min_duration, parse_duration)?,
            max_duration: filter_value("max_duration", query.max_duration, parse_duration)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

fn parse_duration(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

fn filter_value<T>(
    key: &str,
    raw: Option<String>,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, AppError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Invalid value for {}: '{}'", key, raw))),
    }
}

fn check_name(name: String) -> Result<String, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if name.chars().any(char::is_control) {
        return Err(AppError::Validation(
            "name must not contain control characters".into(),
        ));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(name)
}

/// Text columns cannot hold NUL.
fn check_description(description: String) -> Result<String, AppError> {
    if description.contains('\0') {
        return Err(AppError::Validation(
            "description must not contain NUL characters".into(),
        ));
    }
    Ok(description)
}

fn non_negative_price(price: f64) -> Result<f64, AppError> {
    if price < 0.0 {
        return Err(AppError::Validation("price must not be negative".into()));
    }
    Ok(price)
}

fn non_negative_duration(duration: i32) -> Result<i32, AppError> {
    if duration < 0 {
        return Err(AppError::Validation("duration must not be negative".into()));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form(name: &str, price: &str, duration: &str) -> CreateDrinkForm {
        CreateDrinkForm {
            name: Some(name.into()),
            description: None,
            price: Some(price.into()),
            duration: Some(duration.into()),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn new_drink_parses_numbers() {
        let drink = RequestValidator::new_drink(create_form("Latte", " 3.5 ", "4")).unwrap();
        assert_eq!(drink.name, "Latte");
        assert_eq!(drink.price, 3.5);
        assert_eq!(drink.duration, 4);
        assert_eq!(drink.description, None);
    }

    #[test]
    fn new_drink_requires_all_fields() {
        for form in [
            CreateDrinkForm {
                name: None,
                ..create_form("x", "1", "1")
            },
            create_form("", "1", "1"),
            create_form("Tea", "", "1"),
            CreateDrinkForm {
                duration: None,
                ..create_form("Tea", "1", "1")
            },
        ] {
            let err = RequestValidator::new_drink(form).unwrap_err();
            assert_eq!(message(err), "Missing required fields");
        }
    }

    #[test]
    fn new_drink_rejects_bad_numbers() {
        for (price, duration) in [("abc", "1"), ("1", "2.5"), ("NaN", "1"), ("inf", "1")] {
            let err = RequestValidator::new_drink(create_form("Tea", price, duration)).unwrap_err();
            assert_eq!(message(err), "Invalid data types for price or duration");
        }
    }

    #[test]
    fn new_drink_rejects_negative_and_long_values() {
        assert!(RequestValidator::new_drink(create_form("Tea", "-1", "1")).is_err());
        assert!(RequestValidator::new_drink(create_form("Tea", "1", "-1")).is_err());
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(RequestValidator::new_drink(create_form(&long, "1", "1")).is_err());
    }

    #[test]
    fn new_drink_blank_numbers_are_invalid_not_missing() {
        let err = RequestValidator::new_drink(create_form("Tea", "  ", "1")).unwrap_err();
        assert_eq!(message(err), "Invalid data types for price or duration");
        let err = RequestValidator::new_drink(create_form("Tea", "1", " ")).unwrap_err();
        assert_eq!(message(err), "Invalid data types for price or duration");
        let err = RequestValidator::new_drink(create_form("  ", "1", "1")).unwrap_err();
        assert_eq!(message(err), "name must not be empty");
    }

    #[test]
    fn control_characters_are_rejected() {
        let err = RequestValidator::new_drink(create_form("Te\0a", "1", "1")).unwrap_err();
        assert_eq!(message(err), "name must not contain control characters");
        let err = RequestValidator::changes(UpdateDrinkForm {
            name: Some("Tea\n".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "name must not contain control characters");
        let err = RequestValidator::changes(UpdateDrinkForm {
            description: Some("bad\0".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "description must not contain NUL characters");
        let ok = RequestValidator::changes(UpdateDrinkForm {
            description: Some("two\nlines".into()),
            ..Default::default()
        });
        assert!(ok.is_ok());
    }

    #[test]
    fn filter_keeps_whitespace_name() {
        let filter = RequestValidator::filter(DrinkFilterQuery {
            name: Some(" ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.name.as_deref(), Some(" "));
    }

    #[test]
    fn changes_keep_absent_fields_absent() {
        let changes = RequestValidator::changes(UpdateDrinkForm {
            description: Some("new".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            changes,
            DrinkChanges {
                description: Some("new".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn changes_report_the_bad_field() {
        let err = RequestValidator::changes(UpdateDrinkForm {
            name: Some("Tea".into()),
            duration: Some("long".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "Invalid data type for duration");

        let err = RequestValidator::changes(UpdateDrinkForm {
            price: Some("cheap".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "Invalid data type for price");
    }

    #[test]
    fn changes_reject_empty_name() {
        let err = RequestValidator::changes(UpdateDrinkForm {
            name: Some("  ".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "name must not be empty");
    }

    #[test]
    fn price_keeps_fraction() {
        let price = RequestValidator::price(PriceForm {
            price: Some("7.25".into()),
        })
        .unwrap();
        assert_eq!(price, 7.25);
        assert!(RequestValidator::price(PriceForm { price: None }).is_err());
        assert!(RequestValidator::price(PriceForm {
            price: Some("seven".into())
        })
        .is_err());
    }

    #[test]
    fn filter_ignores_empty_and_rejects_malformed() {
        let filter = RequestValidator::filter(DrinkFilterQuery {
            name: Some(String::new()),
            min_price: Some("5".into()),
            max_duration: Some("".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            filter,
            DrinkFilter {
                min_price: Some(5.0),
                ..Default::default()
            }
        );

        let err = RequestValidator::filter(DrinkFilterQuery {
            min_duration: Some("1.5".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(message(err), "Invalid value for min_duration: '1.5'");
    }
}
