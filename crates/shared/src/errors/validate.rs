use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut result: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match err.code.as_ref() {
                        "length" => "invalid length".to_string(),
                        "range" => "value out of range".to_string(),
                        "required" => "required".to_string(),
                        "custom" => "custom validation failed".to_string(),
                        _ => "invalid value".to_string(),
                    });

                format!("{field}: {message}")
            })
        })
        .collect();

    if result.is_empty() {
        result.push("Validation failed".to_string());
    }

    result.sort();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "service_name is required"))]
        name: String,

        #[validate(range(min = 0))]
        price: i64,
    }

    #[test]
    fn lists_each_failing_field() {
        let probe = Probe {
            name: String::new(),
            price: -1,
        };

        let errors = probe.validate().unwrap_err();
        let messages = format_validation_errors(&errors);

        assert_eq!(
            messages,
            vec![
                "name: service_name is required".to_string(),
                "price: value out of range".to_string(),
            ]
        );
    }

    #[test]
    fn empty_errors_fall_back_to_generic_message() {
        let messages = format_validation_errors(&ValidationErrors::new());
        assert_eq!(messages, vec!["Validation failed".to_string()]);
    }
}
