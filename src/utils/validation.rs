use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_errors)
}

fn map_validation_errors(err: ValidationErrors) -> AppError {
    let mut details = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let errors = errs
                .iter()
                .map(|e| match e.message.as_deref() {
                    Some(message) => format!("{}: {}", e.code, message),
                    None => e.code.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>();
    // field_errors is a HashMap; sort for a stable message
    details.sort();
    AppError::BadRequest(format!("Validation failed: {}", details.join("; ")))
}
