//! Request validation for the create body.

use crate::error::StoreError;
use crate::model::NewDog;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Build a `NewDog` from a JSON body. Unknown keys are ignored; every Dog field is required.
    pub fn new_dog(body: &Value) -> Result<NewDog, StoreError> {
        let obj = body
            .as_object()
            .ok_or_else(|| StoreError::Validation("body must be a JSON object".into()))?;
        let field = |col: &str| match obj.get(col) {
            None | Some(Value::Null) => Err(StoreError::Validation(format!("{} is required", col))),
            Some(v) => Ok(v),
        };

        let name = string_field("name", field("name")?)?;
        let color = string_field("color", field("color")?)?;
        let tail_length = int_field("tail_length", field("tail_length")?)?;
        let weight = int_field("weight", field("weight")?)?;

        if tail_length < 0 {
            return Err(StoreError::Validation(format!(
                "tail_length must be at least 0, got {}",
                tail_length
            )));
        }

        Ok(NewDog {
            name,
            color,
            tail_length,
            weight,
        })
    }
}

fn string_field(col: &str, v: &Value) -> Result<String, StoreError> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| StoreError::Validation(format!("{} must be a string", col)))
}

fn int_field(col: &str, v: &Value) -> Result<i32, StoreError> {
    v.as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| StoreError::Validation(format!("{} must be a 32-bit integer", col)))
}
