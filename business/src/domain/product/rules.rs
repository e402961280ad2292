//! Validation rules for the product routes and the conversion of a validated
//! request into typed use case parameters.

use serde_json::Value;

use crate::domain::product::use_cases::create::CreateProductParams;
use crate::domain::product::use_cases::update::UpdateProductParams;
use crate::domain::validation::{
    FieldError, Location, RequestInput, Rule, as_boolean, is_int, is_numeric, numeric_form, run,
    text_form,
};

pub const ID_NOT_VALID: &str = "Id not valid";
pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_NUMBER: &str = "Price must be a number";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";
pub const AVAILABILITY_NOT_VALID: &str = "Availability not valid";

pub const ID_RULES: &[Rule] = &[id_is_int];

pub const CREATE_RULES: &[Rule] = &[
    name_not_empty,
    price_is_numeric,
    price_not_empty,
    price_greater_than_zero,
];

pub const UPDATE_RULES: &[Rule] = &[
    id_is_int,
    name_not_empty,
    price_is_numeric,
    price_not_empty,
    price_greater_than_zero,
    availability_is_boolean,
];

fn body_error(input: &RequestInput<'_>, path: &'static str, msg: &'static str) -> FieldError {
    FieldError {
        value: input.body_field(path).cloned(),
        msg,
        path,
        location: Location::Body,
    }
}

fn id_error(input: &RequestInput<'_>) -> FieldError {
    FieldError {
        value: input.id.map(|id| Value::String(id.to_string())),
        msg: ID_NOT_VALID,
        path: "id",
        location: Location::Params,
    }
}

fn product_id(input: &RequestInput<'_>) -> Option<i32> {
    let raw = input.id?;
    if !is_int(raw) {
        return None;
    }
    raw.parse::<i32>().ok()
}

fn availability(input: &RequestInput<'_>) -> Option<bool> {
    as_boolean(&text_form(input.body_field("availability")))
}

pub fn id_is_int(input: &RequestInput<'_>) -> Option<FieldError> {
    product_id(input).is_none().then(|| id_error(input))
}

pub fn name_not_empty(input: &RequestInput<'_>) -> Option<FieldError> {
    text_form(input.body_field("name"))
        .is_empty()
        .then(|| body_error(input, "name", NAME_REQUIRED))
}

pub fn price_is_numeric(input: &RequestInput<'_>) -> Option<FieldError> {
    (!is_numeric(&text_form(input.body_field("price"))))
        .then(|| body_error(input, "price", PRICE_NOT_NUMBER))
}

pub fn price_not_empty(input: &RequestInput<'_>) -> Option<FieldError> {
    text_form(input.body_field("price"))
        .is_empty()
        .then(|| body_error(input, "price", PRICE_REQUIRED))
}

pub fn price_greater_than_zero(input: &RequestInput<'_>) -> Option<FieldError> {
    let positive = numeric_form(input.body_field("price")) > 0.0;
    (!positive).then(|| body_error(input, "price", PRICE_NOT_POSITIVE))
}

pub fn availability_is_boolean(input: &RequestInput<'_>) -> Option<FieldError> {
    availability(input)
        .is_none()
        .then(|| body_error(input, "availability", AVAILABILITY_NOT_VALID))
}

/// Validates the path id of get, patch and delete.
pub fn validate_id(input: &RequestInput<'_>) -> Result<i32, Vec<FieldError>> {
    let errors = run(ID_RULES, input);
    if !errors.is_empty() {
        return Err(errors);
    }
    product_id(input).ok_or_else(|| vec![id_error(input)])
}

pub fn validate_create(input: &RequestInput<'_>) -> Result<CreateProductParams, Vec<FieldError>> {
    let errors = run(CREATE_RULES, input);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateProductParams {
        name: text_form(input.body_field("name")),
        price: numeric_form(input.body_field("price")),
    })
}

pub fn validate_update(input: &RequestInput<'_>) -> Result<UpdateProductParams, Vec<FieldError>> {
    let errors = run(UPDATE_RULES, input);
    if !errors.is_empty() {
        return Err(errors);
    }

    let id = product_id(input).ok_or_else(|| vec![id_error(input)])?;
    let availability = availability(input)
        .ok_or_else(|| vec![body_error(input, "availability", AVAILABILITY_NOT_VALID)])?;

    Ok(UpdateProductParams {
        id,
        name: text_form(input.body_field("name")),
        price: numeric_form(input.body_field("price")),
        availability,
    })
}
