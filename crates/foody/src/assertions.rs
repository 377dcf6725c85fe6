//! Response assertions.
//!
//! Each check returns an [`AssertionFailure`] instead of panicking, so a failed
//! scenario is recorded and the remaining scenarios still run.

use reqwest::StatusCode;

use crate::client::ApiResponse;
use crate::error::AssertionFailure;

/// Checks that the response has the expected status code.
pub fn expect_status(
    response: &ApiResponse,
    expected: StatusCode,
    description: &str,
) -> Result<(), AssertionFailure> {
    let actual = response.status();
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::new(description, expected, actual))
    }
}

/// Checks that the response body contains the given text.
pub fn expect_body_contains(
    response: &ApiResponse,
    needle: &str,
    description: &str,
) -> Result<(), AssertionFailure> {
    if response.body().contains(needle) {
        Ok(())
    } else {
        Err(AssertionFailure::new(
            description,
            format!("body containing {:?}", needle),
            format!("{:?}", response.body()),
        ))
    }
}

/// Checks that a string value is present and not blank.
pub fn expect_non_empty(value: Option<&str>, description: &str) -> Result<(), AssertionFailure> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(v) => Err(AssertionFailure::new(
            description,
            "a non-empty value",
            format!("{:?}", v),
        )),
        None => Err(AssertionFailure::new(description, "a non-empty value", "null")),
    }
}

/// Checks that a list has at least one item.
pub fn expect_non_empty_list<T>(items: &[T], description: &str) -> Result<(), AssertionFailure> {
    if items.is_empty() {
        Err(AssertionFailure::new(description, "at least one item", "0 items"))
    } else {
        Ok(())
    }
}
