use crate::{error::Error, model::Platform};
use std::str::FromStr;

pub fn validate_not_empty(value: &str, message: &'static str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Validation(message));
    }

    Ok(())
}

pub fn parse_platform(platform: &str) -> Result<Platform, Error> {
    Platform::from_str(platform).map_err(|_| Error::UnknownPlatform(platform.to_string()))
}
