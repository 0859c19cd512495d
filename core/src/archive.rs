//! Text archive for model values.
//!
//! Fields are written in struct declaration order and read back in the same
//! order, so floats survive a round trip unchanged. Only finite floats can be
//! archived; NaN and infinities are rejected when writing.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

use crate::prelude::DetectorResult;

/// Archive text together with the value rebuilt from it.
#[derive(Debug, Clone)]
pub struct ArchivedClone<T> {
    pub text: String,
    pub value: T,
}

/// Writes a float field, rejecting values the text form cannot carry.
pub(crate) fn finite_f32<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(<S::Error as serde::ser::Error>::custom(format!(
            "cannot archive non-finite value {value}"
        )));
    }
    serializer.serialize_f32(*value)
}

pub fn to_text<T: Serialize>(value: &T) -> DetectorResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_text<T: DeserializeOwned>(text: &str) -> DetectorResult<T> {
    Ok(serde_json::from_str(text)?)
}

/// Clones `value` by writing it to an archive and reading a fresh copy back.
pub fn clone_via_archive<T>(value: &T) -> DetectorResult<ArchivedClone<T>>
where
    T: Serialize + DeserializeOwned,
{
    let text = to_text(value)?;
    let value = from_text(&text)?;
    Ok(ArchivedClone { text, value })
}
