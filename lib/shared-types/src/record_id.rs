use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of a single credential record (degree or certificate).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RecordId(String);

impls_for_string_newtype!(RecordId);
