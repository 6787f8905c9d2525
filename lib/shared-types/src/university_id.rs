use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// University identifier as assigned by the backend (an ObjectID hex string or the university code).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UniversityId(String);

impls_for_string_newtype!(UniversityId);
