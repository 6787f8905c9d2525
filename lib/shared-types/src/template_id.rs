use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TemplateId(String);

impls_for_string_newtype!(TemplateId);
