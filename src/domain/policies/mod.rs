//! Domain Policies
//!
//! Business rules that govern which inputs are acceptable.

mod input_policy;

pub use input_policy::{
    validate_directive_value, validate_hostname, validate_new_site_name, validate_single_token,
    validate_site_name,
};
