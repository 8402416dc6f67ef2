//! Slot and initializer naming convention
//!
//! A slot named `trueOrFalse` is populated by an initializer named
//! `initTrueOrFalse`: the slot name with its first letter upper-cased,
//! prefixed with `init`.

use crate::error::{DiError, DiResult};

/// Prefix shared by every initializer name
pub const INITIALIZER_PREFIX: &str = "init";

/// Check that a slot name can take part in the naming convention
///
/// Slot names start with an ASCII letter and continue with ASCII
/// alphanumerics or underscores.
pub fn check_slot_name(slot: &str) -> DiResult<()> {
    let mut chars = slot.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DiError::InvalidSlotName(slot.to_string()))
    }
}

/// Derive the initializer name for a slot
pub fn initializer_name(slot: &str) -> DiResult<String> {
    check_slot_name(slot)?;

    let mut name = String::with_capacity(INITIALIZER_PREFIX.len() + slot.len());
    name.push_str(INITIALIZER_PREFIX);
    let mut chars = slot.chars();
    if let Some(first) = chars.next() {
        name.push(first.to_ascii_uppercase());
    }
    name.push_str(chars.as_str());
    Ok(name)
}

/// Check that an initializer name follows `init<Name>`
///
/// Anything `initializer_name` can produce is accepted.
pub fn check_initializer_name(initializer: &str) -> DiResult<()> {
    let suffix = initializer
        .strip_prefix(INITIALIZER_PREFIX)
        .ok_or_else(|| DiError::InvalidInitializerName(initializer.to_string()))?;

    match suffix.chars().next() {
        Some(first) if first.is_ascii_uppercase() => check_slot_name(suffix)
            .map_err(|_| DiError::InvalidInitializerName(initializer.to_string())),
        _ => Err(DiError::InvalidInitializerName(initializer.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializer_name_capitalizes_first_letter() {
        assert_eq!(initializer_name("trueOrFalse").unwrap(), "initTrueOrFalse");
        assert_eq!(initializer_name("badDependency").unwrap(), "initBadDependency");
        assert_eq!(initializer_name("Logger").unwrap(), "initLogger");
        assert_eq!(initializer_name("x").unwrap(), "initX");
        assert_eq!(initializer_name("db_pool2").unwrap(), "initDb_pool2");
    }

    #[test]
    fn test_case_folding_collides() {
        assert_eq!(
            initializer_name("foo").unwrap(),
            initializer_name("Foo").unwrap()
        );
    }

    #[test]
    fn test_rejects_names_without_leading_letter() {
        for bad in ["", "1st", "_private", "with space", "dash-ed", "émoji"] {
            assert_eq!(
                initializer_name(bad),
                Err(DiError::InvalidSlotName(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_initializer_name_shape() {
        assert!(check_initializer_name("initTrueOrFalse").is_ok());
        assert!(check_initializer_name("initX").is_ok());

        for bad in ["init", "inittrueOrFalse", "TrueOrFalse", "setTrueOrFalse", "init_x", "initA-b"] {
            assert_eq!(
                check_initializer_name(bad),
                Err(DiError::InvalidInitializerName(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }
}
