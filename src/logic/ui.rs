//! UI state transition logic
//!
//! Pure functions for toast lifetimes and timing.

use crate::model::ToastSeverity;

/// How long a toast stays on screen
///
/// Warnings and confirmations are brief; errors linger a little longer so
/// the detail can be read.
///
/// # Examples
/// ```
/// use artview::logic::ui::toast_life_ms;
/// use artview::model::ToastSeverity;
///
/// assert_eq!(toast_life_ms(ToastSeverity::Success), 3000);
/// assert_eq!(toast_life_ms(ToastSeverity::Error), 5000);
/// ```
pub fn toast_life_ms(severity: ToastSeverity) -> u64 {
    match severity {
        ToastSeverity::Success | ToastSeverity::Warn => 3000,
        ToastSeverity::Error => 5000,
    }
}

/// Lifetime of a bulk-select validation error toast
pub const VALIDATION_TOAST_LIFE_MS: u64 = 4000;

/// Check if a toast has been visible for at least its lifetime
pub fn should_dismiss_toast(elapsed_ms: u128, life_ms: u64) -> bool {
    elapsed_ms >= life_ms as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_dismiss_toast() {
        assert!(!should_dismiss_toast(0, 3000));
        assert!(!should_dismiss_toast(2999, 3000));
        assert!(should_dismiss_toast(3000, 3000));
        assert!(should_dismiss_toast(10_000, 5000));
    }

    #[test]
    fn test_warn_matches_success() {
        assert_eq!(
            toast_life_ms(ToastSeverity::Warn),
            toast_life_ms(ToastSeverity::Success)
        );
    }
}
