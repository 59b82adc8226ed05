use super::*;

#[test]
fn errors_display_their_context() {
    assert_eq!(
        ThemeError::NoWindow.to_string(),
        "browser window is not available"
    );
    assert_eq!(
        ThemeError::NoDocument.to_string(),
        "document is not available"
    );
    assert_eq!(
        ThemeError::StorageWrite("QuotaExceededError".to_owned()).to_string(),
        "failed to store theme: QuotaExceededError"
    );
    assert_eq!(
        ThemeError::MediaQuery("SecurityError".to_owned()).to_string(),
        "color-scheme media query failed: SecurityError"
    );
    assert_eq!(
        ThemeError::Dom("NotFoundError".to_owned()).to_string(),
        "dom update failed: NotFoundError"
    );
}
