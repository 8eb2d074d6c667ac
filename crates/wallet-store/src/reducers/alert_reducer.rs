use crate::actions::AlertAction;
use crate::state::AlertKind;

/// Reducer for the active alert
pub fn reduce_alert(_state: Option<AlertKind>, action: &AlertAction) -> Option<AlertKind> {
    match action {
        AlertAction::Show(kind) => Some(*kind),
        AlertAction::Hide => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current_alert() {
        let alert = reduce_alert(
            Some(AlertKind::PinSet),
            &AlertAction::Show(AlertKind::SendSuccess),
        );
        assert_eq!(alert, Some(AlertKind::SendSuccess));
    }

    #[test]
    fn test_set_none_hides() {
        let alert = reduce_alert(Some(AlertKind::PaperKeySet), &AlertAction::set(None));
        assert_eq!(alert, None);
    }
}
