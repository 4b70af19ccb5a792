use crate::core::dialogs::{ModalController, ModalKind, StatusMessage, Tone};

#[test]
fn test_modal_open_close_is_idempotent() {
    let _ = env_logger::try_init();
    let mut modals = ModalController::new();
    assert!(!modals.modal(ModalKind::Signup).is_visible());

    // Button close and backdrop click both land back in the same hidden state.
    modals.open(ModalKind::Signup);
    modals.close(ModalKind::Signup);
    assert!(!modals.modal(ModalKind::Signup).is_visible());

    modals.open(ModalKind::Signup);
    modals.backdrop_click(ModalKind::Signup);
    assert!(!modals.modal(ModalKind::Signup).is_visible());

    for _ in 0..3 {
        modals.open(ModalKind::Login);
        modals.open(ModalKind::Login);
        modals.close(ModalKind::Login);
    }
    assert!(!modals.modal(ModalKind::Login).is_visible());
}

#[test]
fn test_modals_are_independent() {
    let mut modals = ModalController::new();
    modals.open(ModalKind::Signup);
    assert!(modals.modal(ModalKind::Signup).is_visible());
    assert!(!modals.modal(ModalKind::Login).is_visible());

    modals.open(ModalKind::Login);
    modals.close(ModalKind::Signup);
    assert!(modals.modal(ModalKind::Login).is_visible());
}

#[test]
fn test_dismissal_clears_status_message() {
    let mut modals = ModalController::new();

    modals.open(ModalKind::Signup);
    modals.set_status(ModalKind::Signup, StatusMessage::error("Please fill all fields"));
    assert_eq!(
        modals.modal(ModalKind::Signup).status().map(|s| s.tone),
        Some(Tone::Error)
    );

    modals.close(ModalKind::Signup);
    assert!(modals.modal(ModalKind::Signup).status().is_none());

    modals.open(ModalKind::Login);
    modals.set_status(ModalKind::Login, StatusMessage::info("Logging in..."));
    modals.backdrop_click(ModalKind::Login);
    assert!(modals.modal(ModalKind::Login).status().is_none());
}
