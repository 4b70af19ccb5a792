//! Visibility state for the two modal dialogs. The modals are mutually
//! independent; closing one, by any path, clears its inline status message.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Signup,
    Login,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            tone: Tone::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

#[derive(Debug, Default)]
pub struct Modal {
    visible: bool,
    status: Option<StatusMessage>,
}

impl Modal {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.status = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ModalController {
    signup: Modal,
    login: Modal,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.modal_mut(kind).open();
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.modal_mut(kind).close();
    }

    /// A click that landed on the modal backdrop itself dismisses that modal,
    /// same as the close control.
    pub fn backdrop_click(&mut self, target: ModalKind) {
        self.close(target);
    }

    pub fn set_status(&mut self, kind: ModalKind, status: StatusMessage) {
        self.modal_mut(kind).set_status(status);
    }

    pub fn modal(&self, kind: ModalKind) -> &Modal {
        match kind {
            ModalKind::Signup => &self.signup,
            ModalKind::Login => &self.login,
        }
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut Modal {
        match kind {
            ModalKind::Signup => &mut self.signup,
            ModalKind::Login => &mut self.login,
        }
    }
}
