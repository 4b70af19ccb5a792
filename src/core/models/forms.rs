use super::profile::Role;

/// Values read from the signup form on submit.
#[derive(Clone, Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub specialization: String,
}

/// Values read from the login form on submit. Never persisted.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
