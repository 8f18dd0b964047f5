/// A validated user ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSaveRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
