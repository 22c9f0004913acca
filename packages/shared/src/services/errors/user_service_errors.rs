#[derive(Debug)]
pub enum UserServiceError {
    UserAlreadyExists,
    UserNotFound,
    ValidationError(String),
    PasswordHashError(String),
    RepositoryError(String),
}

impl std::fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserServiceError::UserAlreadyExists => write!(f, "Username already registered"),
            UserServiceError::UserNotFound => write!(f, "User not found"),
            UserServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UserServiceError::PasswordHashError(msg) => {
                write!(f, "Password hashing error: {}", msg)
            }
            UserServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UserServiceError {}
