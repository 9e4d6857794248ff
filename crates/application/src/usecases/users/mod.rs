//! User account use cases.

mod login_user;
mod register_user;

pub use login_user::{LoginUserInteractor, LoginUserUseCase};
pub use register_user::{RegisterUserInteractor, RegisterUserUseCase};

#[cfg(any(test, feature = "test-utils"))]
pub use login_user::MockLoginUserUseCase;
#[cfg(any(test, feature = "test-utils"))]
pub use register_user::MockRegisterUserUseCase;
