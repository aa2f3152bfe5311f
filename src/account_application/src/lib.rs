mod account_service;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use account_service::AccountService;
pub use use_cases::{
    change_password::ChangePasswordUseCase,
    current_user::CurrentUserUseCase,
    login::{LoginOutcome, LoginUseCase},
    logout::LogoutUseCase,
    refresh_access::RefreshAccessUseCase,
    register::{RegisterUseCase, Registration},
    session::issue_session,
    update_account::{AccountDetails, UpdateAccountUseCase},
    update_profile_image::UpdateProfileImageUseCase,
};
